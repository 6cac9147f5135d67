use serde::{Deserialize, Serialize};

use crate::catalog::filter::{self, FilterOptions, FilterSelection, SortKey};
use crate::catalog::tree;
use crate::domain::category::Category;
use crate::domain::product::Product;
use crate::repository::{CategoryListQuery, CategoryReader, ProductListQuery, ProductReader};
use crate::services::{NavCategory, NavLink, ServiceError, ServiceResult, build_nav};

/// Query parameters accepted by the category listing page.
#[derive(Debug, Default, Deserialize)]
pub struct CategoryPageQuery {
    /// Selected series label, if any.
    pub series: Option<String>,
    /// Selected cooling energy class, if any.
    pub energy: Option<String>,
    /// Selected capacity label, if any.
    pub capacity: Option<String>,
    /// Requested sort key; unknown values fall back to the default.
    pub sort: Option<String>,
}

impl CategoryPageQuery {
    /// Splits the raw query string values into the typed filter selection
    /// and sort key consumed by the catalog core.
    pub fn into_parts(self) -> (FilterSelection, SortKey) {
        let sort = self
            .sort
            .as_deref()
            .map(SortKey::parse)
            .unwrap_or_default();

        let mut selection = FilterSelection::new();
        if let Some(series) = normalize_param(self.series) {
            selection = selection.series(series);
        }
        if let Some(energy) = normalize_param(self.energy) {
            selection = selection.energy_class(energy);
        }
        if let Some(capacity) = normalize_param(self.capacity) {
            selection = selection.capacity(capacity);
        }

        (selection, sort)
    }
}

fn normalize_param(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// View model for a product card in a grid.
#[derive(Debug, Serialize)]
pub struct ProductCardView {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub model_code: String,
    pub url: String,
    pub image_filename: Option<String>,
    pub short_description: Option<String>,
    pub series: Option<String>,
    pub energy_class: Option<String>,
    pub capacity_label: Option<String>,
}

impl ProductCardView {
    pub(crate) fn from_product(product: &Product) -> Self {
        // The category path segment is routing context only; a product
        // with a dangling or missing category slug still gets a working
        // detail link.
        let category_segment = product.category_slug.as_deref().unwrap_or("all");
        Self {
            id: product.id,
            title: product.title.clone(),
            slug: product.slug.clone(),
            model_code: product.model_code.clone(),
            url: format!("/products/{category_segment}/{}", product.slug),
            image_filename: product.main_image_filename.clone(),
            short_description: product.short_description.clone(),
            series: product.series.clone(),
            energy_class: product.energy_class_cooling.clone(),
            capacity_label: product
                .capacity
                .as_deref()
                .map(filter::room_size_label),
        }
    }
}

/// View model for a category card on the catalog landing page.
#[derive(Debug, Serialize)]
pub struct CategoryCardView {
    pub name: String,
    pub slug: String,
    pub url: String,
    pub description: Option<String>,
    pub children: Vec<NavLink>,
}

impl CategoryCardView {
    pub(crate) fn from_category(category: &Category, all: &[Category]) -> Self {
        Self {
            name: category.name.clone(),
            slug: category.slug.clone(),
            url: format!("/products/{}", category.slug),
            description: category.description.clone(),
            children: tree::children_of(all, category.id)
                .into_iter()
                .map(NavLink::from_category)
                .collect(),
        }
    }
}

/// Heading data for a category listing page.
#[derive(Debug, Serialize)]
pub struct CategoryHeaderView {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}

/// One entry in a breadcrumb trail; the current page carries no URL.
#[derive(Debug, Serialize)]
pub struct BreadcrumbItem {
    pub name: String,
    pub url: Option<String>,
}

/// One selectable chip in a filter group.
#[derive(Debug, Serialize)]
pub struct FilterChipView {
    pub label: String,
    pub url: String,
    pub active: bool,
}

/// A filter dimension rendered as a row of chips; the first chip clears
/// the dimension.
#[derive(Debug, Serialize)]
pub struct FilterGroupView {
    pub label: String,
    pub chips: Vec<FilterChipView>,
}

/// One entry of the sort dropdown.
#[derive(Debug, Serialize)]
pub struct SortOptionView {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Data required to render the catalog landing page.
pub struct ProductsPageData {
    pub nav: Vec<NavCategory>,
    pub categories: Vec<CategoryCardView>,
}

/// Loads the catalog landing page: the category grid.
pub async fn load_products_page<R>(repo: &R) -> ServiceResult<ProductsPageData>
where
    R: CategoryReader + ?Sized,
{
    let categories = repo.list_categories(CategoryListQuery::new()).await?;

    let cards = tree::root_categories(&categories)
        .into_iter()
        .map(|root| CategoryCardView::from_category(root, &categories))
        .collect();

    Ok(ProductsPageData {
        nav: build_nav(&categories),
        categories: cards,
    })
}

/// Data required to render a category listing page.
pub struct CategoryPageData {
    pub nav: Vec<NavCategory>,
    pub category: CategoryHeaderView,
    pub breadcrumb: Vec<BreadcrumbItem>,
    pub subcategories: Vec<NavLink>,
    pub products: Vec<ProductCardView>,
    pub total: usize,
    pub filter_groups: Vec<FilterGroupView>,
    pub sort_options: Vec<SortOptionView>,
    pub active_filter_count: usize,
    pub selection: FilterSelection,
    pub reset_url: String,
}

/// Loads a category listing page, applying the visitor's filter selection
/// and sort key to the category's products.
pub async fn load_category_page<R>(
    repo: &R,
    slug: &str,
    query: CategoryPageQuery,
) -> ServiceResult<CategoryPageData>
where
    R: CategoryReader + ProductReader + ?Sized,
{
    let categories = repo.list_categories(CategoryListQuery::new()).await?;
    let category = categories
        .iter()
        .find(|candidate| candidate.slug == slug)
        .ok_or(ServiceError::NotFound)?;

    let products = repo
        .list_products(ProductListQuery::new().category_slug(slug))
        .await?;

    let (selection, sort) = query.into_parts();

    // Options always derive from the category's full product list, never
    // from the filtered subset.
    let options = filter::filter_options(&products);
    let filtered = filter::apply_filters(&products, &selection);
    let sorted = filter::apply_sort(&filtered, sort);

    let product_cards: Vec<ProductCardView> =
        sorted.iter().map(|product| ProductCardView::from_product(product)).collect();
    let total = product_cards.len();

    Ok(CategoryPageData {
        nav: build_nav(&categories),
        category: CategoryHeaderView {
            name: category.name.clone(),
            slug: category.slug.clone(),
            description: category.description.clone(),
        },
        breadcrumb: category_breadcrumb(&categories, category),
        subcategories: tree::children_of(&categories, category.id)
            .into_iter()
            .map(NavLink::from_category)
            .collect(),
        products: product_cards,
        total,
        filter_groups: filter_groups(slug, &options, &selection, sort),
        sort_options: sort_options(sort),
        active_filter_count: selection.active_count(),
        reset_url: format!("/products/{slug}"),
        selection,
    })
}

/// Data required to render a product detail page.
pub struct ProductPageData {
    pub nav: Vec<NavCategory>,
    pub product: ProductDetailView,
    pub breadcrumb: Vec<BreadcrumbItem>,
}

/// View model for the product detail page.
#[derive(Debug, Serialize)]
pub struct ProductDetailView {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub model_code: String,
    pub image_filename: Option<String>,
    pub short_description: Option<String>,
    pub series: Option<String>,
    pub capacity_label: Option<String>,
    pub energy_class: Option<String>,
    pub feature_highlights: Option<String>,
    pub inquiry_url: String,
    pub sections: Vec<SpecSection>,
}

/// A titled group of specification rows; groups with no present values
/// are omitted.
#[derive(Debug, Serialize)]
pub struct SpecSection {
    pub title: &'static str,
    pub rows: Vec<SpecRow>,
}

/// One label/value row in a specification table.
#[derive(Debug, Serialize)]
pub struct SpecRow {
    pub label: &'static str,
    pub value: String,
}

/// Loads a product detail page. The category context comes from the
/// product's own category slug; a dangling or missing reference renders
/// the product with a shortened breadcrumb instead of failing.
pub async fn load_product_page<R>(repo: &R, product_slug: &str) -> ServiceResult<ProductPageData>
where
    R: CategoryReader + ProductReader + ?Sized,
{
    let product = repo
        .get_product_by_slug(product_slug)
        .await?
        .ok_or(ServiceError::NotFound)?;

    let categories = repo.list_categories(CategoryListQuery::new()).await?;

    let category = product
        .category_slug
        .as_deref()
        .and_then(|slug| categories.iter().find(|candidate| candidate.slug == slug));

    let mut breadcrumb = base_breadcrumb();
    if let Some(category) = category {
        for ancestor in tree::parent_chain(&categories, category) {
            breadcrumb.push(BreadcrumbItem {
                name: ancestor.name.clone(),
                url: Some(format!("/products/{}", ancestor.slug)),
            });
        }
        breadcrumb.push(BreadcrumbItem {
            name: category.name.clone(),
            url: Some(format!("/products/{}", category.slug)),
        });
    }
    breadcrumb.push(BreadcrumbItem {
        name: product.title.clone(),
        url: None,
    });

    Ok(ProductPageData {
        nav: build_nav(&categories),
        product: ProductDetailView::from_product(&product),
        breadcrumb,
    })
}

impl ProductDetailView {
    fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            slug: product.slug.clone(),
            model_code: product.model_code.clone(),
            image_filename: product.main_image_filename.clone(),
            short_description: product.short_description.clone(),
            series: product.series.clone(),
            capacity_label: product.capacity.as_deref().map(filter::room_size_label),
            energy_class: product.energy_class_cooling.clone(),
            feature_highlights: product.feature_highlights.clone(),
            inquiry_url: format!("/inquiry?product={}", product.slug),
            sections: spec_sections(product),
        }
    }
}

fn spec_sections(product: &Product) -> Vec<SpecSection> {
    let sections = [
        (
            "Răcire",
            vec![
                ("Capacitate nominală", &product.cooling_capacity_nominal),
                ("Interval capacitate", &product.cooling_capacity_range),
                ("Putere absorbită", &product.cooling_power_consumption),
                ("Interval putere", &product.cooling_power_range),
                ("SEER", &product.seer),
                ("EER", &product.eer),
                ("Clasă energetică", &product.energy_class_cooling),
            ],
        ),
        (
            "Încălzire",
            vec![
                ("Capacitate nominală", &product.heating_capacity_nominal),
                ("Interval capacitate", &product.heating_capacity_range),
                ("Putere absorbită", &product.heating_power_consumption),
                ("Interval putere", &product.heating_power_range),
                ("SCOP", &product.scop),
                ("COP", &product.cop),
                ("Clasă energetică", &product.energy_class_heating),
            ],
        ),
        (
            "Unitate interioară",
            vec![
                ("Dimensiuni", &product.indoor_dimensions),
                ("Greutate", &product.indoor_weight),
                ("Nivel zgomot max.", &product.indoor_noise_max),
                ("Niveluri zgomot", &product.indoor_noise_levels),
            ],
        ),
        (
            "Unitate exterioară",
            vec![
                ("Dimensiuni", &product.outdoor_dimensions),
                ("Greutate", &product.outdoor_weight),
                ("Nivel zgomot max.", &product.outdoor_noise_max),
                ("Tip compresor", &product.compressor_type),
            ],
        ),
        (
            "General",
            vec![
                ("Agent frigorific", &product.refrigerant),
                ("Alimentare", &product.power_supply),
                ("Garanție", &product.warranty),
                ("Fabricat în", &product.made_in),
            ],
        ),
    ];

    sections
        .into_iter()
        .filter_map(|(title, fields)| {
            let rows: Vec<SpecRow> = fields
                .into_iter()
                .filter_map(|(label, value)| {
                    value.as_ref().map(|value| SpecRow {
                        label,
                        value: value.clone(),
                    })
                })
                .collect();
            if rows.is_empty() {
                None
            } else {
                Some(SpecSection { title, rows })
            }
        })
        .collect()
}

fn base_breadcrumb() -> Vec<BreadcrumbItem> {
    vec![
        BreadcrumbItem {
            name: "Acasă".to_string(),
            url: Some("/".to_string()),
        },
        BreadcrumbItem {
            name: "Produse".to_string(),
            url: Some("/products".to_string()),
        },
    ]
}

fn category_breadcrumb(categories: &[Category], category: &Category) -> Vec<BreadcrumbItem> {
    let mut breadcrumb = base_breadcrumb();
    for ancestor in tree::parent_chain(categories, category) {
        breadcrumb.push(BreadcrumbItem {
            name: ancestor.name.clone(),
            url: Some(format!("/products/{}", ancestor.slug)),
        });
    }
    breadcrumb.push(BreadcrumbItem {
        name: category.name.clone(),
        url: None,
    });
    breadcrumb
}

/// URL of a category listing page carrying the given selection and sort.
fn listing_url(category_slug: &str, selection: &FilterSelection, sort: SortKey) -> String {
    let mut params: Vec<(&str, &str)> = Vec::new();
    if let Some(series) = selection.series.as_deref() {
        params.push(("series", series));
    }
    if let Some(energy) = selection.energy_class.as_deref() {
        params.push(("energy", energy));
    }
    if let Some(capacity) = selection.capacity.as_deref() {
        params.push(("capacity", capacity));
    }
    if sort != SortKey::default() {
        params.push(("sort", sort.as_str()));
    }

    if params.is_empty() {
        return format!("/products/{category_slug}");
    }

    match serde_urlencoded::to_string(&params) {
        Ok(query) => format!("/products/{category_slug}?{query}"),
        Err(_) => format!("/products/{category_slug}"),
    }
}

fn filter_groups(
    category_slug: &str,
    options: &FilterOptions,
    selection: &FilterSelection,
    sort: SortKey,
) -> Vec<FilterGroupView> {
    let mut groups = Vec::new();

    // A dimension with a single value cannot narrow anything; hide it.
    if options.capacities.len() > 1 {
        groups.push(chip_group(
            "Suprafață cameră",
            &options.capacities,
            selection.capacity.as_deref(),
            |value| FilterSelection {
                capacity: value.map(str::to_string),
                ..selection.clone()
            },
            category_slug,
            sort,
            filter::room_size_label,
        ));
    }

    if options.series.len() > 1 {
        groups.push(chip_group(
            "Serie",
            &options.series,
            selection.series.as_deref(),
            |value| FilterSelection {
                series: value.map(str::to_string),
                ..selection.clone()
            },
            category_slug,
            sort,
            str::to_string,
        ));
    }

    if options.energy_classes.len() > 1 {
        groups.push(chip_group(
            "Clasă energetică",
            &options.energy_classes,
            selection.energy_class.as_deref(),
            |value| FilterSelection {
                energy_class: value.map(str::to_string),
                ..selection.clone()
            },
            category_slug,
            sort,
            str::to_string,
        ));
    }

    groups
}

fn chip_group(
    label: &str,
    values: &[String],
    active: Option<&str>,
    with_value: impl Fn(Option<&str>) -> FilterSelection,
    category_slug: &str,
    sort: SortKey,
    chip_label: impl Fn(&str) -> String,
) -> FilterGroupView {
    let mut chips = vec![FilterChipView {
        label: "Toate".to_string(),
        url: listing_url(category_slug, &with_value(None), sort),
        active: active.is_none(),
    }];

    for value in values {
        let is_active = active == Some(value.as_str());
        // An active chip toggles its dimension off again.
        let next = if is_active {
            with_value(None)
        } else {
            with_value(Some(value.as_str()))
        };
        chips.push(FilterChipView {
            label: chip_label(value.as_str()),
            url: listing_url(category_slug, &next, sort),
            active: is_active,
        });
    }

    FilterGroupView {
        label: label.to_string(),
        chips,
    }
}

fn sort_options(current: SortKey) -> Vec<SortOptionView> {
    [
        (SortKey::Recommended, "Recomandate"),
        (SortKey::CapacityAscending, "Putere crescătoare"),
        (SortKey::EfficiencyDescending, "Eficiență maximă"),
    ]
    .into_iter()
    .map(|(key, label)| SortOptionView {
        value: key.as_str(),
        label,
        selected: key == current,
    })
    .collect()
}

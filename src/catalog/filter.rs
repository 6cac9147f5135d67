//! Filtering and ordering for category listing pages.
//!
//! Option lists are always derived from the full candidate set handed in
//! by the caller, never from an already-filtered subset: the filter
//! controls show what the category can offer, the result list shows what
//! the current selection matches.

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::product::Product;

/// Energy labels from best to worst. Classes outside this vocabulary sort
/// after every known one, keeping their first-appearance order.
pub const ENERGY_CLASS_RANKING: [&str; 7] = ["A+++", "A++", "A+", "A", "B", "C", "D"];

/// Ordering applied to a listing after filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Featured products first, then manual display order.
    #[default]
    Recommended,
    /// Ascending by the numeric value of the capacity attribute.
    CapacityAscending,
    /// Descending by the numeric value of the SEER attribute.
    EfficiencyDescending,
}

impl SortKey {
    /// Parses a query-string value. Anything unknown falls back to
    /// `Recommended` so stale links keep rendering.
    pub fn parse(value: &str) -> Self {
        match value {
            "capacity-ascending" => SortKey::CapacityAscending,
            "efficiency-descending" => SortKey::EfficiencyDescending,
            _ => SortKey::Recommended,
        }
    }

    /// Stable value used in URLs and the sort dropdown.
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Recommended => "recommended",
            SortKey::CapacityAscending => "capacity-ascending",
            SortKey::EfficiencyDescending => "efficiency-descending",
        }
    }
}

/// The visitor's current filter choices for one listing page.
///
/// All three dimensions are independent, optional, and match by exact
/// string equality. The value is immutable from the catalog's point of
/// view; the routes layer builds a fresh one from the query string on
/// every request.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterSelection {
    /// Selected series label, if any.
    pub series: Option<String>,
    /// Selected cooling energy class, if any.
    pub energy_class: Option<String>,
    /// Selected capacity label, if any.
    pub capacity: Option<String>,
}

impl FilterSelection {
    /// A selection with no active dimension.
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrain the series dimension.
    pub fn series(mut self, value: impl Into<String>) -> Self {
        self.series = Some(value.into());
        self
    }

    /// Constrain the energy-class dimension.
    pub fn energy_class(mut self, value: impl Into<String>) -> Self {
        self.energy_class = Some(value.into());
        self
    }

    /// Constrain the capacity dimension.
    pub fn capacity(mut self, value: impl Into<String>) -> Self {
        self.capacity = Some(value.into());
        self
    }

    /// Number of dimensions currently holding a value; drives the badge
    /// next to the filter header.
    pub fn active_count(&self) -> usize {
        [
            self.series.is_some(),
            self.energy_class.is_some(),
            self.capacity.is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    /// Whether no dimension is active.
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }
}

/// Distinct values available for each filter dimension.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterOptions {
    /// Series labels, lexicographic ascending.
    pub series: Vec<String>,
    /// Cooling energy classes, best first per [`ENERGY_CLASS_RANKING`].
    pub energy_classes: Vec<String>,
    /// Capacity labels, ascending by numeric value.
    pub capacities: Vec<String>,
}

/// Derives the option set for each filter dimension from the full product
/// list of a category. A pure function of its input: upstream data changes
/// are reflected on the next call, and the filtered result set never feeds
/// back into the options.
pub fn filter_options(products: &[Product]) -> FilterOptions {
    let mut series = distinct(products, |product| product.series.as_deref());
    series.sort();

    let mut energy_classes = distinct(products, |product| product.energy_class_cooling.as_deref());
    energy_classes.sort_by_key(|value| energy_class_rank(value));

    let mut capacities = distinct(products, |product| product.capacity.as_deref());
    capacities.sort_by(|a, b| numeric_prefix(a).total_cmp(&numeric_prefix(b)));

    FilterOptions {
        series,
        energy_classes,
        capacities,
    }
}

/// Products matching every active dimension of `selection`, in input
/// order. With nothing selected the input passes through unchanged. A
/// product that lacks an attribute can never match a selection on that
/// dimension.
pub fn apply_filters<'a>(products: &'a [Product], selection: &FilterSelection) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|product| {
            dimension_matches(selection.series.as_deref(), product.series.as_deref())
                && dimension_matches(
                    selection.energy_class.as_deref(),
                    product.energy_class_cooling.as_deref(),
                )
                && dimension_matches(selection.capacity.as_deref(), product.capacity.as_deref())
        })
        .collect()
}

/// Reorders `products` according to `key`, returning a new sequence. The
/// sort is stable in every mode: products comparing equal on the active
/// key keep their relative input order, which matters because ties are
/// common (many products share the default `order` of zero).
pub fn apply_sort<'a>(products: &[&'a Product], key: SortKey) -> Vec<&'a Product> {
    let mut sorted = products.to_vec();
    match key {
        SortKey::Recommended => {
            sorted.sort_by_key(|product| (!product.featured, product.order.unwrap_or(0)));
        }
        SortKey::CapacityAscending => {
            sorted.sort_by(|a, b| {
                capacity_value(a).total_cmp(&capacity_value(b))
            });
        }
        SortKey::EfficiencyDescending => {
            sorted.sort_by(|a, b| {
                seer_value(b).total_cmp(&seer_value(a))
            });
        }
    }
    sorted
}

/// Numeric value of the leading digits of an attribute string, e.g.
/// `"7.1 kW"` is `7.1`.
///
/// Values without a numeric prefix count as zero, so they rank first in
/// ascending order and last in descending order. Option ordering and
/// product ordering share this one function; the two must never disagree.
pub fn numeric_prefix(value: &str) -> f64 {
    let mut end = 0;
    let mut seen_dot = false;
    for (idx, ch) in value.char_indices() {
        match ch {
            '0'..='9' => end = idx + ch.len_utf8(),
            '+' | '-' if idx == 0 => {}
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
    }
    if end == 0 {
        return 0.0;
    }
    value[..end].parse::<f64>().unwrap_or(0.0)
}

fn capacity_value(product: &Product) -> f64 {
    numeric_prefix(product.capacity.as_deref().unwrap_or(""))
}

fn seer_value(product: &Product) -> f64 {
    numeric_prefix(product.seer.as_deref().unwrap_or(""))
}

/// Position of an energy class in the fixed ranking; unknown classes rank
/// after every known one.
fn energy_class_rank(value: &str) -> usize {
    ENERGY_CLASS_RANKING
        .iter()
        .position(|known| *known == value)
        .unwrap_or(ENERGY_CLASS_RANKING.len())
}

/// Distinct non-empty values of one attribute, in order of first
/// appearance.
fn distinct<'a>(
    products: &'a [Product],
    attribute: impl Fn(&'a Product) -> Option<&'a str>,
) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut values = Vec::new();
    for product in products {
        if let Some(value) = attribute(product)
            && seen.insert(value)
        {
            values.push(value.to_string());
        }
    }
    values
}

fn dimension_matches(selected: Option<&str>, attribute: Option<&str>) -> bool {
    match selected {
        Some(value) => attribute == Some(value),
        None => true,
    }
}

/// Display label pairing a capacity value with the approximate room
/// surface it covers, e.g. `"2.5 kW · ~25 m²"`. Values without a numeric
/// prefix are shown as-is.
pub fn room_size_label(capacity: &str) -> String {
    let kw = numeric_prefix(capacity);
    if kw <= 0.0 {
        return capacity.to_string();
    }
    let surface: u32 = if kw <= 2.5 {
        25
    } else if kw <= 3.5 {
        35
    } else if kw <= 5.0 {
        50
    } else if kw <= 7.1 {
        70
    } else {
        (kw * 10.0).round() as u32
    };
    format!("{capacity} · ~{surface} m²")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_products() -> Vec<Product> {
        vec![
            Product::new(1, "Pearl 71", "pearl-71", "AS71")
                .with_series("Pearl")
                .with_capacity("7.1 kW")
                .with_energy_class("A++")
                .with_seer("6.1"),
            Product::new(2, "Pearl 25", "pearl-25", "AS25")
                .with_series("Pearl")
                .with_capacity("2.5 kW")
                .with_energy_class("A+++")
                .with_seer("8.5")
                .featured()
                .with_order(5),
            Product::new(3, "Flexis 35", "flexis-35", "AS35")
                .with_series("Flexis")
                .with_capacity("3.5 kW")
                .with_energy_class("A++")
                .with_seer("7.0")
                .featured()
                .with_order(1),
            Product::new(4, "Tide 35", "tide-35", "AS35T")
                .with_series("Tide")
                .with_capacity("3.5 kW")
                .with_energy_class("A+"),
        ]
    }

    #[test]
    fn numeric_prefix_parses_leading_digits() {
        assert_eq!(numeric_prefix("7.1 kW"), 7.1);
        assert_eq!(numeric_prefix("2.5"), 2.5);
        assert_eq!(numeric_prefix("12000 BTU"), 12000.0);
        assert_eq!(numeric_prefix("bad"), 0.0);
        assert_eq!(numeric_prefix(""), 0.0);
        assert_eq!(numeric_prefix("3.5.2"), 3.5);
    }

    #[test]
    fn sort_key_parse_falls_back_to_recommended() {
        assert_eq!(SortKey::parse("capacity-ascending"), SortKey::CapacityAscending);
        assert_eq!(SortKey::parse("efficiency-descending"), SortKey::EfficiencyDescending);
        assert_eq!(SortKey::parse("recommended"), SortKey::Recommended);
        assert_eq!(SortKey::parse("price-asc"), SortKey::Recommended);
        assert_eq!(SortKey::parse(""), SortKey::Recommended);
    }

    #[test]
    fn empty_selection_is_identity() {
        let products = sample_products();

        let result = apply_filters(&products, &FilterSelection::new());

        let ids: Vec<i64> = result.iter().map(|product| product.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn single_dimension_matches_exactly() {
        let products = sample_products();
        let selection = FilterSelection::new().series("Pearl");

        let result = apply_filters(&products, &selection);

        assert!(result.iter().all(|product| product.series.as_deref() == Some("Pearl")));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn missing_attribute_never_matches() {
        let mut products = sample_products();
        products.push(Product::new(5, "Unlabeled", "unlabeled", "X1"));
        let selection = FilterSelection::new().energy_class("A+");

        let result = apply_filters(&products, &selection);

        let ids: Vec<i64> = result.iter().map(|product| product.id).collect();
        assert_eq!(ids, vec![4]);
    }

    #[test]
    fn combined_dimensions_intersect() {
        let products = sample_products();
        let selection = FilterSelection::new().capacity("3.5 kW").energy_class("A++");

        let result = apply_filters(&products, &selection);

        let ids: Vec<i64> = result.iter().map(|product| product.id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn recommended_sort_partitions_featured_then_order() {
        let mut a = Product::new(1, "A", "a", "A1");
        a.order = Some(0);
        let b = Product::new(2, "B", "b", "B1").featured().with_order(5);
        let c = Product::new(3, "C", "c", "C1").featured().with_order(1);
        let products = vec![a, b, c];
        let refs: Vec<&Product> = products.iter().collect();

        let sorted = apply_sort(&refs, SortKey::Recommended);

        let ids: Vec<i64> = sorted.iter().map(|product| product.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn recommended_sort_is_stable_for_ties() {
        // All share the implicit order of zero; input order must survive.
        let products = vec![
            Product::new(1, "A", "a", "A1"),
            Product::new(2, "B", "b", "B1"),
            Product::new(3, "C", "c", "C1"),
        ];
        let refs: Vec<&Product> = products.iter().collect();

        let sorted = apply_sort(&refs, SortKey::Recommended);

        let ids: Vec<i64> = sorted.iter().map(|product| product.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn capacity_sort_ranks_unparseable_first() {
        let products = vec![
            Product::new(1, "A", "a", "A1").with_capacity("7.1 kW"),
            Product::new(2, "B", "b", "B1").with_capacity("2.5 kW"),
            Product::new(3, "C", "c", "C1").with_capacity("bad"),
        ];
        let refs: Vec<&Product> = products.iter().collect();

        let sorted = apply_sort(&refs, SortKey::CapacityAscending);

        let capacities: Vec<&str> = sorted
            .iter()
            .map(|product| product.capacity.as_deref().unwrap_or(""))
            .collect();
        assert_eq!(capacities, vec!["bad", "2.5 kW", "7.1 kW"]);
    }

    #[test]
    fn efficiency_sort_puts_missing_seer_last() {
        let products = vec![
            Product::new(1, "A", "a", "A1"),
            Product::new(2, "B", "b", "B1").with_seer("8.5"),
            Product::new(3, "C", "c", "C1").with_seer("6.1"),
        ];
        let refs: Vec<&Product> = products.iter().collect();

        let sorted = apply_sort(&refs, SortKey::EfficiencyDescending);

        let ids: Vec<i64> = sorted.iter().map(|product| product.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn sort_does_not_mutate_input() {
        let products = sample_products();
        let refs: Vec<&Product> = products.iter().collect();

        let _sorted = apply_sort(&refs, SortKey::CapacityAscending);

        let ids: Vec<i64> = refs.iter().map(|product| product.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn series_options_sort_lexicographically() {
        let products = sample_products();

        let options = filter_options(&products);

        assert_eq!(options.series, vec!["Flexis", "Pearl", "Tide"]);
    }

    #[test]
    fn energy_options_follow_label_ranking() {
        let products: Vec<Product> = ["B", "A+++", "D", "A"]
            .iter()
            .enumerate()
            .map(|(idx, class)| {
                Product::new(idx as i64, "P", format!("p-{idx}"), "M").with_energy_class(*class)
            })
            .collect();

        let options = filter_options(&products);

        assert_eq!(options.energy_classes, vec!["A+++", "A", "B", "D"]);
    }

    #[test]
    fn unknown_energy_classes_sort_last_in_first_appearance_order() {
        let products: Vec<Product> = ["G", "A", "F", "A+++"]
            .iter()
            .enumerate()
            .map(|(idx, class)| {
                Product::new(idx as i64, "P", format!("p-{idx}"), "M").with_energy_class(*class)
            })
            .collect();

        let options = filter_options(&products);

        assert_eq!(options.energy_classes, vec!["A+++", "A", "G", "F"]);
    }

    #[test]
    fn capacity_options_sort_numerically() {
        let products: Vec<Product> = ["12 kW", "2.5 kW", "7.1 kW", "bad"]
            .iter()
            .enumerate()
            .map(|(idx, capacity)| {
                Product::new(idx as i64, "P", format!("p-{idx}"), "M").with_capacity(*capacity)
            })
            .collect();

        let options = filter_options(&products);

        assert_eq!(options.capacities, vec!["bad", "2.5 kW", "7.1 kW", "12 kW"]);
    }

    #[test]
    fn options_of_filtered_subset_narrow_monotonically() {
        let products = sample_products();
        let full = filter_options(&products);

        let selection = FilterSelection::new().capacity("3.5 kW");
        let filtered: Vec<Product> = apply_filters(&products, &selection)
            .into_iter()
            .cloned()
            .collect();
        let narrowed = filter_options(&filtered);

        assert!(narrowed.series.iter().all(|value| full.series.contains(value)));
        assert!(
            narrowed
                .energy_classes
                .iter()
                .all(|value| full.energy_classes.contains(value))
        );
        assert!(
            narrowed
                .capacities
                .iter()
                .all(|value| full.capacities.contains(value))
        );
    }

    #[test]
    fn active_count_tracks_each_dimension() {
        assert_eq!(FilterSelection::new().active_count(), 0);
        assert_eq!(FilterSelection::new().series("Pearl").active_count(), 1);
        assert_eq!(
            FilterSelection::new()
                .series("Pearl")
                .capacity("2.5 kW")
                .active_count(),
            2
        );
        assert_eq!(
            FilterSelection::new()
                .series("Pearl")
                .energy_class("A+")
                .capacity("2.5 kW")
                .active_count(),
            3
        );

        let mut selection = FilterSelection::new().series("Pearl").capacity("2.5 kW");
        selection.capacity = None;
        assert_eq!(selection.active_count(), 1);
    }

    #[test]
    fn room_size_label_maps_capacity_thresholds() {
        assert_eq!(room_size_label("2.5 kW"), "2.5 kW · ~25 m²");
        assert_eq!(room_size_label("3.5 kW"), "3.5 kW · ~35 m²");
        assert_eq!(room_size_label("5.0 kW"), "5.0 kW · ~50 m²");
        assert_eq!(room_size_label("7.1 kW"), "7.1 kW · ~70 m²");
        assert_eq!(room_size_label("9.0 kW"), "9.0 kW · ~90 m²");
        assert_eq!(room_size_label("bad"), "bad");
    }
}

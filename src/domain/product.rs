use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Product document as served by the content API.
///
/// The specification attributes are sparse free-text values entered by the
/// content editors; every one of them is independently optional and the
/// filtering layer treats them as opaque strings with no fixed vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier of the product.
    pub id: i64,
    /// Display title.
    pub title: String,
    /// URL-safe identity used for routing; unique per product.
    pub slug: String,
    /// Manufacturer model code shown on the card and detail page.
    pub model_code: String,
    /// Slug of the owning category. Referential integrity is not enforced
    /// by the content API; a dangling slug means the product renders
    /// without a category context.
    #[serde(default)]
    pub category_slug: Option<String>,
    #[serde(default)]
    pub main_image_filename: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    /// Free-text range label (e.g. "Pearl Premium"), independent of the
    /// category tree; used only for client-side filtering.
    #[serde(default)]
    pub series: Option<String>,
    /// Nominal capacity label (e.g. "2.5 kW").
    #[serde(default)]
    pub capacity: Option<String>,

    // Cooling
    #[serde(default)]
    pub cooling_capacity_nominal: Option<String>,
    #[serde(default)]
    pub cooling_capacity_range: Option<String>,
    #[serde(default)]
    pub cooling_power_consumption: Option<String>,
    #[serde(default)]
    pub cooling_power_range: Option<String>,
    #[serde(default)]
    pub seer: Option<String>,
    #[serde(default)]
    pub eer: Option<String>,
    #[serde(default)]
    pub energy_class_cooling: Option<String>,

    // Heating
    #[serde(default)]
    pub heating_capacity_nominal: Option<String>,
    #[serde(default)]
    pub heating_capacity_range: Option<String>,
    #[serde(default)]
    pub heating_power_consumption: Option<String>,
    #[serde(default)]
    pub heating_power_range: Option<String>,
    #[serde(default)]
    pub scop: Option<String>,
    #[serde(default)]
    pub cop: Option<String>,
    #[serde(default)]
    pub energy_class_heating: Option<String>,

    // Indoor unit
    #[serde(default)]
    pub indoor_dimensions: Option<String>,
    #[serde(default)]
    pub indoor_weight: Option<String>,
    #[serde(default)]
    pub indoor_noise_max: Option<String>,
    #[serde(default)]
    pub indoor_noise_levels: Option<String>,

    // Outdoor unit
    #[serde(default)]
    pub outdoor_dimensions: Option<String>,
    #[serde(default)]
    pub outdoor_weight: Option<String>,
    #[serde(default)]
    pub outdoor_noise_max: Option<String>,
    #[serde(default)]
    pub compressor_type: Option<String>,

    // General
    #[serde(default)]
    pub refrigerant: Option<String>,
    #[serde(default)]
    pub power_supply: Option<String>,
    #[serde(default)]
    pub warranty: Option<String>,
    #[serde(default)]
    pub made_in: Option<String>,
    #[serde(default)]
    pub feature_highlights: Option<String>,

    /// Manually curated flag; featured products lead the recommended sort.
    #[serde(default)]
    pub featured: bool,
    /// Manual secondary sort key; missing values count as zero.
    #[serde(default)]
    pub order: Option<i64>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Build a product with the given identity fields; every optional
    /// attribute starts empty.
    pub fn new(
        id: i64,
        title: impl Into<String>,
        slug: impl Into<String>,
        model_code: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            slug: slug.into(),
            model_code: model_code.into(),
            category_slug: None,
            main_image_filename: None,
            short_description: None,
            series: None,
            capacity: None,
            cooling_capacity_nominal: None,
            cooling_capacity_range: None,
            cooling_power_consumption: None,
            cooling_power_range: None,
            seer: None,
            eer: None,
            energy_class_cooling: None,
            heating_capacity_nominal: None,
            heating_capacity_range: None,
            heating_power_consumption: None,
            heating_power_range: None,
            scop: None,
            cop: None,
            energy_class_heating: None,
            indoor_dimensions: None,
            indoor_weight: None,
            indoor_noise_max: None,
            indoor_noise_levels: None,
            outdoor_dimensions: None,
            outdoor_weight: None,
            outdoor_noise_max: None,
            compressor_type: None,
            refrigerant: None,
            power_supply: None,
            warranty: None,
            made_in: None,
            feature_highlights: None,
            featured: false,
            order: None,
            updated_at: None,
            created_at: None,
        }
    }

    /// Attach the owning category slug.
    pub fn with_category_slug(mut self, slug: impl Into<String>) -> Self {
        self.category_slug = Some(slug.into());
        self
    }

    /// Attach a series label.
    pub fn with_series(mut self, series: impl Into<String>) -> Self {
        self.series = Some(series.into());
        self
    }

    /// Attach a capacity label.
    pub fn with_capacity(mut self, capacity: impl Into<String>) -> Self {
        self.capacity = Some(capacity.into());
        self
    }

    /// Attach a cooling energy class.
    pub fn with_energy_class(mut self, class: impl Into<String>) -> Self {
        self.energy_class_cooling = Some(class.into());
        self
    }

    /// Attach a SEER figure.
    pub fn with_seer(mut self, seer: impl Into<String>) -> Self {
        self.seer = Some(seer.into());
        self
    }

    /// Mark the product as featured.
    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    /// Attach a manual display order.
    pub fn with_order(mut self, order: i64) -> Self {
        self.order = Some(order);
        self
    }
}

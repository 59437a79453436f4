//! Product Catalog Model

use serde::{Deserialize, Serialize};

/// Pod size series. Also used as the size axis of the custom configurator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SizeSeries {
    S,
    M,
    L,
}

impl SizeSeries {
    pub const ALL: [SizeSeries; 3] = [SizeSeries::S, SizeSeries::M, SizeSeries::L];

    pub fn as_str(&self) -> &'static str {
        match self {
            SizeSeries::S => "S",
            SizeSeries::M => "M",
            SizeSeries::L => "L",
        }
    }
}

impl std::fmt::Display for SizeSeries {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SizeSeries {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "S" => Ok(SizeSeries::S),
            "M" => Ok(SizeSeries::M),
            "L" => Ok(SizeSeries::L),
            other => Err(format!("unknown size series: {other}")),
        }
    }
}

/// One headline spec on a product card, e.g. `-35dB` / `隔音量`.
///
/// Products carry three of these by convention; nothing enforces the count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecItem {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub text: String,
}

/// 3D preview tuning for the product viewer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product3DConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_scale: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_rotate: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center_offset: Option<[f64; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment_intensity: Option<f64>,
}

/// Product entity (id unique across all categories)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub name: String,
    pub series: SizeSeries,
    /// Display price text, e.g. "¥ 19,800 起"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    /// `Some(false)` hides the price on the public site
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_price: Option<bool>,
    #[serde(default)]
    pub desc: String,
    /// Long-form description for the detail view
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub specs: Vec<SpecItem>,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub three_d_config: Option<Product3DConfig>,
    #[serde(default)]
    pub show_on_home: bool,
}

impl Product {
    /// Blank product as created by "add product" in the admin panel
    pub fn blank(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            model: "New".to_string(),
            name: "Product".to_string(),
            series: SizeSeries::S,
            price: Some("0".to_string()),
            show_price: Some(true),
            desc: "Desc...".to_string(),
            description: None,
            features: Vec::new(),
            specs: vec![SpecItem::default(), SpecItem::default(), SpecItem::default()],
            image: String::new(),
            three_d_config: None,
            show_on_home: false,
        }
    }

    /// Price text to render, if the product shows one
    pub fn displayed_price(&self) -> Option<&str> {
        if self.show_price == Some(false) {
            return None;
        }
        self.price.as_deref()
    }
}

/// Product category with its nested products
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCategory {
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Icon name understood by the frontend, e.g. "Activity", "Moon"
    #[serde(default)]
    pub icon_type: String,
    #[serde(default)]
    pub cover_image: String,
    #[serde(default)]
    pub items: Vec<Product>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_parses_original_json() {
        let json = r#"{
            "id": "s1",
            "model": "S1-Solo",
            "name": "个人专注舱",
            "price": "¥ 19,800 起",
            "showPrice": true,
            "desc": "desc",
            "threeDConfig": { "initialScale": 1, "autoRotate": true },
            "features": ["航空级铝合金框架"],
            "image": "https://picsum.photos/800/800?random=101",
            "series": "S",
            "specs": [{ "label": "-35dB", "text": "隔音量" }],
            "showOnHome": true
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.series, SizeSeries::S);
        assert_eq!(product.displayed_price(), Some("¥ 19,800 起"));
        assert_eq!(
            product.three_d_config.as_ref().unwrap().initial_scale,
            Some(1.0)
        );
        assert!(product.show_on_home);

        let back = serde_json::to_value(&product).unwrap();
        assert_eq!(back["threeDConfig"]["autoRotate"], true);
        assert_eq!(back["showOnHome"], true);
        assert!(back.get("description").is_none());
    }

    #[test]
    fn test_hidden_price() {
        let mut product = Product::blank("prod-1");
        assert_eq!(product.displayed_price(), Some("0"));
        product.show_price = Some(false);
        assert_eq!(product.displayed_price(), None);
    }

    #[test]
    fn test_blank_has_three_spec_rows() {
        let product = Product::blank("prod-1");
        assert_eq!(product.specs.len(), 3);
        assert!(!product.show_on_home);
    }

    #[test]
    fn test_size_series_parse() {
        assert_eq!("m".parse::<SizeSeries>(), Ok(SizeSeries::M));
        assert!("XL".parse::<SizeSeries>().is_err());
        assert_eq!(serde_json::to_string(&SizeSeries::L).unwrap(), "\"L\"");
    }
}

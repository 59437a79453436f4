//! Custom (configurator) Page Model

use super::product::SizeSeries;
use serde::{Deserialize, Serialize};

/// FAQ entry on the custom page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    pub id: i64,
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub a: String,
    #[serde(default)]
    pub img: String,
}

/// Shell color offered by the configurator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomColor {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// CSS hex value, e.g. "#000000"
    #[serde(default)]
    pub hex: String,
}

/// Preview image for one (size, color) combination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomConfigImage {
    pub id: String,
    pub size_id: SizeSeries,
    pub color_id: String,
    #[serde(default)]
    pub image_url: String,
}

impl CustomConfigImage {
    /// Whether this image belongs to the given (size, color) pair
    pub fn matches(&self, size: SizeSeries, color_id: &str) -> bool {
        self.size_id == size && self.color_id == color_id
    }
}

/// "Why customize" selling point
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhyCustomItem {
    pub id: String,
    /// Icon name understood by the frontend, e.g. "Ruler"
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub desc: String,
}

/// Custom page content (singleton)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomPageData {
    #[serde(default)]
    pub faqs: Vec<FaqItem>,
    #[serde(default)]
    pub colors: Vec<CustomColor>,
    #[serde(default)]
    pub config_images: Vec<CustomConfigImage>,
    /// Missing from copies written before the section existed
    #[serde(default)]
    pub why_custom_items: Vec<WhyCustomItem>,
}

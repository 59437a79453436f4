//! About Page Model

use serde::{Deserialize, Serialize};

/// Titled paragraph (vision / mission)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Company history entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineItem {
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub desc: String,
}

/// Showroom location
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationItem {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub image: String,
}

/// About page content (singleton)
///
/// Stored copies are overlaid onto the built-in default field by field when
/// loaded, so fields added after a copy was written still get a value.
/// Cleared optional fields are written as `null`: an absent key would be
/// filled back in from the default on the next load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutPageData {
    #[serde(default)]
    pub hero_video_url: Option<String>,
    #[serde(default)]
    pub vision: Option<ValueItem>,
    #[serde(default)]
    pub mission: Option<ValueItem>,
    #[serde(default)]
    pub timeline: Vec<TimelineItem>,
    #[serde(default)]
    pub locations: Vec<LocationItem>,
}

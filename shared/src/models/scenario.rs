//! Scenario Model

use serde::{Deserialize, Serialize};

/// Usage scenario shown on the home page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    /// Free-form grouping, e.g. "Commercial" / "Home"
    #[serde(default)]
    pub category: String,
}

/// Scenario as edited in the admin panel
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioDraft {
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub image: String,
    pub category: String,
}

impl ScenarioDraft {
    pub fn into_scenario(self, id: String) -> Scenario {
        Scenario {
            id,
            title: self.title,
            description: self.description,
            image: self.image,
            category: self.category,
        }
    }
}

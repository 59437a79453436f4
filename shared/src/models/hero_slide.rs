//! Hero Slide Model

use serde::{Deserialize, Serialize};

/// Home page carousel slide. Collection order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSlide {
    pub id: i64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub desc: String,
}

/// Slide as edited in the admin panel (no id yet when new)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSlideDraft {
    pub id: Option<i64>,
    pub image: String,
    pub tag: String,
    pub title: String,
    pub desc: String,
}

impl HeroSlideDraft {
    pub fn into_slide(self, id: i64) -> HeroSlide {
        HeroSlide {
            id,
            image: self.image,
            tag: self.tag,
            title: self.title,
            desc: self.desc,
        }
    }
}

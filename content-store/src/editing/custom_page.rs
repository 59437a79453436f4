//! Custom (configurator) page
//!
//! Config images are unique per (size, color) pair. Every save collapses all
//! entries of the pair into one, so data that already holds duplicates (older
//! copies did) heals on the next save.

use serde::{Deserialize, Serialize};
use shared::models::{
    CustomColor, CustomConfigImage, CustomPageData, FaqItem, SizeSeries, WhyCustomItem,
};
use shared::util::{next_numeric_id, unique_prefixed_id};

/// FAQ as edited in the admin panel (no id yet when new)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FaqDraft {
    pub id: Option<i64>,
    pub q: String,
    pub a: String,
    pub img: String,
}

/// Config image as edited in the admin panel
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigImageDraft {
    pub id: Option<String>,
    pub size_id: SizeSeries,
    pub color_id: String,
    pub image_url: String,
}

pub fn save_faq(data: &CustomPageData, draft: FaqDraft) -> CustomPageData {
    let mut next = data.clone();
    let existing = draft
        .id
        .and_then(|id| next.faqs.iter().position(|f| f.id == id));
    let id = match existing {
        Some(pos) => next.faqs[pos].id,
        None => next_numeric_id(data.faqs.iter().map(|f| f.id)),
    };
    let item = FaqItem {
        id,
        q: draft.q,
        a: draft.a,
        img: draft.img,
    };
    match existing {
        Some(pos) => next.faqs[pos] = item,
        None => next.faqs.push(item),
    }
    next
}

pub fn delete_faq(data: &CustomPageData, id: i64) -> CustomPageData {
    let mut next = data.clone();
    next.faqs.retain(|f| f.id != id);
    next
}

/// Update a color by id, or append it. An empty id gets a `col-` id.
pub fn save_color(data: &CustomPageData, mut color: CustomColor) -> CustomPageData {
    let mut next = data.clone();
    if let Some(slot) = next
        .colors
        .iter_mut()
        .find(|c| !color.id.is_empty() && c.id == color.id)
    {
        *slot = color;
        return next;
    }
    if color.id.is_empty() {
        color.id = unique_prefixed_id("col", |candidate| data.colors.iter().any(|c| c.id == candidate));
    }
    next.colors.push(color);
    next
}

/// Remove a color. Its config images stay; they simply have no swatch until
/// the color is added back.
pub fn delete_color(data: &CustomPageData, id: &str) -> CustomPageData {
    let mut next = data.clone();
    next.colors.retain(|c| c.id != id);
    next
}

/// Save the image of one (size, color) pair.
///
/// - pair already present: the first entry of the pair keeps its id and
///   position and takes the new url, later entries of the pair are dropped
/// - pair absent, draft id names an existing entry: that entry moves to the pair
/// - otherwise: appended with an `img-` id
pub fn save_config_image(data: &CustomPageData, draft: ConfigImageDraft) -> CustomPageData {
    let mut next = data.clone();
    let images = &mut next.config_images;

    if let Some(first) = images
        .iter()
        .position(|img| img.matches(draft.size_id, &draft.color_id))
    {
        images[first].image_url = draft.image_url;
        let mut index = 0;
        images.retain(|img| {
            let keep = index <= first || !img.matches(draft.size_id, &draft.color_id);
            index += 1;
            keep
        });
        return next;
    }

    if let Some(id) = draft.id.as_deref().filter(|id| !id.is_empty())
        && let Some(slot) = images.iter_mut().find(|img| img.id == id)
    {
        slot.size_id = draft.size_id;
        slot.color_id = draft.color_id;
        slot.image_url = draft.image_url;
        return next;
    }

    let id = unique_prefixed_id("img", |candidate| {
        data.config_images.iter().any(|img| img.id == candidate)
    });
    images.push(CustomConfigImage {
        id,
        size_id: draft.size_id,
        color_id: draft.color_id,
        image_url: draft.image_url,
    });
    next
}

pub fn delete_config_image(data: &CustomPageData, id: &str) -> CustomPageData {
    let mut next = data.clone();
    next.config_images.retain(|img| img.id != id);
    next
}

/// Image shown for a (size, color) pair. If stored data still holds
/// duplicates, the last one wins, matching what a save would keep visible.
pub fn config_image_for<'a>(
    data: &'a CustomPageData,
    size: SizeSeries,
    color_id: &str,
) -> Option<&'a CustomConfigImage> {
    data.config_images
        .iter()
        .rev()
        .find(|img| img.matches(size, color_id))
}

/// Update a "why custom" item by id, or append it. An empty id gets a `why-` id.
pub fn save_why_item(data: &CustomPageData, mut item: WhyCustomItem) -> CustomPageData {
    let mut next = data.clone();
    if let Some(slot) = next
        .why_custom_items
        .iter_mut()
        .find(|w| !item.id.is_empty() && w.id == item.id)
    {
        *slot = item;
        return next;
    }
    if item.id.is_empty() {
        item.id = unique_prefixed_id("why", |candidate| {
            data.why_custom_items.iter().any(|w| w.id == candidate)
        });
    }
    next.why_custom_items.push(item);
    next
}

pub fn delete_why_item(data: &CustomPageData, id: &str) -> CustomPageData {
    let mut next = data.clone();
    next.why_custom_items.retain(|w| w.id != id);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn draft(size: SizeSeries, color: &str, url: &str) -> ConfigImageDraft {
        ConfigImageDraft {
            id: None,
            size_id: size,
            color_id: color.to_string(),
            image_url: url.to_string(),
        }
    }

    fn pair_count(data: &CustomPageData, size: SizeSeries, color: &str) -> usize {
        data.config_images
            .iter()
            .filter(|img| img.matches(size, color))
            .count()
    }

    #[test]
    fn test_save_config_image_replaces_pair() {
        let data = seed::custom();
        let next = save_config_image(&data, draft(SizeSeries::M, "red", "https://cdn/m-red.jpg"));
        assert_eq!(next.config_images.len(), 24);
        let img = config_image_for(&next, SizeSeries::M, "red").unwrap();
        assert_eq!(img.id, "img-M-red");
        assert_eq!(img.image_url, "https://cdn/m-red.jpg");
    }

    #[test]
    fn test_save_config_image_collapses_duplicates() {
        let mut data = seed::custom();
        data.config_images = vec![
            CustomConfigImage {
                id: "a".into(),
                size_id: SizeSeries::S,
                color_id: "black".into(),
                image_url: "one".into(),
            },
            CustomConfigImage {
                id: "b".into(),
                size_id: SizeSeries::L,
                color_id: "white".into(),
                image_url: "keep".into(),
            },
            CustomConfigImage {
                id: "c".into(),
                size_id: SizeSeries::S,
                color_id: "black".into(),
                image_url: "two".into(),
            },
        ];
        assert_eq!(config_image_for(&data, SizeSeries::S, "black").unwrap().id, "c");

        let next = save_config_image(&data, draft(SizeSeries::S, "black", "three"));
        assert_eq!(pair_count(&next, SizeSeries::S, "black"), 1);
        assert_eq!(next.config_images.len(), 2);
        assert_eq!(next.config_images[0].id, "a");
        assert_eq!(next.config_images[0].image_url, "three");
        assert_eq!(next.config_images[1].id, "b");
    }

    #[test]
    fn test_save_config_image_new_pair_and_move() {
        let mut data = seed::custom();
        data.config_images.retain(|img| img.id != "img-L-green");

        let mut moved = draft(SizeSeries::L, "green", "g");
        moved.id = Some("img-S-black".into());
        let next = save_config_image(&data, moved);
        assert_eq!(pair_count(&next, SizeSeries::S, "black"), 0);
        assert_eq!(config_image_for(&next, SizeSeries::L, "green").unwrap().id, "img-S-black");

        let next = save_config_image(&next, draft(SizeSeries::S, "black", "new"));
        let img = config_image_for(&next, SizeSeries::S, "black").unwrap();
        assert!(img.id.starts_with("img-"));
        assert_eq!(next.config_images.last().unwrap(), img);
    }

    #[test]
    fn test_faq_and_colors() {
        let data = seed::custom();
        let next = save_faq(
            &data,
            FaqDraft {
                id: Some(2),
                q: "Q2".into(),
                ..Default::default()
            },
        );
        assert_eq!(next.faqs[1].id, 2);
        assert_eq!(next.faqs[1].q, "Q2");

        let next = save_faq(&next, FaqDraft::default());
        assert_eq!(next.faqs.len(), 4);
        assert!(next.faqs[3].id > 3);
        assert_eq!(delete_faq(&next, 1).faqs.len(), 3);

        let next = save_color(
            &data,
            CustomColor {
                id: String::new(),
                name: "Ocean Blue".into(),
                hex: "#3B82F6".into(),
            },
        );
        assert_eq!(next.colors.len(), 9);
        assert!(next.colors[8].id.starts_with("col-"));
        assert_eq!(delete_color(&next, "black").colors.len(), 8);
    }

    #[test]
    fn test_why_items() {
        let data = seed::custom();
        let next = save_why_item(
            &data,
            WhyCustomItem {
                id: "2".into(),
                icon: "Leaf".into(),
                title: "环保".into(),
                desc: String::new(),
            },
        );
        assert_eq!(next.why_custom_items.len(), 3);
        assert_eq!(next.why_custom_items[1].icon, "Leaf");
        assert_eq!(delete_why_item(&next, "2").why_custom_items.len(), 2);
    }
}

//! About page
//!
//! Timeline entries and locations have no id; they are addressed by index.

use crate::utils::validation::{MAX_URL_LEN, validate_text};
use shared::error::{AppError, AppResult};
use shared::models::{AboutPageData, LocationItem, TimelineItem, ValueItem};

fn index_error(list: &str, index: usize, len: usize) -> AppError {
    AppError::out_of_range(format!("{list} index {index} out of range (len {len})"))
        .with_detail("index", index)
}

pub fn save_values(about: &AboutPageData, vision: ValueItem, mission: ValueItem) -> AboutPageData {
    AboutPageData {
        vision: Some(vision),
        mission: Some(mission),
        ..about.clone()
    }
}

/// Set or clear (empty string) the hero video link
pub fn set_hero_video(about: &AboutPageData, url: &str) -> AppResult<AboutPageData> {
    let url = url.trim();
    validate_text(url, "heroVideoUrl", MAX_URL_LEN)?;
    Ok(AboutPageData {
        hero_video_url: (!url.is_empty()).then(|| url.to_string()),
        ..about.clone()
    })
}

/// Replace the entry at `index`, or append when `index` is `None`
pub fn save_timeline_item(
    about: &AboutPageData,
    index: Option<usize>,
    item: TimelineItem,
) -> AppResult<AboutPageData> {
    let mut next = about.clone();
    upsert(&mut next.timeline, index, item, "timeline")?;
    Ok(next)
}

pub fn delete_timeline_item(about: &AboutPageData, index: usize) -> AboutPageData {
    let mut next = about.clone();
    if index < next.timeline.len() {
        next.timeline.remove(index);
    }
    next
}

/// Replace the location at `index`, or append when `index` is `None`
pub fn save_location(
    about: &AboutPageData,
    index: Option<usize>,
    item: LocationItem,
) -> AppResult<AboutPageData> {
    let mut next = about.clone();
    upsert(&mut next.locations, index, item, "locations")?;
    Ok(next)
}

pub fn delete_location(about: &AboutPageData, index: usize) -> AboutPageData {
    let mut next = about.clone();
    if index < next.locations.len() {
        next.locations.remove(index);
    }
    next
}

fn upsert<T>(list: &mut Vec<T>, index: Option<usize>, item: T, name: &str) -> AppResult<()> {
    match index {
        Some(i) if i < list.len() => list[i] = item,
        Some(i) => return Err(index_error(name, i, list.len())),
        None => list.push(item),
    }
    Ok(())
}

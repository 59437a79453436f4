//! Home page: hero slides and scenarios

use shared::models::{HeroSlide, HeroSlideDraft, Scenario, ScenarioDraft};
use shared::util::{next_numeric_id, unique_prefixed_id};

/// Update the slide with the draft's id, or append a new slide.
///
/// A draft without id, or whose id no longer exists, becomes a new slide at
/// the end with a fresh numeric id.
pub fn save_hero_slide(slides: &[HeroSlide], draft: HeroSlideDraft) -> Vec<HeroSlide> {
    let mut next = slides.to_vec();
    if let Some(id) = draft.id
        && let Some(slot) = next.iter_mut().find(|s| s.id == id)
    {
        *slot = draft.into_slide(id);
        return next;
    }
    let id = next_numeric_id(slides.iter().map(|s| s.id));
    next.push(draft.into_slide(id));
    next
}

pub fn delete_hero_slide(slides: &[HeroSlide], id: i64) -> Vec<HeroSlide> {
    slides.iter().filter(|s| s.id != id).cloned().collect()
}

/// Move a slide one step towards the front (`up`) or back. Out of range is a no-op.
pub fn move_hero_slide(slides: &[HeroSlide], id: i64, up: bool) -> Vec<HeroSlide> {
    let mut next = slides.to_vec();
    if let Some(pos) = next.iter().position(|s| s.id == id) {
        match (up, pos) {
            (true, p) if p > 0 => next.swap(p, p - 1),
            (false, p) if p + 1 < next.len() => next.swap(p, p + 1),
            _ => {}
        }
    }
    next
}

/// Update the scenario with the draft's id, or append one with an `sc-` id.
pub fn save_scenario(scenarios: &[Scenario], draft: ScenarioDraft) -> Vec<Scenario> {
    let mut next = scenarios.to_vec();
    if let Some(id) = draft.id.clone().filter(|id| !id.is_empty())
        && let Some(slot) = next.iter_mut().find(|s| s.id == id)
    {
        *slot = draft.into_scenario(id);
        return next;
    }
    let id = unique_prefixed_id("sc", |candidate| scenarios.iter().any(|s| s.id == candidate));
    next.push(draft.into_scenario(id));
    next
}

pub fn delete_scenario(scenarios: &[Scenario], id: &str) -> Vec<Scenario> {
    scenarios.iter().filter(|s| s.id != id).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_save_existing_slide_keeps_position() {
        let slides = seed::hero_slides();
        let draft = HeroSlideDraft {
            id: Some(2),
            title: "改过的标题".into(),
            ..Default::default()
        };
        let next = save_hero_slide(&slides, draft);
        assert_eq!(next.len(), 3);
        assert_eq!(next[1].id, 2);
        assert_eq!(next[1].title, "改过的标题");
    }

    #[test]
    fn test_new_slide_appended_with_fresh_id() {
        let slides = seed::hero_slides();
        let next = save_hero_slide(
            &slides,
            HeroSlideDraft {
                title: "New".into(),
                ..Default::default()
            },
        );
        assert_eq!(next.len(), 4);
        assert!(next[3].id > 3);
        assert_eq!(next[..3], slides[..]);
    }

    #[test]
    fn test_move_and_delete_slide() {
        let slides = seed::hero_slides();
        let moved = move_hero_slide(&slides, 3, true);
        assert_eq!(moved.iter().map(|s| s.id).collect::<Vec<_>>(), vec![1, 3, 2]);
        assert_eq!(move_hero_slide(&slides, 1, true), slides);

        let next = delete_hero_slide(&slides, 2);
        assert_eq!(next.iter().map(|s| s.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_scenarios() {
        let scenarios = seed::scenarios();
        let next = save_scenario(
            &scenarios,
            ScenarioDraft {
                title: "图书馆".into(),
                category: "Public".into(),
                ..Default::default()
            },
        );
        assert_eq!(next.len(), 4);
        assert!(next[3].id.starts_with("sc-"));

        let next = save_scenario(
            &next,
            ScenarioDraft {
                id: Some("airport".into()),
                title: "机场".into(),
                ..Default::default()
            },
        );
        assert_eq!(next[1].title, "机场");

        let next = delete_scenario(&next, "office");
        assert_eq!(next[0].id, "airport");
    }
}

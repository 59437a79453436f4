//! Admin editing helpers
//!
//! Each helper takes the current value of a collection and returns the full
//! new value; callers hand it to the matching `ContentStore::replace_*`.
//!
//! ```ignore
//! let slides = editing::home::save_hero_slide(&store.hero_slides(), draft);
//! store.replace_hero_slides(slides);
//! ```

pub mod about;
pub mod catalog;
pub mod custom_page;
pub mod home;

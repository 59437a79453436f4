//! Data models
//!
//! One module per persisted collection. Field names serialize in camelCase
//! so copies written by the browser site load unchanged.

pub mod about;
pub mod admin_user;
pub mod custom_page;
pub mod hero_slide;
pub mod lead;
pub mod product;
pub mod scenario;
pub mod site_config;

// Re-exports
pub use about::*;
pub use admin_user::*;
pub use custom_page::*;
pub use hero_slide::*;
pub use lead::*;
pub use product::*;
pub use scenario::*;
pub use site_config::*;

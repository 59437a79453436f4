//! Shared types for the QE.SPACE site
//!
//! Content models for every persisted collection, the unified error
//! system and small id/time helpers. Nothing in here performs I/O.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use serde::{Deserialize, Serialize};

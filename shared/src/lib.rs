//! Shared types for the Savory Stories storefront
//!
//! Common types used across the workspace: data models, the unified
//! error system, and small utilities.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use serde::{Deserialize, Serialize};

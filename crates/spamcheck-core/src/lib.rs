//! Spamcheck Core
//!
//! Core types and error handling shared across spamcheck components.
//!
//! This crate provides:
//! - The `Prediction` value object returned to callers
//! - Error types and result handling

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{Prediction, SpamLabel};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{Prediction, SpamLabel};
}

//! Error types for validation failures.
//!
//! This module provides the [`Errors`] collection of failed fields and the
//! shared [`ValidationError`] category every collection belongs to.

mod category;
mod errors;

pub use category::{is_validation_error, ValidationError};
pub use errors::Errors;

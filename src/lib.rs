//! # fielderrors
//!
//! Collect, nest and render field-level validation failures as a single
//! error value.
//!
//! ## Overview
//!
//! Validation code that wants to report every failed field, rather than stop
//! at the first one, needs somewhere to put the failures. This crate models
//! them as an ordered, non-empty collection of `(name, description)` pairs
//! that is itself a `std::error::Error`. It performs no validation of its own.
//!
//! "No error" is the absence of a collection. Every combinator returns
//! `Option<Errors>` and yields `None` when nothing failed, so the ordinary
//! `Option`/`Result` checks tell callers whether validation passed.
//!
//! ## Core Types
//!
//! - [`Field`]: one failed field, a name and a description
//! - [`Errors`]: a non-empty collection of failed fields
//! - [`ValidationError`]: the category every collection belongs to
//! - [`MaybeErrors`]: inspection and conversion of `Option<Errors>`
//! - [`FieldPath`]: the ancestor chain used to name nested fields
//!
//! ## Example
//!
//! ```rust
//! use fielderrors::{concat, field_error, new_children, Errors, MaybeErrors};
//!
//! fn validate_address(city: &str, zip: &str) -> Option<Errors> {
//!     concat([
//!         city.is_empty().then(|| Errors::new("city", "is required")),
//!         (zip.len() != 5).then(|| field_error!("zip", "must be 5 digits, got {}", zip.len())),
//!     ])
//! }
//!
//! fn validate_user(name: &str, city: &str, zip: &str) -> Option<Errors> {
//!     concat([
//!         name.is_empty().then(|| Errors::new("name", "is required")),
//!         new_children("address", [validate_address(city, zip)]),
//!     ])
//! }
//!
//! assert!(validate_user("ada", "London", "12345").into_result().is_ok());
//!
//! let errors = validate_user("", "London", "123").unwrap();
//! assert_eq!(
//!     errors.to_string(),
//!     "validation errors: 'name' is required, 'address.zip' must be 5 digits, got 3"
//! );
//! ```

pub mod combine;
pub mod error;
pub mod field;
pub mod macros;
pub mod maybe;
pub mod path;

pub use combine::{append, concat, nest, new_children, new_elements, FieldSource};
pub use error::{is_validation_error, Errors, ValidationError};
pub use field::Field;
pub use maybe::{DisplayMaybe, MaybeErrors, ABSENT};
pub use path::{FieldPath, PathSegment};

/// Type alias for validation results carrying field errors
pub type ValidationResult<T> = stillwater::Validation<T, Errors>;

//! The shared validation error category.

use std::error::Error;

use super::Errors;

/// The base category shared by every validation failure.
///
/// Every [`Errors`] collection reports this sentinel as its
/// [`source`](Error::source), so callers that only need to know "was this a
/// validation failure" can check the category without looking at fields.
///
/// # Example
///
/// ```rust
/// use std::error::Error;
/// use fielderrors::{Errors, ValidationError};
///
/// let errors = Errors::new("name", "is required");
/// let source = errors.source().unwrap();
/// assert!(source.is::<ValidationError>());
/// assert_eq!(source.to_string(), "validation error");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, thiserror::Error)]
#[error("validation error")]
pub struct ValidationError;

/// Returns true if `err` is a validation failure.
///
/// Matches an [`Errors`] collection, the bare [`ValidationError`] sentinel,
/// and any error with one of those anywhere in its [`source`](Error::source)
/// chain (such as a caller's own error enums wrapping [`Errors`] with
/// `#[from]` or `#[source]`, at any depth).
///
/// # Example
///
/// ```rust
/// use fielderrors::{is_validation_error, Errors};
///
/// #[derive(Debug, thiserror::Error)]
/// enum ApiError {
///     #[error(transparent)]
///     Invalid(#[from] Errors),
///     #[error("not found")]
///     NotFound,
/// }
///
/// let invalid = ApiError::from(Errors::new("id", "must be numeric"));
/// assert!(is_validation_error(&invalid));
/// assert!(!is_validation_error(&ApiError::NotFound));
/// ```
pub fn is_validation_error(err: &(dyn Error + 'static)) -> bool {
    std::iter::successors(Some(err), |&e| e.source()).any(is_category)
}

fn is_category(err: &(dyn Error + 'static)) -> bool {
    err.is::<ValidationError>() || err.is::<Errors>()
}

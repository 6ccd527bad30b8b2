//! Operations on a possibly absent collection.
//!
//! Validation code usually produces `Option<Errors>`: `None` when every check
//! passed. [`MaybeErrors`] gives that value the same inspection and rendering
//! operations a present collection has, and converts it into the `Result` and
//! `Validation` forms callers check with.

use std::fmt::{self, Display};

use stillwater::Validation;

use crate::combine::append;
use crate::error::Errors;
use crate::field::Field;
use crate::ValidationResult;

/// Rendering of an absent collection.
pub const ABSENT: &str = "<absent> validation error";

/// Inspection and conversion of `Option<Errors>`.
///
/// # Example
///
/// ```rust
/// use fielderrors::{Errors, MaybeErrors};
///
/// fn check_name(name: &str) -> Option<Errors> {
///     name.is_empty().then(|| Errors::new("name", "is required"))
/// }
///
/// assert!(!check_name("ada").any());
/// assert!(check_name("ada").into_result().is_ok());
///
/// let failed = check_name("");
/// assert!(failed.any());
/// assert_eq!(failed.render(), "validation error: 'name' is required");
/// ```
pub trait MaybeErrors {
    /// Returns true if a collection is present.
    fn any(&self) -> bool;

    /// Returns an owned copy of the fields, empty if absent.
    fn fields(&self) -> Vec<Field>;

    /// Returns the number of fields, zero if absent.
    fn field_count(&self) -> usize;

    /// Renders the collection, or [`ABSENT`] if there is none.
    fn render(&self) -> String;

    /// Returns a `Display` adapter that renders like [`render`](Self::render).
    fn display(&self) -> DisplayMaybe<'_>;

    /// Returns a new collection with one more field appended.
    ///
    /// The result is always present.
    fn addf(&self, name: impl Into<String>, description: impl Display) -> Option<Errors>;

    /// Converts into `Ok(())` when absent and `Err(errors)` otherwise.
    fn into_result(self) -> Result<(), Errors>;

    /// Converts into a stillwater `Validation`, succeeding with `value` when
    /// absent.
    fn into_validation<T>(self, value: T) -> ValidationResult<T>;
}

impl MaybeErrors for Option<Errors> {
    fn any(&self) -> bool {
        self.is_some()
    }

    fn fields(&self) -> Vec<Field> {
        self.as_ref().map(Errors::fields).unwrap_or_default()
    }

    fn field_count(&self) -> usize {
        self.as_ref().map_or(0, Errors::len)
    }

    fn render(&self) -> String {
        self.display().to_string()
    }

    fn display(&self) -> DisplayMaybe<'_> {
        DisplayMaybe(self.as_ref())
    }

    fn addf(&self, name: impl Into<String>, description: impl Display) -> Option<Errors> {
        append(self, Errors::new(name, description))
    }

    fn into_result(self) -> Result<(), Errors> {
        match self {
            Some(errors) => Err(errors),
            None => Ok(()),
        }
    }

    fn into_validation<T>(self, value: T) -> ValidationResult<T> {
        match self {
            Some(errors) => Validation::Failure(errors),
            None => Validation::Success(value),
        }
    }
}

/// `Display` adapter for a possibly absent collection.
///
/// Returned by [`MaybeErrors::display`].
#[derive(Debug, Clone, Copy)]
pub struct DisplayMaybe<'a>(Option<&'a Errors>);

impl Display for DisplayMaybe<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(errors) => write!(f, "{}", errors),
            None => f.write_str(ABSENT),
        }
    }
}

//! Format-string constructors.
//!
//! - [`field_error!`] builds a single-field [`Errors`](crate::Errors)
//! - [`addf!`] appends a formatted field to a possibly absent collection
//!
//! Arguments are checked by `format!` at compile time, so a mismatched
//! format string is a build error rather than a garbled description.

/// Creates a single-field collection with a formatted description.
///
/// # Example
///
/// ```rust
/// use fielderrors::field_error;
///
/// let min = 8;
/// let errors = field_error!("password", "must be at least {} characters", min);
/// assert_eq!(
///     errors.to_string(),
///     "validation error: 'password' must be at least 8 characters"
/// );
///
/// let plain = field_error!("name", "is required");
/// assert_eq!(plain.first().description(), "is required");
/// ```
#[macro_export]
macro_rules! field_error {
    ($name:expr, $($arg:tt)+) => {
        $crate::Errors::new($name, ::std::format_args!($($arg)+))
    };
}

/// Appends a formatted field to a collection, returning a new one.
///
/// `$errors` may be an [`Errors`](crate::Errors), an `Option<Errors>` or a
/// reference to either; it is borrowed, never modified. Always evaluates to
/// `Some`.
///
/// # Example
///
/// ```rust
/// use fielderrors::{addf, Errors, MaybeErrors};
///
/// let mut errors: Option<Errors> = None;
/// for (idx, tag) in ["ok", "", "fine", ""].iter().enumerate() {
///     if tag.is_empty() {
///         errors = addf!(errors, "tags", "entry {} is empty", idx);
///     }
/// }
///
/// assert_eq!(
///     errors.render(),
///     "validation errors: 'tags' entry 1 is empty, 'tags' entry 3 is empty"
/// );
/// ```
#[macro_export]
macro_rules! addf {
    ($errors:expr, $name:expr, $($arg:tt)+) => {
        $crate::append(&$errors, $crate::field_error!($name, $($arg)+))
    };
}

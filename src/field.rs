//! A single failed field.
//!
//! [`Field`] pairs a field name with a human-readable description of why the
//! field failed validation. Fields are immutable once built.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// One failed field: a name and a description.
///
/// The name may be empty, meaning the description applies to the enclosing
/// value itself. When the field is later nested with
/// [`new_children`](crate::new_children), an empty name collapses to the
/// parent's name.
///
/// # Example
///
/// ```rust
/// use fielderrors::Field;
///
/// let field = Field::new("email", "must contain '@'");
/// assert_eq!(field.name(), "email");
/// assert_eq!(field.description(), "must contain '@'");
/// assert_eq!(field.to_string(), "'email' must contain '@'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Field {
    name: String,
    description: String,
}

impl Field {
    /// Creates a field from a name and a description.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// The field name, possibly empty.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Why the field failed.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns true if this field carries no name of its own.
    pub fn is_unnamed(&self) -> bool {
        self.name.is_empty()
    }

    /// Returns a copy of this field with a new name and the same description.
    pub(crate) fn renamed(&self, name: String) -> Self {
        Self {
            name,
            description: self.description.clone(),
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' {}", self.name, self.description)
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Field>();
    assert_sync::<Field>();
};

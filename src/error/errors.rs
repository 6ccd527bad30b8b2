//! The field error collection.
//!
//! This module provides [`Errors`], a non-empty ordered collection of failed
//! [`Field`]s that is itself an error value.

use std::error::Error;
use std::fmt::{self, Display};

use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer};
use serde::{Serialize, Serializer};
use stillwater::prelude::*;

use super::ValidationError;
use crate::field::Field;

/// A non-empty collection of failed fields.
///
/// `Errors` wraps a `NonEmptyVec<Field>`, so a collection always holds at
/// least one field. "No error" is the absence of a collection: every
/// constructor and combinator that could end up with zero fields returns
/// `Option<Errors>` and collapses that case to `None`.
///
/// Fields keep their insertion order through every combinator, and a
/// collection is never modified once built.
///
/// # Example
///
/// ```rust
/// use fielderrors::{concat, Errors};
///
/// let name = Errors::new("name", "is required");
/// let email = Errors::new("email", "must contain '@'");
///
/// let errors = concat([&name, &email]).unwrap();
/// assert_eq!(
///     errors.to_string(),
///     "validation errors: 'name' is required, 'email' must contain '@'"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Errors(NonEmptyVec<Field>);

impl Errors {
    /// Creates a collection holding a single field.
    ///
    /// The description is anything printable; use
    /// [`field_error!`](crate::field_error) to build it from a format string.
    pub fn new(name: impl Into<String>, description: impl Display) -> Self {
        Self::single(Field::new(name, description.to_string()))
    }

    /// Creates a collection holding exactly `field`.
    pub fn single(field: Field) -> Self {
        Self(NonEmptyVec::singleton(field))
    }

    /// Creates a collection from a sequence of fields.
    ///
    /// Returns `None` when `fields` is empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fielderrors::{Errors, Field};
    ///
    /// assert!(Errors::from_fields(Vec::new()).is_none());
    ///
    /// let errors = Errors::from_fields([Field::new("a", "x"), Field::new("b", "y")]).unwrap();
    /// assert_eq!(errors.len(), 2);
    /// ```
    pub fn from_fields<I>(fields: I) -> Option<Self>
    where
        I: IntoIterator<Item = Field>,
    {
        NonEmptyVec::from_vec(fields.into_iter().collect()).map(Self)
    }

    /// Returns a new collection with one more field appended.
    ///
    /// `self` is left untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fielderrors::Errors;
    ///
    /// let first = Errors::new("name", "is required");
    /// let both = first.addf("age", format_args!("must be at least {}", 18));
    ///
    /// assert_eq!(first.len(), 1);
    /// assert_eq!(
    ///     both.to_string(),
    ///     "validation errors: 'name' is required, 'age' must be at least 18"
    /// );
    /// ```
    pub fn addf(&self, name: impl Into<String>, description: impl Display) -> Self {
        self.clone().combine(Self::new(name, description))
    }

    /// Always true: a collection holds at least one field.
    pub fn any(&self) -> bool {
        true
    }

    /// Returns the number of fields in this collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns false since this collection is guaranteed non-empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over the fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.0.iter()
    }

    /// Returns the first field.
    pub fn first(&self) -> &Field {
        self.0.head()
    }

    /// Returns an owned copy of the fields in insertion order.
    ///
    /// Each call returns a fresh `Vec`; changing it has no effect on the
    /// collection.
    pub fn fields(&self) -> Vec<Field> {
        self.0.iter().cloned().collect()
    }

    /// Converts this collection into its fields.
    pub fn into_fields(self) -> Vec<Field> {
        self.0.into_vec()
    }

    /// Returns all fields with exactly the given name.
    pub fn named(&self, name: &str) -> Vec<&Field> {
        self.0.iter().filter(|f| f.name() == name).collect()
    }

    /// Groups descriptions by field name.
    ///
    /// Names appear in the order they were first seen; descriptions keep
    /// their insertion order within each name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fielderrors::Errors;
    ///
    /// let errors = Errors::new("password", "is too short")
    ///     .addf("email", "is required")
    ///     .addf("password", "needs a digit");
    ///
    /// let grouped = errors.by_name();
    /// let names: Vec<_> = grouped.keys().map(String::as_str).collect();
    /// assert_eq!(names, vec!["password", "email"]);
    /// assert_eq!(grouped["password"], vec!["is too short", "needs a digit"]);
    /// ```
    pub fn by_name(&self) -> IndexMap<String, Vec<String>> {
        let mut grouped: IndexMap<String, Vec<String>> = IndexMap::new();
        for field in self.0.iter() {
            grouped
                .entry(field.name().to_string())
                .or_default()
                .push(field.description().to_string());
        }
        grouped
    }

    /// Returns the category this collection belongs to.
    pub fn category(&self) -> ValidationError {
        ValidationError
    }
}

impl Semigroup for Errors {
    fn combine(self, other: Self) -> Self {
        Errors(self.0.combine(other.0))
    }
}

impl Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.len() == 1 {
            write!(f, "validation error: ")?;
        } else {
            write!(f, "validation errors: ")?;
        }
        for (i, field) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", field)?;
        }
        Ok(())
    }
}

impl Error for Errors {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&ValidationError)
    }
}

impl From<Field> for Errors {
    fn from(field: Field) -> Self {
        Self::single(field)
    }
}

impl Serialize for Errors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

impl<'de> Deserialize<'de> for Errors {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = Vec::<Field>::deserialize(deserializer)?;
        Errors::from_fields(fields)
            .ok_or_else(|| de::Error::invalid_length(0, &"at least one field"))
    }
}

impl IntoIterator for Errors {
    type Item = Field;
    type IntoIter = std::vec::IntoIter<Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a Field;
    type IntoIter = Box<dyn Iterator<Item = &'a Field> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.0.iter())
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Errors>();
    assert_sync::<Errors>();
};

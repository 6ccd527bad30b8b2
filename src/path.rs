//! Field paths for naming nested fields.
//!
//! This module provides [`FieldPath`] and [`PathSegment`], used to build the
//! dotted names that nested fields carry (e.g. `address.city`, `items[0].sku`).

use std::fmt::{self, Display};

/// A segment of a field path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A named field (e.g. `address`). An empty name is skipped when rendering.
    Field(String),
    /// A list element (e.g. `[0]`).
    Index(usize),
}

impl PathSegment {
    /// Creates a new field segment.
    pub fn field(name: impl Into<String>) -> Self {
        PathSegment::Field(name.into())
    }

    /// Creates a new index segment.
    pub fn index(idx: usize) -> Self {
        PathSegment::Index(idx)
    }
}

/// The ancestor chain of a nested field, outermost first.
///
/// Field segments are joined with `.`, index segments render as `[i]` attached
/// to whatever precedes them, and empty field names are left out entirely so
/// the rendered name never has a dangling separator.
///
/// # Example
///
/// ```rust
/// use fielderrors::FieldPath;
///
/// let path = FieldPath::root()
///     .push_field("order")
///     .push_field("items")
///     .push_index(0)
///     .push_field("");
///
/// assert_eq!(path.to_string(), "order.items[0]");
/// assert_eq!(FieldPath::from_field("parent").join("child"), "parent.child");
/// assert_eq!(FieldPath::from_field("parent").join(""), "parent");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// Creates an empty path.
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a path from a single field segment.
    pub fn from_field(name: impl Into<String>) -> Self {
        Self {
            segments: vec![PathSegment::Field(name.into())],
        }
    }

    /// Returns a new path with a field segment appended.
    pub fn push_field(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Field(name.into()));
        Self { segments }
    }

    /// Returns a new path with an index segment appended.
    pub fn push_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self { segments }
    }

    /// Renders this path with `child` appended as a field segment.
    ///
    /// An empty `child` yields this path's own name.
    pub fn join(&self, child: &str) -> String {
        let mut name = self.to_string();
        if !child.is_empty() {
            if !name.is_empty() {
                name.push('.');
            }
            name.push_str(child);
        }
        name
    }

    /// Returns true if the path renders as the empty name.
    pub fn is_root(&self) -> bool {
        self.segments.iter().all(|s| matches!(s, PathSegment::Field(n) if n.is_empty()))
    }

    /// Returns the number of segments, counting empty field segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if this path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the path segments.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }
}

impl Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut written = false;
        for segment in &self.segments {
            match segment {
                PathSegment::Field(name) if name.is_empty() => {}
                PathSegment::Field(name) => {
                    if written {
                        write!(f, ".")?;
                    }
                    write!(f, "{}", name)?;
                    written = true;
                }
                PathSegment::Index(idx) => {
                    write!(f, "[{}]", idx)?;
                    written = true;
                }
            }
        }
        Ok(())
    }
}

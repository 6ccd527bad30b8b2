//! Combinators that merge and nest field error collections.
//!
//! Every combinator borrows its inputs, skips absent ones, and returns `None`
//! when the result would hold no fields.

use crate::error::Errors;
use crate::field::Field;
use crate::path::FieldPath;

/// A value that may hold a field error collection.
///
/// Implemented for [`Errors`], `Option<Errors>`, `Option<&Errors>` and
/// references to any of these, so the combinators accept present and absent
/// inputs alike.
pub trait FieldSource {
    /// Returns the collection, or `None` if this value is absent.
    fn errors(&self) -> Option<&Errors>;
}

impl FieldSource for Errors {
    fn errors(&self) -> Option<&Errors> {
        Some(self)
    }
}

impl FieldSource for Option<Errors> {
    fn errors(&self) -> Option<&Errors> {
        self.as_ref()
    }
}

impl FieldSource for Option<&Errors> {
    fn errors(&self) -> Option<&Errors> {
        *self
    }
}

impl<T: FieldSource + ?Sized> FieldSource for &T {
    fn errors(&self) -> Option<&Errors> {
        (**self).errors()
    }
}

/// Flattens several collections into one, keeping their order.
///
/// Fields of the first input come first, then those of the second, and so
/// on. Absent inputs contribute nothing. Returns `None` if no fields remain.
///
/// # Example
///
/// ```rust
/// use fielderrors::{concat, Errors};
///
/// let name = Errors::new("name", "is required");
/// let missing: Option<Errors> = None;
///
/// let errors = concat([Some(&name), missing.as_ref()]).unwrap();
/// assert_eq!(errors.to_string(), "validation error: 'name' is required");
///
/// assert!(concat(Vec::<Errors>::new()).is_none());
/// assert!(concat([None::<Errors>]).is_none());
/// ```
pub fn concat<I>(xs: I) -> Option<Errors>
where
    I: IntoIterator,
    I::Item: FieldSource,
{
    let mut fields = Vec::new();
    for x in xs {
        if let Some(errors) = x.errors() {
            fields.extend(errors.iter().cloned());
        }
    }
    Errors::from_fields(fields)
}

/// Appends a collection to a possibly absent one.
///
/// Used by the `addf` operations. The result is never `None` since `extra`
/// holds at least one field.
pub fn append<E: FieldSource + ?Sized>(existing: &E, extra: Errors) -> Option<Errors> {
    concat([existing.errors(), Some(&extra)])
}

/// Namespaces collections under a parent field name.
///
/// Each field named `child` becomes `parent.child`; a field with an empty
/// name becomes `parent`. Order is kept across and within the inputs, absent
/// inputs are skipped, and `None` is returned if no fields result.
///
/// # Example
///
/// ```rust
/// use fielderrors::{new_children, Errors};
///
/// let address = Errors::new("city", "is required").addf("", "is incomplete");
/// let errors = new_children("address", [&address]).unwrap();
///
/// assert_eq!(
///     errors.to_string(),
///     "validation errors: 'address.city' is required, 'address' is incomplete"
/// );
///
/// // Nesting twice builds the full ancestor chain.
/// let order = new_children("order", [new_children("shipping", [&address])]).unwrap();
/// assert_eq!(order.first().name(), "order.shipping.city");
/// ```
pub fn new_children<I>(parent: &str, xs: I) -> Option<Errors>
where
    I: IntoIterator,
    I::Item: FieldSource,
{
    let path = FieldPath::from_field(parent);
    let mut fields = Vec::new();
    for x in xs {
        extend_nested(&mut fields, &path, &x);
    }
    Errors::from_fields(fields)
}

/// Namespaces each collection under its position in a list.
///
/// The `i`-th input is nested under `parent[i]`, so a field `name` becomes
/// `parent[i].name` and an unnamed field becomes `parent[i]`. Absent inputs
/// keep their position but contribute no fields.
///
/// # Example
///
/// ```rust
/// use fielderrors::{new_elements, Errors};
///
/// let items = [
///     Some(Errors::new("sku", "is required")),
///     None,
///     Some(Errors::new("", "is a duplicate")),
/// ];
///
/// let errors = new_elements("items", &items).unwrap();
/// assert_eq!(
///     errors.to_string(),
///     "validation errors: 'items[0].sku' is required, 'items[2]' is a duplicate"
/// );
/// ```
pub fn new_elements<I>(parent: &str, xs: I) -> Option<Errors>
where
    I: IntoIterator,
    I::Item: FieldSource,
{
    let base = FieldPath::from_field(parent);
    let mut fields = Vec::new();
    for (idx, x) in xs.into_iter().enumerate() {
        extend_nested(&mut fields, &base.push_index(idx), &x);
    }
    Errors::from_fields(fields)
}

/// Namespaces collections under an arbitrary path.
///
/// [`new_children`] and [`new_elements`] are shorthands for the common
/// single-segment cases.
pub fn nest<I>(path: &FieldPath, xs: I) -> Option<Errors>
where
    I: IntoIterator,
    I::Item: FieldSource,
{
    let mut fields = Vec::new();
    for x in xs {
        extend_nested(&mut fields, path, &x);
    }
    Errors::from_fields(fields)
}

fn extend_nested<E: FieldSource>(fields: &mut Vec<Field>, path: &FieldPath, x: &E) {
    if let Some(errors) = x.errors() {
        fields.extend(errors.iter().map(|f| f.renamed(path.join(f.name()))));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concat_nothing_is_none() {
        assert!(concat(Vec::<Errors>::new()).is_none());
    }

    #[test]
    fn test_concat_absent_is_none() {
        assert!(concat([None::<Errors>]).is_none());
        assert!(concat([None::<Errors>, None]).is_none());
    }

    #[test]
    fn test_concat_keeps_order() {
        let e1 = Errors::new("name1", "desc1");
        let e2 = Errors::new("name2", "desc2").addf("name3", "desc3");

        let errors = concat([&e1, &e2]).unwrap();
        let names: Vec<_> = errors.iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["name1", "name2", "name3"]);
    }

    #[test]
    fn test_concat_skips_absent_between_present() {
        let e1 = Some(Errors::new("a", "1"));
        let e2: Option<Errors> = None;
        let e3 = Some(Errors::new("b", "2"));

        let errors = concat([&e1, &e2, &e3]).unwrap();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_concat_does_not_modify_inputs() {
        let e1 = Errors::new("name1", "desc1");
        let e2 = Errors::new("name2", "desc2");

        let _ = concat([&e1, &e2]);

        assert_eq!(e1, Errors::new("name1", "desc1"));
        assert_eq!(e2, Errors::new("name2", "desc2"));
    }

    #[test]
    fn test_append_to_absent() {
        let existing: Option<Errors> = None;
        let errors = append(&existing, Errors::new("a", "1")).unwrap();
        assert_eq!(errors, Errors::new("a", "1"));
    }

    #[test]
    fn test_new_children_prefixes_names() {
        let errors = new_children("parent", [Errors::new("child1", "y")]).unwrap();
        assert_eq!(errors.to_string(), "validation error: 'parent.child1' y");
    }

    #[test]
    fn test_new_children_unnamed_collapses_to_parent() {
        let errors = new_children("parent", [Errors::new("", "x")]).unwrap();
        assert_eq!(errors.to_string(), "validation error: 'parent' x");
    }

    #[test]
    fn test_new_children_empty_parent_keeps_child_name() {
        let errors = new_children("", [Errors::new("child", "x")]).unwrap();
        assert_eq!(errors.first().name(), "child");
    }

    #[test]
    fn test_new_children_empty_parent_and_child_stays_unnamed() {
        let errors = new_children("", [Errors::new("", "x")]).unwrap();
        assert_eq!(errors.first().name(), "");
        assert_eq!(errors.to_string(), "validation error: '' x");
    }

    #[test]
    fn test_new_children_across_collections() {
        let a = Errors::new("a", "1").addf("", "2");
        let b = Errors::new("b", "3");

        let errors = new_children("p", [Some(&a), None, Some(&b)]).unwrap();
        let names: Vec<_> = errors.iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["p.a", "p", "p.b"]);
    }

    #[test]
    fn test_new_children_of_nothing_is_none() {
        assert!(new_children("parent", Vec::<Errors>::new()).is_none());
        assert!(new_children("parent", [None::<Errors>]).is_none());
    }

    #[test]
    fn test_new_children_does_not_modify_inputs() {
        let child = Errors::new("child1", "y");
        let _ = new_children("parent", [&child]);
        assert_eq!(child, Errors::new("child1", "y"));
    }

    #[test]
    fn test_new_elements_indexes_inputs() {
        let items = vec![
            None,
            Some(Errors::new("sku", "is required")),
            Some(Errors::new("", "is a duplicate")),
        ];

        let errors = new_elements("items", &items).unwrap();
        let names: Vec<_> = errors.iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["items[1].sku", "items[2]"]);
    }

    #[test]
    fn test_nest_under_path() {
        let path = FieldPath::root()
            .push_field("order")
            .push_field("lines")
            .push_index(4);
        let errors = nest(&path, [Errors::new("qty", "must be positive")]).unwrap();
        assert_eq!(errors.first().name(), "order.lines[4].qty");
    }
}

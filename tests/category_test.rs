//! Tests for the shared validation error category.

use std::error::Error;

use fielderrors::{is_validation_error, Errors, Field, ValidationError};

#[derive(Debug, thiserror::Error)]
enum ServiceError {
    #[error(transparent)]
    Invalid(#[from] Errors),
    #[error("request rejected: {0}")]
    Rejected(#[source] Errors),
    #[error("storage unavailable")]
    Storage(#[source] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
enum GatewayError {
    #[error("upstream failed: {0}")]
    Upstream(#[source] ServiceError),
    #[error(transparent)]
    Service(#[from] ServiceError),
}

#[test]
fn test_errors_as_dyn_error_converts_back() {
    let e: Box<dyn Error> = Box::new(Errors::new("name1", "desc1"));

    let errors = e.downcast_ref::<Errors>().expect("should downcast to Errors");
    assert_eq!(errors.fields(), vec![Field::new("name1", "desc1")]);
}

#[test]
fn test_errors_source_is_sentinel() {
    let e = Errors::new("name1", "desc1");
    let source = e.source().expect("errors should have a source");

    assert!(source.is::<ValidationError>());
    assert!(source.source().is_none());
}

#[test]
fn test_category_check_on_errors() {
    let e = Errors::new("name1", "desc1");
    assert!(is_validation_error(&e));
}

#[test]
fn test_category_check_through_transparent_wrapper() {
    let e = ServiceError::from(Errors::new("name1", "desc1"));

    assert!(is_validation_error(&e));
    assert_eq!(e.to_string(), "validation error: 'name1' desc1");
}

#[test]
fn test_category_check_through_source_wrapper() {
    let e = ServiceError::Rejected(Errors::new("id", "is malformed"));

    assert!(is_validation_error(&e));
    assert_eq!(
        e.to_string(),
        "request rejected: validation error: 'id' is malformed"
    );
}

#[test]
fn test_category_check_through_two_wrapper_levels() {
    let inner = ServiceError::Rejected(Errors::new("id", "is malformed"));
    let e = GatewayError::Upstream(inner);

    assert!(is_validation_error(&e));
}

#[test]
fn test_category_check_through_nested_transparent_wrappers() {
    let e = GatewayError::from(ServiceError::from(Errors::new("id", "is malformed")));

    assert!(is_validation_error(&e));
    assert_eq!(e.to_string(), "validation error: 'id' is malformed");
}

#[test]
fn test_category_check_rejects_deep_unrelated_errors() {
    let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
    let e = GatewayError::Upstream(ServiceError::Storage(io));

    assert!(!is_validation_error(&e));
}

#[test]
fn test_category_check_rejects_other_errors() {
    let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
    let e = ServiceError::Storage(io);

    assert!(!is_validation_error(&e));
}

#[test]
fn test_question_mark_into_caller_error() {
    fn handle(name: &str) -> Result<String, ServiceError> {
        let check: Option<Errors> = name
            .is_empty()
            .then(|| Errors::new("name", "is required"));
        if let Some(errors) = check {
            return Err(errors.into());
        }
        Ok(format!("hello {}", name))
    }

    assert_eq!(handle("ada").unwrap(), "hello ada");
    assert!(matches!(handle(""), Err(ServiceError::Invalid(_))));
}

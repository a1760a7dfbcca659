//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorKind, ErrorTip};
use crate::Span;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Span::new(10, 11),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.kind(), ErrorKind::UnrecognisedToken);
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "}".to_string(),
        },
        Span::new(42, 43),
    );

    assert_eq!(error.get_position(), 42);
    assert_eq!(error.get_span(), Span::new(42, 43));
}

#[test]
fn test_redeclaration_tip() {
    let error = Error::new(
        ErrorImpl::Redeclaration {
            name: "x".to_string(),
        },
        Span::new(0, 1),
    );

    assert_eq!(error.kind(), ErrorKind::Redeclaration);
    assert_eq!(error.get_tip().to_string(), "`x` already declared in this scope");
}

#[test]
fn test_arity_mismatch_message() {
    let error = Error::new(
        ErrorImpl::ArityMismatch {
            function: "f".to_string(),
            expected: 1,
            received: 2,
        },
        Span::new(0, 1),
    );

    assert_eq!(error.to_string(), "\"f\" expects 1 arguments, received 2");
    assert_eq!(error.get_tip().to_string(), "`f` expects 1 arguments, received 2");
}

#[test]
fn test_error_display_matches_internal() {
    let error = Error::new(
        ErrorImpl::InvalidMemberAccess {
            base: "s".to_string(),
            member: "b".to_string(),
        },
        Span::new(3, 6),
    );

    assert_eq!(error.to_string(), error.get_internal().to_string());
    assert_eq!(error.get_error_name(), "InvalidMemberAccess");
}

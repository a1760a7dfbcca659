use std::fmt::Display;

use thiserror::Error;

use crate::Span;

/// Discriminant of an [`ErrorImpl`], for callers that only care which
/// rule was broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnrecognisedToken,
    UnexpectedToken,
    Redeclaration,
    UnresolvedIdentifier,
    TypeMismatch,
    ArityMismatch,
    InvalidMemberAccess,
    NotCallable,
    UnknownType,
    AssignToConstant,
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    span: Span,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, span: Span) -> Self {
        Error {
            internal_error: error_impl,
            span,
        }
    }

    pub fn get_span(&self) -> Span {
        self.span
    }

    /// Byte offset the error points at.
    pub fn get_position(&self) -> u32 {
        self.span.start
    }

    pub fn get_internal(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorKind::UnrecognisedToken,
            ErrorImpl::UnexpectedToken { .. } => ErrorKind::UnexpectedToken,
            ErrorImpl::Redeclaration { .. } => ErrorKind::Redeclaration,
            ErrorImpl::UnresolvedIdentifier { .. } => ErrorKind::UnresolvedIdentifier,
            ErrorImpl::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            ErrorImpl::ArityMismatch { .. } => ErrorKind::ArityMismatch,
            ErrorImpl::InvalidMemberAccess { .. } => ErrorKind::InvalidMemberAccess,
            ErrorImpl::NotCallable { .. } => ErrorKind::NotCallable,
            ErrorImpl::UnknownType { .. } => ErrorKind::UnknownType,
            ErrorImpl::AssignToConstant { .. } => ErrorKind::AssignToConstant,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match self.kind() {
            ErrorKind::UnrecognisedToken => "UnrecognisedToken",
            ErrorKind::UnexpectedToken => "UnexpectedToken",
            ErrorKind::Redeclaration => "Redeclaration",
            ErrorKind::UnresolvedIdentifier => "UnresolvedIdentifier",
            ErrorKind::TypeMismatch => "TypeMismatch",
            ErrorKind::ArityMismatch => "ArityMismatch",
            ErrorKind::InvalidMemberAccess => "InvalidMemberAccess",
            ErrorKind::NotCallable => "NotCallable",
            ErrorKind::UnknownType => "UnknownType",
            ErrorKind::AssignToConstant => "AssignToConstant",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::Redeclaration { name } => {
                ErrorTip::Suggestion(format!("`{}` already declared in this scope", name))
            }
            ErrorImpl::UnresolvedIdentifier { name } => {
                ErrorTip::Suggestion(format!("`{}` not declared", name))
            }
            ErrorImpl::TypeMismatch { expected, received } => ErrorTip::Suggestion(format!(
                "Expected type `{}`, received `{}`",
                expected, received
            )),
            ErrorImpl::ArityMismatch {
                function,
                expected,
                received,
            } => ErrorTip::Suggestion(format!(
                "`{}` expects {} arguments, received {}",
                function, expected, received
            )),
            ErrorImpl::InvalidMemberAccess { base, member } => {
                ErrorTip::Suggestion(format!("`{}` has no member `{}`", base, member))
            }
            ErrorImpl::NotCallable { name } => {
                ErrorTip::Suggestion(format!("`{}` is not a function", name))
            }
            ErrorImpl::UnknownType { type_ } => {
                ErrorTip::Suggestion(format!("Unknown type `{}` found", type_))
            }
            ErrorImpl::AssignToConstant { name } => {
                ErrorTip::Suggestion(format!("Cannot assign to constant `{}`", name))
            }
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("{name:?} already declared in this scope")]
    Redeclaration { name: String },
    #[error("{name:?} not declared")]
    UnresolvedIdentifier { name: String },
    #[error("types do not match: expected {expected:?}, received {received:?}")]
    TypeMismatch { expected: String, received: String },
    #[error("{function:?} expects {expected} arguments, received {received}")]
    ArityMismatch {
        function: String,
        expected: usize,
        received: usize,
    },
    #[error("{base:?} has no member {member:?}")]
    InvalidMemberAccess { base: String, member: String },
    #[error("{name:?} is not callable")]
    NotCallable { name: String },
    #[error("unknown type {type_} found")]
    UnknownType { type_: String },
    #[error("cannot assign to constant {name:?}")]
    AssignToConstant { name: String },
}

//! Error types for Cinegraph operations.
//!
//! Uses `thiserror` for ergonomic error definition. Exactly three
//! caller-visible failure kinds exist: field validation, missing entity,
//! and structurally invalid argument.

use thiserror::Error;

use crate::id::{FilmId, UserId};

/// Convenience alias for results carrying a Cinegraph [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Cinegraph operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a field validation error.
    #[must_use]
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation {
            field,
            reason: reason.into(),
        })
    }

    /// Creates a film-not-found error.
    #[must_use]
    pub fn film_not_found(id: FilmId) -> Self {
        Self::new(ErrorKind::FilmNotFound(id))
    }

    /// Creates a user-not-found error.
    #[must_use]
    pub fn user_not_found(id: UserId) -> Self {
        Self::new(ErrorKind::UserNotFound(id))
    }

    /// Creates an invalid-argument error.
    #[must_use]
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument(reason.into()))
    }

    /// Returns true for either not-found kind.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::FilmNotFound(_) | ErrorKind::UserNotFound(_)
        )
    }

    /// Returns true for a field validation failure.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self.kind, ErrorKind::Validation { .. })
    }

    /// Returns true for a structurally invalid request.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidArgument(_))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A create/update draft violates a field rule.
    #[error("invalid {field}: {reason}")]
    Validation {
        /// The offending field.
        field: &'static str,
        /// Why the field was rejected.
        reason: String,
    },

    /// A referenced film does not exist.
    #[error("film not found: {0}")]
    FilmNotFound(FilmId),

    /// A referenced user does not exist.
    #[error("user not found: {0}")]
    UserNotFound(UserId),

    /// A structurally invalid request not tied to a stored entity's fields.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

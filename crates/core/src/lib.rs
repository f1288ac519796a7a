//! Shared primitives for all Rust crates in Garrison.

#![forbid(unsafe_code)]

/// Authentication primitives shared across services.
pub mod auth;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use auth::Identity;

/// Result type used across Garrison crates.
pub type AppResult<T> = Result<T, AppError>;

/// A validated non-empty UTF-8 string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Creates a validated non-empty string.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(AppError::Validation(
                "value must not be empty or whitespace".to_owned(),
            ));
        }

        Ok(Self(value))
    }

    /// Returns the underlying string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<NonEmptyString> for String {
    fn from(value: NonEmptyString) -> Self {
        value.0
    }
}

/// Common application error categories.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input or violated invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// Requested resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Write operation conflicts with existing state.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Caller has no authenticated identity, or the identity is not
    /// provisioned with a trainer profile and role.
    #[error("unauthenticated: {0}")]
    Unauthenticated(String),

    /// Caller is authenticated but their role is outside the allowed set.
    /// Carries the allowed role names for user-facing messaging.
    #[error("unauthorized: requires one of [{}]", .required_roles.join(", "))]
    Unauthorized {
        /// Role names that would have been accepted.
        required_roles: Vec<String>,
    },

    /// The directory backing store could not be reached or failed mid-query.
    /// Distinct from "no such row": transient outages must not read as a
    /// logged-out user.
    #[error("directory unavailable: {0}")]
    DirectoryUnavailable(String),

    /// Internal unexpected error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns whether this error is the expected, non-exceptional kind of
    /// authorization outcome (cheap, not logged as an application error).
    #[must_use]
    pub fn is_denial(&self) -> bool {
        matches!(self, Self::Unauthenticated(_) | Self::Unauthorized { .. })
    }
}

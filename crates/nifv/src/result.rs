//! Detailed validation outcome

use serde::{Deserialize, Serialize};
use std::fmt;

/// A failure category that maps to a numeric status code.
///
/// Status codes are negative and only meaningful within one validator
/// family; `-1` from [`crate::PanError`] and `-1` from
/// [`crate::PanNameError`] describe unrelated failures.
pub trait StatusCode: fmt::Display {
    fn status(&self) -> i32;
}

/// Outcome of a detailed validation.
///
/// On success `message` holds the canonical identifier and `status` is 0;
/// on failure `message` explains the rejection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct ValidationResult {
    pub message: String,
    pub status: i32,
    pub is_valid: bool,
}

impl ValidationResult {
    pub fn valid(formatted: impl Into<String>) -> Self {
        Self {
            message: formatted.into(),
            status: 0,
            is_valid: true,
        }
    }

    pub fn failure<E: StatusCode + ?Sized>(error: &E) -> Self {
        Self {
            message: error.to_string(),
            status: error.status(),
            is_valid: false,
        }
    }

    /// The canonical identifier when valid, `None` otherwise.
    pub fn into_value(self) -> Option<String> {
        self.is_valid.then_some(self.message)
    }
}

impl<E: StatusCode> From<Result<String, E>> for ValidationResult {
    fn from(result: Result<String, E>) -> Self {
        match result {
            Ok(formatted) => Self::valid(formatted),
            Err(e) => Self::failure(&e),
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid {
            write!(f, "{}", self.message)
        } else {
            write!(f, "[{}] {}", self.status, self.message)
        }
    }
}

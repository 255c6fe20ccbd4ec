//! # Error Types
//!
//! Structured error types for hub_core. Each variant carries enough context
//! to be handled programmatically or surfaced to an end user as-is.
//!
//! ## Example
//!
//! ```rust
//! use hub_core::errors::{HubError, HubResult};
//!
//! fn validate_term(term_years: f64) -> HubResult<()> {
//!     if term_years <= 0.0 {
//!         return Err(HubError::InvalidInput {
//!             field: "quantity".to_string(),
//!             value: term_years.to_string(),
//!             reason: "Term must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for hub_core operations
pub type HubResult<T> = Result<T, HubError>;

/// Structured error type for registry and calculator operations.
///
/// Registration-time errors (`DuplicateId`) are fatal at startup so that a
/// misconfigured catalog is caught before any lookup happens. Lookup and
/// validation errors are recoverable and meant for user-facing feedback.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum HubError {
    /// A calculator id was registered twice
    #[error("Duplicate calculator id: '{id}' is already registered")]
    DuplicateId { id: String },

    /// No calculator with the given id exists in the registry
    #[error("Unknown calculator: '{id}'")]
    NotFound { id: String },

    /// An input value is invalid (out of range, not a number, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required input field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// A compute function failed; details are logged, not surfaced
    #[error("Calculation failed: {calculator} - {reason}")]
    ComputeFailed { calculator: String, reason: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl HubError {
    /// Create a DuplicateId error
    pub fn duplicate_id(id: impl Into<String>) -> Self {
        HubError::DuplicateId { id: id.into() }
    }

    /// Create a NotFound error
    pub fn not_found(id: impl Into<String>) -> Self {
        HubError::NotFound { id: id.into() }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        HubError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        HubError::MissingField {
            field: field.into(),
        }
    }

    /// Create a ComputeFailed error
    pub fn compute_failed(calculator: impl Into<String>, reason: impl Into<String>) -> Self {
        HubError::ComputeFailed {
            calculator: calculator.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error is recoverable by the caller (retry or fix input)
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            HubError::NotFound { .. }
                | HubError::InvalidInput { .. }
                | HubError::MissingField { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            HubError::DuplicateId { .. } => "DUPLICATE_ID",
            HubError::NotFound { .. } => "NOT_FOUND",
            HubError::InvalidInput { .. } => "INVALID_INPUT",
            HubError::MissingField { .. } => "MISSING_FIELD",
            HubError::ComputeFailed { .. } => "COMPUTE_FAILED",
            HubError::SerializationError { .. } => "SERIALIZATION_ERROR",
            HubError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = HubError::invalid_input("rate", "1.5", "Rate must be between 0 and 1");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: HubError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(HubError::duplicate_id("roi").error_code(), "DUPLICATE_ID");
        assert_eq!(HubError::not_found("x").error_code(), "NOT_FOUND");
        assert_eq!(HubError::missing_field("amount").error_code(), "MISSING_FIELD");
    }

    #[test]
    fn test_recoverability() {
        assert!(HubError::not_found("x").is_recoverable());
        assert!(HubError::missing_field("value").is_recoverable());
        assert!(!HubError::duplicate_id("roi").is_recoverable());
        assert!(!HubError::compute_failed("roi", "oops").is_recoverable());
    }
}

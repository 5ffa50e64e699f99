//! Custom error types for uncleared-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::fmt;

use thiserror::Error;

/// Remote operation that a [`ReviewError::RemoteRequest`] refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteOperation {
    /// Listing the budget's transactions
    FetchTransactions,
    /// Flipping a transaction to cleared
    ClearTransaction,
}

impl fmt::Display for RemoteOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FetchTransactions => write!(f, "fetch transactions"),
            Self::ClearTransaction => write!(f, "clear transaction"),
        }
    }
}

/// The main error type for uncleared-cli operations
#[derive(Error, Debug)]
pub enum ReviewError {
    /// Missing or unusable configuration (token, budget id, settings file)
    #[error("Configuration error: {0}")]
    Config(String),

    /// The server rejected our credentials (HTTP 401)
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Transport, HTTP status or response parsing failure
    #[error("Failed to {operation}: {detail}")]
    RemoteRequest {
        operation: RemoteOperation,
        detail: String,
    },

    /// A string could not be parsed as an amount
    #[error("Invalid amount string: {0}")]
    InvalidAmountFormat(String),

    /// Input rejected before any request was sent
    #[error("{0}")]
    Validation(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl ReviewError {
    /// Create a remote failure for the fetch operation
    pub fn fetch_failed(detail: impl Into<String>) -> Self {
        Self::RemoteRequest {
            operation: RemoteOperation::FetchTransactions,
            detail: detail.into(),
        }
    }

    /// Create a remote failure for the clear operation
    pub fn clear_failed(detail: impl Into<String>) -> Self {
        Self::RemoteRequest {
            operation: RemoteOperation::ClearTransaction,
            detail: detail.into(),
        }
    }

    /// Check if this is an authentication failure
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::AuthenticationFailed(_))
    }

    /// How the user can fix this error, if there is something to suggest
    pub fn remediation(&self) -> Option<&'static str> {
        match self {
            Self::Config(_) => Some(
                "Set YNAB_TOKEN and YNAB_BUDGET_ID in your environment or .env file, \
                 or pass --token and --budget-id",
            ),
            Self::AuthenticationFailed(_) => {
                Some("Check that your personal access token is valid and has not been revoked")
            }
            _ => None,
        }
    }
}

/// Result type alias for uncleared-cli operations
pub type ReviewResult<T> = Result<T, ReviewError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReviewError::Config("missing token".into());
        assert_eq!(err.to_string(), "Configuration error: missing token");
    }

    #[test]
    fn test_remote_error_prefixes() {
        assert_eq!(
            ReviewError::fetch_failed("Network error").to_string(),
            "Failed to fetch transactions: Network error"
        );
        assert_eq!(
            ReviewError::clear_failed("Network error").to_string(),
            "Failed to clear transaction: Network error"
        );
    }

    #[test]
    fn test_auth_error() {
        let err = ReviewError::AuthenticationFailed("Invalid token".into());
        assert_eq!(err.to_string(), "Authentication failed: Invalid token");
        assert!(err.is_auth_failure());
        assert!(err.remediation().is_some());
    }

    #[test]
    fn test_config_error_has_remediation() {
        let err = ReviewError::Config("YNAB_TOKEN is required".into());
        assert!(err.remediation().unwrap().contains("YNAB_BUDGET_ID"));
    }

    #[test]
    fn test_io_error_has_no_remediation() {
        let err = ReviewError::Io("Failed to read settings file: denied".into());
        assert_eq!(err.to_string(), "I/O error: Failed to read settings file: denied");
        assert!(err.remediation().is_none());
    }
}

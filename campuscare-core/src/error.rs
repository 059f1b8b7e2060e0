//! Error types for the CampusCare core library.
//!
//! # Error Codes Reference
//!
//! | Code Range | Category | Description |
//! |------------|----------|-------------|
//! | E1001-E1099 | Config | Config file, environment, and validation errors |
//! | E2001-E2099 | Appointment | Store lookups, status transitions, deletion guards |
//! | E3001-E3099 | Assistant | Wellness assistant API and response errors |
//! | E9001-E9099 | General | Internal, IO, and serialization errors |

use thiserror::Error;
use uuid::Uuid;

use crate::models::AppointmentStatus;

/// The main error type for the CampusCare core library.
#[derive(Debug, Error)]
pub enum PortalError {
    // ========================================================================
    // Configuration Errors (E1001-E1099)
    // ========================================================================
    /// Configuration file parse error
    #[error("[E1001] Failed to parse configuration: {0}")]
    ConfigParseError(String),

    /// Invalid configuration value
    #[error("[E1002] Invalid configuration value for '{key}': {message}")]
    InvalidConfigValue { key: String, message: String },

    // ========================================================================
    // Appointment Errors (E2001-E2099)
    // ========================================================================
    /// Appointment not found in the store
    #[error("[E2001] Appointment not found: {0}")]
    AppointmentNotFound(Uuid),

    /// Illegal status transition
    #[error("[E2002] Invalid appointment status transition from {from} to {to}")]
    InvalidStatusTransition {
        from: AppointmentStatus,
        to: AppointmentStatus,
    },

    /// Deletion attempted on a non-terminal record
    #[error("[E2003] Cannot delete appointment while status is {status}; only cancelled or completed records may be removed")]
    DeleteBlocked { status: AppointmentStatus },

    /// Invalid appointment draft (empty fields, past dates)
    #[error("[E2004] Validation error: {0}")]
    ValidationError(String),

    // ========================================================================
    // Assistant Errors (E3001-E3099)
    // ========================================================================
    /// No API key configured for the wellness assistant
    #[error("[E3001] No API key configured for the wellness assistant")]
    MissingApiKey,

    /// Assistant API request failed
    #[error("[E3002] Assistant API request failed: {0}")]
    ApiRequestFailed(String),

    /// Assistant API response could not be parsed
    #[error("[E3003] Failed to parse assistant API response: {0}")]
    ApiParseError(String),

    /// Assistant API unreachable
    #[error("[E3004] Assistant API unavailable: {0}")]
    ApiServiceUnavailable(String),

    // ========================================================================
    // General Errors (E9001-E9099)
    // ========================================================================
    /// Internal error (catch-all for unexpected conditions)
    #[error("[E9001] Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("[E9002] IO error: {0}")]
    IoError(String),

    /// Serialization/deserialization error
    #[error("[E9003] Serialization error: {0}")]
    SerializationError(String),
}

/// Result type alias for CampusCare operations.
pub type PortalResult<T> = Result<T, PortalError>;

// ============================================================================
// From trait implementations for seamless error propagation
// ============================================================================

impl From<reqwest::Error> for PortalError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            PortalError::ApiServiceUnavailable(err.to_string())
        } else if err.is_decode() {
            PortalError::ApiParseError(err.to_string())
        } else {
            PortalError::ApiRequestFailed(err.to_string())
        }
    }
}

impl From<serde_json::Error> for PortalError {
    fn from(err: serde_json::Error) -> Self {
        PortalError::SerializationError(err.to_string())
    }
}

impl From<std::io::Error> for PortalError {
    fn from(err: std::io::Error) -> Self {
        PortalError::IoError(err.to_string())
    }
}

impl From<config::ConfigError> for PortalError {
    fn from(err: config::ConfigError) -> Self {
        match err {
            config::ConfigError::NotFound(key) => PortalError::InvalidConfigValue {
                key,
                message: "Key not found".to_string(),
            },
            _ => PortalError::ConfigParseError(err.to_string()),
        }
    }
}

// ============================================================================
// Error categorization helpers
// ============================================================================

impl PortalError {
    /// Returns true if this error comes from the appointment store.
    pub fn is_store_error(&self) -> bool {
        matches!(
            self,
            PortalError::AppointmentNotFound(_)
                | PortalError::InvalidStatusTransition { .. }
                | PortalError::DeleteBlocked { .. }
                | PortalError::ValidationError(_)
        )
    }

    /// Returns true if this error comes from the wellness assistant boundary.
    pub fn is_assistant_error(&self) -> bool {
        matches!(
            self,
            PortalError::MissingApiKey
                | PortalError::ApiRequestFailed(_)
                | PortalError::ApiParseError(_)
                | PortalError::ApiServiceUnavailable(_)
        )
    }

    /// Returns an error code suitable for logging or external reporting.
    pub fn error_code(&self) -> &'static str {
        match self {
            PortalError::ConfigParseError(_) => "E1001",
            PortalError::InvalidConfigValue { .. } => "E1002",
            PortalError::AppointmentNotFound(_) => "E2001",
            PortalError::InvalidStatusTransition { .. } => "E2002",
            PortalError::DeleteBlocked { .. } => "E2003",
            PortalError::ValidationError(_) => "E2004",
            PortalError::MissingApiKey => "E3001",
            PortalError::ApiRequestFailed(_) => "E3002",
            PortalError::ApiParseError(_) => "E3003",
            PortalError::ApiServiceUnavailable(_) => "E3004",
            PortalError::Internal(_) => "E9001",
            PortalError::IoError(_) => "E9002",
            PortalError::SerializationError(_) => "E9003",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let id = Uuid::new_v4();
        let err = PortalError::AppointmentNotFound(id);
        assert!(err.to_string().contains("E2001"));
        assert!(err.to_string().contains(&id.to_string()));

        let err = PortalError::InvalidStatusTransition {
            from: AppointmentStatus::Completed,
            to: AppointmentStatus::Pending,
        };
        assert!(err.to_string().contains("E2002"));
        assert!(err.to_string().contains("completed"));
        assert!(err.to_string().contains("pending"));
    }

    #[test]
    fn test_error_categorization() {
        let store_err = PortalError::DeleteBlocked {
            status: AppointmentStatus::Pending,
        };
        assert!(store_err.is_store_error());
        assert!(!store_err.is_assistant_error());

        let assistant_err = PortalError::ApiRequestFailed("network error".to_string());
        assert!(assistant_err.is_assistant_error());
        assert!(!assistant_err.is_store_error());

        let config_err = PortalError::ConfigParseError("bad file".to_string());
        assert!(!config_err.is_store_error());
        assert!(!config_err.is_assistant_error());
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            PortalError::AppointmentNotFound(Uuid::nil()).error_code(),
            "E2001"
        );
        assert_eq!(PortalError::MissingApiKey.error_code(), "E3001");
        assert_eq!(
            PortalError::Internal("err".to_string()).error_code(),
            "E9001"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PortalError = io_err.into();
        assert!(matches!(err, PortalError::IoError(_)));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_result: Result<serde_json::Value, _> = serde_json::from_str("invalid json");
        let err: PortalError = json_result.unwrap_err().into();
        assert!(matches!(err, PortalError::SerializationError(_)));
    }
}

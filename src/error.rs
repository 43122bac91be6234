//! Custom error types for eventto
//!
//! All fallible operations (configuration, snapshot loading, row mapping,
//! export) report through [`EventtoError`]. The budget arithmetic and list
//! filters are total and never produce one.

use thiserror::Error;

/// The main error type for eventto operations
#[derive(Error, Debug)]
pub enum EventtoError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Snapshot storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// A storage row could not be turned into a record
    #[error("Invalid {table} row {row_id}: {reason}")]
    Mapping {
        table: &'static str,
        row_id: String,
        reason: String,
    },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },
}

impl EventtoError {
    /// Create a "not found" error for events
    pub fn event_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Event",
            identifier: identifier.into(),
        }
    }

    /// Create a mapping error for a row of the given table
    pub fn mapping(
        table: &'static str,
        row_id: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::Mapping {
            table,
            row_id: row_id.to_string(),
            reason: reason.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<std::io::Error> for EventtoError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for EventtoError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for EventtoError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for eventto operations
pub type EventtoResult<T> = Result<T, EventtoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EventtoError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = EventtoError::event_not_found("Launch Party");
        assert_eq!(err.to_string(), "Event not found: Launch Party");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_mapping_error() {
        let err = EventtoError::mapping("events", "abc", "bad start_date");
        assert_eq!(err.to_string(), "Invalid events row abc: bad start_date");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: EventtoError = io_err.into();
        assert!(matches!(err, EventtoError::Io(_)));
    }
}

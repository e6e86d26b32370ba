//! Error types for the planview library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all plan pipeline operations.
#[derive(Error, Debug)]
pub enum PlanError {
    /// The plan JSON does not have the expected shape
    #[error("Malformed plan: {reason}")]
    MalformedPlan { reason: String },
    /// A date-valued string could not be parsed
    #[error("Unparseable date '{input}': {source}")]
    DateParse {
        input: String,
        #[source]
        source: jiff::Error,
    },
    /// The plan server could not be reached or answered with a failure
    #[error("Network failure: {message}")]
    Network { message: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// An action needed a current plan but none is loaded
    #[error("No plan to download")]
    NoPlan,
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG base directory errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PlanError {
        PlanError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PlanError {
    /// Creates a malformed plan error with the given reason.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedPlan {
            reason: reason.into(),
        }
    }

    /// Creates a network failure error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Whether the error is transient and the user may simply try again.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}

/// Extension trait mapping I/O results onto [`PlanError::FileSystem`].
pub trait IoResultExt<T> {
    /// Attach the path the failed operation was working on.
    fn fs_context(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> IoResultExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|source| PlanError::FileSystem {
            path: path.into(),
            source,
        })
    }
}

/// Specialized extension trait for HTTP-related Results.
pub trait NetworkResultExt<T> {
    /// Map transport errors onto [`PlanError::Network`] with a message.
    fn network_context(self, message: &str) -> Result<T>;
}

impl<T> NetworkResultExt<T> for std::result::Result<T, reqwest::Error> {
    fn network_context(self, message: &str) -> Result<T> {
        self.map_err(|e| PlanError::network(format!("{message}: {e}")))
    }
}

/// Result type alias for plan operations
pub type Result<T> = std::result::Result<T, PlanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_message() {
        let err = PlanError::malformed("missing field: phases");
        assert_eq!(err.to_string(), "Malformed plan: missing field: phases");
        assert!(!err.is_transient());
    }

    #[test]
    fn test_network_is_transient() {
        let err = PlanError::network("HTTP 500");
        assert!(err.is_transient());
        assert!(err.to_string().contains("HTTP 500"));
    }

    #[test]
    fn test_invalid_input_builder() {
        let err = PlanError::invalid_input("goal").with_reason("Please enter a goal");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'goal': Please enter a goal"
        );
    }

    #[test]
    fn test_fs_context() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "gone",
        ));
        let err = res.fs_context("/tmp/plan.json").unwrap_err();
        assert!(matches!(err, PlanError::FileSystem { .. }));
        assert!(err.to_string().contains("/tmp/plan.json"));
    }
}

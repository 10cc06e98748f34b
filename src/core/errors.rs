//! Shared error types for the application

use std::fmt;
use thiserror::Error;

/// Kind of inventory record an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Module,
    Route,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Module => write!(f, "module"),
            RecordKind::Route => write!(f, "route"),
        }
    }
}

/// Main error type for modmap operations
#[derive(Debug, Error)]
pub enum Error {
    /// The inventory source could not supply a record set at all
    #[error("Inventory unavailable from {source_name}: {message}")]
    Unavailable {
        source_name: String,
        message: String,
    },

    /// A record that strict contexts refuse to accept
    #[error("Malformed {kind} record: {message}")]
    MalformedRecord { kind: RecordKind, message: String },

    /// A lookup by module id found nothing
    #[error("Unknown module: {0}")]
    UnknownModule(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Generic errors with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an unavailable-inventory error naming the source
    pub fn unavailable(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Unavailable {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Create a malformed-record error for the given record kind
    pub fn malformed(kind: RecordKind, message: impl Into<String>) -> Self {
        Self::MalformedRecord {
            kind,
            message: message.into(),
        }
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            message: self.to_string(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_error_names_the_source() {
        let err = Error::unavailable("inventory.json", "missing 'modules' key");
        assert_eq!(
            err.to_string(),
            "Inventory unavailable from inventory.json: missing 'modules' key"
        );
    }

    #[test]
    fn malformed_record_error_names_the_kind() {
        let err = Error::malformed(RecordKind::Route, "path is not a string");
        assert_eq!(
            err.to_string(),
            "Malformed route record: path is not a string"
        );
    }

    #[test]
    fn context_wraps_the_original_message() {
        let err: Result<()> = Err(Error::UnknownModule("codex.joy".into()));
        let wrapped = err.context("building blueprint").unwrap_err();
        assert_eq!(
            wrapped.to_string(),
            "building blueprint: Unknown module: codex.joy"
        );
    }
}

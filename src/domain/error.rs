//! Error types for the Promptfolio plugin.
//!
//! This module defines the centralized error type [`PromptfolioError`] and a type
//! alias [`Result`] used throughout the crate. Dataset validation failures are
//! load-time fatal; everything else is reported and recovered from.

use thiserror::Error;

/// The main error type for Promptfolio operations.
///
/// Dataset variants (`DuplicateId`, `MissingField`, `EmptyDataset`) are raised
/// while building a [`Catalog`](crate::catalog::Catalog) and leave the plugin in
/// a fatal state. The remaining variants wrap I/O, parsing and worker failures.
///
/// # Examples
///
/// ```
/// use promptfolio::PromptfolioError;
///
/// let err = PromptfolioError::DuplicateId("react-hooks".to_string());
/// assert_eq!(err.to_string(), "Dataset error: duplicate prompt id `react-hooks`");
/// ```
#[derive(Debug, Error)]
pub enum PromptfolioError {
    /// Two records in the dataset share the same id.
    #[error("Dataset error: duplicate prompt id `{0}`")]
    DuplicateId(String),

    /// A record is missing a required field, or the field is blank.
    #[error("Dataset error: prompt `{id}` is missing required field `{field}`")]
    MissingField {
        /// Id of the offending record (or its position when the id itself is missing).
        id: String,
        /// Name of the missing field.
        field: &'static str,
    },

    /// The dataset contains no records at all.
    #[error("Dataset error: no prompts found")]
    EmptyDataset,

    /// Reading or parsing a dataset source failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PromptfolioError {
    /// Returns `true` for errors that describe a malformed dataset.
    #[must_use]
    pub const fn is_dataset_error(&self) -> bool {
        matches!(
            self,
            Self::DuplicateId(_) | Self::MissingField { .. } | Self::EmptyDataset
        )
    }
}

/// A specialized `Result` type for Promptfolio operations.
pub type Result<T> = std::result::Result<T, PromptfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_message_names_record_and_field() {
        let err = PromptfolioError::MissingField {
            id: "api-design".to_string(),
            field: "content",
        };
        assert_eq!(
            err.to_string(),
            "Dataset error: prompt `api-design` is missing required field `content`"
        );
        assert!(err.is_dataset_error());
    }

    #[test]
    fn io_errors_convert_and_are_not_dataset_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: PromptfolioError = io.into();
        assert!(matches!(err, PromptfolioError::Io(_)));
        assert!(!err.is_dataset_error());
    }
}

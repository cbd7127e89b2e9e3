//! # Conversion Errors
//!
//! Fatal conditions only. Anything the converter can recover from is reported
//! as a [`ConversionWarning`](crate::warnings::ConversionWarning) instead.

use crate::logging::codes;

/// Errors that stop a conversion before any output is written
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("Error opening ARF file {path}: file not found")]
    FileNotFound { path: String },

    #[error("Error reading ARF file {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Error opening ARF file {path}: {size} bytes exceeds the {max_size} byte limit")]
    FileTooLarge {
        path: String,
        size: u64,
        max_size: u64,
    },

    #[error("Error parsing XML at byte {position}: {reason}")]
    XmlParse { position: u64, reason: String },

    #[error("Error parsing XML: document has no root element")]
    EmptyDocument,

    #[error("Error marshalling OSCAL results to JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Error writing OSCAL assessment results to {path}: {source}")]
    OutputWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Error loading configuration from {origin}: {reason}")]
    Config { origin: String, reason: String },
}

impl ConversionError {
    pub fn xml_parse(position: u64, reason: &str) -> Self {
        Self::XmlParse {
            position,
            reason: reason.to_string(),
        }
    }

    pub fn config(origin: &str, reason: &str) -> Self {
        Self::Config {
            origin: origin.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Get the log code for this error type
    pub fn error_code(&self) -> codes::Code {
        match self {
            ConversionError::FileNotFound { .. } => codes::file_processing::FILE_NOT_FOUND,
            ConversionError::FileRead { source, .. } => match source.kind() {
                std::io::ErrorKind::PermissionDenied => codes::file_processing::PERMISSION_DENIED,
                std::io::ErrorKind::InvalidData => codes::file_processing::INVALID_ENCODING,
                _ => codes::file_processing::IO_ERROR,
            },
            ConversionError::FileTooLarge { .. } => codes::file_processing::FILE_TOO_LARGE,
            ConversionError::XmlParse { .. } => codes::xml::MALFORMED_XML,
            ConversionError::EmptyDocument => codes::xml::EMPTY_DOCUMENT,
            ConversionError::Serialization(_) => codes::output::SERIALIZATION_FAILED,
            ConversionError::OutputWrite { .. } => codes::output::WRITE_FAILED,
            ConversionError::Config { .. } => codes::config::INVALID_CONFIG,
        }
    }

    pub fn severity(&self) -> &'static str {
        codes::get_severity(self.error_code().as_str()).as_str()
    }

    pub fn category(&self) -> &'static str {
        codes::get_category(self.error_code().as_str())
    }

    pub fn is_recoverable(&self) -> bool {
        codes::is_recoverable(self.error_code().as_str())
    }
}

// RUNTIME PREFERENCES (User Experience)

use super::constants::compile_time::{arf, input, oscal};
use crate::error::ConversionError;
use crate::logging::LogLevel;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingPreferences {
    /// Most verbose level that reaches the console
    pub min_log_level: LogLevel,

    /// Emit one JSON object per event instead of human-readable lines
    pub use_structured_logging: bool,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            min_log_level: LogLevel::Info,
            use_structured_logging: false,
        }
    }
}

/// Everything the conversion stages need that is not in the ARF document.
///
/// Every field has a default, so an `arf2oscal.toml` only needs the keys it
/// overrides:
///
/// ```toml
/// output_file = "results.json"
///
/// [logging]
/// min_log_level = "warning"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Path of the JSON document to write
    pub output_file: String,

    /// Reference href prefix that marks a NIST control reference
    pub nist_reference_prefix: String,

    /// Namespace for emitted properties
    pub property_namespace: String,

    /// Subject title used when the ARF has no target element
    pub unknown_host: String,

    pub oscal_version: String,

    pub document_version: String,

    pub assessment_plan_href: String,

    /// Largest input file accepted, in bytes
    pub max_input_size: u64,

    pub logging: LoggingPreferences,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            output_file: oscal::OUTPUT_FILE_NAME.to_string(),
            nist_reference_prefix: arf::NIST_REFERENCE_PREFIX.to_string(),
            property_namespace: oscal::PROPERTY_NAMESPACE.to_string(),
            unknown_host: arf::UNKNOWN_HOST.to_string(),
            oscal_version: oscal::OSCAL_VERSION.to_string(),
            document_version: oscal::DOCUMENT_VERSION.to_string(),
            assessment_plan_href: oscal::ASSESSMENT_PLAN_HREF.to_string(),
            max_input_size: input::MAX_INPUT_SIZE,
            logging: LoggingPreferences::default(),
        }
    }
}

impl ConverterConfig {
    /// Parse a TOML document, filling absent keys with defaults
    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self, ConversionError> {
        let config: Self =
            toml::from_str(content).map_err(|e| ConversionError::config(origin, &e.to_string()))?;
        config.validate(origin)?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise return the defaults
    pub fn load_optional(path: &Path) -> Result<Self, ConversionError> {
        let origin = path.display().to_string();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(path).map_err(|e| ConversionError::config(&origin, &e.to_string()))?;
        Self::from_toml_str(&content, &origin)
    }

    fn validate(&self, origin: &str) -> Result<(), ConversionError> {
        if self.output_file.trim().is_empty() {
            return Err(ConversionError::config(origin, "output_file must not be empty"));
        }

        if self.nist_reference_prefix.is_empty() {
            return Err(ConversionError::config(
                origin,
                "nist_reference_prefix must not be empty",
            ));
        }

        if self.max_input_size == 0 {
            return Err(ConversionError::config(
                origin,
                "max_input_size must be greater than zero",
            ));
        }

        Ok(())
    }
}

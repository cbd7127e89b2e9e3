//! # Conversion Pipeline
//!
//! File in, OSCAL document out: read and bound the input, parse it, run both
//! extractors, aggregate, and assemble. Writing the report is a separate step
//! so nothing touches the filesystem until the whole document exists.

pub mod summary;

pub use summary::ConversionSummary;

use crate::aggregation::{AggregationEngine, AssessmentContext, IdGenerator, UuidGenerator};
use crate::arf::{extract_hostname, extract_rule_catalog, extract_rule_results};
use crate::config::ConverterConfig;
use crate::error::ConversionError;
use crate::logging::codes;
use crate::oscal::OscalDocument;
use crate::report::ReportAssembler;
use crate::warnings::ConversionWarning;
use crate::xml::XmlDocument;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;

/// Result of a successful conversion
#[derive(Debug, Clone)]
pub struct ConversionOutcome {
    pub document: OscalDocument,
    pub summary: ConversionSummary,
    pub warnings: Vec<ConversionWarning>,
}

/// Convert the ARF file at `path` with random UUIDs and the current time
pub fn convert_file(
    path: &str,
    config: &ConverterConfig,
) -> Result<ConversionOutcome, ConversionError> {
    convert_file_with(path, config, &mut UuidGenerator, Utc::now())
}

/// Convert the ARF file at `path` with explicit collaborators
pub fn convert_file_with(
    path: &str,
    config: &ConverterConfig,
    ids: &mut dyn IdGenerator,
    run_start: DateTime<Utc>,
) -> Result<ConversionOutcome, ConversionError> {
    let xml = read_input(path, config.max_input_size)?;
    convert_str(&xml, path, config, ids, run_start)
}

/// Convert an in-memory ARF document. `evidence_path` is linked from every
/// observation.
pub fn convert_str(
    xml: &str,
    evidence_path: &str,
    config: &ConverterConfig,
    ids: &mut dyn IdGenerator,
    run_start: DateTime<Utc>,
) -> Result<ConversionOutcome, ConversionError> {
    let document = XmlDocument::parse(xml).map_err(|e| {
        crate::log_error!(e.error_code(), "Failed to parse ARF XML",
            "file" => evidence_path,
            "error" => e
        );
        e
    })?;
    crate::log_success!(codes::success::DOCUMENT_PARSED, "Parsed ARF document",
        "file" => evidence_path
    );

    let mut warnings = Vec::new();

    let (hostname, target_warning) = extract_hostname(&document, &config.unknown_host);
    warnings.extend(target_warning);

    let (catalog, catalog_warnings) =
        extract_rule_catalog(&document, &config.nist_reference_prefix);
    warnings.extend(catalog_warnings);
    crate::log_success!(codes::success::CATALOG_EXTRACTED, "Extracted rule definitions",
        "rules" => catalog.len()
    );

    let (results, result_warnings) = extract_rule_results(&document);
    warnings.extend(result_warnings);
    crate::log_success!(codes::success::RESULTS_EXTRACTED, "Extracted rule results",
        "results" => results.len()
    );

    for warning in &warnings {
        warning.log();
    }

    let context = AssessmentContext {
        run_start,
        hostname,
        evidence_path: evidence_path.to_string(),
        property_namespace: config.property_namespace.clone(),
    };

    let aggregation = AggregationEngine::new(&context, ids).aggregate(&catalog, &results);
    warnings.extend(aggregation.warnings.iter().cloned());

    let document =
        ReportAssembler::new(config, &context).assemble(aggregation, ids, Utc::now());

    let summary = ConversionSummary::from_document(
        &document,
        &context.hostname,
        catalog.len(),
        results.len(),
        warnings.len(),
    );

    Ok(ConversionOutcome {
        document,
        summary,
        warnings,
    })
}

/// Serialize `document` as indented JSON and write it to `path`
pub fn write_report(document: &OscalDocument, path: &Path) -> Result<(), ConversionError> {
    let path_str = path.display().to_string();

    let json = serde_json::to_string_pretty(document).map_err(|e| {
        let error = ConversionError::Serialization(e);
        crate::log_error!(error.error_code(), "Failed to serialize OSCAL document",
            "error" => error
        );
        error
    })?;

    fs::write(path, json).map_err(|source| {
        let error = ConversionError::OutputWrite {
            path: path_str.clone(),
            source,
        };
        crate::log_error!(error.error_code(), "Failed to write OSCAL document",
            "path" => path_str
        );
        error
    })?;

    crate::log_success!(codes::success::REPORT_WRITTEN, "OSCAL assessment results written",
        "path" => path_str
    );
    Ok(())
}

/// Validate and read the input file within the size limit
fn read_input(path: &str, max_size: u64) -> Result<String, ConversionError> {
    let file_path = Path::new(path);

    if !file_path.exists() {
        let error = ConversionError::FileNotFound {
            path: path.to_string(),
        };
        crate::log_error!(error.error_code(), "ARF file not found", "path" => path);
        return Err(error);
    }

    let metadata = fs::metadata(file_path).map_err(|source| ConversionError::FileRead {
        path: path.to_string(),
        source,
    })?;

    if !metadata.is_file() {
        return Err(ConversionError::FileRead {
            path: path.to_string(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a regular file"),
        });
    }

    if metadata.len() > max_size {
        let error = ConversionError::FileTooLarge {
            path: path.to_string(),
            size: metadata.len(),
            max_size,
        };
        crate::log_error!(error.error_code(), "ARF file exceeds maximum size",
            "path" => path,
            "size" => metadata.len(),
            "max_size" => max_size
        );
        return Err(error);
    }

    let content = fs::read_to_string(file_path).map_err(|source| {
        let error = ConversionError::FileRead {
            path: path.to_string(),
            source,
        };
        crate::log_error!(error.error_code(), "Failed to read ARF file", "path" => path);
        error
    })?;

    crate::log_debug!("Read ARF file", "path" => path, "size_bytes" => metadata.len());
    Ok(content)
}

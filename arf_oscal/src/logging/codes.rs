//! Consolidated log codes and classification system
//!
//! Single source of truth for every code the converter emits, together with
//! the behavioral metadata (severity, recoverability, halt requirement) that
//! callers use to classify an event.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for error, warning and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// CLASSIFICATION TYPES
// ============================================================================

/// Severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for a code
#[derive(Debug, Clone)]
pub struct CodeMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub requires_halt: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

impl CodeMetadata {
    pub fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        requires_halt: bool,
        description: &'static str,
        recommended_action: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            requires_halt,
            description,
            recommended_action,
        }
    }
}

// ============================================================================
// CODE CONSTANTS
// ============================================================================

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
}

/// Input file error codes
pub mod file_processing {
    use super::Code;

    pub const FILE_NOT_FOUND: Code = Code::new("E005");
    pub const FILE_TOO_LARGE: Code = Code::new("E007");
    pub const PERMISSION_DENIED: Code = Code::new("E009");
    pub const INVALID_ENCODING: Code = Code::new("E010");
    pub const IO_ERROR: Code = Code::new("E011");
}

/// Configuration error codes
pub mod config {
    use super::Code;

    pub const INVALID_CONFIG: Code = Code::new("E015");
}

/// XML parsing error codes
pub mod xml {
    use super::Code;

    pub const MALFORMED_XML: Code = Code::new("E020");
    pub const EMPTY_DOCUMENT: Code = Code::new("E021");
}

/// Report output error codes
pub mod output {
    use super::Code;

    pub const SERIALIZATION_FAILED: Code = Code::new("E060");
    pub const WRITE_FAILED: Code = Code::new("E061");
}

/// Extraction warnings (processing continues)
pub mod extraction {
    use super::Code;

    pub const MISSING_TARGET: Code = Code::new("W101");
    pub const DUPLICATE_RULE_DEFINITION: Code = Code::new("W102");
    pub const DUPLICATE_RULE_RESULT: Code = Code::new("W103");
}

/// Aggregation warnings (processing continues)
pub mod aggregation {
    use super::Code;

    pub const ORPHAN_RULE_RESULT: Code = Code::new("W110");
    pub const TIMESTAMP_FALLBACK: Code = Code::new("W111");
}

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I001");
    pub const DOCUMENT_PARSED: Code = Code::new("I010");
    pub const CATALOG_EXTRACTED: Code = Code::new("I011");
    pub const RESULTS_EXTRACTED: Code = Code::new("I012");
    pub const AGGREGATION_COMPLETE: Code = Code::new("I020");
    pub const REPORT_ASSEMBLED: Code = Code::new("I021");
    pub const REPORT_WRITTEN: Code = Code::new("I030");
}

// ============================================================================
// METADATA REGISTRY
// ============================================================================

static CODE_REGISTRY: OnceLock<HashMap<&'static str, CodeMetadata>> = OnceLock::new();

fn get_code_registry() -> &'static HashMap<&'static str, CodeMetadata> {
    CODE_REGISTRY.get_or_init(|| {
        let mut registry = HashMap::new();
        let mut add = |metadata: CodeMetadata| {
            registry.insert(metadata.code, metadata);
        };

        // System errors
        add(CodeMetadata::new(
            "ERR001",
            "System",
            Severity::Critical,
            false,
            true,
            "Internal converter error",
            "Report this issue with the input file that triggered it",
        ));
        add(CodeMetadata::new(
            "ERR002",
            "System",
            Severity::Critical,
            false,
            true,
            "Converter initialization failed",
            "Check logging and configuration settings",
        ));

        // Input file errors
        add(CodeMetadata::new(
            "E005",
            "FileProcessing",
            Severity::High,
            false,
            true,
            "Input ARF file not found",
            "Verify the ARF file path exists and is spelled correctly",
        ));
        add(CodeMetadata::new(
            "E007",
            "FileProcessing",
            Severity::High,
            false,
            true,
            "Input ARF file exceeds the maximum supported size",
            "Split the scan or raise max_input_size in arf2oscal.toml",
        ));
        add(CodeMetadata::new(
            "E009",
            "FileProcessing",
            Severity::High,
            false,
            true,
            "Permission denied reading input ARF file",
            "Check read permissions on the ARF file",
        ));
        add(CodeMetadata::new(
            "E010",
            "FileProcessing",
            Severity::High,
            false,
            true,
            "Input ARF file is not valid UTF-8",
            "Re-export the ARF file with UTF-8 encoding",
        ));
        add(CodeMetadata::new(
            "E011",
            "FileProcessing",
            Severity::High,
            false,
            true,
            "I/O error reading input ARF file",
            "Check file system health and retry",
        ));

        // Configuration errors
        add(CodeMetadata::new(
            "E015",
            "Configuration",
            Severity::High,
            false,
            true,
            "Converter configuration file is invalid",
            "Fix or remove arf2oscal.toml in the working directory",
        ));

        // XML errors
        add(CodeMetadata::new(
            "E020",
            "Xml",
            Severity::High,
            false,
            true,
            "ARF document is not well-formed XML",
            "Validate the ARF file with an XML linter",
        ));
        add(CodeMetadata::new(
            "E021",
            "Xml",
            Severity::High,
            false,
            true,
            "ARF document has no root element",
            "Confirm the input file is an ARF report and not empty",
        ));

        // Output errors
        add(CodeMetadata::new(
            "E060",
            "Output",
            Severity::High,
            false,
            true,
            "OSCAL document could not be serialized to JSON",
            "Report this issue with the input file that triggered it",
        ));
        add(CodeMetadata::new(
            "E061",
            "Output",
            Severity::High,
            false,
            true,
            "OSCAL document could not be written",
            "Check write permissions and free space in the working directory",
        ));

        // Extraction warnings
        add(CodeMetadata::new(
            "W101",
            "Extraction",
            Severity::Low,
            true,
            false,
            "ARF document has no target element",
            "Subjects use the placeholder hostname; check the scan configuration",
        ));
        add(CodeMetadata::new(
            "W102",
            "Extraction",
            Severity::Low,
            true,
            false,
            "Rule defined more than once; last definition kept",
            "Check the benchmark for duplicated rule identifiers",
        ));
        add(CodeMetadata::new(
            "W103",
            "Extraction",
            Severity::Medium,
            true,
            false,
            "Rule evaluated more than once; last result kept",
            "Convert one TestResult per ARF file",
        ));

        // Aggregation warnings
        add(CodeMetadata::new(
            "W110",
            "Aggregation",
            Severity::Low,
            true,
            false,
            "Rule result has no matching rule definition",
            "No observation is produced for this result",
        ));
        add(CodeMetadata::new(
            "W111",
            "Aggregation",
            Severity::Low,
            true,
            false,
            "Rule evaluation time could not be parsed",
            "Observation collected time falls back to the run start time",
        ));

        // Success codes
        add(CodeMetadata::new(
            "I001",
            "System",
            Severity::Low,
            true,
            false,
            "Logging system initialized",
            "Continue to conversion",
        ));
        add(CodeMetadata::new(
            "I010",
            "Xml",
            Severity::Low,
            true,
            false,
            "ARF document parsed",
            "Continue to extraction",
        ));
        add(CodeMetadata::new(
            "I011",
            "Extraction",
            Severity::Low,
            true,
            false,
            "Rule catalog extracted",
            "Continue to result extraction",
        ));
        add(CodeMetadata::new(
            "I012",
            "Extraction",
            Severity::Low,
            true,
            false,
            "Rule results extracted",
            "Continue to aggregation",
        ));
        add(CodeMetadata::new(
            "I020",
            "Aggregation",
            Severity::Low,
            true,
            false,
            "Observations and findings built",
            "Continue to report assembly",
        ));
        add(CodeMetadata::new(
            "I021",
            "Report",
            Severity::Low,
            true,
            false,
            "OSCAL assessment results assembled",
            "Continue to serialization",
        ));
        add(CodeMetadata::new(
            "I030",
            "Output",
            Severity::Low,
            true,
            false,
            "OSCAL assessment results written",
            "Conversion complete",
        ));

        registry
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

/// Get metadata for a specific code
pub fn get_code_metadata(code: &str) -> Option<&'static CodeMetadata> {
    get_code_registry().get(code)
}

/// Get severity from code
pub fn get_severity(code: &str) -> Severity {
    get_code_registry()
        .get(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

/// Check if the condition behind a code is recoverable
pub fn is_recoverable(code: &str) -> bool {
    get_code_registry()
        .get(code)
        .map(|metadata| metadata.recoverable)
        .unwrap_or(true)
}

/// Check if a code requires the run to stop
pub fn requires_halt(code: &str) -> bool {
    get_code_registry()
        .get(code)
        .map(|metadata| metadata.requires_halt)
        .unwrap_or(false)
}

/// Get human-readable description for code
pub fn get_description(code: &str) -> &'static str {
    get_code_registry()
        .get(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown error")
}

/// Get recommended action for code
pub fn get_action(code: &str) -> &'static str {
    get_code_registry()
        .get(code)
        .map(|metadata| metadata.recommended_action)
        .unwrap_or("No specific action available")
}

/// Get category from code
pub fn get_category(code: &str) -> &'static str {
    get_code_registry()
        .get(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}

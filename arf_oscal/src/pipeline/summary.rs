//! Conversion statistics printed by the CLI

use crate::aggregation::DecisionState;
use crate::oscal::OscalDocument;
use std::collections::BTreeMap;
use std::fmt;

/// Counts describing one conversion
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConversionSummary {
    pub hostname: String,

    /// Rule definitions in the catalog
    pub rules_defined: usize,

    /// Rule results read from the document
    pub results_read: usize,

    pub observations: usize,

    pub findings: usize,

    /// Findings per final state
    pub finding_states: BTreeMap<DecisionState, usize>,

    pub warnings: usize,
}

impl ConversionSummary {
    pub fn from_document(
        document: &OscalDocument,
        hostname: &str,
        rules_defined: usize,
        results_read: usize,
        warnings: usize,
    ) -> Self {
        let mut summary = Self {
            hostname: hostname.to_string(),
            rules_defined,
            results_read,
            warnings,
            ..Self::default()
        };

        for result in &document.assessment_results.results {
            summary.observations += result.observations.len();
            summary.findings += result.findings.len();
            for finding in &result.findings {
                *summary
                    .finding_states
                    .entry(finding.target.status.state)
                    .or_insert(0) += 1;
            }
        }

        summary
    }

    /// Number of findings that finalized to `state`
    pub fn count(&self, state: DecisionState) -> usize {
        self.finding_states.get(&state).copied().unwrap_or(0)
    }
}

impl fmt::Display for ConversionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Conversion Summary ===")?;
        writeln!(f, "Target: {}", self.hostname)?;
        writeln!(f, "Rules Defined: {}", self.rules_defined)?;
        writeln!(f, "Rule Results: {}", self.results_read)?;
        writeln!(f, "Observations: {}", self.observations)?;
        writeln!(f, "Findings: {}", self.findings)?;
        for (state, count) in &self.finding_states {
            writeln!(f, "  {}: {}", state, count)?;
        }
        write!(f, "Warnings: {}", self.warnings)
    }
}

//! Recoverable conditions collected during a conversion

use crate::logging::codes::{self, Code};
use std::fmt;

/// A condition the converter worked around without stopping
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionWarning {
    /// No `target` element; subjects use the sentinel hostname
    MissingTarget { placeholder: String },

    /// A rule identifier was defined more than once; the last definition won
    DuplicateRuleDefinition { rule_id: String },

    /// A rule identifier was evaluated more than once; the last result won
    DuplicateRuleResult { rule_id: String },

    /// A rule result references a rule missing from the catalog
    OrphanRuleResult { rule_id: String },

    /// The evaluation time matched neither accepted format
    TimestampFallback { rule_id: String, raw: String },
}

impl ConversionWarning {
    pub fn code(&self) -> Code {
        match self {
            ConversionWarning::MissingTarget { .. } => codes::extraction::MISSING_TARGET,
            ConversionWarning::DuplicateRuleDefinition { .. } => {
                codes::extraction::DUPLICATE_RULE_DEFINITION
            }
            ConversionWarning::DuplicateRuleResult { .. } => {
                codes::extraction::DUPLICATE_RULE_RESULT
            }
            ConversionWarning::OrphanRuleResult { .. } => codes::aggregation::ORPHAN_RULE_RESULT,
            ConversionWarning::TimestampFallback { .. } => codes::aggregation::TIMESTAMP_FALLBACK,
        }
    }

    /// Emit this warning through the global logger
    pub fn log(&self) {
        match self {
            ConversionWarning::MissingTarget { placeholder } => {
                crate::log_warning!(self.code(), "No 'target' element found in ARF XML",
                    "hostname" => placeholder
                );
            }
            ConversionWarning::DuplicateRuleDefinition { rule_id } => {
                crate::log_warning!(self.code(), "Duplicate rule definition, keeping the last one",
                    "rule_id" => rule_id
                );
            }
            ConversionWarning::DuplicateRuleResult { rule_id } => {
                crate::log_warning!(self.code(), "Duplicate rule result, keeping the last one",
                    "rule_id" => rule_id
                );
            }
            ConversionWarning::OrphanRuleResult { rule_id } => {
                crate::log_warning!(self.code(), "Rule definition not found, skipping observation creation",
                    "rule_id" => rule_id
                );
            }
            ConversionWarning::TimestampFallback { rule_id, raw } => {
                crate::log_warning!(self.code(), "Could not parse evaluated-on time, using run start time",
                    "rule_id" => rule_id,
                    "evaluated_on" => raw
                );
            }
        }
    }
}

impl fmt::Display for ConversionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionWarning::MissingTarget { placeholder } => write!(
                f,
                "no 'target' element found in ARF XML, using hostname '{}'",
                placeholder
            ),
            ConversionWarning::DuplicateRuleDefinition { rule_id } => {
                write!(f, "rule '{}' is defined more than once", rule_id)
            }
            ConversionWarning::DuplicateRuleResult { rule_id } => {
                write!(f, "rule '{}' has more than one result", rule_id)
            }
            ConversionWarning::OrphanRuleResult { rule_id } => write!(
                f,
                "rule definition for ID '{}' not found, skipping observation creation",
                rule_id
            ),
            ConversionWarning::TimestampFallback { rule_id, raw } => write!(
                f,
                "could not parse evaluated-on time '{}' for rule {}, using run start time",
                raw, rule_id
            ),
        }
    }
}

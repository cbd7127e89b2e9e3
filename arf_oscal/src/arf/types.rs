//! Extracted ARF records

use std::collections::HashMap;

/// Static metadata of one XCCDF rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleDefinition {
    pub id: String,

    /// Control identifiers from NIST references, deduplicated in document order
    pub controls: Vec<String>,

    pub title: String,

    pub description: String,
}

/// Outcome of one rule evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleResult {
    /// Identifier of the evaluated rule (`idref`)
    pub rule_id: String,

    /// Raw scanner status, e.g. `pass` or `notapplicable`
    pub status: String,

    pub reason: String,

    /// Evaluation time exactly as written in the ARF
    pub evaluated_on: String,
}

/// Rule identifier → definition
pub type RuleCatalog = HashMap<String, RuleDefinition>;

/// Rule identifier → result
pub type RuleResults = HashMap<String, RuleResult>;

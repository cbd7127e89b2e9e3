//! Inputs of an aggregation run that do not come from the ARF document

use chrono::{DateTime, Utc};

/// Source of unique identifiers for generated OSCAL objects
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Random version 4 UUIDs
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Predictable identifiers `{prefix}-1`, `{prefix}-2`, ...
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: u64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            next: 1,
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

/// Run-wide values stamped into every observation
#[derive(Debug, Clone)]
pub struct AssessmentContext {
    /// Captured once when the conversion starts
    pub run_start: DateTime<Utc>,

    /// Subject title of every observation
    pub hostname: String,

    /// Path of the ARF file, linked as relevant evidence
    pub evidence_path: String,

    /// Namespace of emitted properties
    pub property_namespace: String,
}

impl AssessmentContext {
    pub fn evidence_href(&self) -> String {
        format!("file://{}", self.evidence_path)
    }
}

//! # OSCAL Output Model
//!
//! Serde types for the assessment-results document written by the converter.

pub mod types;

pub use types::{
    AssessmentResult, AssessmentResults, ControlSelection, Finding, FindingTarget, ImportAp,
    Metadata, Observation, ObjectiveStatus, OscalDocument, Property, RelatedObservation,
    RelevantEvidence, ReviewedControls, SelectControlById, SubjectReference,
};

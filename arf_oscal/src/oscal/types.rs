//! OSCAL 1.1 assessment-results object model
//!
//! Only the parts of the schema the converter fills in. Field names follow the
//! OSCAL JSON format (kebab-case).

use crate::aggregation::DecisionState;
use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

/// Top-level OSCAL document wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OscalDocument {
    pub assessment_results: AssessmentResults,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AssessmentResults {
    pub uuid: String,
    pub metadata: Metadata,
    pub import_ap: ImportAp,
    pub results: Vec<AssessmentResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Metadata {
    pub title: String,
    pub published: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
    pub version: String,
    pub oscal_version: String,
}

/// Reference to the assessment plan the results belong to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportAp {
    pub href: String,
}

/// One assessment run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AssessmentResult {
    pub uuid: String,
    pub title: String,
    pub description: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub reviewed_controls: ReviewedControls,
    pub observations: Vec<Observation>,
    pub findings: Vec<Finding>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ReviewedControls {
    pub control_selections: Vec<ControlSelection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ControlSelection {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include_controls: Vec<SelectControlById>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SelectControlById {
    pub control_id: String,
}

/// Evidence collected for one evaluated rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Observation {
    pub uuid: String,
    pub title: String,
    pub description: String,
    pub methods: Vec<String>,
    pub props: Vec<Property>,
    pub subjects: Vec<SubjectReference>,
    pub relevant_evidence: Vec<RelevantEvidence>,
    pub collected: DateTime<FixedOffset>,
}

impl Observation {
    /// Value of the first property named `name`
    pub fn prop(&self, name: &str) -> Option<&str> {
        find_prop(&self.props, name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub ns: String,
    pub value: String,
}

impl Property {
    pub fn new(name: &str, ns: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            ns: ns.to_string(),
            value: value.to_string(),
        }
    }
}

/// The scanned asset an observation is about
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SubjectReference {
    pub subject_uuid: String,
    #[serde(rename = "type")]
    pub subject_type: String,
    pub title: String,
    pub props: Vec<Property>,
}

impl SubjectReference {
    pub fn prop(&self, name: &str) -> Option<&str> {
        find_prop(&self.props, name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelevantEvidence {
    pub href: String,
    pub description: String,
}

/// Compliance state of one control
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Finding {
    pub uuid: String,
    pub title: String,
    pub description: String,
    pub target: FindingTarget,
    pub related_observations: Vec<RelatedObservation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FindingTarget {
    #[serde(rename = "type")]
    pub target_type: String,
    pub target_id: String,
    pub status: ObjectiveStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectiveStatus {
    pub state: DecisionState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RelatedObservation {
    pub observation_uuid: String,
}

fn find_prop<'a>(props: &'a [Property], name: &str) -> Option<&'a str> {
    props
        .iter()
        .find(|p| p.name == name)
        .map(|p| p.value.as_str())
}

//! # Aggregation Engine
//!
//! Joins the rule catalog with the rule results. Pass one builds an
//! observation per evaluated rule, pass two stages a finding per control and
//! records each contributing decision, and finalization fixes every
//! finding's state once all rules have been seen.

use super::context::{AssessmentContext, IdGenerator};
use super::status::{ControlStatusTracker, DecisionState};
use super::timestamp::{format_evaluated_on, parse_evaluated_on};
use crate::arf::{RuleCatalog, RuleDefinition, RuleResult, RuleResults};
use crate::config::constants::compile_time::oscal;
use crate::logging::codes;
use crate::oscal::{
    Finding, FindingTarget, ObjectiveStatus, Observation, Property, RelatedObservation,
    RelevantEvidence, SubjectReference,
};
use crate::warnings::ConversionWarning;
use std::collections::{BTreeMap, HashMap};

/// Output of one aggregation run
#[derive(Debug, Clone)]
pub struct Aggregation {
    /// One per rule present in both catalog and results, ordered by rule id
    pub observations: Vec<Observation>,

    /// One per control, ordered by control id
    pub findings: Vec<Finding>,

    pub warnings: Vec<ConversionWarning>,
}

/// Finding under construction; its state is unknown until every rule is seen
struct StagedFinding {
    uuid: String,
    related_observations: Vec<RelatedObservation>,
}

pub struct AggregationEngine<'a> {
    context: &'a AssessmentContext,
    ids: &'a mut dyn IdGenerator,
}

impl<'a> AggregationEngine<'a> {
    pub fn new(context: &'a AssessmentContext, ids: &'a mut dyn IdGenerator) -> Self {
        Self { context, ids }
    }

    /// Run both passes and finalization
    pub fn aggregate(&mut self, catalog: &RuleCatalog, results: &RuleResults) -> Aggregation {
        let mut warnings = Vec::new();

        let (observations, observation_ids) =
            self.build_observations(catalog, results, &mut warnings);

        let (staged, tracker) = self.stage_findings(catalog, results, &observation_ids);

        let findings = finalize_findings(staged, &tracker);

        for warning in &warnings {
            warning.log();
        }

        crate::log_success!(
            codes::success::AGGREGATION_COMPLETE,
            "Aggregated rule results into observations and findings",
            "observations" => observations.len(),
            "findings" => findings.len(),
            "warnings" => warnings.len()
        );

        Aggregation {
            observations,
            findings,
            warnings,
        }
    }

    /// Pass one: an observation for every result whose rule is defined
    fn build_observations(
        &mut self,
        catalog: &RuleCatalog,
        results: &RuleResults,
        warnings: &mut Vec<ConversionWarning>,
    ) -> (Vec<Observation>, HashMap<String, String>) {
        let mut observations = Vec::new();
        let mut observation_ids = HashMap::new();

        for (rule_id, result) in sorted(results) {
            let Some(definition) = catalog.get(rule_id) else {
                warnings.push(ConversionWarning::OrphanRuleResult {
                    rule_id: rule_id.clone(),
                });
                continue;
            };

            let observation = self.build_observation(definition, result, warnings);
            observation_ids.insert(rule_id.clone(), observation.uuid.clone());
            observations.push(observation);
        }

        (observations, observation_ids)
    }

    fn build_observation(
        &mut self,
        definition: &RuleDefinition,
        result: &RuleResult,
        warnings: &mut Vec<ConversionWarning>,
    ) -> Observation {
        let ns = self.context.property_namespace.as_str();

        let collected = match parse_evaluated_on(&result.evaluated_on) {
            Some(time) => time,
            None => {
                warnings.push(ConversionWarning::TimestampFallback {
                    rule_id: result.rule_id.clone(),
                    raw: result.evaluated_on.clone(),
                });
                self.context.run_start.fixed_offset()
            }
        };

        let uuid = self.ids.next_id();
        let subject_uuid = self.ids.next_id();

        Observation {
            uuid,
            title: definition.title.clone(),
            description: definition.description.clone(),
            methods: vec![oscal::AUTOMATED_METHOD.to_string()],
            props: vec![Property::new("assessment-rule-id", ns, &result.rule_id)],
            subjects: vec![SubjectReference {
                subject_uuid,
                subject_type: "component".to_string(),
                title: self.context.hostname.clone(),
                props: vec![
                    Property::new("resource-id", ns, &result.rule_id),
                    Property::new("result", ns, &result.status),
                    Property::new("evaluated-on", ns, &format_evaluated_on(&collected)),
                    Property::new("reason", ns, &result.reason),
                ],
            }],
            relevant_evidence: vec![RelevantEvidence {
                href: self.context.evidence_href(),
                description: oscal::EVIDENCE_DESCRIPTION.to_string(),
            }],
            collected,
        }
    }

    /// Pass two: stage findings and record each rule's decision per control
    fn stage_findings(
        &mut self,
        catalog: &RuleCatalog,
        results: &RuleResults,
        observation_ids: &HashMap<String, String>,
    ) -> (BTreeMap<String, StagedFinding>, ControlStatusTracker) {
        let mut staged: BTreeMap<String, StagedFinding> = BTreeMap::new();
        let mut tracker = ControlStatusTracker::new();

        for (rule_id, definition) in sorted(catalog) {
            let Some(result) = results.get(rule_id) else {
                continue;
            };
            if definition.controls.is_empty() {
                continue;
            }

            let decision = DecisionState::from_scan_status(&result.status);
            let observation_id = observation_ids.get(rule_id);

            for control_id in &definition.controls {
                tracker.record(control_id, decision);

                let finding = staged
                    .entry(control_id.clone())
                    .or_insert_with(|| StagedFinding {
                        uuid: self.ids.next_id(),
                        related_observations: Vec::new(),
                    });

                if let Some(observation_uuid) = observation_id {
                    finding.related_observations.push(RelatedObservation {
                        observation_uuid: observation_uuid.clone(),
                    });
                }
            }
        }

        (staged, tracker)
    }
}

/// Replace each staged finding's placeholder state with its final decision
fn finalize_findings(
    staged: BTreeMap<String, StagedFinding>,
    tracker: &ControlStatusTracker,
) -> Vec<Finding> {
    let finals = tracker.finalize_all();

    staged
        .into_iter()
        .map(|(control_id, finding)| {
            let state = finals
                .get(&control_id)
                .copied()
                .unwrap_or(DecisionState::NotAddressed);

            Finding {
                uuid: finding.uuid,
                title: format!("Finding for Control {}", control_id),
                description: format!(
                    "Automated finding for control {} based on ARF scan results.",
                    control_id
                ),
                target: FindingTarget {
                    target_type: "statement-id".to_string(),
                    target_id: control_id,
                    status: ObjectiveStatus { state },
                },
                related_observations: finding.related_observations,
            }
        })
        .collect()
}

fn sorted<V>(map: &HashMap<String, V>) -> Vec<(&String, &V)> {
    let mut entries: Vec<(&String, &V)> = map.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
}

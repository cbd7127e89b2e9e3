//! Report assembly

use crate::aggregation::{Aggregation, AssessmentContext, IdGenerator};
use crate::config::constants::compile_time::oscal;
use crate::config::ConverterConfig;
use crate::logging::codes;
use crate::oscal::{
    AssessmentResult, AssessmentResults, ControlSelection, ImportAp, Metadata, OscalDocument,
    ReviewedControls, SelectControlById,
};
use chrono::{DateTime, Utc};

/// Wraps aggregation output in one result inside one assessment-results document
pub struct ReportAssembler<'a> {
    config: &'a ConverterConfig,
    context: &'a AssessmentContext,
}

impl<'a> ReportAssembler<'a> {
    pub fn new(config: &'a ConverterConfig, context: &'a AssessmentContext) -> Self {
        Self { config, context }
    }

    /// Build the document. `finished` closes the result's time window.
    pub fn assemble(
        &self,
        aggregation: Aggregation,
        ids: &mut dyn IdGenerator,
        finished: DateTime<Utc>,
    ) -> OscalDocument {
        let started = self.context.run_start;

        let reviewed_controls = ReviewedControls {
            control_selections: vec![ControlSelection {
                include_controls: aggregation
                    .findings
                    .iter()
                    .map(|finding| SelectControlById {
                        control_id: finding.target.target_id.clone(),
                    })
                    .collect(),
            }],
        };

        let result = AssessmentResult {
            uuid: ids.next_id(),
            title: oscal::RESULT_TITLE.to_string(),
            description: oscal::RESULT_DESCRIPTION.to_string(),
            start: started,
            end: finished.max(started),
            reviewed_controls,
            observations: aggregation.observations,
            findings: aggregation.findings,
        };

        let document = OscalDocument {
            assessment_results: AssessmentResults {
                uuid: ids.next_id(),
                metadata: Metadata {
                    title: format!(
                        "Assessment Results for {} from ARF File",
                        self.context.hostname
                    ),
                    published: started,
                    last_modified: started,
                    version: self.config.document_version.clone(),
                    oscal_version: self.config.oscal_version.clone(),
                },
                import_ap: ImportAp {
                    href: self.config.assessment_plan_href.clone(),
                },
                results: vec![result],
            },
        };

        crate::log_success!(codes::success::REPORT_ASSEMBLED, "Assembled OSCAL assessment results",
            "hostname" => self.context.hostname
        );

        document
    }
}

use arf_oscal::aggregation::{DecisionState, SequentialIdGenerator};
use arf_oscal::pipeline::{convert_file, convert_file_with, write_report};
use arf_oscal::{ConversionWarning, ConverterConfig};
use chrono::{TimeZone, Utc};
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

const RULE_PREFIX: &str = "xccdf_org.ssgproject.content_rule_";

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/rhel9-arf.xml")
}

fn fixture_path() -> String {
    fixture().display().to_string()
}

#[test]
fn test_fixture_findings() {
    let run_start = Utc.with_ymd_and_hms(2025, 2, 3, 4, 5, 6).unwrap();
    let mut ids = SequentialIdGenerator::new("uuid");
    let outcome = convert_file_with(
        &fixture_path(),
        &ConverterConfig::default(),
        &mut ids,
        run_start,
    )
    .unwrap();

    let results = &outcome.document.assessment_results;
    assert_eq!(
        results.metadata.title,
        "Assessment Results for rhel9-node.example.com from ARF File"
    );

    let result = &results.results[0];
    let states: Vec<(&str, DecisionState)> = result
        .findings
        .iter()
        .map(|f| (f.target.target_id.as_str(), f.target.status.state))
        .collect();
    assert_eq!(
        states,
        vec![
            ("AC-6", DecisionState::NotSatisfied),
            ("AU-12", DecisionState::NotSatisfied),
            ("AU-2", DecisionState::Satisfied),
            ("CM-6", DecisionState::NotApplicable),
            ("IA-5", DecisionState::Satisfied),
            ("SI-4", DecisionState::NotSatisfied),
        ]
    );

    let au12 = &result.findings[1];
    assert_eq!(au12.related_observations.len(), 2);

    // Observations exist only for rules that were both defined and evaluated
    let rule_ids: Vec<String> = result
        .observations
        .iter()
        .map(|o| o.prop("assessment-rule-id").unwrap().replace(RULE_PREFIX, ""))
        .collect();
    assert_eq!(
        rule_ids,
        vec![
            "accounts_password_minlen",
            "aide_periodic_cron_checking",
            "banner_etc_issue",
            "file_permissions_var_log_audit",
            "grub2_password",
            "package_telnet-server_removed",
            "service_auditd_enabled",
        ]
    );

    // Every related observation points at an observation in the result
    let observation_ids: HashSet<&str> =
        result.observations.iter().map(|o| o.uuid.as_str()).collect();
    for finding in &result.findings {
        for related in &finding.related_observations {
            assert!(observation_ids.contains(related.observation_uuid.as_str()));
        }
    }

    let aide = result
        .observations
        .iter()
        .find(|o| o.title == "Configure Periodic Execution of AIDE")
        .unwrap();
    assert_eq!(aide.subjects[0].prop("reason"), Some("OVAL evaluation failed"));
    assert_eq!(aide.subjects[0].prop("result"), Some("error"));

    let minlen = &result.observations[0];
    assert_eq!(minlen.collected, run_start.fixed_offset());

    assert_eq!(outcome.warnings.len(), 2);
    assert!(outcome.warnings.contains(&ConversionWarning::OrphanRuleResult {
        rule_id: format!("{}removed_from_benchmark", RULE_PREFIX)
    }));
    assert!(outcome.warnings.contains(&ConversionWarning::TimestampFallback {
        rule_id: format!("{}accounts_password_minlen", RULE_PREFIX),
        raw: "01/03/2024 10:15".to_string()
    }));

    assert_eq!(outcome.summary.rules_defined, 7);
    assert_eq!(outcome.summary.results_read, 8);
    assert_eq!(outcome.summary.count(DecisionState::NotSatisfied), 3);
}

#[test]
fn test_description_keeps_inline_markup_text() {
    let outcome = convert_file(&fixture_path(), &ConverterConfig::default()).unwrap();
    let auditd = outcome.document.assessment_results.results[0]
        .observations
        .iter()
        .find(|o| o.title == "Enable auditd Service")
        .unwrap();
    assert_eq!(
        auditd.description,
        "The auditd service is an essential userspace component."
    );
}

#[test]
fn test_written_document() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("assessment-results-changed.json");

    let outcome = convert_file(&fixture_path(), &ConverterConfig::default()).unwrap();
    write_report(&outcome.document, &output).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let results = &json["assessment-results"];
    assert_eq!(results["metadata"]["oscal-version"], "1.1.2");
    assert_eq!(
        results["import-ap"]["href"],
        "file://complytime/assessment-plan.json"
    );

    let result = &results["results"][0];
    assert_eq!(result["observations"].as_array().unwrap().len(), 7);
    assert_eq!(result["findings"].as_array().unwrap().len(), 6);
    assert_eq!(
        result["reviewed-controls"]["control-selections"][0]["include-controls"]
            .as_array()
            .unwrap()
            .len(),
        6
    );

    let observation = &result["observations"][0];
    assert_eq!(observation["methods"][0], "AUTOMATED");
    assert_eq!(observation["subjects"][0]["type"], "component");
    assert_eq!(
        observation["relevant-evidence"][0]["href"],
        format!("file://{}", fixture_path())
    );
}

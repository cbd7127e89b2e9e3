//! Rule result extraction from `rule-result` elements

use super::catalog::child_text;
use super::types::{RuleResult, RuleResults};
use crate::warnings::ConversionWarning;
use crate::xml::XmlDocument;

/// Build the rule result map.
///
/// Results without an `idref` are skipped. When a rule is evaluated more
/// than once, the last `rule-result` in document order wins.
pub fn extract_rule_results(doc: &XmlDocument) -> (RuleResults, Vec<ConversionWarning>) {
    let mut results = RuleResults::new();
    let mut warnings = Vec::new();

    for result_node in doc.descendants("rule-result") {
        let rule_id = match doc.attr(result_node, "idref") {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => continue,
        };

        let status = child_text(doc, result_node, "result");
        let reason = match doc.first_child(result_node, "reason") {
            Some(reason_node) => doc.inner_text(reason_node).trim().to_string(),
            None => format!("openscap rule-result is {}", status),
        };
        let evaluated_on = doc.attr(result_node, "time").unwrap_or_default().to_string();

        let result = RuleResult {
            rule_id: rule_id.clone(),
            status,
            reason,
            evaluated_on,
        };

        if results.insert(rule_id.clone(), result).is_some() {
            warnings.push(ConversionWarning::DuplicateRuleResult { rule_id });
        }
    }

    (results, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results_of(xml: &str) -> (RuleResults, Vec<ConversionWarning>) {
        let doc = XmlDocument::parse(xml).unwrap();
        extract_rule_results(&doc)
    }

    #[test]
    fn test_result_fields() {
        let (results, warnings) = results_of(
            r#"<TestResult>
  <rule-result idref="rule_a" time="2024-03-01T10:15:30+00:00" severity="high">
    <result>fail</result>
    <reason>permissions too open</reason>
  </rule-result>
</TestResult>"#,
        );

        assert!(warnings.is_empty());
        let result = &results["rule_a"];
        assert_eq!(result.status, "fail");
        assert_eq!(result.reason, "permissions too open");
        assert_eq!(result.evaluated_on, "2024-03-01T10:15:30+00:00");
    }

    #[test]
    fn test_reason_is_synthesized_from_status() {
        let (results, _) = results_of(
            r#"<TestResult><rule-result idref="r"><result>notapplicable</result></rule-result></TestResult>"#,
        );
        assert_eq!(results["r"].reason, "openscap rule-result is notapplicable");
    }

    #[test]
    fn test_missing_status_and_time_are_empty() {
        let (results, _) = results_of(r#"<TestResult><rule-result idref="r"/></TestResult>"#);
        let result = &results["r"];
        assert_eq!(result.status, "");
        assert_eq!(result.evaluated_on, "");
        assert_eq!(result.reason, "openscap rule-result is ");
    }

    #[test]
    fn test_results_without_idref_are_skipped() {
        let (results, _) = results_of(
            r#"<TestResult>
  <rule-result><result>pass</result></rule-result>
  <rule-result idref=""><result>pass</result></rule-result>
</TestResult>"#,
        );
        assert!(results.is_empty());
    }

    #[test]
    fn test_duplicate_result_last_wins() {
        let (results, warnings) = results_of(
            r#"<TestResult>
  <rule-result idref="r"><result>pass</result></rule-result>
  <rule-result idref="r"><result>fail</result></rule-result>
</TestResult>"#,
        );
        assert_eq!(results["r"].status, "fail");
        assert_eq!(
            warnings,
            vec![ConversionWarning::DuplicateRuleResult {
                rule_id: "r".to_string()
            }]
        );
    }
}

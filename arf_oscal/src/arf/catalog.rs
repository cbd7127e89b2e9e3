//! Rule catalog extraction from `xccdf:Rule` elements

use super::types::{RuleCatalog, RuleDefinition};
use crate::warnings::ConversionWarning;
use crate::xml::{NodeId, XmlDocument};

/// Build the rule catalog.
///
/// Rules without an `id` are skipped. A control is any `reference` child
/// whose `href` starts with `nist_prefix`; its trimmed text is the control id.
pub fn extract_rule_catalog(
    doc: &XmlDocument,
    nist_prefix: &str,
) -> (RuleCatalog, Vec<ConversionWarning>) {
    let mut catalog = RuleCatalog::new();
    let mut warnings = Vec::new();

    for rule_node in doc.descendants("Rule") {
        let rule_id = match doc.attr(rule_node, "id") {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => continue,
        };

        let definition = RuleDefinition {
            controls: nist_controls(doc, rule_node, nist_prefix),
            title: child_text(doc, rule_node, "title"),
            description: child_text(doc, rule_node, "description"),
            id: rule_id.clone(),
        };

        if catalog.insert(rule_id.clone(), definition).is_some() {
            warnings.push(ConversionWarning::DuplicateRuleDefinition { rule_id });
        }
    }

    (catalog, warnings)
}

fn nist_controls(doc: &XmlDocument, rule_node: NodeId, nist_prefix: &str) -> Vec<String> {
    let mut controls: Vec<String> = Vec::new();

    for reference in doc.children(rule_node, "reference") {
        let is_nist = doc
            .attr(reference, "href")
            .is_some_and(|href| href.starts_with(nist_prefix));
        if !is_nist {
            continue;
        }

        let control = doc.inner_text(reference).trim().to_string();
        if !control.is_empty() && !controls.contains(&control) {
            controls.push(control);
        }
    }

    controls
}

/// Trimmed text of the first `name` child, empty when absent
pub(crate) fn child_text(doc: &XmlDocument, node: NodeId, name: &str) -> String {
    doc.first_child(node, name)
        .map(|child| doc.inner_text(child).trim().to_string())
        .unwrap_or_default()
}

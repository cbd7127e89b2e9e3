//! Scanned asset identification

use crate::warnings::ConversionWarning;
use crate::xml::XmlDocument;

/// Hostname of the scanned asset from the first `target` element.
///
/// A missing or blank target yields `placeholder` and a warning.
pub fn extract_hostname(
    doc: &XmlDocument,
    placeholder: &str,
) -> (String, Option<ConversionWarning>) {
    let hostname = doc
        .first_descendant("target")
        .map(|node| doc.inner_text(node).trim().to_string())
        .filter(|name| !name.is_empty());

    match hostname {
        Some(name) => (name, None),
        None => (
            placeholder.to_string(),
            Some(ConversionWarning::MissingTarget {
                placeholder: placeholder.to_string(),
            }),
        ),
    }
}

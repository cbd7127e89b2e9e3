//! Evaluation time parsing

use chrono::{DateTime, FixedOffset, SecondsFormat};

/// Secondary layout: whole seconds and a numeric offset
const FALLBACK_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Parse a rule-result `time` attribute.
///
/// RFC 3339 with optional fractional seconds first, then a plain
/// seconds-plus-offset layout. `None` when neither matches.
pub fn parse_evaluated_on(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, FALLBACK_FORMAT))
        .ok()
}

/// Seconds-precision RFC 3339, `Z` for UTC
pub fn format_evaluated_on(time: &DateTime<FixedOffset>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}

//! # ARF Extraction
//!
//! Tree walks over a parsed ARF document. Both extractors read the same
//! document independently and never fail: malformed or incidental nodes are
//! skipped, and duplicates are reported as warnings.

pub mod catalog;
pub mod results;
pub mod target;
pub mod types;

pub use catalog::extract_rule_catalog;
pub use results::extract_rule_results;
pub use target::extract_hostname;
pub use types::{RuleCatalog, RuleDefinition, RuleResult, RuleResults};

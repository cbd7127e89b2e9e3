// Internal modules
pub mod aggregation;
pub mod arf;
pub mod config;
pub mod error;
#[macro_use]
pub mod logging;
pub mod oscal;
pub mod pipeline;
pub mod report;
pub mod warnings;
pub mod xml;

// Re-export key types for library consumers
pub use aggregation::DecisionState;
pub use config::ConverterConfig;
pub use error::ConversionError;
pub use oscal::OscalDocument;
pub use pipeline::{convert_file, write_report, ConversionOutcome, ConversionSummary};
pub use warnings::ConversionWarning;

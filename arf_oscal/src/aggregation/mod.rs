//! # Aggregation
//!
//! Status mapping, the two-pass aggregation engine, and the collaborator
//! seams it needs (identifier generation and run-wide context).

pub mod context;
pub mod engine;
pub mod status;
pub mod timestamp;

pub use context::{AssessmentContext, IdGenerator, SequentialIdGenerator, UuidGenerator};
pub use engine::{Aggregation, AggregationEngine};
pub use status::{finalize, ControlStatusTracker, DecisionState};

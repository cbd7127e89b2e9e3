//! Configuration module for the ARF converter
//!
//! `constants` holds the compiled-in defaults. `runtime` holds the
//! user-adjustable [`ConverterConfig`](runtime::ConverterConfig) that is
//! passed explicitly to every stage of the conversion.

pub mod constants;
pub mod runtime;

pub use runtime::{ConverterConfig, LoggingPreferences};

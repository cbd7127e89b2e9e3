//! # Report Assembly
//!
//! Structural composition of the final OSCAL document. No decision logic.

pub mod assembler;

pub use assembler::ReportAssembler;

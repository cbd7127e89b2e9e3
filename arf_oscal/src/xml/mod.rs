//! # XML Tree
//!
//! The narrow XML capability the extractors need: select all matching
//! elements, select the first match, read an attribute, read inner text.

pub mod tree;

pub use tree::{NodeId, XmlDocument};

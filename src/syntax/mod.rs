//! XML syntax tree
//!
//! The low-level, unvalidated parse of a project file. Every node carries the
//! byte span it was read from; nothing is checked beyond what the tolerant
//! parser needs to find tag boundaries.

pub mod node;
pub mod parser;
pub mod span;

pub use node::*;
pub use parser::parse_document;
pub use span::{Span, TextSpan};

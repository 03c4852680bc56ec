//! Semantic model
//!
//! A flat, range-sorted index of elements, attributes, text and inferred
//! whitespace, built from the syntax tree of a project file that may be in
//! the middle of being edited.

mod builder;
pub mod model;
pub mod node;

pub use model::SemanticModel;
pub use node::*;

//! MSBuild expressions
//!
//! The small expression language found in attribute values and element text:
//! semicolon-delimited lists, quoted strings, symbols and comparisons. Nothing
//! is evaluated or resolved here.

pub mod node;
pub mod parser;

pub use node::*;
pub use parser::{parse_expression, parse_expression_list, parse_simple_list};

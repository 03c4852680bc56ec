pub mod error;
pub mod expression;
pub mod position;
pub mod result;
pub mod semantic;
pub mod syntax;

pub use error::{ExpressionError, ModelError, Result};
pub use position::{Position, Range, TextPositions};
pub use semantic::{NodeId, SemanticModel, XsNode, XsNodeKind};

//! The tree and pattern data model the engine operates on.
//!
//! [`TreeNode`] is the parsed-AST representation the engine consumes;
//! [`PatternNode`] is the common-skeleton representation anti-unification
//! produces. [`DetectedClone`] and [`DetectionResult`] are the terminal,
//! serializable artifacts a runner returns.

pub mod detected_clone;
pub mod module;
pub mod origin;
pub mod pattern_node;
pub mod tree_node;

pub use detected_clone::{Algorithm, DetectedClone, DetectionResult};
pub use module::Module;
pub use origin::Origin;
pub use pattern_node::PatternNode;
pub use tree_node::TreeNode;

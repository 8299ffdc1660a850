//! The module-list input shape the engine accepts (§6): one entry per
//! source file, each carrying the already-parsed method ASTs found in it.

use serde::{Deserialize, Serialize};

use crate::model::tree_node::TreeNode;

/// A single source file's parsed method ASTs.
///
/// The engine consumes already-parsed trees — it does not clone
/// repositories, walk a filesystem, or invoke a parser; those are
/// out-of-scope collaborators (§1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    /// Path of the source file, as supplied by the caller.
    pub file_path: String,
    /// The parsed ASTs of every method/function found in this file.
    pub method_trees: Vec<TreeNode>,
}

impl Module {
    /// Construct a new module.
    pub fn new(file_path: impl Into<String>, method_trees: Vec<TreeNode>) -> Self {
        Self {
            file_path: file_path.into(),
            method_trees,
        }
    }
}

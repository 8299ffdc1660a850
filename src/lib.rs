//! # Reagent: cross-repository structural clone detection
//!
//! Detects duplicated code ("clones") across one or two source repositories
//! by comparing the abstract syntax trees of their methods. Given two
//! corpora of already-parsed method ASTs, the engine reports clusters of
//! structurally similar subtrees, each annotated with its common skeleton,
//! matching weight, and per-occurrence similarity coefficient.
//!
//! Three algorithms are provided:
//!
//! - **Oxygen** — single-repo exact duplicates, grouped by subtree hash.
//! - **Chlorine** — cross-repo exact duplicates, grouped by subtree hash.
//! - **Iodine** — cross-repo approximate duplicates via anti-unification,
//!   admitting a bounded number of "holes" where two subtrees diverge.
//!
//! This crate consumes already-parsed trees; it does not clone
//! repositories, walk a filesystem, or parse source into an AST — those are
//! out-of-scope collaborators the caller supplies.
//!
//! ## Quick start
//!
//! ```
//! use reagent::core::config::IodineConfig;
//! use reagent::model::{Algorithm, Module, Origin, TreeNode};
//! use reagent::algorithms::run_single_repo;
//!
//! let method = TreeNode::new(
//!     "Block",
//!     vec![
//!         TreeNode::leaf("Assign:x", Origin::new("f.py", 2, 0)),
//!         TreeNode::leaf("Return:x", Origin::new("f.py", 3, 0)),
//!     ],
//!     Origin::new("f.py", 1, 0),
//! );
//! let modules = vec![Module::new("f.py", vec![method.clone(), method])];
//!
//! let config = IodineConfig::default();
//! let result = run_single_repo(&modules, Algorithm::Oxygen, &config).unwrap();
//! assert_eq!(result.clones.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(unsafe_code)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod core;
pub mod model;

pub mod algorithms;

pub use core::errors::{ReagentError, Result};
pub use model::{Algorithm, DetectedClone, DetectionResult, Module, Origin, PatternNode, TreeNode};

/// Library version, exposed for `--version` output in the CLI shell.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! The algorithm runner (§4.8): dispatches `(algorithm, repo-count)` to the
//! correct engine, rejecting the two combinations the source never
//! implemented.

use crate::algorithms::{chlorine, iodine, oxygen};
use crate::core::config::IodineConfig;
use crate::core::errors::{ReagentError, Result};
use crate::model::{Algorithm, DetectionResult, Module};

/// Run a single-repo analysis. Oxygen and Chlorine both support this mode;
/// Iodine does not (§4.7: "Single-repo Iodine is not implemented").
///
/// An empty `modules` list is rejected here, at the boundary (§8 law 10) —
/// the algorithms themselves tolerate an empty list and simply return no
/// clones, which direct-call tests rely on.
pub fn run_single_repo(
    modules: &[Module],
    algorithm: Algorithm,
    config: &IodineConfig,
) -> Result<DetectionResult> {
    if modules.is_empty() {
        return Err(ReagentError::user_input(
            "cannot analyze an empty repository",
        ));
    }

    match algorithm {
        Algorithm::Oxygen => Ok(oxygen::detect(modules, config.min_nodes)),
        Algorithm::Chlorine => Ok(chlorine::detect_single_repo(modules, config.min_nodes)),
        Algorithm::Iodine => Err(ReagentError::user_input(format!(
            "{algorithm} does not support single-repo analysis; it requires two repositories"
        ))),
    }
}

/// Run a two-repo analysis. Chlorine and Iodine both support this mode;
/// Oxygen does not (§4.5: "Two-repo Oxygen is not implemented").
pub fn run_two_repos(
    repo_a: &[Module],
    repo_b: &[Module],
    algorithm: Algorithm,
    config: &IodineConfig,
) -> Result<DetectionResult> {
    if repo_a.is_empty() || repo_b.is_empty() {
        return Err(ReagentError::user_input(
            "cannot analyze an empty repository",
        ));
    }

    match algorithm {
        Algorithm::Oxygen => Err(ReagentError::user_input(format!(
            "{algorithm} does not support two-repo analysis; it is single-repo only"
        ))),
        Algorithm::Chlorine => Ok(chlorine::detect_two_repos(repo_a, repo_b, config.min_nodes)),
        Algorithm::Iodine => Ok(iodine::detect(repo_a, repo_b, config)),
    }
}

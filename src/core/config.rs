//! Iodine threshold configuration.
//!
//! The three admission thresholds are read once at the boundary from their
//! `IODINE_*` environment variables into an explicit [`IodineConfig`] record
//! and threaded through as a parameter, so the detection core itself touches
//! no global state.

use std::env;

use serde::{Deserialize, Serialize};

use crate::core::errors::{ReagentError, Result};

const DEFAULT_MIN_NODES: usize = 20;
const DEFAULT_MAX_HOLES: usize = 10;
const DEFAULT_HOLE_MASS_LIMIT: usize = 5;

/// Which reading of the holes threshold to apply.
///
/// The source reads `num_holes >= MAX_HOLES`, but the name `MAX_HOLES`
/// alongside a companion `HOLE_MASS_LIMIT` used with `<=` strongly suggests
/// an upper bound was intended. Both readings are named explicitly rather
/// than silently picking one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HolesPredicate {
    /// The literal source behavior: admit only patterns with at least
    /// `max_holes` holes.
    AtLeast,
    /// The documented, almost-certainly-intended behavior: admit only
    /// patterns with at most `max_holes` holes.
    AtMost,
}

impl HolesPredicate {
    /// Evaluate the predicate for an observed hole count.
    pub fn admits(&self, num_holes: usize, max_holes: usize) -> bool {
        match self {
            Self::AtLeast => num_holes >= max_holes,
            Self::AtMost => num_holes <= max_holes,
        }
    }
}

/// Iodine's three admission thresholds, explicit rather than global.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IodineConfig {
    /// Minimum non-hole node count (`match_weight`) to admit a pattern.
    pub min_nodes: usize,
    /// Holes threshold, interpreted per `holes_predicate`.
    pub max_holes: usize,
    /// Maximum allowed mass of the largest hole.
    pub hole_mass_limit: usize,
    /// Which direction `max_holes` is compared in.
    pub holes_predicate: HolesPredicate,
}

impl Default for IodineConfig {
    fn default() -> Self {
        Self {
            min_nodes: DEFAULT_MIN_NODES,
            max_holes: DEFAULT_MAX_HOLES,
            hole_mass_limit: DEFAULT_HOLE_MASS_LIMIT,
            holes_predicate: HolesPredicate::AtMost,
        }
    }
}

impl IodineConfig {
    /// Read the three thresholds from `IODINE_MIN_NODES`, `IODINE_MAX_HOLES`,
    /// and `IODINE_HOLE_MASS_LIMIT`. A variable that is present but parses to
    /// `0` is treated as unset and replaced with the default, matching the
    /// original `int(os.environ[...]) or 20` behavior. Missing variables use
    /// the default silently; a present-but-non-numeric value is a fatal
    /// configuration error.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            min_nodes: read_threshold("IODINE_MIN_NODES", DEFAULT_MIN_NODES)?,
            max_holes: read_threshold("IODINE_MAX_HOLES", DEFAULT_MAX_HOLES)?,
            hole_mass_limit: read_threshold("IODINE_HOLE_MASS_LIMIT", DEFAULT_HOLE_MASS_LIMIT)?,
            holes_predicate: HolesPredicate::AtMost,
        })
    }

    /// Build a config with the literal `>=` source reading instead of the
    /// documented `<=` one, for callers that need to reproduce the original
    /// behavior exactly (e.g. regression tests against the source).
    pub fn with_legacy_holes_predicate(mut self) -> Self {
        self.holes_predicate = HolesPredicate::AtLeast;
        self
    }

    /// Whether a candidate pattern satisfies all three admission predicates.
    pub fn admits(&self, match_weight: usize, num_holes: usize, max_hole_mass: usize) -> bool {
        match_weight >= self.min_nodes
            && self.holes_predicate.admits(num_holes, self.max_holes)
            && max_hole_mass <= self.hole_mass_limit
    }
}

fn read_threshold(var: &str, default: usize) -> Result<usize> {
    match env::var(var) {
        Ok(raw) => {
            let parsed: usize = raw.parse().map_err(|_| {
                ReagentError::config(
                    format!("{var} must be a positive integer, got {raw:?}"),
                    var,
                )
            })?;
            Ok(if parsed == 0 { default } else { parsed })
        }
        Err(_) => Ok(default),
    }
}

//! The terminal, serializable artifacts a detection run produces.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::origin::Origin;
use crate::model::tree_node::TreeNode;

/// One reported clone: a shared skeleton plus the origins that exhibit it.
///
/// `origins` maps each contributing [`Origin`] to a similarity coefficient
/// in `(0, 1]`. Exact-match algorithms (Oxygen, Chlorine) always record
/// `1.0`; Iodine records `match_weight / weight(origin_node)`. Key order is
/// insertion order — encounter order during analysis — and is part of the
/// stable JSON contract (§6).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedClone {
    /// The pattern's root value, or `"Hole"` in degenerate cases.
    pub value: String,
    /// Number of non-hole nodes in the pattern.
    pub match_weight: usize,
    /// Origin location to similarity coefficient, insertion-ordered.
    pub origins: IndexMap<String, f64>,
}

impl DetectedClone {
    /// Build a clone directly from a prebuilt origins map, e.g. when
    /// re-reading a persisted [`DetectionResult`] instead of recomputing
    /// similarities from raw nodes.
    pub fn from_origins(
        value: impl Into<String>,
        match_weight: usize,
        origins: IndexMap<String, f64>,
    ) -> Self {
        Self {
            value: value.into(),
            match_weight,
            origins,
        }
    }

    /// Build a clone from a list of origin nodes, each contributing a
    /// `match_weight / weight(node)` similarity coefficient — the shape
    /// every algorithm in this crate actually produces.
    pub fn from_nodes(value: impl Into<String>, match_weight: usize, nodes: &[&TreeNode]) -> Self {
        let mut origins = IndexMap::new();
        for node in nodes {
            let similarity = match_weight as f64 / node.weight() as f64;
            origins.insert(node.origin.to_string(), similarity);
        }
        Self {
            value: value.into(),
            match_weight,
            origins,
        }
    }

    /// Build an exact-match clone (Oxygen/Chlorine): every origin gets
    /// coefficient `1.0`.
    pub fn exact_match(value: impl Into<String>, match_weight: usize, origins: &[Origin]) -> Self {
        let mut map = IndexMap::new();
        for origin in origins {
            map.insert(origin.to_string(), 1.0);
        }
        Self {
            value: value.into(),
            match_weight,
            origins: map,
        }
    }

}

/// Algorithm identifier, serialized as its lowercase name (§6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Single-repo exact duplicate detection by subtree hash.
    Oxygen,
    /// Cross-repo exact duplicate detection by subtree hash.
    Chlorine,
    /// Cross-repo approximate detection via anti-unification.
    Iodine,
}

impl Algorithm {
    /// The lowercase identifier used in the JSON output and CLI flag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Oxygen => "oxygen",
            Self::Chlorine => "chlorine",
            Self::Iodine => "iodine",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The ordered list of detected clones produced by one analysis run, plus
/// the algorithm identity that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Which algorithm produced this result.
    pub algorithm: Algorithm,
    /// Detected clones, in the order described by §5 ("Ordering
    /// guarantees").
    pub clones: Vec<DetectedClone>,
}

impl DetectionResult {
    /// Construct a new result.
    pub fn new(algorithm: Algorithm, clones: Vec<DetectedClone>) -> Self {
        Self { algorithm, clones }
    }

    /// Serialize to the stable JSON shape asserted byte-for-byte by tests.
    pub fn to_json(&self) -> crate::core::errors::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

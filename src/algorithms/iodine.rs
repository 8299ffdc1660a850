//! Iodine (§4.7): cross-repo approximate detection via anti-unification.
//!
//! For every pair of methods across the two repos, every viable `(i, j)`
//! position in the flattened trees is anti-unified, thresholded against
//! [`IodineConfig`], and clustered within its bucket. Results from
//! different method pairs are concatenated in Cartesian-product order;
//! within a pair, admitted patterns are produced in `(i, j)` lexicographic
//! order (§5).

use indexmap::IndexMap;

use crate::algorithms::antiunify::{anti_unify, WorkBitmap};
use crate::algorithms::clustering::cluster;
use crate::core::config::IodineConfig;
use crate::model::{Algorithm, DetectedClone, DetectionResult, Module, Origin, PatternNode, TreeNode};

/// Run Iodine across two repos' module lists.
pub fn detect(repo_a: &[Module], repo_b: &[Module], config: &IodineConfig) -> DetectionResult {
    let methods_a: Vec<&TreeNode> = repo_a.iter().flat_map(|m| m.method_trees.iter()).collect();
    let methods_b: Vec<&TreeNode> = repo_b.iter().flat_map(|m| m.method_trees.iter()).collect();

    let mut clones = Vec::new();
    for method_a in &methods_a {
        for method_b in &methods_b {
            clones.extend(detect_pair(method_a, method_b, config));
        }
    }

    DetectionResult::new(Algorithm::Iodine, clones)
}

fn detect_pair(method_a: &TreeNode, method_b: &TreeNode, config: &IodineConfig) -> Vec<DetectedClone> {
    let mut a = method_a.clone();
    let mut b = method_b.clone();
    let t1 = a.flatten();
    let t2 = b.flatten();

    let weight_of: IndexMap<Origin, usize> = t1
        .iter()
        .chain(t2.iter())
        .map(|n| (n.origin.clone(), n.weight()))
        .collect();

    let mut bitmap = WorkBitmap::new(t1.len(), t2.len());
    let mut buckets: Vec<Vec<PatternNode>> = (0..t1.len()).map(|_| Vec::new()).collect();

    for (i, node_a) in t1.iter().enumerate() {
        for (j, node_b) in t2.iter().enumerate() {
            if node_a.is_leaf() || node_b.is_leaf() {
                continue;
            }
            if bitmap.is_set(i, j) {
                continue;
            }
            bitmap.set(i, j);
            // Gate anti-unification on value equality, the same criterion
            // anti-unify itself uses to decide whether to recurse into a
            // child pair (§4.3 step 3) rather than full skeleton-hash
            // equality: requiring the *entire* subtree to already be
            // identical before anti-unifying would make every hole branch
            // of §4.3 unreachable, since a hash-equal pair is by
            // definition free of internal divergence. Arity is checked
            // inside `anti_unify` itself (§4.3 step 2's fallback).
            if node_a.value != node_b.value {
                continue;
            }

            let result = anti_unify(node_a, node_b, &mut bitmap);
            let match_weight = result.pattern.match_weight();
            if config.admits(match_weight, result.holes, result.max_hole_mass) {
                buckets[i].push(result.pattern);
            }
        }
    }

    let mut clones = Vec::new();
    for bucket in buckets {
        if bucket.is_empty() {
            continue;
        }
        for pattern in cluster(bucket) {
            clones.push(pattern_to_clone(&pattern, &weight_of));
        }
    }
    clones
}

fn pattern_to_clone(pattern: &PatternNode, weight_of: &IndexMap<Origin, usize>) -> DetectedClone {
    let match_weight = pattern.match_weight();
    let mut origins = indexmap::IndexMap::new();
    for origin in &pattern.origins {
        if let Some(&weight) = weight_of.get(origin) {
            origins.insert(origin.to_string(), match_weight as f64 / weight as f64);
        }
    }
    DetectedClone::from_origins(pattern.value.clone(), match_weight, origins)
}

//! Pattern clustering (§4.4): collapse a collection of [`PatternNode`]s by
//! skeleton equality, merging origin sets across equivalent members.

use indexmap::IndexMap;

use crate::model::PatternNode;

/// Partition `patterns` by [`PatternNode::skeleton_equals`]. Each class of
/// size >= 2 is collapsed into a single representative whose `origins` is
/// the union of every member's origins; classes of size 1 pass through
/// unchanged. Output order is the order of first occurrence of each class
/// in the input.
///
/// Equivalence is bucketed in linear time via [`PatternNode::canonical_key`]
/// rather than an O(n^2) pairwise comparison, per §4.4's "implementations
/// are free to memoize by a canonical structural hash".
pub fn cluster(patterns: Vec<PatternNode>) -> Vec<PatternNode> {
    let mut representatives: Vec<PatternNode> = Vec::new();
    let mut index_of_key: IndexMap<String, usize> = IndexMap::new();

    for pattern in patterns {
        let key = pattern.canonical_key();
        if let Some(&idx) = index_of_key.get(&key) {
            representatives[idx].add_origins(pattern.origins);
        } else {
            index_of_key.insert(key, representatives.len());
            representatives.push(pattern);
        }
    }

    representatives
}

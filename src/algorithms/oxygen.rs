//! Oxygen (§4.5): single-repo exact-duplicate detection by subtree hash.
//!
//! Every subtree of every method in the repo whose weight meets
//! `min_nodes` is grouped by [`TreeNode::skeleton_hash`]; groups of size
//! >= 2 become a reported clone. Nested duplicates are not suppressed — a
//! parent and a child subtree may both be reported when each independently
//! recurs elsewhere (§4.5, and the §9 open question on subsumption).

use indexmap::IndexMap;

use crate::model::{Algorithm, DetectedClone, DetectionResult, Module, Origin};

struct Occurrence {
    value: String,
    weight: usize,
    origin: Origin,
}

/// Run Oxygen over a single repo's module list.
pub fn detect(modules: &[Module], min_nodes: usize) -> DetectionResult {
    let mut groups: IndexMap<u64, Vec<Occurrence>> = IndexMap::new();

    for module in modules {
        for method in &module.method_trees {
            method.for_each_preorder(&mut |node| {
                if node.weight() >= min_nodes {
                    groups
                        .entry(node.skeleton_hash())
                        .or_default()
                        .push(Occurrence {
                            value: node.value.clone(),
                            weight: node.weight(),
                            origin: node.origin.clone(),
                        });
                }
            });
        }
    }

    let clones = groups
        .into_values()
        .filter(|members| members.len() >= 2)
        .map(|members| {
            let value = members[0].value.clone();
            let weight = members[0].weight;
            let origins: Vec<Origin> = members.into_iter().map(|o| o.origin).collect();
            DetectedClone::exact_match(value, weight, &origins)
        })
        .collect();

    DetectionResult::new(Algorithm::Oxygen, clones)
}

//! Chlorine: exact-duplicate detection across two repos by subtree hash.
//! Groups are formed exactly as in Oxygen, but a group is only reported
//! when it has at least one member from each repo. Single-repo Chlorine is
//! defined and mirrors Oxygen's contract exactly.

use indexmap::IndexMap;

use crate::algorithms::oxygen;
use crate::model::{Algorithm, DetectedClone, DetectionResult, Module, Origin};

struct Occurrence {
    value: String,
    weight: usize,
    origin: Origin,
    repo: u8,
}

/// Run Chlorine over a single repo. Mirrors Oxygen's contract exactly
/// (§4.6: "Single-repo Chlorine is defined and mirrors Oxygen's contract").
pub fn detect_single_repo(modules: &[Module], min_nodes: usize) -> DetectionResult {
    let oxygen_result = oxygen::detect(modules, min_nodes);
    DetectionResult::new(Algorithm::Chlorine, oxygen_result.clones)
}

/// Run Chlorine across two repos: a group is reported only if it contains
/// at least one member from `repo_a` and at least one from `repo_b`.
pub fn detect_two_repos(repo_a: &[Module], repo_b: &[Module], min_nodes: usize) -> DetectionResult {
    let mut groups: IndexMap<u64, Vec<Occurrence>> = IndexMap::new();
    collect(repo_a, 0, min_nodes, &mut groups);
    collect(repo_b, 1, min_nodes, &mut groups);

    let clones = groups
        .into_values()
        .filter(|members| members.len() >= 2)
        .filter(|members| {
            members.iter().any(|o| o.repo == 0) && members.iter().any(|o| o.repo == 1)
        })
        .map(|members| {
            let value = members[0].value.clone();
            let weight = members[0].weight;
            let origins: Vec<Origin> = members.into_iter().map(|o| o.origin).collect();
            DetectedClone::exact_match(value, weight, &origins)
        })
        .collect();

    DetectionResult::new(Algorithm::Chlorine, clones)
}

fn collect(
    modules: &[Module],
    repo: u8,
    min_nodes: usize,
    groups: &mut IndexMap<u64, Vec<Occurrence>>,
) {
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
                            repo,
                        });
                }
            });
        }
    }
}

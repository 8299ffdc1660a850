//! The common skeleton of two-or-more [`TreeNode`]s, with "hole" nodes
//! marking positions where the originating subtrees diverged.

use indexmap::IndexSet;

use crate::model::origin::Origin;
use crate::model::tree_node::TreeNode;

/// Sentinel value marking a divergence point between two origin subtrees.
pub const HOLE: &str = "Hole";

/// A node of the common skeleton extracted by anti-unification.
///
/// `origins` holds the [`Origin`] of every `TreeNode` this pattern (or, for
/// a leaf pattern, this exact position) was built from — at least two at
/// construction, and possibly more after [`crate::algorithms::clustering`]
/// merges skeleton-equal patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternNode {
    /// Shared value of the originating nodes, or [`HOLE`] at a divergence.
    pub value: String,
    /// Origins of every `TreeNode` that contributed to this position.
    pub origins: IndexSet<Origin>,
    /// Children in the same order as the originating nodes; empty for a
    /// hole.
    pub children: Vec<PatternNode>,
}

impl PatternNode {
    /// Construct a new pattern node from two originating `TreeNode`s.
    /// `value` defaults to [`HOLE`] when `None`, per §4.2.
    pub fn new(n1: &TreeNode, n2: &TreeNode, value: Option<String>) -> Self {
        let mut origins = IndexSet::new();
        origins.insert(n1.origin.clone());
        origins.insert(n2.origin.clone());
        Self {
            value: value.unwrap_or_else(|| HOLE.to_string()),
            origins,
            children: Vec::new(),
        }
    }

    /// Construct a hole at the given pair of diverging nodes.
    pub fn hole(a: &TreeNode, b: &TreeNode) -> Self {
        Self::new(a, b, None)
    }

    /// Whether this node is a hole.
    pub fn is_hole(&self) -> bool {
        self.value == HOLE
    }

    /// Extend the origin set with additional origins (used by clustering
    /// when merging skeleton-equal patterns).
    pub fn add_origins<I: IntoIterator<Item = Origin>>(&mut self, extra: I) {
        self.origins.extend(extra);
    }

    /// Append a child in order. Callers are responsible for keeping arity
    /// consistent with the originating nodes for non-hole patterns.
    pub fn add_child(&mut self, child: PatternNode) {
        self.children.push(child);
    }

    /// Count of non-hole nodes in this pattern (self plus descendants).
    pub fn match_weight(&self) -> usize {
        let self_weight = usize::from(!self.is_hole());
        self_weight + self.children.iter().map(PatternNode::match_weight).sum::<usize>()
    }

    /// Count of hole nodes in this pattern (self plus descendants).
    pub fn hole_count(&self) -> usize {
        let self_count = usize::from(self.is_hole());
        self_count + self.children.iter().map(PatternNode::hole_count).sum::<usize>()
    }

    /// Two patterns are skeleton-equal iff their values match, their child
    /// counts match, and every pair of corresponding children is
    /// skeleton-equal recursively. Origins are not compared.
    pub fn skeleton_equals(&self, other: &PatternNode) -> bool {
        self.value == other.value
            && self.children.len() == other.children.len()
            && self
                .children
                .iter()
                .zip(other.children.iter())
                .all(|(a, b)| a.skeleton_equals(b))
    }

    /// A canonical string over `(value, child canonical strings...)`, stable
    /// for skeleton-equal patterns and suitable for bucketing in linear
    /// time (§4.4: "implementations are free to memoize by a canonical
    /// structural hash").
    pub fn canonical_key(&self) -> String {
        let mut out = String::new();
        self.write_canonical_key(&mut out);
        out
    }

    fn write_canonical_key(&self, out: &mut String) {
        out.push('(');
        out.push_str(&self.value);
        for child in &self.children {
            child.write_canonical_key(out);
        }
        out.push(')');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(value: &str, line: usize) -> TreeNode {
        TreeNode::leaf(value, Origin::new("f.py", line, 0))
    }

    fn node(value: &str, children: Vec<TreeNode>, line: usize) -> TreeNode {
        TreeNode::new(value, children, Origin::new("f.py", line, 0))
    }

    #[test]
    fn construct_defaults_to_hole() {
        let a = leaf("Literal:1", 1);
        let b = leaf("Literal:2", 2);
        let p = PatternNode::new(&a, &b, None);
        assert!(p.is_hole());
        assert_eq!(p.origins.len(), 2);
    }

    #[test]
    fn construct_with_value_is_not_a_hole() {
        let a = leaf("Assign", 1);
        let b = leaf("Assign", 2);
        let p = PatternNode::new(&a, &b, Some("Assign".to_string()));
        assert!(!p.is_hole());
    }

    #[test]
    fn match_weight_counts_non_hole_nodes() {
        let a = node("Block", vec![leaf("Assign", 1), leaf("Return", 2)], 0);
        let b = node("Block", vec![leaf("Assign", 1), leaf("Return", 2)], 0);
        let mut p = PatternNode::new(&a, &b, Some("Block".to_string()));
        p.add_child(PatternNode::new(
            &a.children[0],
            &b.children[0],
            Some("Assign".to_string()),
        ));
        p.add_child(PatternNode::hole(&a.children[1], &b.children[1]));
        assert_eq!(p.match_weight(), 2);
        assert_eq!(p.hole_count(), 1);
    }

    #[test]
    fn skeleton_equals_ignores_origins() {
        let a1 = leaf("Assign", 1);
        let b1 = leaf("Assign", 2);
        let a2 = leaf("Assign", 99);
        let b2 = leaf("Assign", 100);
        let p1 = PatternNode::new(&a1, &b1, Some("Assign".to_string()));
        let p2 = PatternNode::new(&a2, &b2, Some("Assign".to_string()));
        assert!(p1.skeleton_equals(&p2));
        assert_ne!(p1.origins, p2.origins);
    }

    #[test]
    fn skeleton_equals_is_reflexive_symmetric_transitive() {
        let a = leaf("Assign", 1);
        let b = leaf("Assign", 2);
        let c = leaf("Assign", 3);
        let p1 = PatternNode::new(&a, &b, Some("Assign".to_string()));
        let p2 = PatternNode::new(&b, &c, Some("Assign".to_string()));
        let p3 = PatternNode::new(&a, &c, Some("Assign".to_string()));
        assert!(p1.skeleton_equals(&p1));
        assert_eq!(p1.skeleton_equals(&p2), p2.skeleton_equals(&p1));
        assert!(p1.skeleton_equals(&p2) && p2.skeleton_equals(&p3) && p1.skeleton_equals(&p3));
    }

    #[test]
    fn differing_arity_is_not_skeleton_equal() {
        let a = node("Block", vec![leaf("Assign", 1)], 0);
        let b = node("Block", vec![leaf("Assign", 2)], 0);
        let c = node("Block", vec![leaf("Assign", 3), leaf("Return", 4)], 0);
        let d = node("Block", vec![leaf("Assign", 5), leaf("Return", 6)], 0);

        let mut p1 = PatternNode::new(&a, &b, Some("Block".to_string()));
        p1.add_child(PatternNode::new(
            &a.children[0],
            &b.children[0],
            Some("Assign".to_string()),
        ));

        let mut p2 = PatternNode::new(&c, &d, Some("Block".to_string()));
        p2.add_child(PatternNode::new(
            &c.children[0],
            &d.children[0],
            Some("Assign".to_string()),
        ));
        p2.add_child(PatternNode::new(
            &c.children[1],
            &d.children[1],
            Some("Return".to_string()),
        ));

        assert!(!p1.skeleton_equals(&p2));
    }
}

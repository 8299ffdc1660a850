//! The canonical AST representation the engine operates on.

use serde::{Deserialize, Deserializer, Serialize};
use xxhash_rust::xxh3::Xxh3;

use crate::model::origin::Origin;

/// A node of a parsed method AST.
///
/// `weight` and `skeleton_hash` are computed bottom-up at construction and
/// are immutable thereafter — including when a `TreeNode` is deserialized
/// from caller-supplied JSON, which only ever carries `value`, `children`,
/// and `origin`; weight and hash are always recomputed, never trusted from
/// the wire. `index` starts unset and is assigned only by
/// [`TreeNode::flatten`], which numbers every node (this one and all its
/// descendants) by preorder DFS position.
#[derive(Debug, Clone, Serialize)]
pub struct TreeNode {
    /// Syntactic kind plus normalized literal, e.g. `"FunctionDef:foo"`.
    /// Equality for skeletal comparison is string equality of this field.
    pub value: String,
    /// Ordered children; order is significant.
    pub children: Vec<TreeNode>,
    /// Source position of this node's root surface syntax.
    pub origin: Origin,
    /// Total node count of this subtree (self + all descendants).
    #[serde(skip_deserializing)]
    weight: usize,
    /// Content hash over `(value, child_hashes...)`.
    #[serde(skip_deserializing)]
    skeleton_hash: u64,
    /// Preorder position within the most recent [`TreeNode::flatten`] call.
    #[serde(skip)]
    index: Option<usize>,
}

/// Wire shape accepted from callers: only the fields a parser can supply.
/// Weight and skeleton hash are always derived, never trusted verbatim.
#[derive(Deserialize)]
struct RawTreeNode {
    value: String,
    #[serde(default)]
    children: Vec<RawTreeNode>,
    origin: Origin,
}

impl<'de> Deserialize<'de> for TreeNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawTreeNode::deserialize(deserializer)?;
        Ok(TreeNode::from_raw(raw))
    }
}

impl TreeNode {
    /// Construct a new node, computing its weight and skeleton hash
    /// bottom-up from the already-constructed children.
    pub fn new(value: impl Into<String>, children: Vec<TreeNode>, origin: Origin) -> Self {
        let value = value.into();
        let weight = 1 + children.iter().map(|c| c.weight).sum::<usize>();
        let skeleton_hash = compute_skeleton_hash(&value, &children);
        Self {
            value,
            children,
            origin,
            weight,
            skeleton_hash,
            index: None,
        }
    }

    /// Construct a leaf node (no children).
    pub fn leaf(value: impl Into<String>, origin: Origin) -> Self {
        Self::new(value, Vec::new(), origin)
    }

    fn from_raw(raw: RawTreeNode) -> Self {
        let children = raw.children.into_iter().map(TreeNode::from_raw).collect();
        TreeNode::new(raw.value, children, raw.origin)
    }

    /// Total node count of this subtree (self + all descendants).
    pub fn weight(&self) -> usize {
        self.weight
    }

    /// Content hash over `(value, child_hashes...)`; the equivalence key
    /// used by Oxygen and Chlorine, and the fast-path equality Iodine
    /// tests before attempting anti-unification.
    pub fn skeleton_hash(&self) -> u64 {
        self.skeleton_hash
    }

    /// Arity: number of direct children.
    pub fn arity(&self) -> usize {
        self.children.len()
    }

    /// Whether this node is a leaf (no children).
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Preorder position assigned by the most recent [`TreeNode::flatten`]
    /// call on a tree containing this node, if any.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Fast equality used by the detection algorithms: `skeleton_hash`
    /// equality alone, treating collisions as negligible. See
    /// [`TreeNode::structural_eq`] for the full recursive tiebreak used to
    /// verify that assumption in tests.
    pub fn skeleton_eq(&self, other: &TreeNode) -> bool {
        self.skeleton_hash == other.skeleton_hash
    }

    /// Full recursive structural equality: same value, same arity, and
    /// every child pair structurally equal. Used as the collision tiebreak
    /// for [`TreeNode::skeleton_eq`] and exercised directly by tests
    /// asserting hash-collision safety never actually triggers in practice.
    pub fn structural_eq(&self, other: &TreeNode) -> bool {
        self.value == other.value
            && self.children.len() == other.children.len()
            && self
                .children
                .iter()
                .zip(other.children.iter())
                .all(|(a, b)| a.structural_eq(b))
    }

    /// Visit every node of this subtree (including `self`) in preorder DFS
    /// order without cloning or assigning indices. Oxygen and Chlorine use
    /// this instead of [`TreeNode::flatten`] since they never need the
    /// `index` field that flattening computes.
    pub fn for_each_preorder<'a, F: FnMut(&'a TreeNode)>(&'a self, visit: &mut F) {
        visit(self);
        for child in &self.children {
            child.for_each_preorder(visit);
        }
    }

    /// Number each node of this tree (this node and every descendant) by
    /// preorder DFS position, then return a flattened clone of the tree in
    /// that same order. Each returned node's [`TreeNode::index`] reflects
    /// its position in the returned list.
    pub fn flatten(&mut self) -> Vec<TreeNode> {
        let mut counter = 0usize;
        assign_indices(self, &mut counter);

        let mut out = Vec::with_capacity(counter);
        collect_preorder(self, &mut out);
        out
    }
}

fn assign_indices(node: &mut TreeNode, counter: &mut usize) {
    node.index = Some(*counter);
    *counter += 1;
    for child in &mut node.children {
        assign_indices(child, counter);
    }
}

fn collect_preorder(node: &TreeNode, out: &mut Vec<TreeNode>) {
    out.push(node.clone());
    for child in &node.children {
        collect_preorder(child, out);
    }
}

fn compute_skeleton_hash(value: &str, children: &[TreeNode]) -> u64 {
    let mut hasher = Xxh3::new();
    hasher.update(value.as_bytes());
    hasher.update(&children.len().to_le_bytes());
    for child in children {
        hasher.update(&child.skeleton_hash.to_le_bytes());
    }
    hasher.digest()
}

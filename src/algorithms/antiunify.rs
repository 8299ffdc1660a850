//! Anti-unification: given two structurally-equal roots, compute the
//! maximal common skeleton as a [`PatternNode`], counting holes and the
//! largest hole mass along the way.

use bitvec::vec::BitVec;

use crate::model::{PatternNode, TreeNode};

/// Dense `|T1| x |T2|` work bitmap suppressing re-entry into subtree pairs
/// already visited by a prior anti-unification call. A hash-set of `(i, j)`
/// pairs would behave identically; the dense form is used here because
/// method ASTs are small enough that it costs less than the bookkeeping of
/// a set.
pub struct WorkBitmap {
    bits: BitVec,
    cols: usize,
}

impl WorkBitmap {
    /// Allocate a cleared `rows x cols` bitmap.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            bits: BitVec::repeat(false, rows.saturating_mul(cols)),
            cols,
        }
    }

    fn index(&self, i: usize, j: usize) -> usize {
        i * self.cols + j
    }

    /// Whether `(i, j)` has already been visited.
    pub fn is_set(&self, i: usize, j: usize) -> bool {
        self.bits[self.index(i, j)]
    }

    /// Mark `(i, j)` as visited.
    pub fn set(&mut self, i: usize, j: usize) {
        let idx = self.index(i, j);
        self.bits.set(idx, true);
    }
}

/// The result of anti-unifying a pair of nodes: the common-skeleton
/// pattern, its hole count, and the largest hole mass encountered.
pub struct AntiUnifyResult {
    /// The extracted pattern.
    pub pattern: PatternNode,
    /// Number of hole positions in `pattern`.
    pub holes: usize,
    /// Largest weight of any origin subtree replaced by a hole, on either
    /// side, anywhere in `pattern`. Zero if there were no holes.
    pub max_hole_mass: usize,
}

/// Anti-unify `a` and `b`, assumed value-equal by the caller (Iodine checks
/// `a.value == b.value` before calling; see its module docs for why this is
/// value equality rather than full skeleton-hash equality). Marks every
/// node pair this
/// call visits — including positions that become holes — in `bitmap`, via
/// each node's `index` (assigned by a prior [`TreeNode::flatten`] call), so
/// the outer scan does not re-enter these subtrees as independent seeds.
pub fn anti_unify(a: &TreeNode, b: &TreeNode, bitmap: &mut WorkBitmap) -> AntiUnifyResult {
    mark(a, b, bitmap);

    if a.arity() != b.arity() {
        // Same value, different child count (e.g. a call with a different
        // argument count). Fall back to a hole rather than treating it as
        // an error.
        return AntiUnifyResult {
            pattern: PatternNode::hole(a, b),
            holes: 1,
            max_hole_mass: a.weight().max(b.weight()),
        };
    }

    let mut pattern = PatternNode::new(a, b, Some(a.value.clone()));
    let mut holes = 0;
    let mut max_hole_mass = 0;

    for (child_a, child_b) in a.children.iter().zip(b.children.iter()) {
        if child_a.value == child_b.value && child_a.arity() == child_b.arity() {
            let child_result = anti_unify(child_a, child_b, bitmap);
            holes += child_result.holes;
            max_hole_mass = max_hole_mass.max(child_result.max_hole_mass);
            pattern.add_child(child_result.pattern);
        } else {
            mark(child_a, child_b, bitmap);
            holes += 1;
            max_hole_mass = max_hole_mass.max(child_a.weight()).max(child_b.weight());
            pattern.add_child(PatternNode::hole(child_a, child_b));
        }
    }

    AntiUnifyResult {
        pattern,
        holes,
        max_hole_mass,
    }
}

fn mark(a: &TreeNode, b: &TreeNode, bitmap: &mut WorkBitmap) {
    if let (Some(i), Some(j)) = (a.index(), b.index()) {
        bitmap.set(i, j);
    }
}

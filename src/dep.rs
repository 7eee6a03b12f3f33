//! Dependency tracking for derived equations.
//!
//! Every input equation carries an opaque witness; every combination of
//! two equations joins their witnesses. The solver never inspects a
//! witness — it only joins and propagates them — so a conflict's
//! witness names exactly the inputs that participated in deriving it.

use smallvec::SmallVec;

/// Handle to a dependency node. `Option<DepId>` models the empty witness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DepId(u32);

impl DepId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy)]
enum DepNode {
    Leaf(u32),
    Join(DepId, DepId),
}

/// Arena of dependency nodes with join-semilattice construction.
#[derive(Debug, Default)]
pub struct DepManager {
    nodes: Vec<DepNode>,
}

impl DepManager {
    /// Create an empty manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a leaf witness carrying a host-chosen label.
    pub fn mk_leaf(&mut self, label: u32) -> DepId {
        let id = DepId(self.nodes.len() as u32);
        self.nodes.push(DepNode::Leaf(label));
        id
    }

    /// Join two witnesses. `None` is the identity; joining a witness
    /// with itself is a no-op.
    pub fn mk_join(&mut self, a: Option<DepId>, b: Option<DepId>) -> Option<DepId> {
        match (a, b) {
            (None, d) | (d, None) => d,
            (Some(x), Some(y)) if x == y => Some(x),
            (Some(x), Some(y)) => {
                let id = DepId(self.nodes.len() as u32);
                self.nodes.push(DepNode::Join(x, y));
                Some(id)
            }
        }
    }

    /// Flatten a witness to its sorted, deduplicated leaf labels.
    #[must_use]
    pub fn labels(&self, dep: Option<DepId>) -> Vec<u32> {
        let mut out: Vec<u32> = Vec::new();
        let mut stack: SmallVec<[DepId; 16]> = SmallVec::new();
        if let Some(d) = dep {
            stack.push(d);
        }
        while let Some(d) = stack.pop() {
            match self.nodes[d.index()] {
                DepNode::Leaf(label) => out.push(label),
                DepNode::Join(l, r) => {
                    stack.push(l);
                    stack.push(r);
                }
            }
        }
        out.sort_unstable();
        out.dedup();
        out
    }

    /// Drop every node.
    pub fn reset(&mut self) {
        self.nodes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_identity() {
        let mut deps = DepManager::new();
        let a = deps.mk_leaf(7);
        assert_eq!(deps.mk_join(Some(a), None), Some(a));
        assert_eq!(deps.mk_join(None, Some(a)), Some(a));
        assert_eq!(deps.mk_join(None, None), None);
        assert_eq!(deps.mk_join(Some(a), Some(a)), Some(a));
    }

    #[test]
    fn test_labels_flatten_and_dedup() {
        let mut deps = DepManager::new();
        let a = deps.mk_leaf(2);
        let b = deps.mk_leaf(0);
        let ab = deps.mk_join(Some(a), Some(b));
        let aba = deps.mk_join(ab, Some(a));
        assert_eq!(deps.labels(aba), vec![0, 2]);
        assert_eq!(deps.labels(None), Vec::<u32>::new());
    }
}

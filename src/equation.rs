//! Equations: one polynomial with provenance and queue bookkeeping.

use crate::dep::DepId;
use crate::pdd::PddId;

/// Stable handle to an equation owned by the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EqId(pub(crate) u32);

impl EqId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Which queue an equation currently belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EqState {
    /// Waiting to be picked and reduced.
    ToSimplify,
    /// Fully reduced against the current basis; used as a rewrite rule
    /// and superposition partner.
    Processed,
    /// Oriented definition of its leading variable (constant high
    /// branch); kept out of the active loop.
    Solved,
}

/// A polynomial equation `p = 0` with its dependency witness and its
/// position in the queue named by its state.
#[derive(Debug, Clone)]
pub struct Equation {
    pub(crate) poly: PddId,
    pub(crate) dep: Option<DepId>,
    pub(crate) state: EqState,
    pub(crate) idx: u32,
}

impl Equation {
    pub(crate) fn new(poly: PddId, dep: Option<DepId>) -> Self {
        Self {
            poly,
            dep,
            state: EqState::ToSimplify,
            idx: 0,
        }
    }

    /// The polynomial.
    #[must_use]
    pub fn poly(&self) -> PddId {
        self.poly
    }

    /// The dependency witness, `None` for an empty one.
    #[must_use]
    pub fn dep(&self) -> Option<DepId> {
        self.dep
    }

    /// Current queue membership.
    #[must_use]
    pub fn state(&self) -> EqState {
        self.state
    }

    /// Index within the queue named by [`state`](Self::state).
    #[must_use]
    pub fn idx(&self) -> usize {
        self.idx as usize
    }
}

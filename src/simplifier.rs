//! Pre-saturation simplification.
//!
//! Runs before the watch index is built: inter-reduces the candidate
//! queue until a pass makes no change, retiring equations that collapse
//! to zero and routing nonzero constants to the conflict slot.
//! Candidates are rewritten by the solved definitions first, which
//! keeps solved leading variables out of the working queues across
//! add-then-resaturate cycles.

use crate::equation::{EqId, EqState};
use crate::pdd::PddError;
use crate::solver::Solver;

pub(crate) struct Simplifier<'a> {
    s: &'a mut Solver,
}

impl<'a> Simplifier<'a> {
    pub(crate) fn new(s: &'a mut Solver) -> Self {
        Self { s }
    }

    pub(crate) fn run(&mut self) -> Result<(), PddError> {
        loop {
            let mut change = false;
            let snapshot: Vec<EqId> = self.s.to_simplify.clone();
            for target in snapshot {
                if self.s.done() {
                    return Ok(());
                }
                if !self.s.alive(target) || self.s.eq(target).state() != EqState::ToSimplify {
                    continue;
                }
                change |= self.simplify_one(target)?;
            }
            if !change {
                return Ok(());
            }
        }
    }

    /// One round on `target`: substitute solved definitions, then
    /// reduce by the other candidates, then dispatch on the outcome.
    fn simplify_one(&mut self, target: EqId) -> Result<bool, PddError> {
        let mut change = false;
        for i in 0..self.s.solved.len() {
            if self.s.canceled() || self.s.poly_is_val(target) {
                break;
            }
            let src = self.s.solved[i];
            let (simplified, _) = self.s.try_simplify_using(target, src)?;
            change |= simplified;
        }
        for i in 0..self.s.to_simplify.len() {
            if self.s.canceled() || self.s.poly_is_val(target) {
                break;
            }
            let src = self.s.to_simplify[i];
            if src == target {
                continue;
            }
            let (simplified, _) = self.s.try_simplify_using(target, src)?;
            change |= simplified;
        }
        if self.s.is_trivial(target) {
            self.s.pop_equation(target);
            self.s.retire(target);
        } else if self.s.poly_is_val(target) {
            self.s.pop_equation(target);
            self.s.set_conflict(target);
        }
        Ok(change)
    }
}

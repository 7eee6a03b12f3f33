//! The saturation core.
//!
//! The solver maintains two working sets: `processed` holds equations
//! that are inter-reduced against each other, `to_simplify` holds
//! candidates still to be folded in. Each step picks a candidate,
//! reduces it against `processed`, reduces `processed` against it,
//! superposes it with every processed equation, rewrites the watched
//! candidates that share its leading variable, and finally commits it.
//! A per-variable watch index drives candidate discovery: every
//! `to_simplify` equation is registered under its leading variable, and
//! `pick_next` scans levels from the top of the variable order
//! downward, so top-level variables are eliminated first.
//!
//! Saturation stops at a fixed point, on a derived nonzero constant
//! (inconsistency), or when a configured limit is hit; in every case
//! the surviving queues stay observable.

use std::fmt;

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::config::SolverConfig;
use crate::dep::{DepId, DepManager};
use crate::equation::{EqId, EqState, Equation};
use crate::pdd::{PddError, PddId, PddManager, Var};
use crate::resource::ResourceLimit;
use crate::simplifier::Simplifier;
use crate::statistics::{SolverStats, Statistics};

/// Gröbner-basis saturation engine over decision-diagram polynomials.
pub struct Solver {
    pub(crate) m: PddManager,
    pub(crate) deps: DepManager,
    limit: ResourceLimit,
    config: SolverConfig,
    eqs: Vec<Option<Equation>>,
    free_ids: Vec<u32>,
    pub(crate) solved: Vec<EqId>,
    pub(crate) processed: Vec<EqId>,
    pub(crate) to_simplify: Vec<EqId>,
    watch: Vec<Vec<EqId>>,
    level2var: Vec<Var>,
    var2level: Vec<u32>,
    levelp1: usize,
    conflict: Option<EqId>,
    too_complex: bool,
    stats: SolverStats,
}

impl Solver {
    /// Create a solver owning `m`, with a fresh cancellation handle.
    #[must_use]
    pub fn new(m: PddManager) -> Self {
        Self::with_limit(m, ResourceLimit::new())
    }

    /// Create a solver sharing the host's cancellation handle.
    #[must_use]
    pub fn with_limit(m: PddManager, limit: ResourceLimit) -> Self {
        Self {
            m,
            deps: DepManager::new(),
            limit,
            config: SolverConfig::default(),
            eqs: Vec::new(),
            free_ids: Vec::new(),
            solved: Vec::new(),
            processed: Vec::new(),
            to_simplify: Vec::new(),
            watch: Vec::new(),
            level2var: Vec::new(),
            var2level: Vec::new(),
            levelp1: 0,
            conflict: None,
            too_complex: false,
            stats: SolverStats::default(),
        }
    }

    /// The polynomial manager.
    #[must_use]
    pub fn pdd(&self) -> &PddManager {
        &self.m
    }

    /// Mutable access to the polynomial manager, for building inputs.
    pub fn pdd_mut(&mut self) -> &mut PddManager {
        &mut self.m
    }

    /// The dependency manager.
    #[must_use]
    pub fn deps(&self) -> &DepManager {
        &self.deps
    }

    /// Mutable access to the dependency manager, for minting witnesses.
    pub fn deps_mut(&mut self) -> &mut DepManager {
        &mut self.deps
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Mutable configuration access.
    pub fn config_mut(&mut self) -> &mut SolverConfig {
        &mut self.config
    }

    /// The cancellation handle this solver polls.
    #[must_use]
    pub fn resource_limit(&self) -> &ResourceLimit {
        &self.limit
    }

    /// Raw counters.
    #[must_use]
    pub fn stats(&self) -> &SolverStats {
        &self.stats
    }

    // -- equation storage -------------------------------------------------

    fn alloc_equation(&mut self, poly: PddId, dep: Option<DepId>) -> EqId {
        let eq = Equation::new(poly, dep);
        if let Some(slot) = self.free_ids.pop() {
            self.eqs[slot as usize] = Some(eq);
            EqId(slot)
        } else {
            self.eqs.push(Some(eq));
            EqId((self.eqs.len() - 1) as u32)
        }
    }

    pub(crate) fn eq(&self, id: EqId) -> &Equation {
        self.eqs[id.index()].as_ref().expect("stale equation id")
    }

    fn eq_mut(&mut self, id: EqId) -> &mut Equation {
        self.eqs[id.index()].as_mut().expect("stale equation id")
    }

    pub(crate) fn alive(&self, id: EqId) -> bool {
        self.eqs[id.index()].is_some()
    }

    pub(crate) fn retire(&mut self, id: EqId) {
        self.eqs[id.index()] = None;
        self.free_ids.push(id.0);
    }

    // -- queues -----------------------------------------------------------

    fn queue_mut(&mut self, state: EqState) -> &mut Vec<EqId> {
        match state {
            EqState::Solved => &mut self.solved,
            EqState::Processed => &mut self.processed,
            EqState::ToSimplify => &mut self.to_simplify,
        }
    }

    pub(crate) fn push_equation(&mut self, state: EqState, id: EqId) {
        debug_assert!(!self.m.is_val(self.eq(id).poly));
        self.eq_mut(id).state = state;
        let q = self.queue_mut(state);
        let idx = q.len() as u32;
        q.push(id);
        self.eq_mut(id).idx = idx;
    }

    pub(crate) fn pop_equation(&mut self, id: EqId) {
        let (state, idx) = {
            let e = self.eq(id);
            (e.state, e.idx as usize)
        };
        let q = self.queue_mut(state);
        debug_assert_eq!(q[idx], id);
        q.swap_remove(idx);
        let moved = if idx < q.len() { Some(q[idx]) } else { None };
        if let Some(mv) = moved {
            self.eq_mut(mv).idx = idx as u32;
        }
    }

    // -- predicates -------------------------------------------------------

    pub(crate) fn is_trivial(&self, id: EqId) -> bool {
        self.m.is_zero(self.eq(id).poly)
    }

    pub(crate) fn poly_is_val(&self, id: EqId) -> bool {
        self.m.is_val(self.eq(id).poly)
    }

    fn is_conflict_eq(&self, id: EqId) -> bool {
        let p = self.eq(id).poly;
        self.m.is_val(p) && !self.m.is_zero(p)
    }

    pub(crate) fn set_conflict(&mut self, id: EqId) {
        if self.conflict.is_none() {
            debug!("conflict derived");
            self.conflict = Some(id);
        } else {
            // the slot is set exactly once; later witnesses are dropped
            self.retire(id);
        }
    }

    pub(crate) fn check_conflict(&mut self, id: EqId) -> bool {
        if self.is_conflict_eq(id) {
            self.set_conflict(id);
            true
        } else {
            false
        }
    }

    fn is_too_complex(&mut self, p: PddId) -> bool {
        self.m.tree_size(p) > self.config.max_expr_size
            || self.m.degree(p) > self.config.max_expr_degree
    }

    pub(crate) fn canceled(&self) -> bool {
        self.limit.is_canceled()
    }

    /// Should the saturation loop stop? True on reaching the equation
    /// or step threshold, on cancellation, and once a conflict is
    /// recorded. These are soft stops: the queues stay observable.
    #[must_use]
    pub fn done(&self) -> bool {
        self.to_simplify.len() + self.processed.len() >= self.config.eqs_threshold
            || self.canceled()
            || self.stats.compute_steps > self.config.max_steps as u64
            || self.conflict.is_some()
    }

    // -- input ------------------------------------------------------------

    /// Insert the equation `p = 0` with dependency witness `dep`.
    ///
    /// Zero polynomials are ignored; nonzero constants set the conflict
    /// slot immediately.
    pub fn add(&mut self, p: PddId, dep: Option<DepId>) {
        if self.m.is_zero(p) {
            return;
        }
        let id = self.alloc_equation(p, dep);
        if self.check_conflict(id) {
            return;
        }
        self.push_equation(EqState::ToSimplify, id);
        if !self.watch.is_empty() {
            let level = self.var2level[self.m.var(p) as usize] as usize;
            self.levelp1 = self.levelp1.max(level + 1);
            self.add_to_watch(id);
        }
        self.update_stats_max_degree_and_size(id);
    }

    // -- watch index ------------------------------------------------------

    fn add_to_watch(&mut self, id: EqId) {
        debug_assert_eq!(self.eq(id).state, EqState::ToSimplify);
        let p = self.eq(id).poly;
        if !self.m.is_val(p) {
            let v = self.m.var(p) as usize;
            self.watch[v].push(id);
        }
    }

    fn init_saturate(&mut self) {
        self.level2var = self.m.level2var().to_vec();
        self.var2level = vec![0; self.level2var.len()];
        for (level, &v) in self.level2var.iter().enumerate() {
            self.var2level[v as usize] = level as u32;
        }
        self.watch.clear();
        self.watch.resize(self.level2var.len(), Vec::new());
        self.levelp1 = self.level2var.len();
        let candidates = self.to_simplify.clone();
        for id in candidates {
            self.add_to_watch(id);
        }
    }

    /// Rewrite the watched candidates sharing `eq`'s leading variable
    /// and repartition them: retired when zero, conflict when a nonzero
    /// constant, migrated when the leading variable moved, kept
    /// otherwise.
    fn simplify_watch(&mut self, eq: EqId) -> Result<(), PddError> {
        let v = self.m.var(self.eq(eq).poly) as usize;
        let sz = self.watch[v].len();
        let mut j = 0;
        for i in 0..sz {
            let target = self.watch[v][i];
            debug_assert_eq!(self.eq(target).state, EqState::ToSimplify);
            if !self.done() {
                self.try_simplify_using(target, eq)?;
            }
            if self.is_trivial(target) {
                self.pop_equation(target);
                self.retire(target);
            } else if self.is_conflict_eq(target) {
                self.pop_equation(target);
                self.set_conflict(target);
            } else {
                let w = self.m.var(self.eq(target).poly) as usize;
                if w != v {
                    self.watch[w].push(target);
                } else {
                    self.watch[v][j] = target;
                    j += 1;
                }
            }
        }
        self.watch[v].truncate(j);
        Ok(())
    }

    // -- reducer ----------------------------------------------------------

    /// Try to rewrite `dst` modulo `src`. Returns `(simplified,
    /// changed_leading_term)`; the flag is only raised for processed
    /// targets, whose leading-term moves violate the watch discipline.
    /// A result above the complexity caps is discarded and the
    /// too-complex marker set.
    pub(crate) fn try_simplify_using(
        &mut self,
        dst: EqId,
        src: EqId,
    ) -> Result<(bool, bool), PddError> {
        if dst == src {
            return Ok((false, false));
        }
        let (sp, sd) = {
            let s = self.eq(src);
            (s.poly, s.dep)
        };
        let dp = self.eq(dst).poly;
        let r = self.m.reduce(dp, sp)?;
        if r == dp {
            return Ok((false, false));
        }
        if self.is_too_complex(r) {
            self.too_complex = true;
            return Ok((false, false));
        }
        trace!(
            "reduce {} by {} to {}",
            self.m.display(dp),
            self.m.display(sp),
            self.m.display(r)
        );
        let changed =
            self.eq(dst).state == EqState::Processed && self.m.different_leading_term(r, dp);
        let ddep = self.eq(dst).dep;
        let dep = self.deps.mk_join(ddep, sd);
        {
            let e = self.eq_mut(dst);
            e.poly = r;
            e.dep = dep;
        }
        self.stats.simplified += 1;
        self.update_stats_max_degree_and_size(dst);
        Ok((true, changed))
    }

    /// Reduce `eq` by every processed equation until a fixed point.
    /// Reducing by a later equation can re-enable an earlier one, hence
    /// the outer loop.
    fn simplify_with_processed(&mut self, eq: EqId) -> Result<(), PddError> {
        loop {
            let mut simplified = false;
            for i in 0..self.processed.len() {
                let src = self.processed[i];
                let (s, _) = self.try_simplify_using(eq, src)?;
                if s {
                    simplified = true;
                }
                if self.canceled() || self.poly_is_val(eq) {
                    break;
                }
            }
            if !simplified || self.poly_is_val(eq) {
                return Ok(());
            }
        }
    }

    /// Reduce every processed equation by `eq`, compacting the queue in
    /// place. Targets whose leading term moved go back to
    /// `to_simplify`; zero targets are retired; nonzero constants
    /// become the conflict witness. Compaction completes even when a
    /// reduction fails with `MemOut`.
    fn simplify_processed_with(&mut self, eq: EqId) -> Result<(), PddError> {
        let sz = self.processed.len();
        let mut j = 0;
        let mut deferred: Result<(), PddError> = Ok(());
        for i in 0..sz {
            let target = self.processed[i];
            let mut simplified = false;
            let mut changed = false;
            if deferred.is_ok() && !self.done() {
                match self.try_simplify_using(target, eq) {
                    Ok((s, c)) => {
                        simplified = s;
                        changed = c;
                    }
                    Err(e) => deferred = Err(e),
                }
            }
            if simplified && self.is_trivial(target) {
                self.retire(target);
            } else if simplified && self.is_conflict_eq(target) {
                self.set_conflict(target);
            } else if simplified && changed {
                self.push_equation(EqState::ToSimplify, target);
                if !self.watch.is_empty() {
                    let v = self.m.var(self.eq(target).poly);
                    let level = self.var2level[v as usize] as usize;
                    self.levelp1 = self.levelp1.max(level + 1);
                    self.add_to_watch(target);
                }
            } else {
                self.processed[j] = target;
                self.eq_mut(target).idx = j as u32;
                j += 1;
            }
        }
        self.processed.truncate(j);
        deferred
    }

    // -- superposer -------------------------------------------------------

    /// With `eq1 = v*a + q` and `eq2 = v*c + e`, the S-polynomial
    /// `c*q - a*e` cancels the shared leading variable; the result is
    /// inserted as a new candidate carrying the joined witness.
    fn superpose(&mut self, eq1: EqId, eq2: EqId) -> Result<(), PddError> {
        let (p1, d1) = {
            let e = self.eq(eq1);
            (e.poly, e.dep)
        };
        let (p2, d2) = {
            let e = self.eq(eq2);
            (e.poly, e.dep)
        };
        if let Some(r) = self.m.try_spoly(p1, p2)? {
            if !self.m.is_zero(r) {
                if self.is_too_complex(r) {
                    self.too_complex = true;
                } else {
                    self.stats.superposed += 1;
                    let dep = self.deps.mk_join(d1, d2);
                    self.add(r, dep);
                }
            }
        }
        Ok(())
    }

    fn superpose_with_processed(&mut self, eq: EqId) -> Result<(), PddError> {
        for i in 0..self.processed.len() {
            let target = self.processed[i];
            self.superpose(eq, target)?;
        }
        Ok(())
    }

    // -- scheduler --------------------------------------------------------

    /// Pick the next candidate: scan levels from the top of the order
    /// downward and take the simplest watched equation at the highest
    /// inhabited level. Exhausted levels are skipped permanently within
    /// this saturation round (`levelp1` only decreases here).
    fn pick_next(&mut self) -> Option<EqId> {
        while self.levelp1 > 0 {
            let v = self.level2var[self.levelp1 - 1] as usize;
            let mut best: Option<EqId> = None;
            for i in 0..self.watch[v].len() {
                let curr = self.watch[v][i];
                let (state, p) = {
                    let e = self.eq(curr);
                    (e.state, e.poly)
                };
                if state != EqState::ToSimplify || self.m.is_val(p) || self.m.var(p) as usize != v
                {
                    continue;
                }
                match best {
                    None => best = Some(curr),
                    Some(b) => {
                        if self.is_simpler(curr, b) {
                            best = Some(curr);
                        }
                    }
                }
            }
            if let Some(id) = best {
                self.pop_equation(id);
                let pos = self.watch[v]
                    .iter()
                    .position(|&e| e == id)
                    .expect("picked equation must be watched");
                self.watch[v].remove(pos);
                return Some(id);
            }
            self.levelp1 -= 1;
        }
        None
    }

    /// Candidate order at one level: lower leading-term degree first,
    /// then smaller representation; remaining ties keep the earlier
    /// watch entry.
    fn is_simpler(&self, a: EqId, b: EqId) -> bool {
        let (pa, pb) = (self.eq(a).poly, self.eq(b).poly);
        let (da, db) = (self.m.leading_degree(pa), self.m.leading_degree(pb));
        if da != db {
            return da < db;
        }
        self.m.tree_size(pa) < self.m.tree_size(pb)
    }

    // -- saturation loop --------------------------------------------------

    /// Run to a fixed point, a conflict, or a configured limit.
    ///
    /// Starts with one pre-saturation simplification pass, then
    /// iterates pick/reduce/superpose/commit. If the manager's node
    /// budget runs out the watch index is dropped and saturation stops
    /// with the current queues preserved; after that, only
    /// [`equations`](Self::equations), [`conflict`](Self::conflict),
    /// [`collect_statistics`](Self::collect_statistics), display and
    /// [`reset`](Self::reset) are meaningful.
    pub fn saturate(&mut self) {
        debug!(
            candidates = self.to_simplify.len(),
            "saturation started"
        );
        match self.saturate_core() {
            Ok(()) => {}
            Err(PddError::MemOut(_)) => {
                // don't reduce further
                self.watch.clear();
                self.levelp1 = 0;
                debug!("node budget exhausted, saturation abandoned");
            }
        }
    }

    fn saturate_core(&mut self) -> Result<(), PddError> {
        self.simplify()?;
        self.init_saturate();
        while !self.done() && self.step()? {
            #[cfg(debug_assertions)]
            self.assert_invariants();
        }
        #[cfg(debug_assertions)]
        self.assert_invariants();
        Ok(())
    }

    fn simplify(&mut self) -> Result<(), PddError> {
        Simplifier::new(self).run()
    }

    fn step(&mut self) -> Result<bool, PddError> {
        self.stats.compute_steps += 1;
        let Some(eq) = self.pick_next() else {
            return Ok(false);
        };
        match self.step_with(eq) {
            Ok(progress) => Ok(progress),
            Err(e) => {
                // park the in-flight equation before surfacing the failure
                self.push_equation(EqState::Processed, eq);
                Err(e)
            }
        }
    }

    fn step_with(&mut self, eq: EqId) -> Result<bool, PddError> {
        debug_assert_eq!(self.eq(eq).state, EqState::ToSimplify);
        self.simplify_with_processed(eq)?;
        if self.is_trivial(eq) {
            self.retire(eq);
            return Ok(true);
        }
        if self.check_conflict(eq) {
            return Ok(false);
        }
        self.too_complex = false;
        self.simplify_processed_with(eq)?;
        if self.done() {
            self.push_equation(EqState::Processed, eq);
            return Ok(false);
        }
        trace!("step on {}", self.m.display(self.eq(eq).poly));
        self.superpose_with_processed(eq)?;
        self.simplify_watch(eq)?;
        if self.done() {
            self.push_equation(EqState::Processed, eq);
            return Ok(false);
        }
        // commit: a too-complex step parks its equation without
        // claiming solved form
        if !self.too_complex && self.m.is_solved_form(self.eq(eq).poly) {
            self.push_equation(EqState::Solved, eq);
        } else {
            self.push_equation(EqState::Processed, eq);
        }
        Ok(true)
    }

    // -- observation ------------------------------------------------------

    /// All surviving equations: solved, then processed, then
    /// to-simplify.
    #[must_use]
    pub fn equations(&self) -> Vec<&Equation> {
        self.solved
            .iter()
            .chain(self.processed.iter())
            .chain(self.to_simplify.iter())
            .map(|&id| self.eq(id))
            .collect()
    }

    /// The conflict witness, if inconsistency was derived.
    #[must_use]
    pub fn conflict(&self) -> Option<&Equation> {
        self.conflict.map(|id| self.eq(id))
    }

    /// Report counters and queue sizes into `st`.
    pub fn collect_statistics(&self, st: &mut Statistics) {
        st.update("grobner.steps", self.stats.compute_steps);
        st.update("grobner.simplified", self.stats.simplified);
        st.update("grobner.superposed", self.stats.superposed);
        st.update("grobner.processed", self.processed.len() as u64);
        st.update("grobner.solved", self.solved.len() as u64);
        st.update("grobner.to_simplify", self.to_simplify.len() as u64);
        st.update("grobner.degree", self.stats.max_expr_degree as u64);
        st.update("grobner.size", self.stats.max_expr_size as u64);
    }

    /// Discard every equation, counter and index; the polynomial and
    /// dependency managers keep their interned nodes.
    pub fn reset(&mut self) {
        self.eqs.clear();
        self.free_ids.clear();
        self.solved.clear();
        self.processed.clear();
        self.to_simplify.clear();
        self.watch.clear();
        self.level2var.clear();
        self.var2level.clear();
        self.levelp1 = 0;
        self.conflict = None;
        self.too_complex = false;
        self.stats.reset();
    }

    fn update_stats_max_degree_and_size(&mut self, id: EqId) {
        let p = self.eq(id).poly;
        let size = self.m.tree_size(p);
        let degree = self.m.degree(p);
        self.stats.max_expr_size = self.stats.max_expr_size.max(size);
        self.stats.max_expr_degree = self.stats.max_expr_degree.max(degree);
    }

    /// Display adapter for one equation (polynomial plus dependency
    /// labels).
    #[must_use]
    pub fn display_equation<'a>(&'a self, eq: &'a Equation) -> EquationDisplay<'a> {
        EquationDisplay { solver: self, eq }
    }

    // -- invariants -------------------------------------------------------

    /// Structural self-check. Consulted after every step in debug
    /// builds; an `Err` is a solver bug.
    pub fn check_invariants(&self) -> Result<(), String> {
        for (state, queue) in [
            (EqState::Solved, &self.solved),
            (EqState::Processed, &self.processed),
            (EqState::ToSimplify, &self.to_simplify),
        ] {
            for (i, &id) in queue.iter().enumerate() {
                let Some(e) = self.eqs[id.index()].as_ref() else {
                    return Err(format!("{state:?} queue holds a retired equation"));
                };
                if e.state != state {
                    return Err(format!("equation in {state:?} queue has state {:?}", e.state));
                }
                if e.idx as usize != i {
                    return Err(format!(
                        "equation at {state:?}[{i}] records index {}",
                        e.idx
                    ));
                }
                if state != EqState::Solved && self.m.is_val(e.poly) {
                    return Err(format!("constant polynomial in {state:?} queue"));
                }
            }
        }

        if !self.watch.is_empty() {
            for &id in &self.to_simplify {
                let v = self.m.var(self.eq(id).poly) as usize;
                if !self.watch[v].contains(&id) {
                    return Err(format!("to_simplify equation not watched under x{v}"));
                }
            }
            for (v, list) in self.watch.iter().enumerate() {
                for &id in list {
                    let Some(e) = self.eqs[id.index()].as_ref() else {
                        return Err(format!("watch[{v}] holds a retired equation"));
                    };
                    if e.state != EqState::ToSimplify {
                        return Err(format!("watch[{v}] holds a {:?} equation", e.state));
                    }
                    if self.m.is_val(e.poly) {
                        return Err(format!("watch[{v}] holds a constant"));
                    }
                    if self.m.var(e.poly) as usize != v {
                        return Err(format!(
                            "watch[{v}] holds an equation led by x{}",
                            self.m.var(e.poly)
                        ));
                    }
                    if !self.to_simplify.contains(&id) {
                        return Err(format!("watch[{v}] equation missing from to_simplify"));
                    }
                }
            }
        }

        let mut heads: FxHashSet<Var> = FxHashSet::default();
        for &id in &self.solved {
            let p = self.eq(id).poly;
            if !self.m.is_val(p) && self.m.is_val(self.m.hi(p)) {
                let v = self.m.var(p);
                if !heads.insert(v) {
                    return Err(format!("two solved equations define x{v}"));
                }
            }
        }
        if !heads.is_empty() {
            for &id in self.processed.iter().chain(self.to_simplify.iter()) {
                for v in self.m.free_vars(self.eq(id).poly) {
                    if heads.contains(&v) {
                        return Err(format!("solved variable x{v} still occurs in a working queue"));
                    }
                }
            }
        }
        Ok(())
    }

    #[cfg(debug_assertions)]
    fn assert_invariants(&self) {
        if let Err(msg) = self.check_invariants() {
            panic!("solver invariant violated: {msg}");
        }
    }
}

impl fmt::Display for Solver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "solved")?;
        for &id in &self.solved {
            writeln!(f, "  {}", self.display_equation(self.eq(id)))?;
        }
        writeln!(f, "processed")?;
        for &id in &self.processed {
            writeln!(f, "  {}", self.display_equation(self.eq(id)))?;
        }
        writeln!(f, "to_simplify")?;
        for &id in &self.to_simplify {
            writeln!(f, "  {}", self.display_equation(self.eq(id)))?;
        }
        if let Some(c) = self.conflict() {
            writeln!(f, "conflict")?;
            writeln!(f, "  {}", self.display_equation(c))?;
        }
        let mut st = Statistics::new();
        self.collect_statistics(&mut st);
        write!(f, "{st}")
    }
}

/// See [`Solver::display_equation`].
pub struct EquationDisplay<'a> {
    solver: &'a Solver,
    eq: &'a Equation,
}

impl fmt::Display for EquationDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.solver.m.display(self.eq.poly))?;
        let labels = self.solver.deps.labels(self.eq.dep);
        if !labels.is_empty() {
            write!(f, "  <-")?;
            for l in labels {
                write!(f, " {l}")?;
            }
        }
        Ok(())
    }
}

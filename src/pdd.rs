//! Polynomial decision diagrams.
//!
//! A polynomial is a hash-consed dag. A branch node `(v, lo, hi)`
//! denotes `lo + v*hi`, where `v` sits above every variable occurring
//! in `lo` and `hi` under the manager's level order; constant nodes
//! intern exact rational numerals. Nodes with a zero high branch are
//! collapsed away, so every reachable branch variable genuinely occurs
//! in the polynomial and the leading term of a polynomial is the chain
//! of high branches from its root.
//!
//! Two coefficient semantics are supported: rationals over 0/1
//! variables, and the Boolean ring (everything mod 2). Variables are
//! idempotent in both (`x*x = x`).

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;
use std::fmt;
use thiserror::Error;

/// Variable identifier.
pub type Var = u32;

/// Handle to a hash-consed polynomial. Equal handles denote equal
/// polynomials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PddId(u32);

impl PddId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// A short variable list, highest level first.
pub type Monomial = SmallVec<[Var; 8]>;

/// Coefficient domain of a manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Semantics {
    /// Rational coefficients over 0/1 (idempotent) variables.
    ZeroOneVars,
    /// Boolean ring: coefficients and variables mod 2.
    Mod2,
}

/// Failure modes of the manager.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PddError {
    /// The configured node budget is exhausted. Callers are expected
    /// to abandon the current computation; already-built diagrams stay
    /// valid.
    #[error("pdd node budget exhausted ({0} nodes)")]
    MemOut(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Node {
    Val(u32),
    Branch { var: Var, lo: PddId, hi: PddId },
}

const DEFAULT_NODE_LIMIT: usize = 1 << 20;

/// Owner of all polynomial nodes, numerals, operation caches and the
/// variable order.
pub struct PddManager {
    semantics: Semantics,
    nodes: Vec<Node>,
    unique: FxHashMap<Node, PddId>,
    numerals: Vec<BigRational>,
    numeral_ids: FxHashMap<BigRational, u32>,
    level2var: Vec<Var>,
    var2level: Vec<u32>,
    zero: PddId,
    one: PddId,
    add_cache: FxHashMap<(PddId, PddId), PddId>,
    mul_cache: FxHashMap<(PddId, PddId), PddId>,
    scale_cache: FxHashMap<(PddId, u32), PddId>,
    degree_cache: FxHashMap<PddId, usize>,
    node_limit: usize,
}

impl PddManager {
    /// Create a manager for `num_vars` variables with the identity
    /// order: variable `v` lives at level `v`, so higher-numbered
    /// variables are higher in the order.
    #[must_use]
    pub fn new(num_vars: u32, semantics: Semantics) -> Self {
        Self::with_var_order(num_vars, semantics, (0..num_vars).collect())
    }

    /// Create a manager with an explicit order: `level2var[l]` is the
    /// variable at level `l`, level 0 lowest. The order is fixed for
    /// the manager's lifetime.
    ///
    /// # Panics
    ///
    /// Panics if `level2var` is not a permutation of `0..num_vars`.
    #[must_use]
    pub fn with_var_order(num_vars: u32, semantics: Semantics, level2var: Vec<Var>) -> Self {
        assert_eq!(level2var.len(), num_vars as usize, "order must cover every variable");
        let mut var2level = vec![u32::MAX; num_vars as usize];
        for (level, &v) in level2var.iter().enumerate() {
            assert!(v < num_vars && var2level[v as usize] == u32::MAX, "order must be a permutation");
            var2level[v as usize] = level as u32;
        }
        let mut m = Self {
            semantics,
            nodes: Vec::new(),
            unique: FxHashMap::default(),
            numerals: Vec::new(),
            numeral_ids: FxHashMap::default(),
            level2var,
            var2level,
            zero: PddId(0),
            one: PddId(0),
            add_cache: FxHashMap::default(),
            mul_cache: FxHashMap::default(),
            scale_cache: FxHashMap::default(),
            degree_cache: FxHashMap::default(),
            node_limit: DEFAULT_NODE_LIMIT,
        };
        m.zero = m.intern_val(BigRational::zero());
        m.one = m.intern_val(BigRational::one());
        m
    }

    /// Coefficient semantics of this manager.
    #[must_use]
    pub fn semantics(&self) -> Semantics {
        self.semantics
    }

    /// Number of variables.
    #[must_use]
    pub fn num_vars(&self) -> u32 {
        self.level2var.len() as u32
    }

    /// The variable order, level 0 first.
    #[must_use]
    pub fn level2var(&self) -> &[Var] {
        &self.level2var
    }

    /// Level of a variable.
    #[must_use]
    pub fn var_level(&self, v: Var) -> u32 {
        self.var2level[v as usize]
    }

    /// Cap the total number of nodes; operations that would allocate
    /// past the cap fail with [`PddError::MemOut`].
    pub fn set_node_limit(&mut self, limit: usize) {
        self.node_limit = limit;
    }

    /// Current number of allocated nodes.
    #[must_use]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    // -- node construction ------------------------------------------------

    fn normalize(&self, q: BigRational) -> BigRational {
        match self.semantics {
            Semantics::ZeroOneVars => q,
            Semantics::Mod2 => {
                debug_assert!(q.denom().is_one(), "mod-2 coefficients must be integral");
                let two = BigInt::from(2);
                let r = ((q.numer() % &two) + &two) % &two;
                BigRational::from_integer(r)
            }
        }
    }

    /// Intern an initial numeral node, bypassing the budget. Only used
    /// during construction for the 0 and 1 terminals.
    fn intern_val(&mut self, q: BigRational) -> PddId {
        let nid = self.numerals.len() as u32;
        self.numeral_ids.insert(q.clone(), nid);
        self.numerals.push(q);
        let node = Node::Val(nid);
        let id = PddId(self.nodes.len() as u32);
        self.nodes.push(node);
        self.unique.insert(node, id);
        id
    }

    fn numeral_id(&mut self, q: &BigRational) -> u32 {
        if let Some(&nid) = self.numeral_ids.get(q) {
            return nid;
        }
        let nid = self.numerals.len() as u32;
        self.numeral_ids.insert(q.clone(), nid);
        self.numerals.push(q.clone());
        nid
    }

    fn alloc(&mut self, node: Node) -> Result<PddId, PddError> {
        if let Some(&id) = self.unique.get(&node) {
            return Ok(id);
        }
        if self.nodes.len() >= self.node_limit {
            return Err(PddError::MemOut(self.node_limit));
        }
        let id = PddId(self.nodes.len() as u32);
        self.nodes.push(node);
        self.unique.insert(node, id);
        Ok(id)
    }

    /// The constant polynomial `q` (normalized per the semantics).
    pub fn mk_val(&mut self, q: BigRational) -> Result<PddId, PddError> {
        let q = self.normalize(q);
        let nid = self.numeral_id(&q);
        self.alloc(Node::Val(nid))
    }

    /// Convenience for small integer constants.
    pub fn mk_int(&mut self, n: i64) -> Result<PddId, PddError> {
        self.mk_val(BigRational::from_integer(BigInt::from(n)))
    }

    /// The polynomial `v`.
    pub fn mk_var(&mut self, v: Var) -> Result<PddId, PddError> {
        assert!(v < self.num_vars(), "unknown variable");
        let (zero, one) = (self.zero, self.one);
        self.mk_node(v, zero, one)
    }

    fn mk_node(&mut self, var: Var, lo: PddId, hi: PddId) -> Result<PddId, PddError> {
        if hi == self.zero {
            return Ok(lo);
        }
        debug_assert!(self.level_of(lo) < i64::from(self.var2level[var as usize]));
        debug_assert!(self.level_of(hi) < i64::from(self.var2level[var as usize]));
        self.alloc(Node::Branch { var, lo, hi })
    }

    // -- observers --------------------------------------------------------

    fn node(&self, p: PddId) -> Node {
        self.nodes[p.index()]
    }

    /// Is `p` the zero polynomial?
    #[must_use]
    pub fn is_zero(&self, p: PddId) -> bool {
        p == self.zero
    }

    /// The constant 0.
    #[must_use]
    pub fn zero(&self) -> PddId {
        self.zero
    }

    /// The constant 1.
    #[must_use]
    pub fn one(&self) -> PddId {
        self.one
    }

    /// Is `p` a constant?
    #[must_use]
    pub fn is_val(&self, p: PddId) -> bool {
        matches!(self.node(p), Node::Val(_))
    }

    /// Value of a constant polynomial, `None` for branches.
    #[must_use]
    pub fn val(&self, p: PddId) -> Option<&BigRational> {
        match self.node(p) {
            Node::Val(nid) => Some(&self.numerals[nid as usize]),
            Node::Branch { .. } => None,
        }
    }

    /// Leading (top) variable of a non-constant polynomial.
    ///
    /// # Panics
    ///
    /// Panics on constants.
    #[must_use]
    pub fn var(&self, p: PddId) -> Var {
        match self.node(p) {
            Node::Branch { var, .. } => var,
            Node::Val(_) => panic!("constant polynomial has no leading variable"),
        }
    }

    /// Low branch (`p` with the leading variable set to 0).
    #[must_use]
    pub fn lo(&self, p: PddId) -> PddId {
        match self.node(p) {
            Node::Branch { lo, .. } => lo,
            Node::Val(_) => p,
        }
    }

    /// High branch (coefficient of the leading variable).
    #[must_use]
    pub fn hi(&self, p: PddId) -> PddId {
        match self.node(p) {
            Node::Branch { hi, .. } => hi,
            Node::Val(_) => p,
        }
    }

    /// Is `p` of solved shape, i.e. non-constant with a constant
    /// coefficient on its leading variable?
    #[must_use]
    pub fn is_solved_form(&self, p: PddId) -> bool {
        !self.is_val(p) && self.is_val(self.hi(p))
    }

    fn level_of(&self, p: PddId) -> i64 {
        match self.node(p) {
            Node::Val(_) => -1,
            Node::Branch { var, .. } => i64::from(self.var2level[var as usize]),
        }
    }

    // -- algebra ----------------------------------------------------------

    /// `a + b`.
    pub fn add(&mut self, a: PddId, b: PddId) -> Result<PddId, PddError> {
        let key = if a <= b { (a, b) } else { (b, a) };
        if let Some(&r) = self.add_cache.get(&key) {
            return Ok(r);
        }
        let r = match (self.node(key.0), self.node(key.1)) {
            (Node::Val(x), Node::Val(y)) => {
                let sum = &self.numerals[x as usize] + &self.numerals[y as usize];
                self.mk_val(sum)?
            }
            _ => {
                let (a, b) = key;
                let (la, lb) = (self.level_of(a), self.level_of(b));
                if la == lb {
                    let (va, loa, hia) = self.destruct(a);
                    let (_, lob, hib) = self.destruct(b);
                    let lo = self.add(loa, lob)?;
                    let hi = self.add(hia, hib)?;
                    self.mk_node(va, lo, hi)?
                } else if la > lb {
                    let (va, loa, hia) = self.destruct(a);
                    let lo = self.add(loa, b)?;
                    self.mk_node(va, lo, hia)?
                } else {
                    let (vb, lob, hib) = self.destruct(b);
                    let lo = self.add(lob, a)?;
                    self.mk_node(vb, lo, hib)?
                }
            }
        };
        self.add_cache.insert(key, r);
        Ok(r)
    }

    /// `a - b`.
    pub fn sub(&mut self, a: PddId, b: PddId) -> Result<PddId, PddError> {
        let nb = self.neg(b)?;
        self.add(a, nb)
    }

    /// `-a`. In the Boolean ring this is the identity.
    pub fn neg(&mut self, a: PddId) -> Result<PddId, PddError> {
        let minus_one = -BigRational::one();
        self.mul_val(a, &minus_one)
    }

    /// `a * c` for a constant `c`.
    pub fn mul_val(&mut self, a: PddId, c: &BigRational) -> Result<PddId, PddError> {
        let c = self.normalize(c.clone());
        if c.is_zero() {
            return Ok(self.zero);
        }
        if c.is_one() {
            return Ok(a);
        }
        let cid = self.numeral_id(&c);
        self.scale_rec(a, cid)
    }

    fn scale_rec(&mut self, a: PddId, cid: u32) -> Result<PddId, PddError> {
        if let Some(&r) = self.scale_cache.get(&(a, cid)) {
            return Ok(r);
        }
        let r = match self.node(a) {
            Node::Val(x) => {
                let prod = &self.numerals[x as usize] * &self.numerals[cid as usize];
                self.mk_val(prod)?
            }
            Node::Branch { var, lo, hi } => {
                let lo = self.scale_rec(lo, cid)?;
                let hi = self.scale_rec(hi, cid)?;
                self.mk_node(var, lo, hi)?
            }
        };
        self.scale_cache.insert((a, cid), r);
        Ok(r)
    }

    /// `a * b` under idempotent variables.
    pub fn mul(&mut self, a: PddId, b: PddId) -> Result<PddId, PddError> {
        let key = if a <= b { (a, b) } else { (b, a) };
        if let Some(&r) = self.mul_cache.get(&key) {
            return Ok(r);
        }
        let (a, b) = key;
        let r = match (self.node(a), self.node(b)) {
            (Node::Val(x), _) => {
                let c = self.numerals[x as usize].clone();
                self.mul_val(b, &c)?
            }
            (_, Node::Val(y)) => {
                let c = self.numerals[y as usize].clone();
                self.mul_val(a, &c)?
            }
            _ => {
                let (la, lb) = (self.level_of(a), self.level_of(b));
                if la == lb {
                    // (v*a1 + a0)(v*b1 + b0) with v*v = v
                    let (v, a0, a1) = self.destruct(a);
                    let (_, b0, b1) = self.destruct(b);
                    let h1 = self.mul(a1, b1)?;
                    let h2 = self.mul(a1, b0)?;
                    let h3 = self.mul(a0, b1)?;
                    let h12 = self.add(h1, h2)?;
                    let hi = self.add(h12, h3)?;
                    let lo = self.mul(a0, b0)?;
                    self.mk_node(v, lo, hi)?
                } else if la > lb {
                    let (v, a0, a1) = self.destruct(a);
                    let lo = self.mul(a0, b)?;
                    let hi = self.mul(a1, b)?;
                    self.mk_node(v, lo, hi)?
                } else {
                    let (v, b0, b1) = self.destruct(b);
                    let lo = self.mul(b0, a)?;
                    let hi = self.mul(b1, a)?;
                    self.mk_node(v, lo, hi)?
                }
            }
        };
        self.mul_cache.insert(key, r);
        Ok(r)
    }

    fn destruct(&self, p: PddId) -> (Var, PddId, PddId) {
        match self.node(p) {
            Node::Branch { var, lo, hi } => (var, lo, hi),
            Node::Val(_) => unreachable!("destruct on constant"),
        }
    }

    // -- leading terms ----------------------------------------------------

    /// Leading monomial (high-branch chain) and leading coefficient.
    #[must_use]
    pub fn leading(&self, p: PddId) -> (Monomial, BigRational) {
        let mut mono = Monomial::new();
        let mut cur = p;
        loop {
            match self.node(cur) {
                Node::Val(nid) => return (mono, self.numerals[nid as usize].clone()),
                Node::Branch { var, hi, .. } => {
                    mono.push(var);
                    cur = hi;
                }
            }
        }
    }

    /// Degree of the leading term.
    #[must_use]
    pub fn leading_degree(&self, p: PddId) -> usize {
        let mut n = 0;
        let mut cur = p;
        while let Node::Branch { hi, .. } = self.node(cur) {
            n += 1;
            cur = hi;
        }
        n
    }

    /// Do `a` and `b` differ in their leading term (monomial or
    /// coefficient)?
    #[must_use]
    pub fn different_leading_term(&self, a: PddId, b: PddId) -> bool {
        let (mut a, mut b) = (a, b);
        loop {
            match (self.node(a), self.node(b)) {
                (Node::Val(x), Node::Val(y)) => return x != y,
                (Node::Branch { var: va, hi: ha, .. }, Node::Branch { var: vb, hi: hb, .. }) => {
                    if va != vb {
                        return true;
                    }
                    a = ha;
                    b = hb;
                }
                _ => return true,
            }
        }
    }

    // -- reduction and superposition --------------------------------------

    /// Reduce `a` modulo `b`: repeatedly cancel the largest monomial of
    /// `a` divisible by the leading monomial of `b`. Returns `a`
    /// unchanged when `b` is constant or nothing divides. The result
    /// carries no monomial divisible by `lm(b)`.
    pub fn reduce(&mut self, a: PddId, b: PddId) -> Result<PddId, PddError> {
        if self.is_val(b) {
            return Ok(a);
        }
        let (lm, lc) = self.leading(b);
        let mut cur = a;
        loop {
            let mut mono = Monomial::new();
            let Some(coef) = self.find_divisible(cur, &lm, &mut mono) else {
                return Ok(cur);
            };
            // cofactor = mono \ lm; cancel coef*mono by subtracting
            // (coef/lc) * cofactor * b
            let mut t = self.one;
            for &v in mono.iter().filter(|v| !lm.contains(*v)) {
                let xv = self.mk_var(v)?;
                t = self.mul(t, xv)?;
            }
            let scale = coef / &lc;
            let sb = self.mul_val(b, &scale)?;
            let d = self.mul(t, sb)?;
            cur = self.sub(cur, d)?;
            if self.is_zero(cur) {
                return Ok(cur);
            }
        }
    }

    /// Largest monomial of `p` containing every variable of `lm`
    /// (which is sorted highest level first); its variables are
    /// appended to `mono` and its coefficient returned.
    fn find_divisible(&self, p: PddId, lm: &[Var], mono: &mut Monomial) -> Option<BigRational> {
        match self.node(p) {
            Node::Val(nid) => {
                let q = &self.numerals[nid as usize];
                if lm.is_empty() && !q.is_zero() {
                    Some(q.clone())
                } else {
                    None
                }
            }
            Node::Branch { var, lo, hi } => {
                if let Some(&need) = lm.first() {
                    // the needed variable can no longer occur below here
                    if self.var2level[need as usize] > self.var2level[var as usize] {
                        return None;
                    }
                }
                let consumed = lm.first() == Some(&var);
                let rest = if consumed { &lm[1..] } else { lm };
                mono.push(var);
                if let Some(c) = self.find_divisible(hi, rest, mono) {
                    return Some(c);
                }
                mono.pop();
                if consumed {
                    // skipping `var` makes lm unsatisfiable on this path
                    return None;
                }
                self.find_divisible(lo, lm, mono)
            }
        }
    }

    /// S-polynomial of `a` and `b` when they share the same leading
    /// variable `v`: with `a = v*a1 + a0` and `b = v*b1 + b0`, the
    /// combination `b1*a0 - a1*b0` cancels the `v` terms of `b1*a - a1*b`.
    pub fn try_spoly(&mut self, a: PddId, b: PddId) -> Result<Option<PddId>, PddError> {
        if self.is_val(a) || self.is_val(b) || self.var(a) != self.var(b) {
            return Ok(None);
        }
        let (_, a0, a1) = self.destruct(a);
        let (_, b0, b1) = self.destruct(b);
        let l = self.mul(b1, a0)?;
        let r = self.mul(a1, b0)?;
        Ok(Some(self.sub(l, r)?))
    }

    // -- metrics ----------------------------------------------------------

    /// Total degree (longest monomial).
    #[must_use]
    pub fn degree(&mut self, p: PddId) -> usize {
        if let Some(&d) = self.degree_cache.get(&p) {
            return d;
        }
        let d = match self.node(p) {
            Node::Val(_) => 0,
            Node::Branch { lo, hi, .. } => self.degree(lo).max(1 + self.degree(hi)),
        };
        self.degree_cache.insert(p, d);
        d
    }

    /// Number of distinct dag nodes reachable from `p`.
    #[must_use]
    pub fn tree_size(&self, p: PddId) -> usize {
        let mut seen: FxHashSet<PddId> = FxHashSet::default();
        let mut stack = vec![p];
        while let Some(q) = stack.pop() {
            if !seen.insert(q) {
                continue;
            }
            if let Node::Branch { lo, hi, .. } = self.node(q) {
                stack.push(lo);
                stack.push(hi);
            }
        }
        seen.len()
    }

    /// Variables occurring in `p`, ascending.
    #[must_use]
    pub fn free_vars(&self, p: PddId) -> Vec<Var> {
        let mut seen: FxHashSet<PddId> = FxHashSet::default();
        let mut vars: FxHashSet<Var> = FxHashSet::default();
        let mut stack = vec![p];
        while let Some(q) = stack.pop() {
            if !seen.insert(q) {
                continue;
            }
            if let Node::Branch { var, lo, hi } = self.node(q) {
                vars.insert(var);
                stack.push(lo);
                stack.push(hi);
            }
        }
        let mut out: Vec<Var> = vars.into_iter().collect();
        out.sort_unstable();
        out
    }

    /// All monomials of `p` with nonzero coefficient, largest first.
    #[must_use]
    pub fn monomials(&self, p: PddId) -> Vec<(Monomial, BigRational)> {
        let mut out = Vec::new();
        let mut mono = Monomial::new();
        self.monomials_rec(p, &mut mono, &mut out);
        out
    }

    fn monomials_rec(&self, p: PddId, mono: &mut Monomial, out: &mut Vec<(Monomial, BigRational)>) {
        match self.node(p) {
            Node::Val(nid) => {
                let q = &self.numerals[nid as usize];
                if !q.is_zero() {
                    out.push((mono.clone(), q.clone()));
                }
            }
            Node::Branch { var, lo, hi } => {
                mono.push(var);
                self.monomials_rec(hi, mono, out);
                mono.pop();
                self.monomials_rec(lo, mono, out);
            }
        }
    }

    /// Evaluate `p` under a total assignment. Assignments are expected
    /// to be 0/1 (variables are idempotent); under [`Semantics::Mod2`]
    /// a root of the polynomial is a point where the value is even.
    #[must_use]
    pub fn eval(&self, p: PddId, assignment: &FxHashMap<Var, BigRational>) -> BigRational {
        let mut memo: FxHashMap<PddId, BigRational> = FxHashMap::default();
        self.eval_rec(p, assignment, &mut memo)
    }

    fn eval_rec(
        &self,
        p: PddId,
        assignment: &FxHashMap<Var, BigRational>,
        memo: &mut FxHashMap<PddId, BigRational>,
    ) -> BigRational {
        if let Some(v) = memo.get(&p) {
            return v.clone();
        }
        let r = match self.node(p) {
            Node::Val(nid) => self.numerals[nid as usize].clone(),
            Node::Branch { var, lo, hi } => {
                let x = assignment.get(&var).cloned().unwrap_or_else(BigRational::zero);
                let l = self.eval_rec(lo, assignment, memo);
                let h = self.eval_rec(hi, assignment, memo);
                l + x * h
            }
        };
        memo.insert(p, r.clone());
        r
    }

    // -- rendering --------------------------------------------------------

    /// Display adapter rendering `p` as a sum of monomials, largest
    /// monomial first.
    #[must_use]
    pub fn display(&self, p: PddId) -> PddDisplay<'_> {
        PddDisplay { m: self, p }
    }
}

impl fmt::Debug for PddManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PddManager")
            .field("semantics", &self.semantics)
            .field("num_vars", &self.num_vars())
            .field("num_nodes", &self.nodes.len())
            .finish()
    }
}

/// See [`PddManager::display`].
pub struct PddDisplay<'m> {
    m: &'m PddManager,
    p: PddId,
}

impl fmt::Display for PddDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms = self.m.monomials(self.p);
        if terms.is_empty() {
            return write!(f, "0");
        }
        for (i, (mono, coef)) in terms.iter().enumerate() {
            let mag = coef.abs();
            if i == 0 {
                if coef.is_negative() {
                    write!(f, "-")?;
                }
            } else if coef.is_negative() {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }
            if mono.is_empty() {
                write!(f, "{mag}")?;
            } else {
                if !mag.is_one() {
                    write!(f, "{mag}*")?;
                }
                for (j, v) in mono.iter().enumerate() {
                    if j > 0 {
                        write!(f, "*")?;
                    }
                    write!(f, "x{v}")?;
                }
            }
        }
        Ok(())
    }
}

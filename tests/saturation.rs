//! End-to-end saturation scenarios.

use num_bigint::BigInt;
use num_rational::BigRational;
use pdd_grobner::{EqState, PddManager, ResourceLimit, Semantics, Solver};

fn rat(n: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

fn solver(num_vars: u32, semantics: Semantics) -> Solver {
    Solver::new(PddManager::new(num_vars, semantics))
}

#[test]
fn test_empty_input() {
    let mut s = solver(2, Semantics::ZeroOneVars);
    s.saturate();
    assert!(s.equations().is_empty());
    assert!(s.conflict().is_none());
    assert!(s.check_invariants().is_ok());
}

#[test]
fn test_zero_polynomial_is_ignored() {
    let mut s = solver(1, Semantics::ZeroOneVars);
    let zero = s.pdd().zero();
    s.add(zero, None);
    s.saturate();
    assert!(s.equations().is_empty());
    assert!(s.conflict().is_none());
}

#[test]
fn test_nonzero_constant_conflicts_before_saturate() {
    let mut s = solver(1, Semantics::ZeroOneVars);
    let three = s.pdd_mut().mk_int(3).unwrap();
    let d = s.deps_mut().mk_leaf(9);
    s.add(three, Some(d));
    assert!(s.conflict().is_some());
    assert_eq!(s.deps().labels(s.conflict().unwrap().dep()), vec![9]);
    s.saturate();
    assert!(s.equations().is_empty());
}

#[test]
fn test_linear_pair_triangularizes() {
    // x + y = 0 and x - y = 0 with x above y
    let mut s = solver(2, Semantics::ZeroOneVars);
    let x = s.pdd_mut().mk_var(1).unwrap();
    let y = s.pdd_mut().mk_var(0).unwrap();
    let sum = s.pdd_mut().add(x, y).unwrap();
    let diff = s.pdd_mut().sub(x, y).unwrap();
    let d0 = s.deps_mut().mk_leaf(0);
    let d1 = s.deps_mut().mk_leaf(1);
    s.add(sum, Some(d0));
    s.add(diff, Some(d1));

    s.saturate();

    assert!(s.conflict().is_none());
    let eqs = s.equations();
    assert_eq!(eqs.len(), 2);
    // an oriented definition of x survives in solved form
    assert!(eqs
        .iter()
        .any(|eq| eq.state() == EqState::Solved && s.pdd().var(eq.poly()) == 1));
    // and the remaining equation pins y
    assert!(eqs.iter().any(|eq| s.pdd().var(eq.poly()) == 0));
    assert!(s.check_invariants().is_ok());
}

#[test]
fn test_boolean_inconsistency() {
    // x = 0 and x + 1 = 0 over the Boolean ring
    let mut s = solver(1, Semantics::Mod2);
    let x = s.pdd_mut().mk_var(0).unwrap();
    let one = s.pdd().one();
    let xp1 = s.pdd_mut().add(x, one).unwrap();
    let d0 = s.deps_mut().mk_leaf(0);
    let d1 = s.deps_mut().mk_leaf(1);
    s.add(x, Some(d0));
    s.add(xp1, Some(d1));

    s.saturate();

    let conflict = s.conflict().expect("system is inconsistent");
    assert!(s.pdd().is_val(conflict.poly()));
    assert_eq!(s.pdd().val(conflict.poly()), Some(&rat(1)));
    // the refutation used both inputs
    assert_eq!(s.deps().labels(conflict.dep()), vec![0, 1]);
    let basis: usize = s
        .equations()
        .iter()
        .filter(|eq| eq.state() != EqState::ToSimplify)
        .count();
    assert!(basis <= 1);
    assert!(s.check_invariants().is_ok());
}

#[test]
fn test_equation_threshold_stops_early() {
    let mut s = solver(3, Semantics::ZeroOneVars);
    s.config_mut().eqs_threshold = 2;
    for v in 0..3 {
        let p = s.pdd_mut().mk_var(v).unwrap();
        s.add(p, None);
    }
    s.saturate();
    assert!(s.done());
    assert!(s.conflict().is_none());
    assert_eq!(s.equations().len(), 3);
}

#[test]
fn test_step_budget_stops_early() {
    let mut s = solver(3, Semantics::ZeroOneVars);
    s.config_mut().max_steps = 0;
    let x = s.pdd_mut().mk_var(2).unwrap();
    let y = s.pdd_mut().mk_var(1).unwrap();
    let z = s.pdd_mut().mk_var(0).unwrap();
    let xy = s.pdd_mut().add(x, y).unwrap();
    let yz = s.pdd_mut().add(y, z).unwrap();
    s.add(xy, None);
    s.add(yz, None);

    s.saturate();

    assert_eq!(s.stats().compute_steps, 1);
    assert!(s.conflict().is_none());
    assert_eq!(s.equations().len(), 2);
    // one candidate was never picked
    assert!(s
        .equations()
        .iter()
        .any(|eq| eq.state() == EqState::ToSimplify));
}

#[test]
fn test_superposition_closes_quadratic_system() {
    // x*y + z = 0 and x*z + 1 = 0 with x > y > z
    let mut s = solver(3, Semantics::ZeroOneVars);
    let x = s.pdd_mut().mk_var(2).unwrap();
    let y = s.pdd_mut().mk_var(1).unwrap();
    let z = s.pdd_mut().mk_var(0).unwrap();
    let xy = s.pdd_mut().mul(x, y).unwrap();
    let p1 = s.pdd_mut().add(xy, z).unwrap();
    let xz = s.pdd_mut().mul(x, z).unwrap();
    let one = s.pdd().one();
    let p2 = s.pdd_mut().add(xz, one).unwrap();
    let d0 = s.deps_mut().mk_leaf(0);
    let d1 = s.deps_mut().mk_leaf(1);
    s.add(p1, Some(d0));
    s.add(p2, Some(d1));

    s.saturate();

    assert!(s.conflict().is_none());
    assert!(s.stats().superposed >= 1);
    let eqs = s.equations();
    assert_eq!(eqs.len(), 3);
    assert!(eqs.iter().all(|eq| eq.state() == EqState::Solved));
    // every derivation traces back to the two inputs
    for eq in &eqs {
        let labels = s.deps().labels(eq.dep());
        assert!(!labels.is_empty());
        assert!(labels.iter().all(|&l| l == 0 || l == 1));
    }
    assert!(s.check_invariants().is_ok());
}

#[test]
fn test_resaturation_is_idempotent() {
    let mut s = solver(2, Semantics::ZeroOneVars);
    let x = s.pdd_mut().mk_var(1).unwrap();
    let y = s.pdd_mut().mk_var(0).unwrap();
    let sum = s.pdd_mut().add(x, y).unwrap();
    let diff = s.pdd_mut().sub(x, y).unwrap();
    s.add(sum, None);
    s.add(diff, None);
    s.saturate();

    let simplified = s.stats().simplified;
    let superposed = s.stats().superposed;
    let polys: Vec<_> = s.equations().iter().map(|eq| eq.poly()).collect();

    s.saturate();

    assert_eq!(s.stats().simplified, simplified);
    assert_eq!(s.stats().superposed, superposed);
    let polys_after: Vec<_> = s.equations().iter().map(|eq| eq.poly()).collect();
    assert_eq!(polys, polys_after);
}

#[test]
fn test_determinism_of_display() {
    let run = || {
        let mut s = solver(3, Semantics::ZeroOneVars);
        let x = s.pdd_mut().mk_var(2).unwrap();
        let y = s.pdd_mut().mk_var(1).unwrap();
        let z = s.pdd_mut().mk_var(0).unwrap();
        let xy = s.pdd_mut().mul(x, y).unwrap();
        let p1 = s.pdd_mut().add(xy, z).unwrap();
        let xz = s.pdd_mut().mul(x, z).unwrap();
        let one = s.pdd().one();
        let p2 = s.pdd_mut().add(xz, one).unwrap();
        let d0 = s.deps_mut().mk_leaf(0);
        let d1 = s.deps_mut().mk_leaf(1);
        s.add(p1, Some(d0));
        s.add(p2, Some(d1));
        s.saturate();
        s.to_string()
    };
    assert_eq!(run(), run());
}

#[test]
fn test_cancellation_preserves_queues() {
    let limit = ResourceLimit::new();
    let mut s = Solver::with_limit(
        PddManager::new(2, Semantics::ZeroOneVars),
        limit.clone(),
    );
    let x = s.pdd_mut().mk_var(1).unwrap();
    let y = s.pdd_mut().mk_var(0).unwrap();
    let sum = s.pdd_mut().add(x, y).unwrap();
    s.add(sum, None);
    s.add(y, None);

    limit.cancel();
    s.saturate();

    assert!(s.done());
    assert!(s.conflict().is_none());
    assert_eq!(s.equations().len(), 2);
    assert_eq!(s.stats().simplified, 0);

    // after clearing the flag saturation completes normally
    limit.reset();
    s.saturate();
    assert!(s.conflict().is_none());
    assert!(s.equations().iter().all(|eq| eq.state() != EqState::ToSimplify));
}

#[test]
fn test_node_budget_exhaustion_is_graceful() {
    let mut s = solver(2, Semantics::ZeroOneVars);
    let x = s.pdd_mut().mk_var(1).unwrap();
    let y = s.pdd_mut().mk_var(0).unwrap();
    let sum = s.pdd_mut().add(x, y).unwrap();
    let diff = s.pdd_mut().sub(x, y).unwrap();
    s.add(sum, None);
    s.add(diff, None);

    // no room for any new node: the first reduction aborts saturation
    let frozen = s.pdd().num_nodes();
    s.pdd_mut().set_node_limit(frozen);
    s.saturate();

    assert!(s.conflict().is_none());
    assert_eq!(s.equations().len(), 2);
    // the state stays observable
    let mut st = pdd_grobner::Statistics::new();
    s.collect_statistics(&mut st);
    assert_eq!(st.get("grobner.to_simplify"), Some(2));
    let _ = s.to_string();
    assert!(s.check_invariants().is_ok());

    s.reset();
    assert!(s.equations().is_empty());
}

#[test]
fn test_add_after_saturate_reuses_solved_definitions() {
    let mut s = solver(3, Semantics::ZeroOneVars);
    let x = s.pdd_mut().mk_var(2).unwrap();
    let y = s.pdd_mut().mk_var(1).unwrap();
    let sum = s.pdd_mut().add(x, y).unwrap();
    s.add(sum, None);
    s.saturate();
    assert!(s
        .equations()
        .iter()
        .any(|eq| eq.state() == EqState::Solved));

    // x + y is already solved; the new candidate x - y collapses to 2y
    let diff = s.pdd_mut().sub(x, y).unwrap();
    s.add(diff, None);
    s.saturate();

    assert!(s.conflict().is_none());
    let eqs = s.equations();
    assert_eq!(eqs.len(), 2);
    assert!(eqs.iter().any(|eq| s.pdd().var(eq.poly()) == 1));
    assert!(s.check_invariants().is_ok());
}

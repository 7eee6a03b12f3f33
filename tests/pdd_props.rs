//! Property-based tests for the decision-diagram algebra.
//!
//! Polynomials are generated as random term lists over three 0/1
//! variables; soundness properties are checked by exhaustive
//! evaluation over all eight 0/1 assignments.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;
use pdd_grobner::{PddId, PddManager, Semantics, Var};
use proptest::prelude::*;
use rustc_hash::FxHashMap;

type Term = (i64, [bool; 3]);

fn rat(n: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

fn build_poly(m: &mut PddManager, terms: &[Term]) -> PddId {
    let mut acc = m.zero();
    for (coeff, vars) in terms {
        let mut t = m.mk_int(*coeff).unwrap();
        for (v, present) in vars.iter().enumerate() {
            if *present {
                let x = m.mk_var(v as Var).unwrap();
                t = m.mul(t, x).unwrap();
            }
        }
        acc = m.add(acc, t).unwrap();
    }
    acc
}

fn assignments() -> Vec<FxHashMap<Var, BigRational>> {
    (0..8u32)
        .map(|bits| {
            let mut a = FxHashMap::default();
            for v in 0..3u32 {
                a.insert(v, rat(i64::from((bits >> v) & 1)));
            }
            a
        })
        .collect()
}

fn term_strategy() -> impl Strategy<Value = Vec<Term>> {
    prop::collection::vec((-5i64..=5, prop::array::uniform3(any::<bool>())), 0..4)
}

proptest! {
    /// Hash-consing makes addition canonical: both orders intern the
    /// same node.
    #[test]
    fn add_is_commutative(t1 in term_strategy(), t2 in term_strategy()) {
        let mut m = PddManager::new(3, Semantics::ZeroOneVars);
        let p = build_poly(&mut m, &t1);
        let q = build_poly(&mut m, &t2);
        let pq = m.add(p, q).unwrap();
        let qp = m.add(q, p).unwrap();
        prop_assert_eq!(pq, qp);
    }

    /// Addition evaluates pointwise.
    #[test]
    fn add_evaluates_pointwise(t1 in term_strategy(), t2 in term_strategy()) {
        let mut m = PddManager::new(3, Semantics::ZeroOneVars);
        let p = build_poly(&mut m, &t1);
        let q = build_poly(&mut m, &t2);
        let pq = m.add(p, q).unwrap();
        for a in assignments() {
            prop_assert_eq!(m.eval(pq, &a), m.eval(p, &a) + m.eval(q, &a));
        }
    }

    /// Multiplication evaluates pointwise on 0/1 assignments, where
    /// variable idempotence is invisible.
    #[test]
    fn mul_evaluates_pointwise(t1 in term_strategy(), t2 in term_strategy()) {
        let mut m = PddManager::new(3, Semantics::ZeroOneVars);
        let p = build_poly(&mut m, &t1);
        let q = build_poly(&mut m, &t2);
        let pq = m.mul(p, q).unwrap();
        for a in assignments() {
            prop_assert_eq!(m.eval(pq, &a), m.eval(p, &a) * m.eval(q, &a));
        }
    }

    /// Reduction subtracts a multiple of the reducer: on every root of
    /// the reducer the value is unchanged.
    #[test]
    fn reduce_preserves_value_on_reducer_roots(
        t1 in term_strategy(),
        t2 in term_strategy()
    ) {
        let mut m = PddManager::new(3, Semantics::ZeroOneVars);
        let p = build_poly(&mut m, &t1);
        let q = build_poly(&mut m, &t2);
        let r = m.reduce(p, q).unwrap();
        for a in assignments() {
            if m.eval(q, &a).is_zero() {
                prop_assert_eq!(m.eval(r, &a), m.eval(p, &a));
            }
        }
    }

    /// An S-polynomial vanishes on every common root of its parents.
    #[test]
    fn spoly_vanishes_on_common_roots(t1 in term_strategy(), t2 in term_strategy()) {
        let mut m = PddManager::new(3, Semantics::ZeroOneVars);
        let p = build_poly(&mut m, &t1);
        let q = build_poly(&mut m, &t2);
        if let Some(r) = m.try_spoly(p, q).unwrap() {
            for a in assignments() {
                if m.eval(p, &a).is_zero() && m.eval(q, &a).is_zero() {
                    prop_assert_eq!(m.eval(r, &a), BigRational::zero());
                }
            }
        }
    }

    /// Reduction reaches a normal form: the result is irreducible by
    /// the same reducer.
    #[test]
    fn reduce_is_idempotent(t1 in term_strategy(), t2 in term_strategy()) {
        let mut m = PddManager::new(3, Semantics::ZeroOneVars);
        let p = build_poly(&mut m, &t1);
        let q = build_poly(&mut m, &t2);
        let r = m.reduce(p, q).unwrap();
        let rr = m.reduce(r, q).unwrap();
        prop_assert_eq!(r, rr);
    }
}

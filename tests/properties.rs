//! Property-based tests (proptest) for expansion counts and order.

use std::cell::RefCell;

use dimcall::{Dim, invoke_expanded};
use proptest::prelude::*;

proptest! {
    #[test]
    fn invocation_count_is_product(a in 0usize..6, b in 0usize..6, c in 0usize..6) {
        let mut calls = 0usize;
        invoke_expanded!(
            |_: usize, _: u8, _: usize, _: usize| calls += 1,
            Dim(0..a),
            7u8,
            Dim(0..b),
            Dim(0..c),
        );
        prop_assert_eq!(calls, a * b * c);
    }

    #[test]
    fn order_matches_nested_loops(
        xs in proptest::collection::vec(any::<i16>(), 0..5),
        ys in proptest::collection::vec(any::<i16>(), 0..5),
        scalar in any::<i16>(),
    ) {
        let expanded = invoke_expanded!(
            |x: i16, s: i16, y: i16| (x, s, y),
            Dim(xs.clone()),
            scalar,
            Dim(ys.clone()),
        );

        let mut nested = Vec::new();
        for &x in &xs {
            for &y in &ys {
                nested.push((x, scalar, y));
            }
        }
        prop_assert_eq!(expanded, nested);
    }

    #[test]
    fn unit_callable_sees_every_combination_once(n in 0u32..8, m in 0u32..8) {
        let seen = RefCell::new(Vec::new());
        invoke_expanded!(|i: u32, j: u32| seen.borrow_mut().push((i, j)), Dim(0..n), Dim(0..m));

        let seen = seen.into_inner();
        prop_assert_eq!(seen.len() as u32, n * m);
        let mut sorted = seen.clone();
        sorted.sort();
        prop_assert_eq!(sorted, seen);
    }
}

//! Per-arity entry points.
//!
//! Each `invokeN` takes the callable as an `FnMut` over the bindings of its
//! arguments, so closure parameter types are inferred from the arguments.

use dimcall_core::{Argument, ArgumentList, Dispatch, Expanded};

macro_rules! impl_invoke {
    ($name:ident, $arity:literal; $($A:ident $a:ident $b:ident),*) => {
        #[doc = concat!(
            "Arity-", stringify!($arity), " form of [`invoke_expanded!`](crate::invoke_expanded!)."
        )]
        #[allow(clippy::too_many_arguments)]
        pub fn $name<Func, Ret, $($A),*>(mut f: Func, $($a: $A),*) -> Expanded<($($A,)*), Ret>
        where
            $($A: Argument,)*
            Func: FnMut($(<$A as Argument>::Binding),*) -> Ret,
            <($($A,)*) as ArgumentList>::AnyDimension: Dispatch<($($A,)*), Ret>,
        {
            <<($($A,)*) as ArgumentList>::AnyDimension as Dispatch<($($A,)*), Ret>>::dispatch(
                ($($a,)*),
                |($($b,)*): ($(<$A as Argument>::Binding,)*)| f($($b),*),
            )
        }
    };
}

impl_invoke!(invoke0, 0;);
impl_invoke!(invoke1, 1; A0 a0 b0);
impl_invoke!(invoke2, 2; A0 a0 b0, A1 a1 b1);
impl_invoke!(invoke3, 3; A0 a0 b0, A1 a1 b1, A2 a2 b2);
impl_invoke!(invoke4, 4; A0 a0 b0, A1 a1 b1, A2 a2 b2, A3 a3 b3);
impl_invoke!(invoke5, 5; A0 a0 b0, A1 a1 b1, A2 a2 b2, A3 a3 b3, A4 a4 b4);
impl_invoke!(invoke6, 6; A0 a0 b0, A1 a1 b1, A2 a2 b2, A3 a3 b3, A4 a4 b4, A5 a5 b5);
impl_invoke!(invoke7, 7; A0 a0 b0, A1 a1 b1, A2 a2 b2, A3 a3 b3, A4 a4 b4, A5 a5 b5, A6 a6 b6);
impl_invoke!(invoke8, 8;
    A0 a0 b0, A1 a1 b1, A2 a2 b2, A3 a3 b3, A4 a4 b4, A5 a5 b5, A6 a6 b6, A7 a7 b7);
impl_invoke!(invoke9, 9;
    A0 a0 b0, A1 a1 b1, A2 a2 b2, A3 a3 b3, A4 a4 b4, A5 a5 b5, A6 a6 b6, A7 a7 b7, A8 a8 b8);
impl_invoke!(invoke10, 10;
    A0 a0 b0, A1 a1 b1, A2 a2 b2, A3 a3 b3, A4 a4 b4, A5 a5 b5, A6 a6 b6, A7 a7 b7, A8 a8 b8,
    A9 a9 b9);
impl_invoke!(invoke11, 11;
    A0 a0 b0, A1 a1 b1, A2 a2 b2, A3 a3 b3, A4 a4 b4, A5 a5 b5, A6 a6 b6, A7 a7 b7, A8 a8 b8,
    A9 a9 b9, A10 a10 b10);
impl_invoke!(invoke12, 12;
    A0 a0 b0, A1 a1 b1, A2 a2 b2, A3 a3 b3, A4 a4 b4, A5 a5 b5, A6 a6 b6, A7 a7 b7, A8 a8 b8,
    A9 a9 b9, A10 a10 b10, A11 a11 b11);

#[cfg(test)]
mod tests {
    use super::*;
    use dimcall_core::Dim;

    #[test]
    fn test_closure_parameters_are_inferred() {
        let products = invoke2(|x, y| x * y, Dim([2i64, 3]), Dim(vec![10i64, 100]));
        assert_eq!(products, vec![20, 200, 30, 300]);
    }

    #[test]
    fn test_nullary_is_a_direct_call() {
        let answer: u32 = invoke0(|| 42);
        assert_eq!(answer, 42);
    }

    #[test]
    fn test_exclusive_borrow_reaches_a_direct_call() {
        fn bump(x: &mut i32) {
            *x += 1;
        }
        let mut counter = 41i32;
        invoke1(bump, &mut counter);
        assert_eq!(counter, 42);
    }

    #[test]
    fn test_twelve_arguments() {
        let total = invoke12(
            |a: u8, b: u8, c: u8, d: u8, e: u8, f: u8, g: u8, h: u8, i: u8, j: u8, k: u8, l: u8| {
                [a, b, c, d, e, f, g, h, i, j, k, l]
                    .iter()
                    .map(|&n| u32::from(n))
                    .sum::<u32>()
            },
            1u8,
            1u8,
            1u8,
            1u8,
            1u8,
            1u8,
            1u8,
            1u8,
            1u8,
            1u8,
            1u8,
            Dim(0u8..3),
        );
        assert_eq!(total, vec![11, 12, 13]);
    }
}

//! Invoke a callable once for every combination of its dimension arguments.
//!
//! Arguments are either scalars, passed unchanged to every invocation, or
//! dimensions ([`Dim`]), finite sequences whose elements are fanned out. The
//! callable runs once per element of the Cartesian product of all dimensions,
//! with the leftmost dimension varying slowest:
//!
//! ```
//! use dimcall::{Dim, invoke_expanded};
//!
//! let sums = invoke_expanded!(|x: i32, y: i32| x + y, Dim([1, 2]), 10_i32);
//! assert_eq!(sums, vec![11, 12]);
//!
//! let pairs = invoke_expanded!(|a: char, b: u8| (a, b), Dim(['a', 'b']), Dim(1u8..=3));
//! assert_eq!(pairs[..3], [('a', 1), ('a', 2), ('a', 3)]);
//! ```
//!
//! What comes back depends on the callable's return type:
//! - `()`: the calls run for their effects and the result is `()`;
//! - an owned value: a `Vec` of every invocation's result;
//! - a reference: a `Vec` of aliases.
//!
//! When no argument is a dimension the callable is simply called once and its
//! output is returned as is, with no collection around it. Scalars are moved
//! into that call, so exclusive borrows work there too:
//!
//! ```
//! use dimcall::invoke_expanded;
//!
//! fn bump(x: &mut i32) {
//!     *x += 1;
//! }
//!
//! let mut counter = 1;
//! invoke_expanded!(bump, &mut counter);
//! assert_eq!(counter, 2);
//! ```
//!
//! An expansion hands each scalar to several invocations, so there `&mut`
//! scalars are rejected at compile time; reach for `Cell`, `RefCell` or the
//! callable's own captures instead.

mod invoke;

pub use dimcall_core::{
    Argument, ArgumentKind, ArgumentList, Axis, Bind, BindList, Callable, Collect, Dim, Dispatch,
    Expanded, ExpansionPlan, Flag, IndexSeq, IntoBinding, IntoBindings, MAX_ARITY, No, Odometer,
    Outcome, PRESIZE_LIMIT, PlanError, ResultCategory, Scalar, Sequence, Yes, impl_value_outcome,
    index_seq, invocation_count, is_any_dimension_present, is_dimension,
};
pub use invoke::*;

/// Invoke a callable over an argument tuple.
///
/// This is the tuple form of [`invoke_expanded!`]. The callable's parameter
/// types must be spelled out, since they are matched against the tuple's
/// bindings through [`Callable`] rather than an `FnMut` bound.
///
/// ```
/// use dimcall::{Dim, invoke_expanded};
///
/// let lengths = invoke_expanded(|s: &str, n: usize| s.len() * n, ("abc", Dim(0..3usize)));
/// assert_eq!(lengths, vec![0, 3, 6]);
/// ```
pub fn invoke_expanded<F, L>(mut f: F, args: L) -> Expanded<L, F::Output>
where
    L: ArgumentList,
    F: Callable<L::Bindings>,
    L::AnyDimension: Dispatch<L, F::Output>,
{
    <L::AnyDimension as Dispatch<L, F::Output>>::dispatch(args, |bindings| f.call(bindings))
}

/// Invoke a callable over its arguments, expanding every [`Dim`] argument.
///
/// `invoke_expanded!(f, a, b, c)` forwards to [`invoke3`], and likewise for
/// every arity up to [`MAX_ARITY`].
#[macro_export]
macro_rules! invoke_expanded {
    ($f:expr $(,)?) => {
        $crate::invoke0($f)
    };
    ($f:expr, $a0:expr $(,)?) => {
        $crate::invoke1($f, $a0)
    };
    ($f:expr, $a0:expr, $a1:expr $(,)?) => {
        $crate::invoke2($f, $a0, $a1)
    };
    ($f:expr, $a0:expr, $a1:expr, $a2:expr $(,)?) => {
        $crate::invoke3($f, $a0, $a1, $a2)
    };
    ($f:expr, $a0:expr, $a1:expr, $a2:expr, $a3:expr $(,)?) => {
        $crate::invoke4($f, $a0, $a1, $a2, $a3)
    };
    ($f:expr, $a0:expr, $a1:expr, $a2:expr, $a3:expr, $a4:expr $(,)?) => {
        $crate::invoke5($f, $a0, $a1, $a2, $a3, $a4)
    };
    ($f:expr, $a0:expr, $a1:expr, $a2:expr, $a3:expr, $a4:expr, $a5:expr $(,)?) => {
        $crate::invoke6($f, $a0, $a1, $a2, $a3, $a4, $a5)
    };
    ($f:expr, $a0:expr, $a1:expr, $a2:expr, $a3:expr, $a4:expr, $a5:expr, $a6:expr $(,)?) => {
        $crate::invoke7($f, $a0, $a1, $a2, $a3, $a4, $a5, $a6)
    };
    (
        $f:expr, $a0:expr, $a1:expr, $a2:expr, $a3:expr, $a4:expr, $a5:expr, $a6:expr,
        $a7:expr $(,)?
    ) => {
        $crate::invoke8($f, $a0, $a1, $a2, $a3, $a4, $a5, $a6, $a7)
    };
    (
        $f:expr, $a0:expr, $a1:expr, $a2:expr, $a3:expr, $a4:expr, $a5:expr, $a6:expr,
        $a7:expr, $a8:expr $(,)?
    ) => {
        $crate::invoke9($f, $a0, $a1, $a2, $a3, $a4, $a5, $a6, $a7, $a8)
    };
    (
        $f:expr, $a0:expr, $a1:expr, $a2:expr, $a3:expr, $a4:expr, $a5:expr, $a6:expr,
        $a7:expr, $a8:expr, $a9:expr $(,)?
    ) => {
        $crate::invoke10($f, $a0, $a1, $a2, $a3, $a4, $a5, $a6, $a7, $a8, $a9)
    };
    (
        $f:expr, $a0:expr, $a1:expr, $a2:expr, $a3:expr, $a4:expr, $a5:expr, $a6:expr,
        $a7:expr, $a8:expr, $a9:expr, $a10:expr $(,)?
    ) => {
        $crate::invoke11($f, $a0, $a1, $a2, $a3, $a4, $a5, $a6, $a7, $a8, $a9, $a10)
    };
    (
        $f:expr, $a0:expr, $a1:expr, $a2:expr, $a3:expr, $a4:expr, $a5:expr, $a6:expr,
        $a7:expr, $a8:expr, $a9:expr, $a10:expr, $a11:expr $(,)?
    ) => {
        $crate::invoke12($f, $a0, $a1, $a2, $a3, $a4, $a5, $a6, $a7, $a8, $a9, $a10, $a11)
    };
}

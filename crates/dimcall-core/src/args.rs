//! Argument lists.
//!
//! An argument list is a tuple of [`Argument`]s. Its classification is the
//! type-level OR of the classifications of its positions, computed once per
//! tuple type. Its bindings are produced position by position, either from an
//! odometer cursor ([`BindList`]) or by consuming the list for one direct
//! call ([`IntoBindings`]).

use std::fmt::Debug;

use crate::classify::{Argument, ArgumentKind, Bind, Flag, IntoBinding, No};
use crate::error::PlanResult;
use crate::plan::ExpansionPlan;

/// Largest supported number of arguments.
pub const MAX_ARITY: usize = 12;

/// A tuple of [`Argument`]s.
pub trait ArgumentList {
    const ARITY: usize;

    /// Classification of each position, in argument order.
    const KINDS: &'static [ArgumentKind];

    /// [`Yes`](crate::Yes) if any position is a dimension.
    type AnyDimension: Flag;

    /// One invocation tuple: the binding of every position.
    type Bindings;

    /// One index per position.
    type Cursor: AsRef<[usize]> + AsMut<[usize]> + Default + Copy + Debug;

    /// The extent of every position; scalars report one.
    fn extents(&self) -> Self::Cursor;

    /// The shape of the expansion this list would drive.
    fn plan(&self) -> PlanResult<ExpansionPlan> {
        ExpansionPlan::new(Self::KINDS, self.extents().as_ref())
    }
}

/// An argument list whose every position can be bound repeatedly.
pub trait BindList: ArgumentList {
    /// Bind every position at `cursor`.
    fn bind_all(&self, cursor: &Self::Cursor) -> Self::Bindings;
}

/// An argument list of scalars that can be consumed by a direct call.
pub trait IntoBindings: ArgumentList {
    fn into_bindings(self) -> Self::Bindings;
}

/// Something that can be called with a whole invocation tuple.
///
/// Implemented for every `FnMut` taking up to [`MAX_ARITY`] arguments.
pub trait Callable<Args> {
    type Output;

    fn call(&mut self, args: Args) -> Self::Output;
}

macro_rules! any_dimension {
    () => { No };
    ($head:ty $(, $rest:ty)*) => {
        <$head as Flag>::Or<any_dimension!($($rest),*)>
    };
}

macro_rules! impl_argument_list {
    ($arity:literal; $($A:ident $b:ident $idx:tt),*) => {
        impl<$($A: Argument),*> ArgumentList for ($($A,)*) {
            const ARITY: usize = $arity;
            const KINDS: &'static [ArgumentKind] = &[$(ArgumentKind::of::<$A>()),*];
            type AnyDimension = any_dimension!($(<$A as Argument>::IsDimension),*);
            type Bindings = ($($A::Binding,)*);
            type Cursor = [usize; $arity];

            fn extents(&self) -> Self::Cursor {
                [$(self.$idx.extent()),*]
            }
        }

        impl<$($A: Bind),*> BindList for ($($A,)*) {
            #[allow(unused_variables)]
            fn bind_all(&self, cursor: &Self::Cursor) -> Self::Bindings {
                ($(self.$idx.bind(cursor[$idx]),)*)
            }
        }

        impl<$($A: IntoBinding),*> IntoBindings for ($($A,)*) {
            fn into_bindings(self) -> Self::Bindings {
                ($(self.$idx.into_binding(),)*)
            }
        }

        impl<Func, Ret, $($A),*> Callable<($($A,)*)> for Func
        where
            Func: FnMut($($A),*) -> Ret,
        {
            type Output = Ret;

            fn call(&mut self, ($($b,)*): ($($A,)*)) -> Ret {
                self($($b),*)
            }
        }
    };
}

impl_argument_list!(0;);
impl_argument_list!(1; A0 b0 0);
impl_argument_list!(2; A0 b0 0, A1 b1 1);
impl_argument_list!(3; A0 b0 0, A1 b1 1, A2 b2 2);
impl_argument_list!(4; A0 b0 0, A1 b1 1, A2 b2 2, A3 b3 3);
impl_argument_list!(5; A0 b0 0, A1 b1 1, A2 b2 2, A3 b3 3, A4 b4 4);
impl_argument_list!(6; A0 b0 0, A1 b1 1, A2 b2 2, A3 b3 3, A4 b4 4, A5 b5 5);
impl_argument_list!(7; A0 b0 0, A1 b1 1, A2 b2 2, A3 b3 3, A4 b4 4, A5 b5 5, A6 b6 6);
impl_argument_list!(8; A0 b0 0, A1 b1 1, A2 b2 2, A3 b3 3, A4 b4 4, A5 b5 5, A6 b6 6, A7 b7 7);
impl_argument_list!(9;
    A0 b0 0, A1 b1 1, A2 b2 2, A3 b3 3, A4 b4 4, A5 b5 5, A6 b6 6, A7 b7 7, A8 b8 8);
impl_argument_list!(10;
    A0 b0 0, A1 b1 1, A2 b2 2, A3 b3 3, A4 b4 4, A5 b5 5, A6 b6 6, A7 b7 7, A8 b8 8, A9 b9 9);
impl_argument_list!(11;
    A0 b0 0, A1 b1 1, A2 b2 2, A3 b3 3, A4 b4 4, A5 b5 5, A6 b6 6, A7 b7 7, A8 b8 8, A9 b9 9,
    A10 b10 10);
impl_argument_list!(12;
    A0 b0 0, A1 b1 1, A2 b2 2, A3 b3 3, A4 b4 4, A5 b5 5, A6 b6 6, A7 b7 7, A8 b8 8, A9 b9 9,
    A10 b10 10, A11 b11 11);

//! Dimension classification.
//!
//! Every argument handed to an expanded call is either a *scalar*, passed
//! unchanged to each invocation, or a *dimension*, a finite sequence whose
//! elements are fanned out one invocation per element. The distinction is a
//! property of the argument's type and is resolved entirely at compile time:
//! [`Argument::IsDimension`] is a type-level flag that the argument list folds
//! into a single "any dimension present" flag before anything runs.
//!
//! Dimensions are spelled explicitly with [`Dim`]. Primitives, `String` and
//! references are scalars out of the box; any other value can be passed as a
//! scalar through [`Scalar`].

use derive_more::Display;

use crate::sequence::Sequence;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Yes {}
    impl Sealed for super::No {}
}

/// Type-level boolean.
pub trait Flag: sealed::Sealed {
    const VALUE: bool;

    /// Logical OR with another flag.
    type Or<F: Flag>: Flag;
}

/// Type-level `true`.
#[derive(Debug, Clone, Copy)]
pub enum Yes {}

/// Type-level `false`.
#[derive(Debug, Clone, Copy)]
pub enum No {}

impl Flag for Yes {
    const VALUE: bool = true;
    type Or<F: Flag> = Yes;
}

impl Flag for No {
    const VALUE: bool = false;
    type Or<F: Flag> = F;
}

/// Runtime mirror of [`Argument::IsDimension`].
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum ArgumentKind {
    #[display("scalar")]
    Scalar,
    #[display("dimension")]
    Dimension,
}

impl ArgumentKind {
    /// Classification of the argument type `A`.
    pub const fn of<A: Argument>() -> Self {
        if A::IS_DIMENSION {
            ArgumentKind::Dimension
        } else {
            ArgumentKind::Scalar
        }
    }

    pub const fn is_dimension(self) -> bool {
        matches!(self, ArgumentKind::Dimension)
    }
}

/// An argument of an expanded call.
///
/// A scalar has an extent of one; a dimension has an extent equal to its
/// length. How a binding is produced is split out into [`Bind`], for
/// arguments that can be bound at every invocation of an expansion, and
/// [`IntoBinding`], for scalars consumed by a single direct call.
pub trait Argument {
    /// [`Yes`] for dimensions, [`No`] for scalars.
    type IsDimension: Flag;

    const IS_DIMENSION: bool = <Self::IsDimension as Flag>::VALUE;

    /// The value the callable receives at this argument position.
    type Binding;

    /// Number of distinct bindings this argument contributes.
    fn extent(&self) -> usize;
}

/// An argument that can be bound any number of times.
///
/// A scalar binds to the same value at every index. A dimension binds to its
/// `index`-th element.
pub trait Bind: Argument {
    /// Produce the binding for `index`, which is always below
    /// [`Argument::extent`].
    fn bind(&self, index: usize) -> Self::Binding;
}

/// A scalar handed over to a single direct call.
///
/// Owned scalars are moved rather than cloned, and exclusive borrows pass
/// through as they are.
pub trait IntoBinding: Argument {
    fn into_binding(self) -> Self::Binding;
}

/// Whether the argument type `A` is a dimension.
pub const fn is_dimension<A: Argument>() -> bool {
    A::IS_DIMENSION
}

/// Whether any argument of the list `L` is a dimension.
pub const fn is_any_dimension_present<L: crate::args::ArgumentList>() -> bool {
    <L::AnyDimension as Flag>::VALUE
}

/// Marks a sequence as a dimension argument.
///
/// ```
/// # use dimcall_core::{Argument, Bind, Dim};
/// let xs = Dim([10, 20, 30]);
/// assert_eq!(xs.extent(), 3);
/// assert_eq!(xs.bind(1), 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Dim<S>(pub S);

impl<S: Sequence> Argument for Dim<S> {
    type IsDimension = Yes;
    type Binding = S::Elem;

    fn extent(&self) -> usize {
        self.0.len()
    }
}

impl<S: Sequence> Bind for Dim<S> {
    fn bind(&self, index: usize) -> S::Elem {
        self.0.get(index)
    }
}

/// Passes an arbitrary value as a scalar.
///
/// A direct call receives the value itself. Within an expansion each
/// invocation receives its own clone, so `T` must be `Clone` there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Scalar<T>(pub T);

impl<T> Argument for Scalar<T> {
    type IsDimension = No;
    type Binding = T;

    fn extent(&self) -> usize {
        1
    }
}

impl<T: Clone> Bind for Scalar<T> {
    fn bind(&self, _index: usize) -> T {
        self.0.clone()
    }
}

impl<T> IntoBinding for Scalar<T> {
    fn into_binding(self) -> T {
        self.0
    }
}

/// Shared references are scalars; every invocation sees the same referent.
impl<'a, T: ?Sized> Argument for &'a T {
    type IsDimension = No;
    type Binding = &'a T;

    fn extent(&self) -> usize {
        1
    }
}

impl<'a, T: ?Sized> Bind for &'a T {
    fn bind(&self, _index: usize) -> &'a T {
        *self
    }
}

impl<'a, T: ?Sized> IntoBinding for &'a T {
    fn into_binding(self) -> &'a T {
        self
    }
}

/// Exclusive references are scalars of a direct call only.
///
/// They cannot be handed to several invocations, so they have no [`Bind`]
/// impl and an expansion over them is rejected at compile time.
impl<'a, T: ?Sized> Argument for &'a mut T {
    type IsDimension = No;
    type Binding = &'a mut T;

    fn extent(&self) -> usize {
        1
    }
}

impl<'a, T: ?Sized> IntoBinding for &'a mut T {
    fn into_binding(self) -> &'a mut T {
        self
    }
}

macro_rules! copy_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Argument for $ty {
                type IsDimension = No;
                type Binding = $ty;

                fn extent(&self) -> usize {
                    1
                }
            }

            impl Bind for $ty {
                fn bind(&self, _index: usize) -> $ty {
                    *self
                }
            }

            impl IntoBinding for $ty {
                fn into_binding(self) -> $ty {
                    self
                }
            }
        )*
    };
}

copy_scalar!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, (),
);

impl Argument for String {
    type IsDimension = No;
    type Binding = String;

    fn extent(&self) -> usize {
        1
    }
}

impl Bind for String {
    fn bind(&self, _index: usize) -> String {
        self.clone()
    }
}

impl IntoBinding for String {
    fn into_binding(self) -> String {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitives_are_scalars() {
        assert!(!is_dimension::<i32>());
        assert!(!is_dimension::<f64>());
        assert!(!is_dimension::<char>());
        assert!(!is_dimension::<String>());
        assert!(!is_dimension::<&str>());
        assert!(!is_dimension::<&Vec<u8>>());
        assert!(!is_dimension::<Scalar<Vec<u8>>>());
    }

    #[test]
    fn test_dim_wrappers_are_dimensions() {
        assert!(is_dimension::<Dim<[i32; 3]>>());
        assert!(is_dimension::<Dim<Vec<String>>>());
        assert!(is_dimension::<Dim<std::ops::Range<u8>>>());
        assert!(is_dimension::<Dim<&[char]>>());
    }

    #[test]
    fn test_empty_dimension_still_classifies_as_dimension() {
        let empty: Dim<Vec<i32>> = Dim(Vec::new());
        assert_eq!(empty.extent(), 0);
        assert_eq!(ArgumentKind::of::<Dim<Vec<i32>>>(), ArgumentKind::Dimension);
    }

    #[test]
    fn test_classification_is_const() {
        const KIND: ArgumentKind = ArgumentKind::of::<Dim<[u8; 2]>>();
        const SCALAR: bool = is_dimension::<u8>();
        assert!(KIND.is_dimension());
        assert!(!SCALAR);
    }

    #[test]
    fn test_reference_scalar_binds_same_referent() {
        let owned = String::from("shared");
        let arg = owned.as_str();
        let first = Bind::bind(&arg, 0);
        let second = Bind::bind(&arg, 0);
        assert!(std::ptr::eq(first, second));
        assert!(std::ptr::eq(first, owned.as_str()));
    }

    #[test]
    fn test_owned_scalar_binds_a_clone_each_time() {
        let arg = Scalar(vec![1, 2, 3]);
        let mut first = arg.bind(0);
        first.push(4);
        assert_eq!(arg.bind(0), vec![1, 2, 3]);
        assert_eq!(arg.extent(), 1);
    }

    #[test]
    fn test_owned_scalar_moves_into_a_direct_call() {
        struct NotClone(Vec<u8>);
        let moved = Scalar(NotClone(vec![7])).into_binding();
        assert_eq!(moved.0, vec![7]);
        assert_eq!(String::from("kept").into_binding(), "kept");
    }

    #[test]
    fn test_exclusive_reference_is_a_scalar() {
        assert!(!is_dimension::<&mut i32>());
        let mut counter = 1;
        let arg = &mut counter;
        assert_eq!(arg.extent(), 1);
        *arg.into_binding() += 1;
        assert_eq!(counter, 2);
    }

    #[test]
    fn test_flag_or() {
        assert!(<<No as Flag>::Or<Yes> as Flag>::VALUE);
        assert!(<<Yes as Flag>::Or<No> as Flag>::VALUE);
        assert!(!<<No as Flag>::Or<No> as Flag>::VALUE);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ArgumentKind::Scalar.to_string(), "scalar");
        assert_eq!(ArgumentKind::Dimension.to_string(), "dimension");
    }
}

//! Result categories.
//!
//! What an expanded call returns depends on what the callable returns:
//! nothing, an owned value, or a reference. The category is read off the
//! callable's output type through [`Outcome`], so it is fixed before the first
//! invocation and costs nothing at runtime. Element types of the dimensions
//! only ever participate as types here; no representative element is built
//! and no trial call is made.
//!
//! Owned outputs are collected by value: each collected entry is the
//! independent result of one invocation. Reference outputs are collected as
//! aliases, and the referents must outlive the collection exactly as they
//! would for a single call.

use std::borrow::Cow;
use std::cell::{Cell, RefCell};
use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::ffi::{CString, OsString};
use std::marker::PhantomData;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6};
use std::num::{
    NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize, NonZeroU8,
    NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize, Saturating, Wrapping,
};
use std::ops::{ControlFlow, Range, RangeFrom, RangeInclusive, RangeTo};
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::{Arc, Mutex, RwLock};
use std::thread::JoinHandle;
use std::time::{Duration, Instant, SystemTime};

use derive_more::Display;

use crate::classify::Scalar;

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum ResultCategory {
    /// The callable returns `()`; invocations run for their effects only.
    #[display("nothing")]
    Nothing,
    /// The callable returns an owned value.
    #[display("value")]
    Value,
    /// The callable returns a reference.
    #[display("reference")]
    Reference,
}

/// Accumulates the results of an expansion.
pub trait Collect<R> {
    fn with_capacity(capacity: usize) -> Self;

    fn collect_one(&mut self, result: R);
}

impl Collect<()> for () {
    fn with_capacity(_capacity: usize) -> Self {}

    fn collect_one(&mut self, _result: ()) {}
}

impl<R> Collect<R> for Vec<R> {
    fn with_capacity(capacity: usize) -> Self {
        Vec::with_capacity(capacity)
    }

    fn collect_one(&mut self, result: R) {
        self.push(result);
    }
}

/// A callable output type with a known result category.
///
/// Implemented for `()`, for references, for tuples and for the owned types
/// of the standard library. Types of the calling crate opt in with
/// [`impl_value_outcome!`]. A type from some other crate cannot be registered
/// there, so such a return value is wrapped in [`Scalar`] instead:
///
/// ```
/// # use dimcall_core::{Outcome, ResultCategory, Scalar};
/// struct Foreign;
///
/// assert_eq!(<Scalar<Foreign> as Outcome>::CATEGORY, ResultCategory::Value);
/// ```
///
/// [`impl_value_outcome!`]: crate::impl_value_outcome
pub trait Outcome: Sized {
    const CATEGORY: ResultCategory;

    /// What an expansion over this output produces.
    type Collection: Collect<Self>;
}

impl Outcome for () {
    const CATEGORY: ResultCategory = ResultCategory::Nothing;
    type Collection = ();
}

impl<'a, T: ?Sized> Outcome for &'a T {
    const CATEGORY: ResultCategory = ResultCategory::Reference;
    type Collection = Vec<&'a T>;
}

impl<'a, T: ?Sized> Outcome for &'a mut T {
    const CATEGORY: ResultCategory = ResultCategory::Reference;
    type Collection = Vec<&'a mut T>;
}

/// Registers owned types as value outcomes.
///
/// ```
/// # use dimcall_core::{Outcome, ResultCategory, impl_value_outcome};
/// struct Meters(f64);
/// impl_value_outcome!(Meters);
///
/// assert_eq!(<Meters as Outcome>::CATEGORY, ResultCategory::Value);
/// ```
#[macro_export]
macro_rules! impl_value_outcome {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::outcome::Outcome for $ty {
                const CATEGORY: $crate::outcome::ResultCategory =
                    $crate::outcome::ResultCategory::Value;
                type Collection = ::std::vec::Vec<Self>;
            }
        )+
    };
}

macro_rules! generic_value_outcome {
    ($(impl [$($generics:tt)*] $ty:ty;)*) => {
        $(
            impl<$($generics)*> Outcome for $ty {
                const CATEGORY: ResultCategory = ResultCategory::Value;
                type Collection = Vec<Self>;
            }
        )*
    };
}

impl_value_outcome!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, String,
    NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize,
    NonZeroU8, NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize,
    Ordering, Duration, Instant, SystemTime, PathBuf, OsString, CString,
    IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6,
    std::any::TypeId, std::io::Error,
);

generic_value_outcome! {
    impl [T] Vec<T>;
    impl [T: ?Sized] Box<T>;
    impl [T] Option<T>;
    impl [T, E] Result<T, E>;
    impl [T: ?Sized] Rc<T>;
    impl [T: ?Sized] Arc<T>;
    impl ['a, B: ToOwned + ?Sized] Cow<'a, B>;
    impl [T, const N: usize] [T; N];
    impl [T] VecDeque<T>;
    impl [T] LinkedList<T>;
    impl [T] BinaryHeap<T>;
    impl [K, V, S] HashMap<K, V, S>;
    impl [T, S] HashSet<T, S>;
    impl [K, V] BTreeMap<K, V>;
    impl [T] BTreeSet<T>;
    impl [T] Scalar<T>;
    impl [T: ?Sized] std::rc::Weak<T>;
    impl [T: ?Sized] std::sync::Weak<T>;
    impl [T] Cell<T>;
    impl [T] RefCell<T>;
    impl [T] Mutex<T>;
    impl [T] RwLock<T>;
    impl [T] Wrapping<T>;
    impl [T] Saturating<T>;
    impl [T] Reverse<T>;
    impl [T: ?Sized] PhantomData<T>;
    impl [T] Range<T>;
    impl [T] RangeInclusive<T>;
    impl [T] RangeFrom<T>;
    impl [T] RangeTo<T>;
    impl [B, C] ControlFlow<B, C>;
    impl [T] JoinHandle<T>;
}

macro_rules! tuple_value_outcome {
    ($(($($T:ident),+))*) => {
        $(
            impl<$($T),+> Outcome for ($($T,)+) {
                const CATEGORY: ResultCategory = ResultCategory::Value;
                type Collection = Vec<Self>;
            }
        )*
    };
}

tuple_value_outcome! {
    (A)
    (A, B)
    (A, B, C)
    (A, B, C, D)
    (A, B, C, D, E)
    (A, B, C, D, E, F)
    (A, B, C, D, E, F, G)
    (A, B, C, D, E, F, G, H)
    (A, B, C, D, E, F, G, H, I)
    (A, B, C, D, E, F, G, H, I, J)
    (A, B, C, D, E, F, G, H, I, J, K)
    (A, B, C, D, E, F, G, H, I, J, K, L)
}

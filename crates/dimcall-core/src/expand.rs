//! Cartesian expansion.
//!
//! The engine is an odometer over the argument positions: one digit per
//! position, the rightmost digit turning fastest. Scalars are digits with a
//! single value, so they never branch; a dimension of length zero leaves
//! nothing to enumerate and the callable is never invoked. Every cursor the
//! odometer yields is bound into one invocation tuple, passed to the
//! callable, and its result handed to the collection chosen by the output's
//! [`Outcome`].
//!
//! The cursor is a fixed-size array, so walking the combinations allocates
//! nothing beyond the result collection itself. That collection is pre-sized
//! to the invocation count, up to [`PRESIZE_LIMIT`] entries; beyond that it
//! grows as results arrive.

use tracing::debug;
#[cfg(feature = "trace-invocations")]
use tracing::trace;

use crate::args::{ArgumentList, BindList, IntoBindings};
use crate::classify::{No, Yes};
use crate::outcome::{Collect, Outcome};
use crate::plan::invocation_count;

/// Row-major enumeration of every cursor below `extents`.
///
/// ```
/// # use dimcall_core::Odometer;
/// let cursors: Vec<_> = Odometer::new([2, 1, 2]).collect();
/// assert_eq!(cursors, [[0, 0, 0], [0, 0, 1], [1, 0, 0], [1, 0, 1]]);
/// ```
#[derive(Clone, Debug)]
pub struct Odometer<C> {
    extents: C,
    cursor: C,
    exhausted: bool,
}

impl<C> Odometer<C>
where
    C: AsRef<[usize]> + AsMut<[usize]> + Default + Copy,
{
    pub fn new(extents: C) -> Self {
        let exhausted = extents.as_ref().contains(&0);
        Self {
            extents,
            cursor: C::default(),
            exhausted,
        }
    }

    /// The cursor the next call to `next` will yield.
    pub fn current(&self) -> Option<&C> {
        (!self.exhausted).then_some(&self.cursor)
    }

    /// Step to the next cursor, carrying into positions further left.
    fn advance(&mut self) {
        let extents = self.extents.as_ref();
        for (digit, &extent) in self.cursor.as_mut().iter_mut().zip(extents).rev() {
            *digit += 1;
            if *digit < extent {
                return;
            }
            *digit = 0;
        }
        self.exhausted = true;
    }
}

impl<C> Iterator for Odometer<C>
where
    C: AsRef<[usize]> + AsMut<[usize]> + Default + Copy,
{
    type Item = C;

    fn next(&mut self) -> Option<C> {
        if self.exhausted {
            return None;
        }
        let cursor = self.cursor;
        self.advance();
        Some(cursor)
    }
}

/// Largest number of result slots reserved before the first invocation.
pub const PRESIZE_LIMIT: usize = 1 << 16;

/// Invoke `call` once per combination of `args`, in row-major order.
pub fn expand<L, R, F>(args: &L, mut call: F) -> R::Collection
where
    L: BindList,
    R: Outcome,
    F: FnMut(L::Bindings) -> R,
{
    let extents = args.extents();
    let invocations = invocation_count(extents.as_ref());
    debug!(
        arity = L::ARITY,
        extents = ?extents.as_ref(),
        ?invocations,
        category = %R::CATEGORY,
        "expanding call"
    );

    let capacity = invocations.unwrap_or_default().min(PRESIZE_LIMIT);
    let mut collection = <R::Collection as Collect<R>>::with_capacity(capacity);
    for cursor in Odometer::new(extents) {
        #[cfg(feature = "trace-invocations")]
        trace!(cursor = ?cursor.as_ref(), "invoking");
        collection.collect_one(call(args.bind_all(&cursor)));
    }
    collection
}

/// Chooses between a direct call and an expansion from the argument list's
/// type-level [`ArgumentList::AnyDimension`] flag.
pub trait Dispatch<L: ArgumentList, R> {
    type Output;

    fn dispatch<F>(args: L, call: F) -> Self::Output
    where
        F: FnMut(L::Bindings) -> R;
}

/// No dimensions: the list is consumed by one call, output returned as is.
impl<L: IntoBindings, R> Dispatch<L, R> for No {
    type Output = R;

    fn dispatch<F>(args: L, mut call: F) -> R
    where
        F: FnMut(L::Bindings) -> R,
    {
        call(args.into_bindings())
    }
}

impl<L: BindList, R: Outcome> Dispatch<L, R> for Yes {
    type Output = R::Collection;

    fn dispatch<F>(args: L, call: F) -> R::Collection
    where
        F: FnMut(L::Bindings) -> R,
    {
        expand(&args, call)
    }
}

/// What an expanded call over `L` returns when the callable returns `R`.
pub type Expanded<L, R> = <<L as ArgumentList>::AnyDimension as Dispatch<L, R>>::Output;

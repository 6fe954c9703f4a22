//! Finite, homogeneous sequences that can back a dimension.
//!
//! A [`Sequence`] is addressed by index rather than consumed as an iterator:
//! inner dimensions are revisited once per element of every outer dimension,
//! so the sequence must be readable any number of times. Owned containers
//! hand out clones of their elements, borrowed ones hand out references.

use std::ops::{Range, RangeInclusive};

use crate::classify::Dim;

/// A finite, ordered sequence with a single element type.
pub trait Sequence {
    type Elem;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The element at `index`. Callers guarantee `index < self.len()`.
    fn get(&self, index: usize) -> Self::Elem;
}

impl<T: Clone, const N: usize> Sequence for [T; N] {
    type Elem = T;

    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> T {
        self[index].clone()
    }
}

impl<T: Clone> Sequence for Vec<T> {
    type Elem = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> T {
        self[index].clone()
    }
}

impl<T: Clone> Sequence for Box<[T]> {
    type Elem = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> T {
        self[index].clone()
    }
}

impl<'a, T> Sequence for &'a [T] {
    type Elem = &'a T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> &'a T {
        let items: &'a [T] = *self;
        &items[index]
    }
}

impl<'a, T, const N: usize> Sequence for &'a [T; N] {
    type Elem = &'a T;

    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> &'a T {
        let items: &'a [T; N] = *self;
        &items[index]
    }
}

impl<'a, T> Sequence for &'a Vec<T> {
    type Elem = &'a T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> &'a T {
        let items: &'a Vec<T> = *self;
        &items[index]
    }
}

fn span(start: i128, end: i128) -> usize {
    usize::try_from(end.saturating_sub(start).max(0)).unwrap_or(usize::MAX)
}

macro_rules! integer_ranges {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Sequence for Range<$ty> {
                type Elem = $ty;

                fn len(&self) -> usize {
                    span(self.start as i128, self.end as i128)
                }

                fn get(&self, index: usize) -> $ty {
                    (self.start as i128 + index as i128) as $ty
                }
            }

            impl Sequence for RangeInclusive<$ty> {
                type Elem = $ty;

                fn len(&self) -> usize {
                    if RangeInclusive::is_empty(self) {
                        0
                    } else {
                        span(*self.start() as i128, *self.end() as i128 + 1)
                    }
                }

                fn get(&self, index: usize) -> $ty {
                    (*self.start() as i128 + index as i128) as $ty
                }
            }
        )*
    };
}

integer_ranges!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// The index sequence `0, 1, ..., N - 1`, sized at compile time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct IndexSeq<const N: usize>;

impl<const N: usize> Sequence for IndexSeq<N> {
    type Elem = usize;

    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> usize {
        index
    }
}

/// A dimension over `0..N`.
///
/// ```
/// # use dimcall_core::{Argument, Bind, index_seq};
/// let seq = index_seq::<4>();
/// assert_eq!(seq.extent(), 4);
/// assert_eq!(seq.bind(3), 3);
/// ```
pub const fn index_seq<const N: usize>() -> Dim<IndexSeq<N>> {
    Dim(IndexSeq)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elements<S: Sequence>(seq: &S) -> Vec<S::Elem> {
        (0..seq.len()).map(|index| seq.get(index)).collect()
    }

    #[test]
    fn test_array_and_vec_clone_elements() {
        assert_eq!(elements(&[3, 1, 2]), vec![3, 1, 2]);
        assert_eq!(
            elements(&vec![String::from("a"), String::from("b")]),
            vec!["a", "b"]
        );
        let boxed: Box<[u8]> = vec![7, 8].into_boxed_slice();
        assert_eq!(elements(&boxed), vec![7, 8]);
    }

    #[test]
    fn test_borrowed_sequences_yield_references() {
        let data = vec![10, 20, 30];
        let slice: &[i32] = &data;
        let refs = elements(&slice);
        assert_eq!(refs.len(), 3);
        assert!(std::ptr::eq(refs[1], &data[1]));

        let by_vec = elements(&&data);
        assert!(std::ptr::eq(by_vec[2], &data[2]));

        let array = [1u8, 2];
        let by_array = elements(&&array);
        assert!(std::ptr::eq(by_array[0], &array[0]));
    }

    #[test]
    fn test_ranges() {
        assert_eq!(elements(&(2i32..5)), vec![2, 3, 4]);
        assert_eq!(elements(&(-2i8..1)), vec![-2, -1, 0]);
        assert_eq!(elements(&(1u64..=3)), vec![1, 2, 3]);
        assert_eq!(elements(&(250u8..=255)), vec![250, 251, 252, 253, 254, 255]);
    }

    #[test]
    fn test_empty_ranges() {
        assert_eq!(Sequence::len(&(5i32..5)), 0);
        #[allow(clippy::reversed_empty_ranges)]
        let backwards = 5usize..2;
        assert!(Sequence::is_empty(&backwards));
        #[allow(clippy::reversed_empty_ranges)]
        let inclusive_backwards = 3i32..=1;
        assert_eq!(Sequence::len(&inclusive_backwards), 0);
        assert_eq!(Sequence::len(&(0u8..=0)), 1);
    }

    #[test]
    fn test_index_seq() {
        assert_eq!(elements(&IndexSeq::<3>), vec![0, 1, 2]);
        assert!(Sequence::is_empty(&IndexSeq::<0>));
    }
}

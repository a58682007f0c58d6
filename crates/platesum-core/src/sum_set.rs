//! Sets of acceptable digit sums.

use std::{
    fmt::{self, Debug},
    iter::FusedIterator,
};

/// Exclusive upper bound of the values a [`SumSet`] can hold.
pub const SUM_LIMIT: u32 = 128;

/// A set of non-negative sums below [`SUM_LIMIT`], stored as a bitset.
///
/// Every total derived from
/// [`FAVORABLE_SUMS`](crate::tables::FAVORABLE_SUMS) fits, as does every
/// 4-digit digit sum (at most 36).
///
/// # Examples
///
/// ```
/// use platesum_core::SumSet;
///
/// let sums = SumSet::from_iter([11, 2, 6, 2]);
/// assert_eq!(sums.len(), 3);
/// assert!(sums.contains(6));
/// assert!(!sums.contains(7));
/// assert_eq!(sums.iter().collect::<Vec<_>>(), [2, 6, 11]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SumSet {
    bits: u128,
}

impl SumSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Adds a sum, returning `true` if it was not already present.
    ///
    /// # Panics
    ///
    /// Panics if `sum` is not less than [`SUM_LIMIT`].
    pub fn insert(&mut self, sum: u32) -> bool {
        assert!(sum < SUM_LIMIT, "Sum must be less than {SUM_LIMIT}, got {sum}");
        let added = !self.contains(sum);
        self.bits |= 1 << sum;
        added
    }

    /// Returns `true` if the set contains `sum`.
    ///
    /// Values at or above [`SUM_LIMIT`] are never contained.
    #[must_use]
    pub const fn contains(&self, sum: u32) -> bool {
        sum < SUM_LIMIT && self.bits & (1 << sum) != 0
    }

    /// Returns the number of sums in the set.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Returns an iterator over the sums in ascending order.
    #[must_use]
    pub fn iter(&self) -> SumSetIter {
        SumSetIter { bits: self.bits }
    }
}

impl Debug for SumSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<u32> for SumSet {
    fn from_iter<T: IntoIterator<Item = u32>>(iter: T) -> Self {
        let mut set = Self::new();
        for sum in iter {
            set.insert(sum);
        }
        set
    }
}

impl IntoIterator for &SumSet {
    type Item = u32;
    type IntoIter = SumSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the sums of a [`SumSet`].
#[derive(Debug, Clone)]
pub struct SumSetIter {
    bits: u128,
}

impl Iterator for SumSetIter {
    type Item = u32;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let sum = self.bits.trailing_zeros();
        self.bits &= self.bits - 1;
        Some(sum)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl FusedIterator for SumSetIter {}
impl ExactSizeIterator for SumSetIter {}

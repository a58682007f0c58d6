use std::collections::{BTreeMap, btree_map};

use platesum_core::Plate;

/// Plates bucketed by digit sum.
///
/// Sums iterate in ascending order. Within a group, plates keep the order in
/// which they were pushed, so feeding it the output of
/// [`enumerate`](crate::enumerate) keeps every group ascending.
///
/// # Examples
///
/// ```
/// use platesum_core::Plate;
/// use platesum_generator::SumGroups;
///
/// let groups: SumGroups = [5555, 1900, 2369].map(Plate::new).into_iter().collect();
/// let sums: Vec<_> = groups.iter().map(|(sum, plates)| (sum, plates.len())).collect();
/// assert_eq!(sums, [(10, 1), (20, 2)]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SumGroups {
    groups: BTreeMap<u32, Vec<Plate>>,
}

impl SumGroups {
    /// Creates an empty grouping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `plate` to the group for its digit sum.
    pub fn push(&mut self, plate: Plate) {
        self.groups
            .entry(plate.digit_sum())
            .or_default()
            .push(plate);
    }

    /// Returns the plates whose digit sum is `sum`.
    #[must_use]
    pub fn get(&self, sum: u32) -> Option<&[Plate]> {
        self.groups.get(&sum).map(Vec::as_slice)
    }

    /// Returns the number of distinct sums.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` if no plate was pushed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Returns the number of plates across all groups.
    #[must_use]
    pub fn plate_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Returns `(sum, plates)` pairs in ascending sum order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.groups.iter(),
        }
    }
}

impl FromIterator<Plate> for SumGroups {
    fn from_iter<T: IntoIterator<Item = Plate>>(iter: T) -> Self {
        let mut groups = Self::new();
        for plate in iter {
            groups.push(plate);
        }
        groups
    }
}

impl<'a> IntoIterator for &'a SumGroups {
    type Item = (u32, &'a [Plate]);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator returned by [`SumGroups::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, u32, Vec<Plate>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (u32, &'a [Plate]);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(sum, plates)| (*sum, plates.as_slice()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

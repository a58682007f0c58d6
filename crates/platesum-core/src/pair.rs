//! Two-digit pairs and the sliding-window exclusion filter.
//!
//! A plate is rejected when any two adjacent digits form a pair in the
//! exclusion set. The check is positional: `1234` contains the pairs `12`,
//! `23` and `34`, but not `13` or `24`.
//!
//! # Examples
//!
//! ```
//! use platesum_core::{PairSet, Plate, contains_excluded_pair};
//!
//! let excluded = PairSet::parse_list("23, 99").pairs;
//! assert!(contains_excluded_pair(Plate::new(1234), &excluded));
//! assert!(!contains_excluded_pair(Plate::new(1324), &excluded));
//! ```

use std::{
    fmt::{self, Debug, Display},
    iter::FusedIterator,
    str::FromStr,
};

use crate::{Plate, tables::DEFAULT_EXCLUDED_PAIRS};

/// Two adjacent decimal digits, `00`-`99`.
///
/// The pair is ordered: `12` and `21` are different pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DigitPair {
    value: u8,
}

impl DigitPair {
    /// Creates a pair from its two digits.
    ///
    /// # Panics
    ///
    /// Panics if either digit is greater than 9.
    #[must_use]
    pub const fn new(first: u8, second: u8) -> Self {
        assert!(first < 10 && second < 10, "Digits must be between 0 and 9");
        Self {
            value: first * 10 + second,
        }
    }

    /// Creates a pair from a two-digit literal such as `"07"`.
    ///
    /// Used for compile-time tables.
    ///
    /// # Panics
    ///
    /// Panics if `literal` is not exactly two ASCII digits.
    #[must_use]
    pub const fn from_literal(literal: &str) -> Self {
        let bytes = literal.as_bytes();
        assert!(
            bytes.len() == 2 && bytes[0].is_ascii_digit() && bytes[1].is_ascii_digit(),
            "Digit pair literal must be two ASCII digits"
        );
        Self::new(bytes[0] - b'0', bytes[1] - b'0')
    }

    /// Returns the pair read as a number (0-99).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.value
    }

    /// Returns the leading digit.
    #[must_use]
    pub const fn first(self) -> u8 {
        self.value / 10
    }

    /// Returns the trailing digit.
    #[must_use]
    pub const fn second(self) -> u8 {
        self.value % 10
    }

    const fn bit(self) -> u128 {
        1 << self.value
    }
}

impl Display for DigitPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.value)
    }
}

impl FromStr for DigitPair {
    type Err = PairParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            &[a, b] if a.is_ascii_digit() && b.is_ascii_digit() => {
                Ok(Self::new(a - b'0', b - b'0'))
            }
            _ => Err(PairParseError {
                input: s.to_owned(),
            }),
        }
    }
}

/// Error returned when text is not exactly two decimal digits.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid digit pair {input:?}: expected exactly two decimal digits")]
pub struct PairParseError {
    /// The rejected text.
    pub input: String,
}

/// A set of [`DigitPair`]s, stored as a 100-bit mask.
///
/// # Examples
///
/// ```
/// use platesum_core::{DigitPair, PairSet};
///
/// let mut set = PairSet::new();
/// assert!(set.insert(DigitPair::new(1, 3)));
/// assert!(!set.insert(DigitPair::new(1, 3)));
/// assert_eq!(set.len(), 1);
/// assert_eq!(set.to_string(), "13");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PairSet {
    bits: u128,
}

impl PairSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The default exclusion set built from [`DEFAULT_EXCLUDED_PAIRS`].
    pub const DEFAULTS: Self = Self::from_pairs(&DEFAULT_EXCLUDED_PAIRS);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set containing every pair in `pairs`.
    #[must_use]
    pub const fn from_pairs(pairs: &[DigitPair]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < pairs.len() {
            bits |= pairs[i].bit();
            i += 1;
        }
        Self { bits }
    }

    /// Parses a comma-separated list such as `"00, 01,13"`.
    ///
    /// Tokens are trimmed. Empty tokens are skipped, and tokens that are not
    /// exactly two decimal digits are collected in [`ParsedPairs::rejected`]
    /// instead of failing the whole list.
    ///
    /// # Examples
    ///
    /// ```
    /// use platesum_core::PairSet;
    ///
    /// let parsed = PairSet::parse_list("12, 3, ab, 12,,45");
    /// assert_eq!(parsed.pairs.to_string(), "12,45");
    /// assert_eq!(parsed.rejected, ["3", "ab"]);
    /// ```
    #[must_use]
    pub fn parse_list(text: &str) -> ParsedPairs {
        let mut pairs = Self::new();
        let mut rejected = Vec::new();
        for token in text.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            match token.parse::<DigitPair>() {
                Ok(pair) => {
                    pairs.insert(pair);
                }
                Err(err) => rejected.push(err.input),
            }
        }
        log::trace!(
            "parsed exclusion list: {} pairs, {} rejected tokens",
            pairs.len(),
            rejected.len()
        );
        ParsedPairs { pairs, rejected }
    }

    /// Adds a pair, returning `true` if it was not already present.
    pub fn insert(&mut self, pair: DigitPair) -> bool {
        let added = !self.contains(pair);
        self.bits |= pair.bit();
        added
    }

    /// Removes a pair, returning `true` if it was present.
    pub fn remove(&mut self, pair: DigitPair) -> bool {
        let removed = self.contains(pair);
        self.bits &= !pair.bit();
        removed
    }

    /// Returns `true` if the set contains `pair`.
    #[must_use]
    pub const fn contains(&self, pair: DigitPair) -> bool {
        self.bits & pair.bit() != 0
    }

    /// Returns the number of pairs in the set.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Returns an iterator over the pairs in ascending order.
    #[must_use]
    pub fn iter(&self) -> PairSetIter {
        PairSetIter { bits: self.bits }
    }
}

impl Debug for PairSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.iter().map(|pair| pair.to_string()))
            .finish()
    }
}

/// Formats the set as a comma-separated list, the same shape [`PairSet::parse_list`] reads.
impl Display for PairSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pair) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            Display::fmt(&pair, f)?;
        }
        Ok(())
    }
}

impl FromIterator<DigitPair> for PairSet {
    fn from_iter<T: IntoIterator<Item = DigitPair>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<DigitPair> for PairSet {
    fn extend<T: IntoIterator<Item = DigitPair>>(&mut self, iter: T) {
        for pair in iter {
            self.insert(pair);
        }
    }
}

impl IntoIterator for &PairSet {
    type Item = DigitPair;
    type IntoIter = PairSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the pairs of a [`PairSet`].
#[derive(Debug, Clone)]
pub struct PairSetIter {
    bits: u128,
}

impl Iterator for PairSetIter {
    type Item = DigitPair;

    #[inline]
    #[expect(clippy::cast_possible_truncation)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let value = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(DigitPair::new(value / 10, value % 10))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl FusedIterator for PairSetIter {}
impl ExactSizeIterator for PairSetIter {}

/// Result of [`PairSet::parse_list`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPairs {
    /// The valid pairs.
    pub pairs: PairSet,
    /// Non-empty tokens that were not two decimal digits, in input order.
    pub rejected: Vec<String>,
}

/// Returns `true` if any of the three adjacent digit pairs of `plate` is in `excluded`.
///
/// The windows sit at offsets 0, 1 and 2 of the zero-padded number.
#[must_use]
pub fn contains_excluded_pair(plate: Plate, excluded: &PairSet) -> bool {
    plate.pairs().into_iter().any(|pair| excluded.contains(pair))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::plate::PLATE_COUNT;

    fn set(list: &str) -> PairSet {
        let parsed = PairSet::parse_list(list);
        assert!(parsed.rejected.is_empty(), "{:?}", parsed.rejected);
        parsed.pairs
    }

    #[test]
    fn test_pair_parse() {
        assert_eq!("07".parse::<DigitPair>(), Ok(DigitPair::new(0, 7)));
        assert_eq!("90".parse::<DigitPair>().map(DigitPair::value), Ok(90));
        for bad in ["", "1", "123", "a1", " 1", "๑๒"] {
            assert!(bad.parse::<DigitPair>().is_err(), "{bad:?} should be rejected");
        }
        assert_eq!(DigitPair::from_literal("42"), DigitPair::new(4, 2));
        assert_eq!(DigitPair::new(4, 2).first(), 4);
        assert_eq!(DigitPair::new(4, 2).second(), 2);
    }

    #[test]
    fn test_sliding_window_positions() {
        let plate = Plate::new(1234);
        assert!(contains_excluded_pair(plate, &set("23")));
        assert!(contains_excluded_pair(plate, &set("12")));
        assert!(contains_excluded_pair(plate, &set("34")));
        assert!(!contains_excluded_pair(plate, &set("99")));
        assert!(!contains_excluded_pair(plate, &set("13,24,14,21")));
    }

    #[test]
    fn test_leading_zeros_form_pairs() {
        assert!(contains_excluded_pair(Plate::new(5), &set("00")));
        assert!(contains_excluded_pair(Plate::new(5), &set("05")));
        assert!(!contains_excluded_pair(Plate::new(5), &set("50")));
    }

    #[test]
    fn test_empty_set_never_matches() {
        for plate in Plate::all() {
            assert!(!contains_excluded_pair(plate, &PairSet::EMPTY));
        }
    }

    #[test]
    fn test_parse_list() {
        let parsed = PairSet::parse_list(" 00 , 01,01,  ,7,007,x9, 94 ");
        assert_eq!(parsed.pairs, set("00,01,94"));
        assert_eq!(parsed.rejected, ["7", "007", "x9"]);

        assert_eq!(PairSet::parse_list("").pairs, PairSet::EMPTY);
        assert_eq!(PairSet::parse_list("   ").pairs, PairSet::EMPTY);
    }

    #[test]
    fn test_set_operations() {
        let mut pairs = PairSet::new();
        assert!(pairs.is_empty());
        assert!(pairs.insert(DigitPair::new(9, 9)));
        assert!(pairs.insert(DigitPair::new(0, 0)));
        assert!(!pairs.insert(DigitPair::new(0, 0)));
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs.iter().collect::<Vec<_>>(), [DigitPair::new(0, 0), DigitPair::new(9, 9)]);
        assert!(pairs.remove(DigitPair::new(0, 0)));
        assert!(!pairs.remove(DigitPair::new(0, 0)));
        assert_eq!(pairs.to_string(), "99");
        assert_eq!(format!("{pairs:?}"), r#"{"99"}"#);
    }

    #[test]
    fn test_defaults_round_trip_through_text() {
        assert_eq!(PairSet::DEFAULTS.len(), DEFAULT_EXCLUDED_PAIRS.len());
        assert_eq!(set(&PairSet::DEFAULTS.to_string()), PairSet::DEFAULTS);
    }

    proptest! {
        #[test]
        fn matches_substring_search(
            value in 0..PLATE_COUNT,
            raw in proptest::collection::vec(0..100u8, 0..8),
        ) {
            let excluded: PairSet = raw.iter().map(|v| DigitPair::new(v / 10, v % 10)).collect();
            let text = format!("{value:04}");
            let expected = (0..3).any(|i| {
                excluded
                    .iter()
                    .any(|pair| pair.to_string() == text[i..i + 2])
            });
            prop_assert_eq!(contains_excluded_pair(Plate::new(value), &excluded), expected);
        }
    }
}

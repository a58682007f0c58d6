//! Four-digit plate numbers.
//!
//! A [`Plate`] is the numeric part of a registration plate, a value in the range
//! `0000`-`9999`. It is always handled as exactly four digits, zero-padded on the
//! left, so `7` and `0007` are the same plate.

use std::{
    fmt::{self, Display},
    iter::FusedIterator,
    str::FromStr,
};

use crate::DigitPair;

/// Number of distinct plate numbers (`0000`-`9999`).
pub const PLATE_COUNT: u16 = 10_000;

/// A 4-digit plate number in the range `0000`-`9999`.
///
/// # Examples
///
/// ```
/// use platesum_core::Plate;
///
/// let plate = Plate::new(42);
/// assert_eq!(plate.digits(), [0, 0, 4, 2]);
/// assert_eq!(plate.digit_sum(), 6);
/// assert_eq!(plate.to_string(), "0042");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Plate {
    value: u16,
}

impl Plate {
    /// The lowest plate number, `0000`.
    pub const MIN: Self = Self::new(0);

    /// The highest plate number, `9999`.
    pub const MAX: Self = Self::new(PLATE_COUNT - 1);

    /// Creates a plate from its numeric value.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 0-9999.
    #[must_use]
    pub const fn new(value: u16) -> Self {
        assert!(value < PLATE_COUNT, "Plate number must be less than 10000");
        Self { value }
    }

    /// Returns an iterator over every plate number in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use platesum_core::Plate;
    ///
    /// let mut all = Plate::all();
    /// assert_eq!(all.len(), 10_000);
    /// assert_eq!(all.next(), Some(Plate::MIN));
    /// assert_eq!(all.next_back(), Some(Plate::MAX));
    /// ```
    #[must_use]
    pub fn all() -> AllPlates {
        AllPlates {
            front: 0,
            back: PLATE_COUNT,
        }
    }

    /// Returns the numeric value (0-9999).
    #[must_use]
    pub const fn value(self) -> u16 {
        self.value
    }

    /// Returns the four digits, most significant first.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn digits(self) -> [u8; 4] {
        let v = self.value;
        [
            (v / 1000) as u8,
            (v / 100 % 10) as u8,
            (v / 10 % 10) as u8,
            (v % 10) as u8,
        ]
    }

    /// Returns the sum of the four digits (0-36).
    #[must_use]
    pub fn digit_sum(self) -> u32 {
        self.digits().iter().copied().map(u32::from).sum()
    }

    /// Returns the three adjacent digit pairs at offsets 0, 1 and 2.
    ///
    /// # Examples
    ///
    /// ```
    /// use platesum_core::Plate;
    ///
    /// let [a, b, c] = Plate::new(1234).pairs();
    /// assert_eq!(a.to_string(), "12");
    /// assert_eq!(b.to_string(), "23");
    /// assert_eq!(c.to_string(), "34");
    /// ```
    #[must_use]
    pub const fn pairs(self) -> [DigitPair; 3] {
        let [d0, d1, d2, d3] = self.digits();
        [
            DigitPair::new(d0, d1),
            DigitPair::new(d1, d2),
            DigitPair::new(d2, d3),
        ]
    }
}

impl Display for Plate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.value)
    }
}

impl From<Plate> for u16 {
    fn from(plate: Plate) -> u16 {
        plate.value
    }
}

impl TryFrom<u16> for Plate {
    type Error = PlateError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        if value < PLATE_COUNT {
            Ok(Self { value })
        } else {
            Err(PlateError::OutOfRange {
                value: u32::from(value),
            })
        }
    }
}

impl FromStr for Plate {
    type Err = PlateError;

    /// Parses one to four decimal digits, padding on the left.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.len() > 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PlateError::InvalidFormat {
                input: s.to_owned(),
            });
        }
        let value = s
            .bytes()
            .fold(0, |acc, b| acc * 10 + u16::from(b - b'0'));
        Ok(Self::new(value))
    }
}

/// Errors produced when building a [`Plate`] from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlateError {
    /// The numeric value does not fit in four digits.
    #[display("plate number {value} is out of range (0-9999)")]
    OutOfRange {
        /// The rejected value.
        value: u32,
    },
    /// The text is not one to four decimal digits.
    #[display("invalid plate number {input:?}: expected 1 to 4 decimal digits")]
    InvalidFormat {
        /// The rejected text.
        input: String,
    },
}

/// Iterator over all plate numbers, see [`Plate::all`].
#[derive(Debug, Clone)]
pub struct AllPlates {
    front: u16,
    back: u16,
}

impl Iterator for AllPlates {
    type Item = Plate;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let plate = Plate::new(self.front);
        self.front += 1;
        Some(plate)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.back.saturating_sub(self.front));
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for AllPlates {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(Plate::new(self.back))
    }
}

impl FusedIterator for AllPlates {}
impl ExactSizeIterator for AllPlates {}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_digits_are_zero_padded() {
        assert_eq!(Plate::new(0).digits(), [0, 0, 0, 0]);
        assert_eq!(Plate::new(7).digits(), [0, 0, 0, 7]);
        assert_eq!(Plate::new(305).digits(), [0, 3, 0, 5]);
        assert_eq!(Plate::new(9999).digits(), [9, 9, 9, 9]);

        assert_eq!(Plate::new(7).to_string(), "0007");
        assert_eq!(Plate::new(1234).to_string(), "1234");
    }

    #[test]
    fn test_all_iterates_in_order() {
        let all: Vec<_> = Plate::all().collect();
        assert_eq!(all.len(), usize::from(PLATE_COUNT));
        assert!(all.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(all[0], Plate::MIN);
        assert_eq!(all[9999], Plate::MAX);
    }

    #[test]
    fn test_try_from_rejects_out_of_range() {
        assert_eq!(Plate::try_from(9999), Ok(Plate::MAX));
        assert_eq!(
            Plate::try_from(10_000),
            Err(PlateError::OutOfRange { value: 10_000 })
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!("0042".parse::<Plate>(), Ok(Plate::new(42)));
        assert_eq!("42".parse::<Plate>(), Ok(Plate::new(42)));
        assert_eq!(" 9999 ".parse::<Plate>(), Ok(Plate::MAX));

        for bad in ["", "12345", "12a4", "-1", "๑๒"] {
            assert!(
                matches!(bad.parse::<Plate>(), Err(PlateError::InvalidFormat { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    #[should_panic(expected = "Plate number must be less than 10000")]
    fn test_new_rejects_five_digits() {
        let _ = Plate::new(10_000);
    }

    proptest! {
        #[test]
        fn digit_sum_matches_padded_text(value in 0..PLATE_COUNT) {
            let plate = Plate::new(value);
            let expected: u32 = format!("{value:04}")
                .chars()
                .map(|ch| ch.to_digit(10).unwrap())
                .sum();
            prop_assert_eq!(plate.digit_sum(), expected);
        }

        #[test]
        fn pairs_match_padded_text(value in 0..PLATE_COUNT) {
            let text = format!("{value:04}");
            let pairs = Plate::new(value).pairs();
            for (offset, pair) in pairs.iter().enumerate() {
                prop_assert_eq!(pair.to_string(), &text[offset..offset + 2]);
            }
        }
    }
}

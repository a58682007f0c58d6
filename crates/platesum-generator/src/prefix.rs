use std::fmt::{self, Display};

use platesum_core::{SumSet, char_value, tables::FAVORABLE_SUMS};

/// Number of characters in a plate prefix.
pub const PREFIX_CHAR_COUNT: usize = 2;

/// The part of a plate in front of the 4-digit number: one digit and two characters.
///
/// # Examples
///
/// ```
/// use platesum_generator::Prefix;
///
/// let prefix = Prefix::parse("1", "กข")?;
/// assert_eq!(prefix.required_sum(), 1 + 1 + 2);
/// assert_eq!(prefix.to_string(), "1กข");
/// # Ok::<(), platesum_generator::PrefixError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix {
    digit: u8,
    chars: [char; PREFIX_CHAR_COUNT],
}

impl Prefix {
    /// Creates a prefix from an already parsed digit and characters.
    ///
    /// Characters outside the value table are accepted and score 0.
    ///
    /// # Errors
    ///
    /// Returns [`PrefixError::InvalidDigit`] if `digit` is greater than 9.
    pub fn new(digit: u8, chars: [char; PREFIX_CHAR_COUNT]) -> Result<Self, PrefixError> {
        if digit > 9 {
            return Err(PrefixError::InvalidDigit {
                input: digit.to_string(),
            });
        }
        Ok(Self { digit, chars })
    }

    /// Parses user input for the leading digit and the characters.
    ///
    /// Both inputs are trimmed first.
    ///
    /// # Errors
    ///
    /// Returns [`PrefixError::InvalidDigit`] if `digit` is not a number from 0 to 9,
    /// and [`PrefixError::InvalidCharacterCount`] if `chars` is not exactly two
    /// characters long.
    pub fn parse(digit: &str, chars: &str) -> Result<Self, PrefixError> {
        let digit_text = digit.trim();
        let digit = digit_text
            .parse::<u8>()
            .ok()
            .filter(|d| *d <= 9)
            .ok_or_else(|| PrefixError::InvalidDigit {
                input: digit_text.to_owned(),
            })?;

        let chars_text = chars.trim();
        let count = chars_text.chars().count();
        let mut it = chars_text.chars();
        let (Some(first), Some(second), None) = (it.next(), it.next(), it.next()) else {
            return Err(PrefixError::InvalidCharacterCount { count });
        };
        Self::new(digit, [first, second])
    }

    /// Returns the leading digit (0-9).
    #[must_use]
    pub const fn digit(&self) -> u8 {
        self.digit
    }

    /// Returns the two characters.
    #[must_use]
    pub const fn chars(&self) -> [char; PREFIX_CHAR_COUNT] {
        self.chars
    }

    /// Returns the score already on the plate: the digit plus the character values.
    #[must_use]
    pub fn required_sum(&self) -> u32 {
        u32::from(self.digit) + char_value::sum_of_prefix(self.chars)
    }

    /// Returns the digit sums the 4-digit number may have, see [`target_sums_for`].
    #[must_use]
    pub fn target_sums(&self) -> SumSet {
        target_sums_for(self.required_sum())
    }
}

impl Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [first, second] = self.chars;
        write!(f, "{}{first}{second}", self.digit)
    }
}

/// Returns `{ v - required_sum | v in FAVORABLE_SUMS, v >= required_sum }`.
///
/// The result is empty when the prefix alone already exceeds every favorable total.
///
/// # Examples
///
/// ```
/// use platesum_generator::target_sums_for;
///
/// let sums = target_sums_for(3);
/// assert_eq!(sums.iter().take(6).collect::<Vec<_>>(), [1, 2, 3, 6, 11, 12]);
/// assert!(target_sums_for(66).is_empty());
/// ```
#[must_use]
pub fn target_sums_for(required_sum: u32) -> SumSet {
    FAVORABLE_SUMS
        .iter()
        .filter_map(|total| total.checked_sub(required_sum))
        .collect()
}

/// Errors produced when parsing a [`Prefix`].
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum PrefixError {
    /// The leading digit is not a number from 0 to 9.
    #[display("invalid first digit {input:?}: enter a single digit (0-9)")]
    InvalidDigit {
        /// The rejected text.
        input: String,
    },
    /// The character group does not have exactly two characters.
    #[display("expected exactly two plate characters, got {count}")]
    InvalidCharacterCount {
        /// Number of characters received.
        count: usize,
    },
}

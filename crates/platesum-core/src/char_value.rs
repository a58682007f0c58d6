//! Character values for plate letters.
//!
//! Thai consonants are grouped into nine value classes. The plate prefix score
//! is the sum of its characters' values, and free text can be scored by mixing
//! character values with the face value of every decimal digit.
//!
//! # Examples
//!
//! ```
//! use platesum_core::char_value::{sum_of_mixed_input, sum_of_prefix, value_of};
//!
//! assert_eq!(value_of('ฐ'), Some(9));
//! assert_eq!(value_of('a'), None);
//! assert_eq!(sum_of_prefix("กข".chars()), 3);
//! assert_eq!(sum_of_mixed_input("1กข 2345"), 1 + 3 + 14);
//! ```

use std::{iter::FusedIterator, ops::RangeInclusive};

/// A group of characters sharing one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueGroup {
    /// Member characters.
    pub members: &'static str,
    /// Value of every member (1-9).
    pub value: u8,
}

/// The character value table. No character belongs to more than one group.
pub const VALUE_GROUPS: [ValueGroup; 9] = [
    ValueGroup { members: "กดถทภ", value: 1 },
    ValueGroup { members: "ขบปงช", value: 2 },
    ValueGroup { members: "ตฒฆ", value: 3 },
    ValueGroup { members: "คธรญษ", value: 4 },
    ValueGroup { members: "ฉณฌนมหฮฎฬ", value: 5 },
    ValueGroup { members: "จลวอ", value: 6 },
    ValueGroup { members: "ศส", value: 7 },
    ValueGroup { members: "ยผฝพฟ", value: 8 },
    ValueGroup { members: "ฐ", value: 9 },
];

/// Characters recognized as letters by [`tokens`], `ก` (U+0E01) to `ฮ` (U+0E2E).
///
/// A few characters in this range (such as `ฃ`) belong to no value group and
/// score 0.
pub const ALPHABET: RangeInclusive<char> = 'ก'..='ฮ';

/// Returns the value of the group containing `ch`, or `None` if it is in no group.
#[must_use]
pub fn value_of(ch: char) -> Option<u8> {
    VALUE_GROUPS
        .iter()
        .find(|group| group.members.contains(ch))
        .map(|group| group.value)
}

/// Sums the values of `chars`. Characters in no group add nothing.
#[must_use]
pub fn sum_of_prefix<I>(chars: I) -> u32
where
    I: IntoIterator<Item = char>,
{
    chars
        .into_iter()
        .filter_map(value_of)
        .map(u32::from)
        .sum()
}

/// Sums a free-form string.
///
/// Every decimal digit adds its face value, every letter in [`ALPHABET`] adds
/// its group value, and anything else (whitespace, punctuation, other scripts)
/// is ignored. An empty string sums to 0.
#[must_use]
pub fn sum_of_mixed_input(text: &str) -> u32 {
    tokens(text).map(|token| token.value()).sum()
}

/// A scored piece of free-form input, see [`tokens`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// A maximal run of ASCII decimal digits.
    Digits(&'a str),
    /// A single letter from [`ALPHABET`].
    Letter(char),
}

impl Token<'_> {
    /// Returns the score of this token.
    ///
    /// A digit run scores the sum of its digits, not the number it spells.
    #[must_use]
    pub fn value(&self) -> u32 {
        match *self {
            Token::Digits(digits) => digits.bytes().map(|b| u32::from(b - b'0')).sum(),
            Token::Letter(ch) => value_of(ch).map_or(0, u32::from),
        }
    }
}

/// Splits `text` into scored tokens, scanning left to right.
///
/// # Examples
///
/// ```
/// use platesum_core::char_value::{Token, tokens};
///
/// let found: Vec<_> = tokens("12-กx34").collect();
/// assert_eq!(found, [Token::Digits("12"), Token::Letter('ก'), Token::Digits("34")]);
/// ```
#[must_use]
pub fn tokens(text: &str) -> Tokens<'_> {
    Tokens { rest: text }
}

/// Iterator returned by [`tokens`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
}

fn starts_token(ch: char) -> bool {
    ch.is_ascii_digit() || ALPHABET.contains(&ch)
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let Some(start) = self.rest.find(starts_token) else {
            self.rest = "";
            return None;
        };
        let rest = &self.rest[start..];
        let mut chars = rest.chars();
        let first = chars.next()?;
        if first.is_ascii_digit() {
            let end = rest
                .find(|ch: char| !ch.is_ascii_digit())
                .unwrap_or(rest.len());
            let (digits, tail) = rest.split_at(end);
            self.rest = tail;
            Some(Token::Digits(digits))
        } else {
            self.rest = chars.as_str();
            Some(Token::Letter(first))
        }
    }
}

impl FusedIterator for Tokens<'_> {}

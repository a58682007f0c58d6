//! Core rules for picking registration plate numbers.
//!
//! This crate owns the fixed numerology data and the pure checks built on it.
//! Everything here is a function of its explicit inputs; there is no mutable
//! global state and no I/O.
//!
//! # Overview
//!
//! - [`plate`]: [`Plate`], a 4-digit plate number `0000`-`9999`
//! - [`pair`]: [`DigitPair`] and [`PairSet`], plus the sliding-window
//!   [`contains_excluded_pair`] filter
//! - [`rule`]: the fixed digit-sum [`Rule`]s and [`is_valid`]
//! - [`char_value`]: the character value table and the summing helpers
//! - [`sum_set`]: [`SumSet`], a set of acceptable digit sums
//! - [`tables`]: the default exclusion list and the favorable total sums
//!
//! # Examples
//!
//! ```
//! use platesum_core::{PairSet, Plate, contains_excluded_pair, is_valid};
//!
//! let plate = Plate::new(5679);
//! assert_eq!(plate.digit_sum(), 27);
//! assert!(is_valid(plate));
//! assert!(contains_excluded_pair(plate, &PairSet::DEFAULTS)); // "67" is excluded
//! ```

pub mod char_value;
pub mod pair;
pub mod plate;
pub mod rule;
pub mod sum_set;
pub mod tables;

pub use self::{
    char_value::{Token, sum_of_mixed_input, sum_of_prefix, value_of},
    pair::{DigitPair, PairParseError, PairSet, ParsedPairs, contains_excluded_pair},
    plate::{Plate, PlateError},
    rule::{Rule, is_valid},
    sum_set::SumSet,
};

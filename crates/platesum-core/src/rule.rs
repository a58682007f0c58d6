//! Fixed digit-sum rules for plate numbers.
//!
//! A plate is valid when it breaks none of the rules in [`Rule::ALL`]. With the
//! digits written `d0 d1 d2 d3` (most significant first), a plate is rejected when:
//!
//! - `d0+d1+d2+d3 <= 4`
//! - `d0+d1 <= 4` or `d2+d3 <= 4`
//! - `d0+d3 <= 4`
//! - a `1` appears in both halves (`d0` or `d1`, and `d2` or `d3`)
//! - `d0+d1+d2+d3 == 13`
//! - `d0+d3 == 13`
//!
//! # Examples
//!
//! ```
//! use platesum_core::{Plate, Rule, is_valid, rule};
//!
//! assert!(is_valid(Plate::new(5555)));
//! assert!(!is_valid(Plate::new(1919)));
//! assert_eq!(
//!     rule::violations(Plate::new(1919)).collect::<Vec<_>>(),
//!     [Rule::OnesInBothHalves]
//! );
//! ```

use crate::Plate;

/// A single rejection rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Rule {
    /// The digit sum is at most 4.
    #[display("digit sum is at most 4")]
    LowTotal,
    /// The first two digits sum to at most 4.
    #[display("first two digits sum to at most 4")]
    LowLeadingPair,
    /// The last two digits sum to at most 4.
    #[display("last two digits sum to at most 4")]
    LowTrailingPair,
    /// The first and last digits sum to at most 4.
    #[display("first and last digits sum to at most 4")]
    LowOuterPair,
    /// A `1` appears in the first half and in the second half.
    #[display("a 1 appears in both halves")]
    OnesInBothHalves,
    /// The digit sum is 13.
    #[display("digit sum is 13")]
    TotalThirteen,
    /// The first and last digits sum to 13.
    #[display("first and last digits sum to 13")]
    OuterThirteen,
}

impl Rule {
    /// All rules, in evaluation order.
    pub const ALL: [Self; 7] = [
        Self::LowTotal,
        Self::LowLeadingPair,
        Self::LowTrailingPair,
        Self::LowOuterPair,
        Self::OnesInBothHalves,
        Self::TotalThirteen,
        Self::OuterThirteen,
    ];

    /// Returns a stable machine-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LowTotal => "low-total",
            Self::LowLeadingPair => "low-leading-pair",
            Self::LowTrailingPair => "low-trailing-pair",
            Self::LowOuterPair => "low-outer-pair",
            Self::OnesInBothHalves => "ones-in-both-halves",
            Self::TotalThirteen => "total-thirteen",
            Self::OuterThirteen => "outer-thirteen",
        }
    }

    /// Returns `true` if `plate` breaks this rule.
    #[must_use]
    pub fn rejects(self, plate: Plate) -> bool {
        let [d0, d1, d2, d3] = plate.digits();
        match self {
            Self::LowTotal => plate.digit_sum() <= 4,
            Self::LowLeadingPair => d0 + d1 <= 4,
            Self::LowTrailingPair => d2 + d3 <= 4,
            Self::LowOuterPair => d0 + d3 <= 4,
            Self::OnesInBothHalves => (d0 == 1 || d1 == 1) && (d2 == 1 || d3 == 1),
            Self::TotalThirteen => plate.digit_sum() == 13,
            Self::OuterThirteen => d0 + d3 == 13,
        }
    }
}

/// Returns `true` if `plate` breaks none of the rules.
#[must_use]
pub fn is_valid(plate: Plate) -> bool {
    !Rule::ALL.iter().any(|rule| rule.rejects(plate))
}

/// Returns every rule `plate` breaks, in [`Rule::ALL`] order.
pub fn violations(plate: Plate) -> impl Iterator<Item = Rule> {
    Rule::ALL.into_iter().filter(move |rule| rule.rejects(plate))
}

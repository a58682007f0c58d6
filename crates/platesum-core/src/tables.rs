//! Fixed numerology data.
//!
//! These tables are process-wide read-only configuration. Callers may supply
//! their own exclusion set, but the favorable sums and the character values
//! (see [`char_value::VALUE_GROUPS`](crate::char_value::VALUE_GROUPS)) are fixed.

use crate::DigitPair;

const fn p(literal: &str) -> DigitPair {
    DigitPair::from_literal(literal)
}

/// Two-digit sequences excluded from plates unless the caller overrides the list.
#[rustfmt::skip]
pub const DEFAULT_EXCLUDED_PAIRS: [DigitPair; 57] = [
    p("00"), p("01"), p("02"), p("03"), p("04"), p("05"), p("06"), p("07"), p("08"), p("09"),
    p("10"), p("11"), p("12"), p("13"), p("14"), p("17"), p("18"),
    p("20"), p("21"), p("22"), p("23"), p("25"), p("27"),
    p("30"), p("31"), p("32"), p("33"), p("34"), p("37"), p("38"),
    p("40"), p("41"), p("43"), p("48"), p("49"),
    p("50"), p("52"), p("57"), p("58"),
    p("60"), p("67"), p("68"),
    p("70"), p("71"), p("72"), p("73"), p("75"), p("76"), p("77"),
    p("80"), p("81"), p("83"), p("84"), p("85"), p("86"),
    p("90"), p("94"),
];

/// Favorable totals for a whole plate: leading digit + characters + 4-digit number.
pub const FAVORABLE_SUMS: [u32; 24] = [
    2, 4, 5, 6, 9, 14, 15, 19, 23, 24, 36, 41, 42, 45, 46, 50, 51, 54, 55, 56, 59, 63, 64, 65,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PairSet;

    #[test]
    fn test_default_pairs_are_distinct() {
        assert_eq!(PairSet::from_pairs(&DEFAULT_EXCLUDED_PAIRS).len(), 57);
        assert!(DEFAULT_EXCLUDED_PAIRS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_favorable_sums_are_ascending() {
        assert!(FAVORABLE_SUMS.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(FAVORABLE_SUMS.first(), Some(&2));
        assert_eq!(FAVORABLE_SUMS.last(), Some(&65));
    }
}

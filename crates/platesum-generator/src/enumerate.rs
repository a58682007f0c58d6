use platesum_core::{PairSet, Plate, SumSet, contains_excluded_pair, is_valid, plate::PLATE_COUNT};

/// Returns `true` if `plate` contains no excluded pair, breaks no rule, and has
/// a digit sum in `target_sums`.
#[must_use]
pub fn is_candidate(plate: Plate, excluded: &PairSet, target_sums: &SumSet) -> bool {
    !contains_excluded_pair(plate, excluded)
        && is_valid(plate)
        && target_sums.contains(plate.digit_sum())
}

/// Returns every plate from `0000` to `9999` that passes [`is_candidate`], in
/// ascending order.
///
/// The whole range is always scanned; an empty `target_sums` yields an empty result.
///
/// # Examples
///
/// ```
/// use platesum_core::{PairSet, SumSet};
/// use platesum_generator::enumerate;
///
/// let plates = enumerate(&PairSet::EMPTY, &SumSet::from_iter([36]));
/// assert_eq!(plates.len(), 1);
/// assert_eq!(plates[0].to_string(), "9999");
/// ```
#[must_use]
pub fn enumerate(excluded: &PairSet, target_sums: &SumSet) -> Vec<Plate> {
    let plates: Vec<_> = Plate::all()
        .filter(|&plate| is_candidate(plate, excluded, target_sums))
        .collect();
    log::debug!(
        "enumerated {} of {PLATE_COUNT} plates (excluded pairs: {}, target sums: {target_sums:?})",
        plates.len(),
        excluded.len(),
    );
    plates
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::target_sums_for;

    #[test]
    fn test_empty_target_sums_yield_nothing() {
        assert!(enumerate(&PairSet::EMPTY, &SumSet::EMPTY).is_empty());
        assert!(enumerate(&PairSet::DEFAULTS, &SumSet::EMPTY).is_empty());
    }

    #[test]
    fn test_zero_never_appears() {
        let all_sums = SumSet::from_iter(0..=36);
        let plates = enumerate(&PairSet::EMPTY, &all_sums);
        assert_ne!(plates.first(), Some(&Plate::new(0)));
        assert!(!plates.contains(&Plate::new(0)));
    }

    #[test]
    fn test_output_is_strictly_ascending() {
        let plates = enumerate(&PairSet::EMPTY, &SumSet::from_iter(0..=36));
        assert!(plates.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_end_to_end_matches_brute_force() {
        // digit 1 plus two value-1 characters
        let targets = target_sums_for(3);
        let plates = enumerate(&PairSet::EMPTY, &targets);

        let expected: Vec<_> = (0..PLATE_COUNT)
            .map(Plate::new)
            .filter(|&p| targets.contains(p.digit_sum()) && is_valid(p))
            .collect();
        assert_eq!(plates, expected);
        assert!(plates.contains(&Plate::new(5555)));
        assert!(!plates.contains(&Plate::new(1919)));
    }

    #[test]
    fn test_default_exclusions_apply() {
        let targets = target_sums_for(3);
        let plates = enumerate(&PairSet::DEFAULTS, &targets);
        assert!(!plates.is_empty());
        for plate in &plates {
            assert!(!contains_excluded_pair(*plate, &PairSet::DEFAULTS), "{plate}");
        }
        // 5555 is valid with sum 20 but "55" is not excluded
        assert!(plates.contains(&Plate::new(5555)));
        // 5672 passes every rule with sum 20 but contains "67"
        let excluded_only = Plate::new(5672);
        assert!(is_valid(excluded_only));
        assert!(targets.contains(excluded_only.digit_sum()));
        assert!(contains_excluded_pair(excluded_only, &PairSet::DEFAULTS));
        assert!(!plates.contains(&excluded_only));
        assert!(enumerate(&PairSet::EMPTY, &targets).contains(&excluded_only));
    }

    proptest! {
        #[test]
        fn every_result_satisfies_all_checks(
            raw_pairs in proptest::collection::vec(0..100u8, 0..20),
            raw_sums in proptest::collection::vec(0..40u32, 0..10),
        ) {
            let excluded: PairSet = raw_pairs
                .iter()
                .map(|v| platesum_core::DigitPair::new(v / 10, v % 10))
                .collect();
            let targets: SumSet = raw_sums.into_iter().collect();
            let plates = enumerate(&excluded, &targets);
            prop_assert!(plates.windows(2).all(|w| w[0] < w[1]));
            for plate in Plate::all() {
                prop_assert_eq!(
                    plates.binary_search(&plate).is_ok(),
                    is_candidate(plate, &excluded, &targets)
                );
            }
        }
    }
}

use platesum_core::PairSet;

use crate::{Prefix, SumGroups, enumerate};

/// Runs the full pipeline for a prefix: target sums, enumeration and grouping.
///
/// # Examples
///
/// ```
/// use platesum_core::PairSet;
/// use platesum_generator::{PlateGenerator, Prefix};
///
/// let generator = PlateGenerator::new(&PairSet::EMPTY);
/// let outcome = generator.generate(&Prefix::parse("9", "ฐฐ")?);
/// assert!(outcome.is_found());
/// assert_eq!(outcome.required_sum(), 27);
/// # Ok::<(), platesum_generator::PrefixError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PlateGenerator<'a> {
    excluded: &'a PairSet,
}

impl<'a> PlateGenerator<'a> {
    /// Creates a generator that rejects plates containing any pair in `excluded`.
    #[must_use]
    pub fn new(excluded: &'a PairSet) -> Self {
        Self { excluded }
    }

    /// Returns the exclusion set.
    #[must_use]
    pub fn excluded(&self) -> &'a PairSet {
        self.excluded
    }

    /// Generates the plates that complete `prefix` to a favorable total.
    ///
    /// Enumeration is skipped when the prefix leaves no reachable target sum.
    #[must_use]
    pub fn generate(&self, prefix: &Prefix) -> GenerationOutcome {
        let required_sum = prefix.required_sum();
        let target_sums = prefix.target_sums();
        if target_sums.is_empty() {
            log::info!("prefix {prefix} (sum {required_sum}) leaves no target sums");
            return GenerationOutcome::NoTargetSums { required_sum };
        }

        let groups: SumGroups = enumerate(self.excluded, &target_sums).into_iter().collect();
        if groups.is_empty() {
            log::info!("prefix {prefix} (sum {required_sum}) matched no plates");
            return GenerationOutcome::NoMatch { required_sum };
        }

        log::info!(
            "prefix {prefix} (sum {required_sum}) matched {} plates in {} groups",
            groups.plate_count(),
            groups.len()
        );
        GenerationOutcome::Found(Generation {
            required_sum,
            groups,
        })
    }
}

/// Result of [`PlateGenerator::generate`].
///
/// Both empty outcomes are normal results, not errors. They differ in which
/// stage came up empty.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum GenerationOutcome {
    /// Every favorable total is below the prefix sum, so nothing was enumerated.
    NoTargetSums {
        /// Score of the prefix.
        required_sum: u32,
    },
    /// Enumeration ran but no plate passed every check.
    NoMatch {
        /// Score of the prefix.
        required_sum: u32,
    },
    /// At least one plate was found.
    Found(Generation),
}

impl GenerationOutcome {
    /// Returns the prefix score the outcome was computed for.
    #[must_use]
    pub fn required_sum(&self) -> u32 {
        match self {
            Self::NoTargetSums { required_sum } | Self::NoMatch { required_sum } => *required_sum,
            Self::Found(generation) => generation.required_sum,
        }
    }
}

/// Plates found for a prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    /// Score of the prefix.
    pub required_sum: u32,
    /// Matching plates grouped by digit sum.
    pub groups: SumGroups,
}

impl Generation {
    /// Returns the whole-plate total for a group: prefix score plus digit sum.
    #[must_use]
    pub fn total_for(&self, sum: u32) -> u32 {
        self.required_sum + sum
    }
}

#[cfg(test)]
mod tests {
    use platesum_core::{Plate, tables::FAVORABLE_SUMS};

    use super::*;

    #[test]
    fn test_found_groups_hit_favorable_totals() {
        let prefix = Prefix::parse("1", "กก").unwrap();
        let outcome = PlateGenerator::new(&PairSet::DEFAULTS).generate(&prefix);
        let GenerationOutcome::Found(generation) = outcome else {
            panic!("expected plates, got {outcome:?}");
        };
        assert_eq!(generation.required_sum, 3);
        for (sum, plates) in &generation.groups {
            assert!(FAVORABLE_SUMS.contains(&generation.total_for(sum)));
            assert!(plates.windows(2).all(|w| w[0] < w[1]));
            assert!(plates.iter().all(|p| p.digit_sum() == sum));
        }
    }

    #[test]
    fn test_required_sum_of_empty_outcomes() {
        let outcome = GenerationOutcome::NoTargetSums { required_sum: 66 };
        assert!(outcome.is_no_target_sums());
        assert_eq!(outcome.required_sum(), 66);

        let outcome = GenerationOutcome::NoMatch { required_sum: 4 };
        assert!(outcome.is_no_match());
        assert_eq!(outcome.required_sum(), 4);
    }

    #[test]
    fn test_no_match_with_everything_excluded() {
        let all: PairSet = (0..10)
            .flat_map(|a| (0..10).map(move |b| platesum_core::DigitPair::new(a, b)))
            .collect();
        let prefix = Prefix::parse("1", "กก").unwrap();
        let outcome = PlateGenerator::new(&all).generate(&prefix);
        assert_eq!(outcome, GenerationOutcome::NoMatch { required_sum: 3 });
    }

    #[test]
    fn test_high_prefix_only_reaches_large_sums() {
        let prefix = Prefix::parse("9", "ฐฐ").unwrap();
        let GenerationOutcome::Found(generation) =
            PlateGenerator::new(&PairSet::EMPTY).generate(&prefix)
        else {
            panic!("expected plates");
        };
        // 27 leaves targets {9, 14, 15, 18, 19, 23, 24, 27, 28, 29, 32, 36, 37, 38}
        assert_eq!(generation.required_sum, 27);
        assert!(generation.groups.get(14).is_some());
        // both halves must sum to at least 5, so 9 is unreachable
        assert!(generation.groups.get(9).is_none());
        assert_eq!(generation.groups.get(36), Some([Plate::MAX].as_slice()));
        assert!(generation.groups.get(10).is_none());
    }
}

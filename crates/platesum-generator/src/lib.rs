//! Plate number generation.
//!
//! This crate drives the checks from [`platesum_core`] over every plate number
//! and groups the survivors by digit sum.
//!
//! # Overview
//!
//! 1. A [`Prefix`] (leading digit and two characters) determines the
//!    [`required sum`](Prefix::required_sum) already on the plate.
//! 2. [`target_sums_for`] turns it into the digit sums the 4-digit number may have.
//! 3. [`enumerate`] filters `0000`-`9999` against the exclusion set, the fixed
//!    rules, and the target sums.
//! 4. [`SumGroups`] buckets the result by digit sum for display.
//!
//! [`PlateGenerator`] runs the whole pipeline and reports a [`GenerationOutcome`].
//!
//! # Examples
//!
//! ```
//! use platesum_core::PairSet;
//! use platesum_generator::{GenerationOutcome, PlateGenerator, Prefix};
//!
//! let prefix = Prefix::parse("1", "กก")?;
//! let generator = PlateGenerator::new(&PairSet::DEFAULTS);
//!
//! match generator.generate(&prefix) {
//!     GenerationOutcome::Found(generation) => {
//!         for (sum, plates) in generation.groups.iter() {
//!             println!("SUM: {sum} ({})", generation.total_for(sum));
//!             println!("NUM: {}", plates.len());
//!         }
//!     }
//!     outcome => println!("nothing found, required sum {}", outcome.required_sum()),
//! }
//! # Ok::<(), platesum_generator::PrefixError>(())
//! ```

pub use self::{enumerate::*, generator::*, groups::*, prefix::*};

mod enumerate;
mod generator;
mod groups;
mod prefix;

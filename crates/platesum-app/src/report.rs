//! Report types and their text and JSON renderings.
//!
//! Each subcommand builds one report from core results. The same value is
//! either written as text, in the classic `CAT`/`SUM`/`NUM` layout, or
//! serialized as JSON.

use std::io::{self, Write};

use platesum_core::{
    PairSet, Plate, Rule,
    char_value::{self, Token, VALUE_GROUPS},
    rule,
    tables::FAVORABLE_SUMS,
};
use platesum_generator::{GenerationOutcome, Prefix};
use serde::Serialize;

use crate::{AppError, cli::OutputFormat};

const SEPARATOR: &str = "-----------------------------";

/// A report that can be rendered as text or JSON.
pub trait Report: Serialize {
    /// Writes the human-readable form.
    ///
    /// # Errors
    ///
    /// Returns any error from `out`.
    fn write_text(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// Writes `report` to `out` in the requested format.
///
/// # Errors
///
/// Returns [`AppError::Io`] or [`AppError::Json`] if writing fails.
pub fn write_report<R: Report>(
    report: &R,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<(), AppError> {
    match format {
        OutputFormat::Text => report.write_text(out)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Result of `generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GenerationReport {
    /// The prefix exceeds every favorable total.
    NoTargetSums {
        /// The prefix as entered.
        prefix: String,
        /// Score of the prefix.
        required_sum: u32,
    },
    /// No plate passed every check.
    NoMatch {
        /// The prefix as entered.
        prefix: String,
        /// Score of the prefix.
        required_sum: u32,
    },
    /// Plates were found.
    Found {
        /// The prefix as entered.
        prefix: String,
        /// Score of the prefix.
        required_sum: u32,
        /// Number of plates across all groups.
        count: usize,
        /// Plates grouped by digit sum, ascending.
        groups: Vec<SumGroupReport>,
    },
}

/// One digit-sum group of a [`GenerationReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SumGroupReport {
    /// Digit sum shared by the plates.
    pub sum: u32,
    /// Whole-plate total: prefix score plus `sum`.
    pub total: u32,
    /// Zero-padded plate numbers, ascending.
    pub numbers: Vec<String>,
}

impl GenerationReport {
    /// Builds the report for `prefix` from a generator outcome.
    #[must_use]
    pub fn new(prefix: &Prefix, outcome: &GenerationOutcome) -> Self {
        let prefix = prefix.to_string();
        match outcome {
            GenerationOutcome::NoTargetSums { required_sum } => Self::NoTargetSums {
                prefix,
                required_sum: *required_sum,
            },
            GenerationOutcome::NoMatch { required_sum } => Self::NoMatch {
                prefix,
                required_sum: *required_sum,
            },
            GenerationOutcome::Found(generation) => Self::Found {
                prefix,
                required_sum: generation.required_sum,
                count: generation.groups.plate_count(),
                groups: generation
                    .groups
                    .iter()
                    .map(|(sum, plates)| SumGroupReport {
                        sum,
                        total: generation.total_for(sum),
                        numbers: plates.iter().map(Plate::to_string).collect(),
                    })
                    .collect(),
            },
        }
    }
}

impl Report for GenerationReport {
    fn write_text(&self, out: &mut dyn Write) -> io::Result<()> {
        match self {
            Self::NoTargetSums { required_sum, .. } => writeln!(
                out,
                "No possible sums for the last four digits based on the inputs. \
                 Required sum was {required_sum}."
            ),
            Self::NoMatch { .. } => writeln!(out, "No numbers found matching the criteria."),
            Self::Found {
                prefix,
                required_sum,
                count,
                groups,
            } => {
                writeln!(out, "CAT: {prefix} ({required_sum})")?;
                writeln!(out, "{SEPARATOR}")?;
                for group in groups {
                    writeln!(out, "SUM: {} ({})", group.sum, group.total)?;
                    writeln!(out, "NUM: {}", group.numbers.join(", "))?;
                    writeln!(out, "{SEPARATOR}")?;
                }
                writeln!(out, "Successfully generated {count} numbers grouped by sum.")
            }
        }
    }
}

/// Result of `sum`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SumReport {
    /// Total score of the text.
    pub sum: u32,
    /// Per-token scores, when a breakdown was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<Vec<TokenReport>>,
}

/// Score of one token in a [`SumReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenReport {
    /// The token text.
    pub token: String,
    /// Its score.
    pub value: u32,
}

impl SumReport {
    /// Scores `text`, keeping the token list if `breakdown` is set.
    #[must_use]
    pub fn new(text: &str, breakdown: bool) -> Self {
        let tokens = breakdown.then(|| {
            char_value::tokens(text)
                .map(|token| TokenReport {
                    token: match token {
                        Token::Digits(digits) => digits.to_owned(),
                        Token::Letter(ch) => ch.to_string(),
                    },
                    value: token.value(),
                })
                .collect()
        });
        Self {
            sum: char_value::sum_of_mixed_input(text),
            tokens,
        }
    }
}

impl Report for SumReport {
    fn write_text(&self, out: &mut dyn Write) -> io::Result<()> {
        for token in self.tokens.iter().flatten() {
            writeln!(out, "  {}: {}", token.token, token.value)?;
        }
        writeln!(out, "The calculated sum is: {}", self.sum)
    }
}

/// Result of `check`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// Zero-padded plate number.
    pub number: String,
    /// Sum of the four digits.
    pub digit_sum: u32,
    /// Rules the number breaks.
    pub violations: Vec<RuleReport>,
    /// Excluded pairs the number contains, in order of appearance.
    pub excluded_pairs: Vec<String>,
    /// Whole-plate total, when a prefix was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<TotalReport>,
    /// `true` if `generate` would list this number for the same inputs.
    pub accepted: bool,
}

/// A broken rule in a [`CheckReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleReport {
    /// Machine-readable rule name.
    pub name: &'static str,
    /// Human-readable description.
    pub description: String,
}

/// Whole-plate total in a [`CheckReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TotalReport {
    /// The prefix as entered.
    pub prefix: String,
    /// Score of the prefix.
    pub required_sum: u32,
    /// Prefix score plus digit sum.
    pub total: u32,
    /// `true` if the total is one of the favorable sums.
    pub favorable: bool,
}

impl CheckReport {
    /// Checks `plate` against the rules, `excluded`, and optionally a prefix.
    #[must_use]
    pub fn new(plate: Plate, excluded: &PairSet, prefix: Option<&Prefix>) -> Self {
        let digit_sum = plate.digit_sum();
        let violations: Vec<_> = rule::violations(plate)
            .map(|rule: Rule| RuleReport {
                name: rule.name(),
                description: rule.to_string(),
            })
            .collect();

        let mut excluded_pairs = Vec::new();
        for pair in plate.pairs() {
            let text = pair.to_string();
            if excluded.contains(pair) && !excluded_pairs.contains(&text) {
                excluded_pairs.push(text);
            }
        }

        let total = prefix.map(|prefix| {
            let required_sum = prefix.required_sum();
            let total = required_sum + digit_sum;
            TotalReport {
                prefix: prefix.to_string(),
                required_sum,
                total,
                favorable: FAVORABLE_SUMS.contains(&total),
            }
        });

        let accepted = violations.is_empty()
            && excluded_pairs.is_empty()
            && total.as_ref().is_none_or(|total| total.favorable);

        Self {
            number: plate.to_string(),
            digit_sum,
            violations,
            excluded_pairs,
            total,
            accepted,
        }
    }
}

impl Report for CheckReport {
    fn write_text(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "NUM: {}", self.number)?;
        writeln!(out, "SUM: {}", self.digit_sum)?;
        if self.violations.is_empty() {
            writeln!(out, "RULES: none broken")?;
        } else {
            let rules: Vec<_> = self
                .violations
                .iter()
                .map(|rule| rule.description.as_str())
                .collect();
            writeln!(out, "RULES: {}", rules.join("; "))?;
        }
        if self.excluded_pairs.is_empty() {
            writeln!(out, "PAIRS: none excluded")?;
        } else {
            writeln!(out, "PAIRS: {}", self.excluded_pairs.join(", "))?;
        }
        if let Some(total) = &self.total {
            let verdict = if total.favorable {
                "favorable"
            } else {
                "not favorable"
            };
            writeln!(
                out,
                "TOTAL: {} + {} = {} ({verdict})",
                total.prefix, self.digit_sum, total.total
            )?;
        }
        let result = if self.accepted { "accepted" } else { "rejected" };
        writeln!(out, "RESULT: {result}")
    }
}

/// Result of `defaults`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefaultsReport {
    /// The built-in exclusion list.
    pub excluded_pairs: Vec<String>,
    /// Favorable whole-plate totals.
    pub favorable_sums: Vec<u32>,
    /// The character value table.
    pub value_groups: Vec<ValueGroupReport>,
}

/// One row of the character value table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueGroupReport {
    /// Value of every member.
    pub value: u8,
    /// Member characters.
    pub members: &'static str,
}

impl DefaultsReport {
    /// Collects the built-in tables.
    #[must_use]
    pub fn new() -> Self {
        Self {
            excluded_pairs: PairSet::DEFAULTS.iter().map(|pair| pair.to_string()).collect(),
            favorable_sums: FAVORABLE_SUMS.to_vec(),
            value_groups: VALUE_GROUPS
                .iter()
                .map(|group| ValueGroupReport {
                    value: group.value,
                    members: group.members,
                })
                .collect(),
        }
    }
}

impl Default for DefaultsReport {
    fn default() -> Self {
        Self::new()
    }
}

impl Report for DefaultsReport {
    fn write_text(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "EXCLUDE: {}", self.excluded_pairs.join(","))?;
        let sums: Vec<_> = self.favorable_sums.iter().map(u32::to_string).collect();
        writeln!(out, "FAVORABLE: {}", sums.join(", "))?;
        for group in &self.value_groups {
            writeln!(out, "VALUE {}: {}", group.value, group.members)?;
        }
        Ok(())
    }
}

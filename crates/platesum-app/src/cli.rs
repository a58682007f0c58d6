//! Command-line arguments.

use clap::{Args, Parser, Subcommand, ValueEnum};
use platesum_core::PairSet;

/// Find auspicious 4-digit registration plate numbers.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List plate numbers that bring a prefix to a favorable total.
    Generate(GenerateArgs),
    /// Add up the digits and character values of free-form text.
    Sum(SumArgs),
    /// Explain whether a single plate number passes the rules.
    Check(CheckArgs),
    /// Print the built-in exclusion list, favorable totals and character values.
    Defaults(FormatArgs),
}

/// Arguments for `generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Leading digit of the plate (0-9).
    #[arg(short, long, value_name = "DIGIT")]
    pub digit: String,

    /// The two plate characters, e.g. "กข".
    #[arg(short, long, value_name = "CHARS")]
    pub chars: String,

    #[command(flatten)]
    pub exclude: ExcludeArgs,

    #[command(flatten)]
    pub format: FormatArgs,
}

/// Arguments for `sum`.
#[derive(Debug, Args)]
pub struct SumArgs {
    /// Text to score, e.g. "1กข 2345".
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Also list each scored token.
    #[arg(long)]
    pub breakdown: bool,

    #[command(flatten)]
    pub format: FormatArgs,
}

/// Arguments for `check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Plate number to check (1 to 4 digits, zero-padded).
    #[arg(value_name = "NUMBER")]
    pub number: String,

    /// Leading digit of the plate, to report the whole-plate total.
    #[arg(short, long, value_name = "DIGIT", requires = "chars")]
    pub digit: Option<String>,

    /// The two plate characters, to report the whole-plate total.
    #[arg(short, long, value_name = "CHARS", requires = "digit")]
    pub chars: Option<String>,

    #[command(flatten)]
    pub exclude: ExcludeArgs,

    #[command(flatten)]
    pub format: FormatArgs,
}

/// Exclusion list option shared by several subcommands.
#[derive(Debug, Args)]
pub struct ExcludeArgs {
    /// Comma-separated two-digit sequences to reject. Defaults to the built-in
    /// list; pass "" to disable exclusion.
    #[arg(short = 'x', long, value_name = "LIST")]
    pub exclude: Option<String>,
}

impl ExcludeArgs {
    /// Returns the exclusion set, logging and skipping malformed entries.
    #[must_use]
    pub fn resolve(&self) -> PairSet {
        let Some(list) = &self.exclude else {
            return PairSet::DEFAULTS;
        };
        let parsed = PairSet::parse_list(list);
        for token in &parsed.rejected {
            log::warn!("ignoring exclusion entry {token:?}: expected two digits");
        }
        parsed.pairs
    }
}

/// Output format option shared by every subcommand.
#[derive(Debug, Args)]
pub struct FormatArgs {
    /// Output format.
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    pub format: OutputFormat,
}

/// How reports are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    Text,
    /// Pretty-printed JSON.
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "platesum", "generate", "-d", "1", "-c", "กข", "--format", "json",
        ])
        .unwrap();
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.digit, "1");
        assert_eq!(args.chars, "กข");
        assert_eq!(args.format.format, OutputFormat::Json);
        assert_eq!(args.exclude.resolve(), PairSet::DEFAULTS);
    }

    #[test]
    fn test_exclude_override() {
        let cli = Cli::try_parse_from([
            "platesum", "generate", "-d", "1", "-c", "กข", "-x", "12, 9, 34",
        ])
        .unwrap();
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.exclude.resolve(), PairSet::parse_list("12,34").pairs);

        let empty = ExcludeArgs {
            exclude: Some(String::new()),
        };
        assert!(empty.resolve().is_empty());
    }

    #[test]
    fn test_check_prefix_requires_both_parts() {
        assert!(Cli::try_parse_from(["platesum", "check", "5555", "-d", "1"]).is_err());
        assert!(
            Cli::try_parse_from(["platesum", "check", "5555", "-d", "1", "-c", "กก"]).is_ok()
        );
    }
}

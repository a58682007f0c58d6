//! Subcommand handlers.

use std::io::Write;

use platesum_core::Plate;
use platesum_generator::{PlateGenerator, Prefix};

use crate::{
    AppError,
    cli::{CheckArgs, FormatArgs, GenerateArgs, SumArgs},
    report::{CheckReport, DefaultsReport, GenerationReport, SumReport, write_report},
};

/// Runs `generate`.
///
/// # Errors
///
/// Returns [`AppError::Prefix`] if the digit or characters are invalid.
pub fn generate(args: &GenerateArgs, out: &mut dyn Write) -> Result<(), AppError> {
    let prefix = Prefix::parse(&args.digit, &args.chars)?;
    let excluded = args.exclude.resolve();
    log::debug!("excluding {} pairs: {excluded}", excluded.len());

    let outcome = PlateGenerator::new(&excluded).generate(&prefix);
    write_report(
        &GenerationReport::new(&prefix, &outcome),
        args.format.format,
        out,
    )
}

/// Runs `sum`.
///
/// # Errors
///
/// Returns [`AppError::EmptySumInput`] if the text is blank.
pub fn sum(args: &SumArgs, out: &mut dyn Write) -> Result<(), AppError> {
    if args.text.trim().is_empty() {
        return Err(AppError::EmptySumInput);
    }
    write_report(
        &SumReport::new(&args.text, args.breakdown),
        args.format.format,
        out,
    )
}

/// Runs `check`.
///
/// # Errors
///
/// Returns [`AppError::Plate`] or [`AppError::Prefix`] for invalid input.
pub fn check(args: &CheckArgs, out: &mut dyn Write) -> Result<(), AppError> {
    let plate: Plate = args.number.parse()?;
    let prefix = match (&args.digit, &args.chars) {
        (Some(digit), Some(chars)) => Some(Prefix::parse(digit, chars)?),
        _ => None,
    };
    let excluded = args.exclude.resolve();
    write_report(
        &CheckReport::new(plate, &excluded, prefix.as_ref()),
        args.format.format,
        out,
    )
}

/// Runs `defaults`.
///
/// # Errors
///
/// Returns [`AppError::Io`] or [`AppError::Json`] if writing fails.
pub fn defaults(args: &FormatArgs, out: &mut dyn Write) -> Result<(), AppError> {
    write_report(&DefaultsReport::new(), args.format, out)
}

#[cfg(test)]
mod tests {
    use clap::Parser as _;

    use super::*;
    use crate::cli::Cli;

    fn run(args: &[&str]) -> Result<String, AppError> {
        let cli = Cli::try_parse_from(std::iter::once("platesum").chain(args.iter().copied()))
            .unwrap();
        let mut out = Vec::new();
        crate::run(&cli, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_generate_text() {
        let output = run(&["generate", "-d", "1", "-c", "กก"]).unwrap();
        assert!(output.starts_with("CAT: 1กก (3)\n"));
        assert!(output.contains("\nSUM: 12 (15)\nNUM: "));
        assert!(output.contains("2424"));
        assert!(!output.contains("0000"));
    }

    #[test]
    fn test_generate_rejects_bad_prefix() {
        let err = run(&["generate", "-d", "12", "-c", "กก"]).unwrap_err();
        assert!(matches!(err, AppError::Prefix(_)));

        let err = run(&["generate", "-d", "1", "-c", "ก"]).unwrap_err();
        assert!(matches!(err, AppError::Prefix(_)));
    }

    #[test]
    fn test_generate_json_with_custom_exclusions() {
        let output = run(&["generate", "-d", "9", "-c", "ฐฐ", "-x", "", "--format", "json"])
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["status"], "found");
        assert_eq!(value["required_sum"], 27);
    }

    #[test]
    fn test_sum() {
        assert_eq!(run(&["sum", "5ก"]).unwrap(), "The calculated sum is: 6\n");
        assert!(matches!(
            run(&["sum", "   "]).unwrap_err(),
            AppError::EmptySumInput
        ));
        assert_eq!(run(&["sum", "abc"]).unwrap(), "The calculated sum is: 0\n");
    }

    #[test]
    fn test_check() {
        let output = run(&["check", "5555"]).unwrap();
        assert!(output.ends_with("RESULT: accepted\n"));

        let output = run(&["check", "1919", "-d", "1", "-c", "กก"]).unwrap();
        assert!(output.contains("RULES: a 1 appears in both halves\n"));
        assert!(output.contains("TOTAL: 1กก + 20 = 23 (favorable)\n"));
        assert!(output.ends_with("RESULT: rejected\n"));

        assert!(matches!(
            run(&["check", "12345"]).unwrap_err(),
            AppError::Plate(_)
        ));
    }

    #[test]
    fn test_defaults_json() {
        let output = run(&["defaults", "--format", "json"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["excluded_pairs"].as_array().unwrap().len(), 57);
        assert_eq!(value["favorable_sums"][0], 2);
        assert_eq!(value["value_groups"][8]["members"], "ฐ");
    }
}

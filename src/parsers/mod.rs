// ==============================================================================
// parsers/mod.rs - Variant Text Parsers
// ==============================================================================
// Description: Format dispatch and per-line parsing for raw variant text
// Author: Matt Barham
// Created: 2026-10-02
// Modified: 2026-10-15
// Version: 1.2.0
// ==============================================================================
// Every sub-parser is line-at-a-time and fault-isolating: a malformed line
// becomes one error message and never stops the lines after it.
// ==============================================================================

pub mod custom_tab;
pub mod genome23andme;
pub mod sniffer;
pub mod vcf;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::models::{Format, FormatSelector, Variant};

pub use sniffer::detect;
pub use vcf::decode_genotype;

/// Reasons a single input line is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid VCF line: {0}")]
    InvalidVcfLine(String),

    #[error("Invalid 23andMe line: {0}")]
    InvalidGenome23Line(String),

    #[error("Invalid format in line: {0}")]
    InvalidFormat(String),

    #[error("Invalid rsId format: {0}")]
    InvalidRsId(String),

    #[error("Invalid genotype: {genotype} for {rs_id}")]
    InvalidGenotype { genotype: String, rs_id: String },

    /// Field extraction failed (e.g., a non-numeric position)
    #[error("Error parsing line: {0}")]
    Malformed(String),
}

/// Result of parsing one block of raw text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseOutcome {
    /// Format the text was parsed as
    pub format: Format,
    /// Accepted variants, in input line order
    pub variants: Vec<Variant>,
    /// One message per rejected line, in input line order
    pub errors: Vec<String>,
}

impl ParseOutcome {
    fn empty(format: Format) -> Self {
        Self {
            format,
            variants: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Fold one line result into the outcome
    fn push(mut self, line: Result<Variant, ParseError>) -> Self {
        match line {
            Ok(variant) => self.variants.push(variant),
            Err(e) => {
                debug!("Rejected line: {}", e);
                self.errors.push(e.to_string());
            }
        }
        self
    }
}

/// Split raw text into trimmed, non-blank lines
pub fn input_lines(raw: &str) -> Vec<&str> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Parse raw variant text.
///
/// Never fails: malformed lines are reported in [`ParseOutcome::errors`]
/// and the remaining lines are still parsed.
///
/// # Examples
/// ```
/// use variant_intake::models::FormatSelector;
/// use variant_intake::parsers::parse;
///
/// let outcome = parse("rs548049170 1 69869 TT\nrs9283150 1 565508 AA", FormatSelector::CustomTab);
/// assert_eq!(outcome.variants.len(), 2);
/// assert!(outcome.errors.is_empty());
/// ```
pub fn parse(raw: &str, selector: FormatSelector) -> ParseOutcome {
    let lines = input_lines(raw);
    let format = selector.resolve(&lines);

    let outcome = match format {
        Format::Vcf => fold(format, vcf::records(&lines)),
        Format::ConsumerArray => fold(format, genome23andme::records(&lines)),
        Format::CustomTab => fold(format, custom_tab::records(&lines)),
    };

    info!(
        "Parsed {} lines as {}: {} variants, {} errors",
        lines.len(),
        outcome.format,
        outcome.variants.len(),
        outcome.errors.len()
    );

    outcome
}

fn fold<I>(format: Format, results: I) -> ParseOutcome
where
    I: Iterator<Item = Result<Variant, ParseError>>,
{
    results.fold(ParseOutcome::empty(format), ParseOutcome::push)
}

/// Parse a position column, rejecting the whole line on failure
pub(crate) fn parse_position(raw: &str, line: &str) -> Result<i64, ParseError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ParseError::Malformed(line.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VCF_INPUT: &str = "##fileformat=VCFv4.2
##reference=GRCh38
#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tsample1
1\t69869\trs548049170\tT\tC\t.\tPASS\t.\tGT\t1/1";

    #[test]
    fn test_auto_detects_vcf() {
        let outcome = parse(VCF_INPUT, FormatSelector::Auto);

        assert_eq!(outcome.format, Format::Vcf);
        assert!(outcome.errors.is_empty());
        assert_eq!(
            outcome.variants,
            vec![Variant::new("rs548049170", "1", 69869, "CC")]
        );
    }

    #[test]
    fn test_auto_agrees_with_explicit_format() {
        let auto = parse(VCF_INPUT, FormatSelector::Auto);
        let explicit = parse(VCF_INPUT, auto.format.into());
        assert_eq!(explicit.format, Format::Vcf);
        assert_eq!(auto, explicit);

        let genome = "# rsid\tchromosome\tposition\tgenotype\nrs1\t1\t100\tAG";
        assert_eq!(
            parse(genome, FormatSelector::Auto),
            parse(genome, FormatSelector::ConsumerArray)
        );
    }

    #[test]
    fn test_custom_tab_example() {
        let outcome = parse(
            "rs548049170 1 69869 TT\nrs9283150 1 565508 AA",
            FormatSelector::CustomTab,
        );

        assert_eq!(outcome.format, Format::CustomTab);
        assert_eq!(outcome.variants.len(), 2);
        assert_eq!(
            outcome.variants[0],
            Variant::new("rs548049170", "1", 69869, "TT")
        );
    }

    #[test]
    fn test_malformed_lines_do_not_abort() {
        let outcome = parse("invalid line\nrs123 1 100\nrs5 2 500 GG", FormatSelector::CustomTab);

        assert_eq!(outcome.errors.len(), 2);
        assert_eq!(outcome.variants, vec![Variant::new("rs5", "2", 500, "GG")]);
    }

    #[test]
    fn test_empty_input() {
        let outcome = parse("", FormatSelector::Auto);
        assert_eq!(outcome.format, Format::CustomTab);
        assert!(outcome.variants.is_empty());
        assert!(outcome.errors.is_empty());

        let outcome = parse("  \n\t\n\r\n", FormatSelector::Vcf);
        assert!(outcome.variants.is_empty());
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn test_each_line_yields_at_most_one_entry() {
        let raw = "rs1 1 100 AA\ngarbage\nrs2 1 abc GG\nfoo 1 1 AA\nrs3 1 5 ZZ\n# note\n\nrs4\t2\t7\tC";
        let outcome = parse(raw, FormatSelector::CustomTab);

        let non_blank = input_lines(raw).len();
        assert!(outcome.variants.len() + outcome.errors.len() <= non_blank);
        assert_eq!(outcome.variants.len(), 2);
        assert_eq!(outcome.errors.len(), 4);
    }

    #[test]
    fn test_parse_is_idempotent() {
        let raw = "rs1 1 100 AA\ngarbage\nrs2 chr2 200 CT";
        assert_eq!(
            parse(raw, FormatSelector::CustomTab),
            parse(raw, FormatSelector::CustomTab)
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        let outcome = parse("rs1\t1\t100\tAA\r\nrs2\t1\t200\tCC\r\n", FormatSelector::CustomTab);
        assert_eq!(outcome.variants.len(), 2);
        assert_eq!(outcome.variants[1].genotype, "CC");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ParseError::InvalidGenotype {
                genotype: "ZZ".to_string(),
                rs_id: "rs1".to_string()
            }
            .to_string(),
            "Invalid genotype: ZZ for rs1"
        );
        assert_eq!(
            ParseError::Malformed("x".to_string()).to_string(),
            "Error parsing line: x"
        );
    }
}

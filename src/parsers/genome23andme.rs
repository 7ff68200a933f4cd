// ==============================================================================
// genome23andme.rs - 23andMe Raw Data Parser
// ==============================================================================
// Description: Parser for 23andMe-style direct-to-consumer genotype exports
// Author: Matt Barham
// Created: 2026-10-03
// Modified: 2026-10-09
// Version: 1.1.0
// ==============================================================================
// Format: Tab-delimited text with header comments
// Example:
//   # rsid    chromosome    position    genotype
//   rs548049170    1    69869    TT
//   rs13328684    1    74792    --
//   rs9283150    1    565508    AA
// ==============================================================================
// No-calls ("--") are kept here; the validator reports them.
// ==============================================================================

use crate::models::{strip_chr_prefix, Variant};
use crate::parsers::{parse_position, ParseError};

const MIN_FIELDS: usize = 4;

/// Parse 23andMe data lines, skipping `#` comment lines
pub fn records<'a>(
    lines: &'a [&'a str],
) -> impl Iterator<Item = Result<Variant, ParseError>> + 'a {
    lines
        .iter()
        .filter(|line| !line.starts_with('#'))
        .map(|line| parse_line(line))
}

/// Parse a single line from the 23andMe file
fn parse_line(line: &str) -> Result<Variant, ParseError> {
    let fields: Vec<&str> = line.split('\t').collect();

    if fields.len() < MIN_FIELDS {
        return Err(ParseError::InvalidGenome23Line(line.to_string()));
    }

    let rs_id = fields[0].trim().to_string();
    let chromosome = strip_chr_prefix(fields[1].trim()).to_string();
    let position = parse_position(fields[2], line)?;
    let genotype = fields[3].trim().to_string();

    Ok(Variant {
        rs_id,
        chromosome,
        position,
        genotype,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::input_lines;

    fn parse_text(raw: &str) -> Vec<Result<Variant, ParseError>> {
        let lines = input_lines(raw);
        records(&lines).collect()
    }

    #[test]
    fn test_parse_valid_file() {
        let contents = "\
# This data file generated by 23andMe
# rsid\tchromosome\tposition\tgenotype
rs548049170\t1\t69869\tTT
rs13328684\t1\t74792\t--
rs9283150\t1\t565508\tAA
rs12345678\t2\t100000\tAG
";
        let records: Vec<Variant> = parse_text(contents)
            .into_iter()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(records.len(), 4);

        // Check first record
        assert_eq!(records[0], Variant::new("rs548049170", "1", 69869, "TT"));

        // No-calls are passed through untouched
        assert_eq!(records[1].genotype, "--");

        assert_eq!(records[3].chromosome, "2");
        assert_eq!(records[3].genotype, "AG");
    }

    #[test]
    fn test_invalid_format_too_few_fields() {
        let results = parse_text("rs548049170\t1\t69869\nrs1\t1\t10\tCC");

        assert_eq!(
            results[0],
            Err(ParseError::InvalidGenome23Line("rs548049170\t1\t69869".to_string()))
        );
        assert_eq!(results[1], Ok(Variant::new("rs1", "1", 10, "CC")));
    }

    #[test]
    fn test_space_delimited_line_is_rejected() {
        let results = parse_text("rs1 1 100 AA");
        assert_eq!(
            results,
            vec![Err(ParseError::InvalidGenome23Line("rs1 1 100 AA".to_string()))]
        );
    }

    #[test]
    fn test_invalid_position() {
        let results = parse_text("rs548049170\t1\tNOT_A_NUMBER\tTT");
        assert_eq!(
            results,
            vec![Err(ParseError::Malformed(
                "rs548049170\t1\tNOT_A_NUMBER\tTT".to_string()
            ))]
        );
    }

    #[test]
    fn test_whitespace_and_prefix_handling() {
        let results = parse_text("rs548049170  \t  chr1  \t  69869  \t  TT");
        assert_eq!(results, vec![Ok(Variant::new("rs548049170", "1", 69869, "TT"))]);
    }

    #[test]
    fn test_mixed_chromosomes() {
        let contents = "\
rs1\t1\t100\tAA
rs2\tX\t200\tA
rs3\tchr10\t300\tGG
rs4\tY\t400\tT
rs5\tMT\t600\tA
";
        let chromosomes: Vec<String> = parse_text(contents)
            .into_iter()
            .map(|r| r.unwrap().chromosome)
            .collect();

        assert_eq!(chromosomes, vec!["1", "X", "10", "Y", "MT"]);
    }
}

// ==============================================================================
// parsers/custom_tab.rs - Custom Table Parser
// ==============================================================================
// Description: Parser for loose "rsid chromosome position genotype" tables
// Author: Matt Barham
// Created: 2026-10-04
// Modified: 2026-10-09
// Version: 1.0.1
// ==============================================================================
// Format: tab-delimited, falling back to any run of whitespace
// Example:
//   rs548049170 1 69869 TT
//   chr1:565508	1	565508	AA
// Unlike the 23andMe parser, rsId shape and genotype are checked here.
// ==============================================================================

use crate::models::{is_valid_genotype, strip_chr_prefix, Variant};
use crate::parsers::{parse_position, ParseError};

const MIN_FIELDS: usize = 4;

/// Parse custom table lines, skipping `#` comment lines
pub fn records<'a>(
    lines: &'a [&'a str],
) -> impl Iterator<Item = Result<Variant, ParseError>> + 'a {
    lines
        .iter()
        .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
        .map(|line| parse_line(line))
}

/// Split on tabs, or on whitespace runs when tabs give too few columns
fn split_fields(line: &str) -> Vec<&str> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() >= MIN_FIELDS {
        return fields;
    }
    line.split_whitespace().collect()
}

fn parse_line(line: &str) -> Result<Variant, ParseError> {
    let fields = split_fields(line);

    if fields.len() < MIN_FIELDS {
        return Err(ParseError::InvalidFormat(line.to_string()));
    }

    let rs_id = fields[0].trim();
    let chromosome = strip_chr_prefix(fields[1].trim());
    let genotype = fields[3].trim();

    if !rs_id.starts_with("rs") && !rs_id.contains(':') {
        return Err(ParseError::InvalidRsId(rs_id.to_string()));
    }

    if !is_valid_genotype(genotype) {
        return Err(ParseError::InvalidGenotype {
            genotype: genotype.to_string(),
            rs_id: rs_id.to_string(),
        });
    }

    let position = parse_position(fields[2], line)?;

    Ok(Variant {
        rs_id: rs_id.to_string(),
        chromosome: chromosome.to_string(),
        position,
        genotype: genotype.to_string(),
    })
}

// ==============================================================================
// parsers/vcf.rs - VCF text parser
// ==============================================================================
// Description: Line-level parser for pasted VCF (Variant Call Format) text
// Author: Matt Barham
// Created: 2026-10-03
// Modified: 2026-10-15
// Version: 1.1.0
// ==============================================================================
// References:
// - VCF 4.2 Spec: https://samtools.github.io/hts-specs/VCFv4.2.pdf
// ==============================================================================
// Columns (first sample only):
//   CHROM POS ID REF ALT QUAL FILTER INFO FORMAT SAMPLE
// Genotype: GT allele indices select from [REF, ALT...]
//   FORMAT=GT, SAMPLE=0/1, REF=A, ALT=G → "AG"
// ==============================================================================

use crate::models::{strip_chr_prefix, Variant};
use crate::parsers::{parse_position, ParseError};

/// Minimum tab-delimited columns: 8 fixed + FORMAT + one sample
const MIN_FIELDS: usize = 10;

const COLUMN_HEADER: &str = "#CHROM";
const META_PREFIX: &str = "##";

/// Genotype reported when the sample carries no GT subfield
const NO_GENOTYPE: &str = "NN";
const UNKNOWN_ALLELE: &str = "N";

/// Parse VCF data lines.
///
/// Lines before the `#CHROM` header are ignored, so input without a header
/// yields no records and no errors. `##` meta lines are skipped wherever
/// they appear.
pub fn records<'a>(
    lines: &'a [&'a str],
) -> impl Iterator<Item = Result<Variant, ParseError>> + 'a {
    lines
        .iter()
        .skip_while(|line| !line.starts_with(COLUMN_HEADER))
        .filter(|line| !line.starts_with(META_PREFIX) && !line.starts_with(COLUMN_HEADER))
        .map(|line| parse_line(line))
}

/// Parse a single VCF data line
fn parse_line(line: &str) -> Result<Variant, ParseError> {
    let fields: Vec<&str> = line.split('\t').collect();

    if fields.len() < MIN_FIELDS {
        return Err(ParseError::InvalidVcfLine(line.to_string()));
    }

    let chromosome = strip_chr_prefix(fields[0].trim());
    let position = parse_position(fields[1], line)?;
    let id = fields[2].trim();
    let ref_allele = fields[3].trim();
    let alt_alleles = fields[4].trim();
    let format = fields[8].trim();
    let sample = fields[9].trim();

    // Novel variants have no ID; synthesize chr{CHROM}:{POS}
    let rs_id = if id == "." {
        format!("chr{}:{}", chromosome, position)
    } else {
        id.to_string()
    };

    Ok(Variant {
        rs_id,
        chromosome: chromosome.to_string(),
        position,
        genotype: decode_genotype(format, sample, ref_allele, alt_alleles),
    })
}

/// Decode the GT subfield of a sample column into allele bases.
///
/// Allele index 0 is REF, 1.. index the comma-separated ALT list. Exactly
/// two positions are decoded; a missing (`.` or absent second index),
/// non-numeric or out-of-range index becomes `N` for its position, so a
/// haploid `1` decodes to `GN`. Without a GT subfield (or a GT value) the
/// genotype is `NN`.
///
/// # Examples
/// ```
/// use variant_intake::parsers::decode_genotype;
///
/// assert_eq!(decode_genotype("GT", "0/0", "A", "G"), "AA");
/// assert_eq!(decode_genotype("GT:DS", "0|1:1.0", "A", "G"), "AG");
/// assert_eq!(decode_genotype("GT", "1/2", "A", "G,T"), "GT");
/// assert_eq!(decode_genotype("DS", "1.0", "A", "G"), "NN");
/// ```
pub fn decode_genotype(format: &str, sample: &str, ref_allele: &str, alt_alleles: &str) -> String {
    let Some(gt_index) = format.split(':').position(|key| key == "GT") else {
        return NO_GENOTYPE.to_string();
    };

    let gt_value = match sample.split(':').nth(gt_index) {
        Some(value) if !value.is_empty() => value,
        _ => return NO_GENOTYPE.to_string(),
    };

    let alleles: Vec<&str> = std::iter::once(ref_allele)
        .chain(alt_alleles.split(','))
        .collect();

    let mut indices = gt_value.split(['/', '|']);
    [indices.next(), indices.next()]
        .into_iter()
        .map(|index| {
            index
                .and_then(|index| index.parse::<usize>().ok())
                .and_then(|i| alleles.get(i).copied())
                .filter(|allele| !allele.is_empty())
                .unwrap_or(UNKNOWN_ALLELE)
        })
        .collect()
}

// ==============================================================================
// models.rs - Variant Data Models
// ==============================================================================
// Description: Normalized variant record and input format selection
// Author: Matt Barham
// Created: 2026-10-01
// Modified: 2026-10-14
// Version: 1.1.0
// ==============================================================================

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::parsers::sniffer;

/// Normalized genetic variant, as handed to the prediction service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    /// SNP identifier (e.g., "rs548049170") or synthesized "chr{CHROM}:{POS}"
    pub rs_id: String,
    /// Chromosome ("1"-"22", "X", "Y", "MT"), "chr" prefix removed
    pub chromosome: String,
    /// 1-based genomic coordinate
    pub position: i64,
    /// One or two alleles (e.g., "AG", "T")
    pub genotype: String,
}

impl Variant {
    pub fn new(
        rs_id: impl Into<String>,
        chromosome: impl Into<String>,
        position: i64,
        genotype: impl Into<String>,
    ) -> Self {
        Self {
            rs_id: rs_id.into(),
            chromosome: chromosome.into(),
            position,
            genotype: genotype.into(),
        }
    }

    /// Identity used for duplicate detection: (rsId, chromosome, position)
    pub fn identity(&self) -> (&str, &str, i64) {
        (&self.rs_id, &self.chromosome, self.position)
    }
}

/// Resolved input format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    /// Variant Call Format with "##" meta headers and a "#CHROM" column header
    Vcf,
    /// 23andMe-style direct-to-consumer export
    ConsumerArray,
    /// Loose "rsid chromosome position genotype" table
    CustomTab,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Vcf => "vcf",
            Format::ConsumerArray => "23andme",
            Format::CustomTab => "custom_tab",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format requested by the caller; `Auto` defers to the sniffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatSelector {
    #[default]
    Auto,
    Vcf,
    ConsumerArray,
    CustomTab,
}

impl FormatSelector {
    /// Resolve to a concrete format, sniffing `lines` when set to `Auto`
    pub fn resolve<S: AsRef<str>>(self, lines: &[S]) -> Format {
        match self {
            FormatSelector::Auto => sniffer::detect(lines),
            FormatSelector::Vcf => Format::Vcf,
            FormatSelector::ConsumerArray => Format::ConsumerArray,
            FormatSelector::CustomTab => Format::CustomTab,
        }
    }
}

impl From<Format> for FormatSelector {
    fn from(format: Format) -> Self {
        match format {
            Format::Vcf => FormatSelector::Vcf,
            Format::ConsumerArray => FormatSelector::ConsumerArray,
            Format::CustomTab => FormatSelector::CustomTab,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown input format '{0}' (expected auto, vcf, 23andme or custom_tab)")]
pub struct UnknownFormat(pub String);

impl FromStr for FormatSelector {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" | "auto_detect" => Ok(FormatSelector::Auto),
            "vcf" => Ok(FormatSelector::Vcf),
            "23andme" | "consumer_array" => Ok(FormatSelector::ConsumerArray),
            "custom_tab" | "custom" => Ok(FormatSelector::CustomTab),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

/// Strip a leading "chr" (any case) from a chromosome name
pub fn strip_chr_prefix(chromosome: &str) -> &str {
    match chromosome.get(..3) {
        Some(prefix) if prefix.eq_ignore_ascii_case("chr") => &chromosome[3..],
        _ => chromosome,
    }
}

/// Genotype shape check: one or two bases from {A, C, G, T}
pub fn is_valid_genotype(genotype: &str) -> bool {
    (1..=2).contains(&genotype.len())
        && genotype.bytes().all(|b| matches!(b, b'A' | b'C' | b'G' | b'T'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_from_str() {
        assert_eq!("auto".parse::<FormatSelector>().unwrap(), FormatSelector::Auto);
        assert_eq!("VCF".parse::<FormatSelector>().unwrap(), FormatSelector::Vcf);
        assert_eq!(
            "23andMe".parse::<FormatSelector>().unwrap(),
            FormatSelector::ConsumerArray
        );
        assert_eq!(
            "custom_tab".parse::<FormatSelector>().unwrap(),
            FormatSelector::CustomTab
        );

        let err = "bam".parse::<FormatSelector>().unwrap_err();
        assert_eq!(err, UnknownFormat("bam".to_string()));
    }

    #[test]
    fn test_explicit_selector_ignores_content() {
        let lines = ["##fileformat=VCFv4.2"];
        assert_eq!(FormatSelector::CustomTab.resolve(&lines), Format::CustomTab);
        assert_eq!(FormatSelector::Auto.resolve(&lines), Format::Vcf);
    }

    #[test]
    fn test_strip_chr_prefix() {
        assert_eq!(strip_chr_prefix("chr1"), "1");
        assert_eq!(strip_chr_prefix("CHRX"), "X");
        assert_eq!(strip_chr_prefix("MT"), "MT");
        assert_eq!(strip_chr_prefix("ch"), "ch");
        assert_eq!(strip_chr_prefix(""), "");
    }

    #[test]
    fn test_genotype_shape() {
        assert!(is_valid_genotype("A"));
        assert!(is_valid_genotype("AG"));
        assert!(!is_valid_genotype(""));
        assert!(!is_valid_genotype("AGT"));
        assert!(!is_valid_genotype("--"));
        assert!(!is_valid_genotype("NN"));
        assert!(!is_valid_genotype("ag"));
    }

    #[test]
    fn test_variant_serializes_camel_case() {
        let variant = Variant::new("rs1", "1", 100, "AA");
        let json = serde_json::to_value(&variant).unwrap();
        assert_eq!(json["rsId"], "rs1");
        assert_eq!(json["position"], 100);
        assert_eq!(variant.identity(), ("rs1", "1", 100));
    }
}

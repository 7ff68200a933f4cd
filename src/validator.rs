// ==============================================================================
// validator.rs - Parsed Variant Validation
// ==============================================================================
// Description: Cross-record and per-record checks on parsed variants
// Author: Matt Barham
// Created: 2026-10-05
// Modified: 2026-10-15
// Version: 1.1.0
// ==============================================================================
// Checks (each reported independently, records are never dropped):
//   1. Duplicate (rsId, chromosome, position), reported on every repeat
//   2. Missing rsId
//   3. Chromosome in 1-22, X, Y, MT (case-insensitive)
//   4. Position >= 1
//   5. Genotype is one or two of A/C/G/T
// ==============================================================================

use std::collections::HashSet;
use thiserror::Error;
use tracing::info;

use crate::models::{is_valid_genotype, Variant};

const SEX_AND_MITO_CHROMOSOMES: [&str; 3] = ["X", "Y", "MT"];

/// Validation findings against an already-parsed variant
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Duplicate SNP: {0}")]
    Duplicate(String),

    #[error("Missing rsId")]
    MissingRsId,

    #[error("Invalid chromosome: {chromosome} for {rs_id}")]
    InvalidChromosome { chromosome: String, rs_id: String },

    #[error("Invalid position: {position} for {rs_id}")]
    InvalidPosition { position: i64, rs_id: String },

    #[error("Invalid genotype: {genotype} for {rs_id}")]
    InvalidGenotype { genotype: String, rs_id: String },
}

/// Check every variant, in order, returning all findings.
///
/// # Examples
/// ```
/// use variant_intake::models::Variant;
/// use variant_intake::validator::check;
///
/// let findings = check(&[Variant::new("rs1", "99", 100, "AA")]);
/// assert_eq!(findings[0].to_string(), "Invalid chromosome: 99 for rs1");
/// ```
pub fn check(variants: &[Variant]) -> Vec<ValidationError> {
    let mut seen: HashSet<(&str, &str, i64)> = HashSet::with_capacity(variants.len());
    let mut findings = Vec::new();

    for variant in variants {
        if !seen.insert(variant.identity()) {
            findings.push(ValidationError::Duplicate(variant.rs_id.clone()));
        }

        findings.extend(check_record(variant));
    }

    info!(
        "Validated {} variants: {} findings",
        variants.len(),
        findings.len()
    );

    findings
}

/// Validate variants, returning human-readable messages
pub fn validate(variants: &[Variant]) -> Vec<String> {
    check(variants).iter().map(ToString::to_string).collect()
}

/// Per-record checks (everything except duplicates)
fn check_record(variant: &Variant) -> Vec<ValidationError> {
    let mut findings = Vec::new();

    if variant.rs_id.is_empty() {
        findings.push(ValidationError::MissingRsId);
    }

    if !is_known_chromosome(&variant.chromosome) {
        findings.push(ValidationError::InvalidChromosome {
            chromosome: variant.chromosome.clone(),
            rs_id: variant.rs_id.clone(),
        });
    }

    if variant.position < 1 {
        findings.push(ValidationError::InvalidPosition {
            position: variant.position,
            rs_id: variant.rs_id.clone(),
        });
    }

    if !is_valid_genotype(&variant.genotype) {
        findings.push(ValidationError::InvalidGenotype {
            genotype: variant.genotype.clone(),
            rs_id: variant.rs_id.clone(),
        });
    }

    findings
}

/// Chromosome membership in 1-22, X, Y, MT (case-insensitive)
pub fn is_known_chromosome(chromosome: &str) -> bool {
    let autosome = chromosome.bytes().all(|b| b.is_ascii_digit())
        && !chromosome.starts_with('0')
        && chromosome
            .parse::<u8>()
            .is_ok_and(|n| (1..=22).contains(&n));

    autosome
        || SEX_AND_MITO_CHROMOSOMES
            .iter()
            .any(|name| name.eq_ignore_ascii_case(chromosome))
}

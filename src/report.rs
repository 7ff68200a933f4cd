// ==============================================================================
// report.rs - Analysis Report
// ==============================================================================
// Description: Combines parse and validation results into the hand-off report
//              for the prediction service (batches, diagnostics summary)
// Author: Matt Barham
// Created: 2026-10-07
// Modified: 2026-10-16
// Version: 1.1.0
// ==============================================================================

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use crate::models::{Format, FormatSelector, Variant};
use crate::parsers::{self, ParseOutcome};
use crate::validator;

/// Variants per prediction request batch
pub const DEFAULT_BATCH_SIZE: usize = 5;

/// Diagnostics shown before collapsing into "+N more"
pub const DEFAULT_ERRORS_SHOWN: usize = 5;

/// One batch of variants for the prediction service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictionBatch<'a> {
    /// Zero-based batch number
    pub index: usize,
    pub variants: &'a [Variant],
}

/// Split variants into consecutive batches of `batch_size` (minimum 1)
pub fn prediction_batches(variants: &[Variant], batch_size: usize) -> Vec<PredictionBatch<'_>> {
    variants
        .chunks(batch_size.max(1))
        .enumerate()
        .map(|(index, variants)| PredictionBatch { index, variants })
        .collect()
}

/// Error list capped for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorSummary {
    pub shown: Vec<String>,
    /// Errors not shown
    pub remaining: usize,
}

impl ErrorSummary {
    pub fn new(errors: &[String], limit: usize) -> Self {
        Self {
            shown: errors.iter().take(limit).cloned().collect(),
            remaining: errors.len().saturating_sub(limit),
        }
    }
}

impl fmt::Display for ErrorSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.shown {
            writeln!(f, "  - {}", error)?;
        }
        if self.remaining > 0 {
            writeln!(f, "  +{} more", self.remaining)?;
        }
        Ok(())
    }
}

/// Full result of one intake run
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub generated_at: DateTime<Utc>,
    pub format: Format,
    pub variants: Vec<Variant>,
    pub parse_errors: Vec<String>,
    pub validation_errors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_sha256: Option<String>,
}

impl AnalysisReport {
    /// Run sniff → parse → validate over raw text
    pub fn analyze(raw: &str, selector: FormatSelector) -> Self {
        let ParseOutcome {
            format,
            variants,
            errors,
        } = parsers::parse(raw, selector);
        let validation_errors = validator::validate(&variants);

        Self {
            generated_at: Utc::now(),
            format,
            variants,
            parse_errors: errors,
            validation_errors,
            input_sha256: None,
        }
    }

    pub fn with_input_digest(mut self, sha256: impl Into<String>) -> Self {
        self.input_sha256 = Some(sha256.into());
        self
    }

    /// Parse errors followed by validation errors, each in order
    pub fn errors(&self) -> Vec<String> {
        self.parse_errors
            .iter()
            .chain(&self.validation_errors)
            .cloned()
            .collect()
    }

    /// False when nothing can be sent for prediction
    pub fn has_variants(&self) -> bool {
        !self.variants.is_empty()
    }

    pub fn batches(&self, batch_size: usize) -> Vec<PredictionBatch<'_>> {
        prediction_batches(&self.variants, batch_size)
    }

    pub fn error_summary(&self, limit: usize) -> ErrorSummary {
        ErrorSummary::new(&self.errors(), limit)
    }

    /// JSON document with the combined error list and batch layout
    pub fn to_json(&self, batch_size: usize) -> serde_json::Result<String> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Document<'a> {
            #[serde(flatten)]
            report: &'a AnalysisReport,
            errors: Vec<String>,
            batches: Vec<PredictionBatch<'a>>,
        }

        serde_json::to_string_pretty(&Document {
            report: self,
            errors: self.errors(),
            batches: self.batches(batch_size),
        })
    }

    /// Human-readable summary
    pub fn render_text(&self, batch_size: usize, errors_shown: usize) -> String {
        let mut out = format!(
            "Format: {}\nVariants: {} ({} prediction batches of up to {})\n",
            self.format,
            self.variants.len(),
            self.batches(batch_size).len(),
            batch_size.max(1)
        );

        for variant in &self.variants {
            out.push_str(&format!(
                "  {}\tchr{}:{}\t{}\n",
                variant.rs_id, variant.chromosome, variant.position, variant.genotype
            ));
        }

        let errors = self.errors();
        if !errors.is_empty() {
            out.push_str(&format!("Errors: {}\n", errors.len()));
            out.push_str(&ErrorSummary::new(&errors, errors_shown).to_string());
        }

        out
    }
}

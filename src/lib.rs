// ==============================================================================
// lib.rs - Variant Intake Library
// ==============================================================================
// Description: Format detection, parsing and validation of raw genetic variant
//              text ahead of the prediction service
// Author: Matt Barham
// Created: 2026-10-01
// Modified: 2026-10-16
// Version: 1.1.0
// ==============================================================================

pub mod input;
pub mod models;
pub mod parsers;
pub mod report;
pub mod validator;

pub use models::{Format, FormatSelector, Variant};
pub use parsers::{parse, ParseError, ParseOutcome};
pub use report::AnalysisReport;
pub use validator::{validate, ValidationError};

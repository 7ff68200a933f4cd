// ==============================================================================
// main.rs - Variant Intake Entry Point
// ==============================================================================
// Description: Command-line entry point: load raw variant text, detect format,
//              parse, validate and print the hand-off report
// Author: Matt Barham
// Created: 2026-10-08
// Modified: 2026-10-16
// Version: 1.0.1
// ==============================================================================

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use variant_intake::input::{self, DEFAULT_MAX_INPUT_BYTES};
use variant_intake::models::FormatSelector;
use variant_intake::report::{AnalysisReport, DEFAULT_BATCH_SIZE, DEFAULT_ERRORS_SHOWN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file (.gz accepted); reads stdin when omitted or "-"
    #[arg(short, long, env = "VARIANT_INTAKE_INPUT")]
    input: Option<PathBuf>,

    /// Input format (auto, vcf, 23andme, custom_tab)
    #[arg(short, long, env = "VARIANT_INTAKE_FORMAT", default_value = "auto")]
    format: FormatSelector,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    /// Variants per prediction request batch
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    batch_size: usize,

    /// Diagnostics listed before collapsing into "+N more"
    #[arg(long, default_value_t = DEFAULT_ERRORS_SHOWN)]
    max_errors_shown: usize,

    /// Maximum input size in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_INPUT_BYTES)]
    max_input_bytes: u64,
}

fn main() -> Result<()> {
    // Initialize tracing (stderr, so stdout carries only the report)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "variant_intake=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    info!("Variant intake starting (format: {:?})", args.format);

    let raw = input::load(args.input.as_deref(), args.max_input_bytes)
        .context("Failed to load variant input")?;

    let report = AnalysisReport::analyze(&raw.text, args.format).with_input_digest(raw.sha256);

    match args.output {
        OutputFormat::Text => print!(
            "{}",
            report.render_text(args.batch_size, args.max_errors_shown)
        ),
        OutputFormat::Json => println!(
            "{}",
            report
                .to_json(args.batch_size)
                .context("Failed to serialize report")?
        ),
    }

    if !report.has_variants() {
        warn!("No variants parsed from {}", raw.source);
        anyhow::bail!("No valid variants found");
    }

    info!(
        "Intake complete: {} variants, {} errors",
        report.variants.len(),
        report.errors().len()
    );

    Ok(())
}

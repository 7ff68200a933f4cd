// ==============================================================================
// parse_demo.rs - Variant Parsing Example
// ==============================================================================
// Description: Demonstrates format detection, parsing and validation of the
//              three supported input formats
// Author: Matt Barham
// Created: 2026-10-09
// Modified: 2026-10-09
// Version: 1.0.0
// ==============================================================================

use variant_intake::parsers::decode_genotype;
use variant_intake::report::{ErrorSummary, DEFAULT_ERRORS_SHOWN};
use variant_intake::{parse, validate, FormatSelector};

fn main() {
    println!("=== Variant Intake Example ===\n");

    let inputs = [
        (
            "VCF",
            "##fileformat=VCFv4.2\n##reference=GRCh38\n\
             #CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tsample1\n\
             1\t69869\trs548049170\tT\tC\t.\tPASS\t.\tGT\t1/1\n\
             2\t1000\t.\tA\tG,T\t.\tPASS\t.\tGT:DP\t1|2:30",
        ),
        (
            "23andMe",
            "# rsid\tchromosome\tposition\tgenotype\n\
             rs548049170\t1\t69869\tTT\n\
             rs13328684\t1\t74792\t--\n\
             rs9283150\t1\t565508\tAA",
        ),
        (
            "Custom",
            "rs548049170 1 69869 TT\n\
             rs9283150 chr1 565508 AA\n\
             rs548049170 1 69869 CT\n\
             invalid line",
        ),
    ];

    for (label, raw) in inputs {
        println!("--- {} input ---", label);

        let outcome = parse(raw, FormatSelector::Auto);
        println!("Detected format: {}", outcome.format);

        println!("{:<16} {:<6} {:<10} {}", "rsID", "Chrom", "Position", "Genotype");
        println!("{:-<44}", "");
        for variant in &outcome.variants {
            println!(
                "{:<16} {:<6} {:<10} {}",
                variant.rs_id, variant.chromosome, variant.position, variant.genotype
            );
        }

        let mut errors = outcome.errors.clone();
        errors.extend(validate(&outcome.variants));
        if !errors.is_empty() {
            println!("\nDiagnostics ({}):", errors.len());
            print!("{}", ErrorSummary::new(&errors, DEFAULT_ERRORS_SHOWN));
        }
        println!();
    }

    println!("--- GT decoding ---");
    for (format, sample, ref_allele, alt) in [
        ("GT", "0/0", "A", "G"),
        ("GT", "0/1", "A", "G"),
        ("GT", "1/1", "A", "G"),
        ("GT:DP", "2|1:14", "A", "G,T"),
        ("DS", "1.2", "A", "G"),
    ] {
        println!(
            "FORMAT={:<6} SAMPLE={:<7} REF={} ALT={:<4} → {}",
            format,
            sample,
            ref_allele,
            alt,
            decode_genotype(format, sample, ref_allele, alt)
        );
    }
}

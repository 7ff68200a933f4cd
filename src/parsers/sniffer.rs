// ==============================================================================
// parsers/sniffer.rs - Input Format Detection
// ==============================================================================
// Description: Infers the input format from the first non-blank line
// Author: Matt Barham
// Created: 2026-10-02
// Modified: 2026-10-02
// Version: 1.0.0
// ==============================================================================
// Signatures (checked in order, first line only):
//   ##fileformat=VCF...                         → VCF
//   # rsid ...  or  ...chromosome\tposition\tgenotype... → 23andMe
//   anything else (or no lines)                 → custom tab
// ==============================================================================

use tracing::debug;

use crate::models::Format;

const VCF_SIGNATURE: &str = "##fileformat=VCF";
const GENOME23_COMMENT_SIGNATURE: &str = "# rsid";
const GENOME23_COLUMN_SIGNATURE: &str = "chromosome\tposition\tgenotype";

/// Detect the format of trimmed, non-blank input lines.
///
/// Never fails: empty input or an unrecognized first line yields
/// [`Format::CustomTab`].
///
/// # Examples
/// ```
/// use variant_intake::models::Format;
/// use variant_intake::parsers::sniffer::detect;
///
/// assert_eq!(detect(&["##fileformat=VCFv4.2"]), Format::Vcf);
/// assert_eq!(detect(&["# rsid\tchromosome\tposition\tgenotype"]), Format::ConsumerArray);
/// assert_eq!(detect::<&str>(&[]), Format::CustomTab);
/// ```
pub fn detect<S: AsRef<str>>(lines: &[S]) -> Format {
    let Some(first_line) = lines.first().map(AsRef::as_ref) else {
        debug!("No input lines, defaulting to custom tab format");
        return Format::CustomTab;
    };

    let format = if first_line.starts_with(VCF_SIGNATURE) {
        Format::Vcf
    } else if first_line.starts_with(GENOME23_COMMENT_SIGNATURE)
        || first_line.contains(GENOME23_COLUMN_SIGNATURE)
    {
        Format::ConsumerArray
    } else {
        Format::CustomTab
    };

    debug!("Detected input format: {}", format);
    format
}

// ==============================================================================
// input.rs - Raw Input Loading
// ==============================================================================
// Description: Reads raw variant text from a file or stdin (size limit, gzip,
//              SHA-256 digest of the raw bytes)
// Author: Matt Barham
// Created: 2026-10-06
// Modified: 2026-10-12
// Version: 1.0.1
// ==============================================================================

use flate2::read::GzDecoder;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

pub const DEFAULT_MAX_INPUT_BYTES: u64 = 500 * 1024 * 1024; // 500 MB

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to open input file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Input too large: more than {limit} bytes")]
    TooLarge { limit: u64 },

    #[error("Input is not valid UTF-8 text")]
    NotUtf8,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Raw input text plus provenance
#[derive(Debug, Clone)]
pub struct RawInput {
    /// Where the text came from ("-" for stdin)
    pub source: String,
    pub text: String,
    /// SHA-256 of the bytes as read (before decompression)
    pub sha256: String,
    pub compressed: bool,
}

/// Load input from `path`, or stdin when `path` is `None` or `-`
pub fn load(path: Option<&Path>, max_bytes: u64) -> Result<RawInput, InputError> {
    match path {
        Some(path) if path != Path::new("-") => {
            let file = File::open(path).map_err(|source| InputError::Open {
                path: path.to_path_buf(),
                source,
            })?;
            read_from(file, &path.display().to_string(), max_bytes)
        }
        _ => read_from(io::stdin().lock(), "-", max_bytes),
    }
}

/// Read all input from `reader`, gunzipping when it carries the gzip magic
pub fn read_from<R: Read>(reader: R, source: &str, max_bytes: u64) -> Result<RawInput, InputError> {
    let raw = read_limited(reader, max_bytes)?;
    debug!("Read {} bytes from {}", raw.len(), source);

    let sha256 = format!("{:x}", Sha256::digest(&raw));
    let compressed = raw.starts_with(&GZIP_MAGIC);

    let bytes = if compressed {
        debug!("Gzip magic number detected, decompressing");
        read_limited(GzDecoder::new(raw.as_slice()), max_bytes)?
    } else {
        raw
    };

    let text = String::from_utf8(bytes).map_err(|_| InputError::NotUtf8)?;
    info!("Loaded {} bytes of text from {}", text.len(), source);

    Ok(RawInput {
        source: source.to_string(),
        text,
        sha256,
        compressed,
    })
}

fn read_limited<R: Read>(reader: R, max_bytes: u64) -> Result<Vec<u8>, InputError> {
    let mut buffer = Vec::new();
    reader
        .take(max_bytes.saturating_add(1))
        .read_to_end(&mut buffer)?;

    if buffer.len() as u64 > max_bytes {
        return Err(InputError::TooLarge { limit: max_bytes });
    }

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Create a temporary test file with the given bytes
    fn create_test_file(contents: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_plain_file() {
        let file = create_test_file(b"rs1\t1\t100\tAA\n");
        let input = load(Some(file.path()), DEFAULT_MAX_INPUT_BYTES).unwrap();

        assert_eq!(input.text, "rs1\t1\t100\tAA\n");
        assert!(!input.compressed);
        assert_eq!(input.sha256.len(), 64);
    }

    #[test]
    fn test_load_gzip_file() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"##fileformat=VCFv4.2\n").unwrap();
        let gz = encoder.finish().unwrap();

        let file = create_test_file(&gz);
        let input = load(Some(file.path()), DEFAULT_MAX_INPUT_BYTES).unwrap();

        assert!(input.compressed);
        assert_eq!(input.text, "##fileformat=VCFv4.2\n");
    }

    #[test]
    fn test_digest_is_stable() {
        let a = read_from(&b"abc"[..], "a", 10).unwrap();
        let b = read_from(&b"abc"[..], "b", 10).unwrap();
        assert_eq!(a.sha256, b.sha256);
        assert_eq!(
            a.sha256,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_too_large() {
        let result = read_from(&b"0123456789"[..], "-", 5);
        assert!(matches!(result, Err(InputError::TooLarge { limit: 5 })));

        assert!(read_from(&b"01234"[..], "-", 5).is_ok());
    }

    #[test]
    fn test_not_utf8() {
        let result = read_from(&[0xff, 0xfe, 0x00][..], "-", 10);
        assert!(matches!(result, Err(InputError::NotUtf8)));
    }

    #[test]
    fn test_missing_file() {
        let result = load(Some(Path::new("/nonexistent/genome.txt")), 10);
        assert!(matches!(result, Err(InputError::Open { .. })));
    }
}

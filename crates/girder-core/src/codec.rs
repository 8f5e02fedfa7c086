//! Decoder for the two nested framings wrapping an embedded blob:
//! a text-safe base64 layer around a gzip-compressed byte stream.
//!
//! `decode_archive` inflates the whole stream into memory before returning,
//! so a truncated or corrupt blob is caught here — strictly before the
//! materializer writes anything. The tar walker then reads the buffered
//! bytes entry by entry.

use std::io::Read;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;

use crate::error::{DecodeStage, GirderError, GirderResult};

/// Decode a single-document blob: base64 only, no compression or archive
/// framing. Embedded constants are line-wrapped, so whitespace is stripped
/// before decoding.
pub fn decode_document(blob: &str) -> GirderResult<Vec<u8>> {
    let compact: String = blob.chars().filter(|c| !c.is_ascii_whitespace()).collect();

    STANDARD.decode(compact).map_err(|e| GirderError::Decode {
        stage: DecodeStage::Encoding,
        reason: e.to_string(),
    })
}

/// Decode an archive blob through both framings, yielding raw tar bytes.
pub fn decode_archive(blob: &str) -> GirderResult<Vec<u8>> {
    let compressed = decode_document(blob)?;

    let mut decoder = GzDecoder::new(compressed.as_slice());
    let mut raw = Vec::new();
    decoder
        .read_to_end(&mut raw)
        .map_err(|e| GirderError::Decode {
            stage: DecodeStage::Compression,
            reason: e.to_string(),
        })?;

    Ok(raw)
}

/// Apply the inverse framing: gzip then base64. Exercised by the round-trip
/// tests and usable for repacking a template tree programmatically.
pub fn encode_archive(tar_bytes: &[u8]) -> GirderResult<String> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    std::io::Write::write_all(&mut encoder, tar_bytes).map_err(|e| GirderError::Decode {
        stage: DecodeStage::Compression,
        reason: e.to_string(),
    })?;
    let compressed = encoder.finish().map_err(|e| GirderError::Decode {
        stage: DecodeStage::Compression,
        reason: e.to_string(),
    })?;

    Ok(STANDARD.encode(compressed))
}

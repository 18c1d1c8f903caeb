//! Deflate and GZip helpers on `flate2`.
//!
//! Empty payloads are a no-op in both directions, so callers can pass
//! through possibly-empty buffers without special cases.

use std::io::Read;

use flate2::read::{DeflateDecoder, DeflateEncoder, GzDecoder, GzEncoder};
use flate2::Compression;

use crate::error::Result;

/// Compress with raw Deflate
pub fn deflate(data: &[u8]) -> Result<Vec<u8>> {
    if data.is_empty() {
        return Ok(Vec::new());
    }
    let mut out = Vec::new();
    DeflateEncoder::new(data, Compression::default()).read_to_end(&mut out)?;
    tracing::trace!("deflate: {} -> {} bytes", data.len(), out.len());
    Ok(out)
}

/// Decompress raw Deflate data
pub fn inflate(data: &[u8]) -> Result<Vec<u8>> {
    if data.is_empty() {
        return Ok(Vec::new());
    }
    let mut out = Vec::new();
    DeflateDecoder::new(data).read_to_end(&mut out)?;
    Ok(out)
}

/// Compress into the GZip container format
pub fn gzip(data: &[u8]) -> Result<Vec<u8>> {
    if data.is_empty() {
        return Ok(Vec::new());
    }
    let mut out = Vec::new();
    GzEncoder::new(data, Compression::default()).read_to_end(&mut out)?;
    tracing::trace!("gzip: {} -> {} bytes", data.len(), out.len());
    Ok(out)
}

/// Decompress GZip data
pub fn gunzip(data: &[u8]) -> Result<Vec<u8>> {
    if data.is_empty() {
        return Ok(Vec::new());
    }
    let mut out = Vec::new();
    GzDecoder::new(data).read_to_end(&mut out)?;
    Ok(out)
}

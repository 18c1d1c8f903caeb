//! Byte-slice conversions: Base64, hex, UTF-8/UTF-16 text, concatenation.
//!
//! The UTF decoders also serve embedded assets: bytes pulled in with
//! `include_bytes!` decode through [`into_utf8`].

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::{Error, Result};

/// Encode bytes as standard-alphabet Base64 text
pub fn to_base64(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decode standard-alphabet Base64 text; surrounding whitespace is ignored
pub fn from_base64(text: &str) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(text.trim())?)
}

/// Encode bytes as lowercase hex text
pub fn to_hex(data: &[u8]) -> String {
    hex::encode(data)
}

/// Decode hex text (either case) into bytes
pub fn from_hex(text: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(text)?)
}

/// Concatenate two byte slices into a fresh vector
pub fn concat(first: &[u8], second: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(first.len() + second.len());
    out.extend_from_slice(first);
    out.extend_from_slice(second);
    out
}

/// Interpret owned bytes as UTF-8 text, rejecting invalid sequences
pub fn into_utf8(data: Vec<u8>) -> Result<String> {
    Ok(String::from_utf8(data)?)
}

/// Interpret bytes as little-endian UTF-16 text
pub fn from_utf16_le(data: &[u8]) -> Result<String> {
    if data.len() % 2 != 0 {
        return Err(Error::Malformed("utf-16 payload has odd length".into()));
    }
    let units: Vec<u16> = data
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units).map_err(|_| Error::Malformed("invalid utf-16 payload".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base64_round_trips() {
        let data = b"content payload".to_vec();
        let text = to_base64(&data);
        assert_eq!(from_base64(&text).unwrap(), data);
        assert_eq!(from_base64(&format!("  {text}\n")).unwrap(), data);
    }

    #[test]
    fn base64_rejects_garbage() {
        assert!(from_base64("not base64!!").is_err());
    }

    #[test]
    fn hex_round_trips() {
        assert_eq!(to_hex(&[0xde, 0xad]), "dead");
        assert_eq!(from_hex("DEAD").unwrap(), vec![0xde, 0xad]);
        assert!(from_hex("xyz").is_err());
    }

    #[test]
    fn concat_preserves_order() {
        assert_eq!(concat(&[1, 2], &[3]), vec![1, 2, 3]);
        assert_eq!(concat(&[], &[]), Vec::<u8>::new());
    }

    #[test]
    fn utf8_decoding_is_strict() {
        assert_eq!(into_utf8(b"abc".to_vec()).unwrap(), "abc");
        assert!(into_utf8(vec![0xff, 0xfe]).is_err());
    }

    #[test]
    fn utf16_le_decodes() {
        // "hi" in UTF-16LE
        assert_eq!(from_utf16_le(&[0x68, 0x00, 0x69, 0x00]).unwrap(), "hi");
        assert!(from_utf16_le(&[0x68, 0x00, 0x69]).is_err());
    }
}

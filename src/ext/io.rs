//! Reader/writer conveniences over `std::io`.
//!
//! Closing is ownership-driven: helpers that take the reader by value drop
//! it (and thus close it) on return, helpers that borrow leave it open for
//! the caller.

use std::io::{self, BufRead, BufReader, Read, Write};

use crate::error::Result;

/// Read everything into a string, consuming and closing the reader
pub fn read_text<R: Read>(mut reader: R) -> Result<String> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text)
}

/// Read all lines, consuming and closing the reader
pub fn read_lines<R: Read>(reader: R) -> Result<Vec<String>> {
    let lines: io::Result<Vec<String>> = BufReader::new(reader).lines().collect();
    Ok(lines?)
}

/// Buffered copy between borrowed endpoints; both stay open. Returns the
/// number of bytes copied.
pub fn copy_buffered<R: Read, W: Write>(reader: &mut R, writer: &mut W) -> Result<u64> {
    let mut buffered = BufReader::new(reader);
    Ok(io::copy(&mut buffered, writer)?)
}

/// Drain a borrowed reader into a byte vector, leaving it open
pub fn read_bytes<R: Read>(reader: &mut R) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    Ok(data)
}

use itertools::Itertools;

use super::error::Error;
use crate::{ELEMENT_SEPARATOR, LINE_SEPARATOR};

/// Interprets `bytes` (least significant byte first) as an unsigned integer
///
/// An empty slice decodes to `0`.
///
/// # Errors
///
/// Returns [`Error::TooWide`] if more than 8 bytes are given
pub fn decode_uint_le(bytes: &[u8]) -> Result<u64, Error> {
    if bytes.len() > std::mem::size_of::<u64>() {
        return Err(Error::TooWide { bytes: bytes.len() });
    }
    Ok(bytes
        .iter()
        .rev()
        .fold(0, |acc, &b| (acc << 8) | u64::from(b)))
}

/// Encodes `value` into exactly `n_bytes` little-endian bytes
///
/// # Errors
///
/// Returns [`Error::Overflow`] if `value >= 256^n_bytes`
pub fn encode_uint_le(value: u64, n_bytes: usize) -> Result<Vec<u8>, Error> {
    let fits = n_bytes >= std::mem::size_of::<u64>() || value >> (8 * n_bytes) == 0;
    if !fits {
        return Err(Error::Overflow {
            value,
            bytes: n_bytes,
        });
    }
    let mut out = value.to_le_bytes().to_vec();
    out.resize(n_bytes, 0);
    Ok(out)
}

/// Renders a byte as a C hex literal, e.g. `0x4D`
#[must_use]
pub fn format_byte_literal(byte: u8) -> String {
    format!("0x{byte:02X}")
}

// a literal plus its trailing comma
fn format_element(byte: u8) -> String {
    format!("{},", format_byte_literal(byte))
}

/// Renders `bytes` as a single line of array elements
pub(crate) fn format_line(bytes: &[u8]) -> String {
    bytes.iter().copied().map(format_element).join(ELEMENT_SEPARATOR)
}

/// Renders `bytes` as array elements, each one followed by the element separator
///
/// `[0x42, 0x4D]` becomes `"0x42, 0x4D, "`, ready to be followed by a trailing comment.
#[must_use]
pub fn format_elements(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| format!("{}{ELEMENT_SEPARATOR}", format_element(b)))
        .collect()
}

/// Renders `bytes` as lines of `elements_per_line` array elements
///
/// Only complete lines are emitted: the remaining `bytes.len() % elements_per_line` elements are
/// dropped. Callers that need every byte must render the remainder themselves.
#[must_use]
pub fn block_format(bytes: &[u8], elements_per_line: usize) -> String {
    if elements_per_line == 0 {
        return String::new();
    }
    bytes
        .chunks_exact(elements_per_line)
        .map(format_line)
        .join(LINE_SEPARATOR)
}

/// Little-endian integer conversions and C literal formatting
pub mod bytes;
/// Errors raised by the byte codec
pub mod error;
/// Named fields of the bitmap headers
pub mod field;
mod name;

pub use bytes::{block_format, decode_uint_le, encode_uint_le, format_byte_literal, format_elements};
pub use field::HeaderField;
pub use name::{c_compatible_name, strip_name, to_ident};

use crate::serde;
use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
/// Possible `libargb` errors
pub enum Error {
    /// Error returned if a value cannot be converted to or from its byte representation
    #[error("codec error: {0}")]
    Codec(#[from] serde::error::Error),
    /// Error returned if the file does not start with the `BM` signature
    #[error(
        "invalid signature: expected '{}', got '{}'",
        .expected.escape_ascii(),
        .actual.escape_ascii()
    )]
    InvalidSignature {
        /// expected signature
        expected: [u8; 2],
        /// signature found in the file
        actual: [u8; 2],
    },
    /// Error returned if the DIB header is not a `BITMAPV3INFOHEADER`
    #[error("unexpected DIB header: expected type BITMAPV3INFOHEADER (size={expected}), got size={actual}")]
    UnexpectedHeaderSize {
        /// expected DIB header size
        expected: u32,
        /// DIB header size found in the file
        actual: u32,
    },
    /// Error returned if the bitmap does not use 32 bits per pixel
    #[error("wrong number of bits per pixel: expected {expected}, got {actual}")]
    UnsupportedBitsPerPixel {
        /// expected bit depth
        expected: u16,
        /// bit depth found in the file
        actual: u16,
    },
    /// Error returned if the pixel array would start inside the headers
    #[error("invalid pixel array offset: expected at least {minimum}, got {actual}")]
    InvalidPixelArrayOffset {
        /// smallest valid offset (end of the DIB header)
        minimum: u32,
        /// offset found in the file
        actual: u32,
    },
    /// Error returned if the input ends before the data it announces
    #[error("unexpected end of input: need {needed} bytes, got {actual}")]
    Truncated {
        /// number of bytes required
        needed: usize,
        /// number of bytes available
        actual: usize,
    },
    /// Error returned if the image cannot be split into glyphs of the requested size
    #[error("image size {image:?} does not match font size {font:?}: the image width must be a multiple of the font width and the image height must equal the font height")]
    FontDimensions {
        /// image width/height
        image: (u32, u32),
        /// font width/height
        font: (u16, u16),
    },
    /// Error returned if reading the input fails
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

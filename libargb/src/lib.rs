//! # libargb
//!
//!
//! This library reads Windows bitmap files stored in the ARGB8888 pixel format (a
//! `BITMAPV3INFOHEADER` DIB header with 32 bits per pixel) and renders them as C source code, so
//! that the bitmap can be compiled straight into a firmware image.
//!
//! Two kinds of output are supported:
//! - A static `unsigned char` array holding the complete file, either verbatim or with a small
//!   gap inserted so that the pixel array lands on a 4-byte boundary
//! - An anti-aliased font table holding only the alpha channel of a strip of monospace glyphs
//!
//! ### Limitations
//!
//! Only the ARGB8888 layout is accepted. Bitmaps with palettes, RLE compression, other DIB header
//! sizes or other bit depths are rejected with an [`Error`]. Nothing is ever converted, scaled or
//! re-encoded: the generated arrays contain the bytes of the input file.
//!
//! ### Usage
//!
//! #### Converting a bitmap into a C array
//!
//! ```rust,no_run
//! use libargb::{as_c_array_aligned, Argb8888Bitmap};
//!
//! fn main() -> anyhow::Result<()> {
//!     let bitmap = Argb8888Bitmap::from_file("logo.bmp")?;
//!     let header = as_c_array_aligned(&bitmap, "logo")?;
//!     std::fs::write("logo.h", header)?;
//!     Ok(())
//! }
//! ```
//!
//! #### Extracting an anti-aliased font
//!
//! The input is a single row of glyphs in ASCII order, every glyph having the same size.
//!
//! ```rust,no_run
//! use libargb::{Argb8888Bitmap, FontCell, FontExtractor};
//!
//! fn main() -> anyhow::Result<()> {
//!     let bitmap = Argb8888Bitmap::from_file("font_7x12.bmp")?;
//!     let cell = FontCell::builder().width(7).height(12).build();
//!     let font = FontExtractor::new(&bitmap, cell)?;
//!     std::fs::write("font_7x12.c", font.as_c_font("font_7x12")?)?;
//!     Ok(())
//! }
//! ```
//!

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    missing_docs
)]

/// Module containing the ARGB8888 bitmap decoder
pub mod bitmap;
/// Module containing the C source emitters
pub mod emit;
mod error;
/// Module containing the low-level byte conversions used by the decoder and emitters
pub mod serde;

pub use bitmap::{aligned::AlignedBitmap, ArrayLayout, Argb8888Bitmap};
pub use emit::array::{as_c_array, as_c_array_aligned, Alignment, CArray};
pub use emit::font::{FontCell, FontExtractor, Glyph};
pub use error::Error;

/// Separator placed between two array elements on the same line
pub const ELEMENT_SEPARATOR: &str = " ";
/// Separator placed between two lines of array elements (includes the indentation)
pub const LINE_SEPARATOR: &str = "\n  ";
/// Number of pixel array elements per line in generated arrays
pub const ARRAY_ELEMENTS_PER_LINE: usize = 12;

// Bitmap file header (14 bytes) + BITMAPV3INFOHEADER (56 bytes)
const FILE_HEADER_LEN: usize = 14;
const DIB_HEADER_LEN: u32 = 56;
const HEADERS_LEN: u32 = FILE_HEADER_LEN as u32 + DIB_HEADER_LEN;
const SIGNATURE: [u8; 2] = *b"BM";
const BITS_PER_PIXEL: u16 = 32;

use std::fmt::Write;

use strum::IntoEnumIterator;
use tracing::{instrument, trace};

use super::{CName, BANNER};
use crate::{
    bitmap::{ArrayLayout, Argb8888Bitmap},
    error::Error,
    serde::{block_format, bytes::format_line, encode_uint_le, format_elements, HeaderField},
    ARRAY_ELEMENTS_PER_LINE, LINE_SEPARATOR,
};

#[derive(Default, Debug, Eq, PartialEq, Copy, Clone)]
/// Where the pixel array is placed in the generated array
pub enum Alignment {
    /// Copy the file verbatim
    #[default]
    Unaligned,
    /// Pad the gap so that the pixel array starts on a 4-byte boundary
    FourByte,
}

/// Emitter for a static C array holding a complete bitmap file
///
/// The array is declared with `__attribute__ ((aligned (4)))` and one element more than the file
/// size: a terminating `0x00` is appended after the pixel array.
#[derive(Default, Debug, Eq, PartialEq, Copy, Clone)]
pub struct CArray {
    alignment: Alignment,
}

impl CArray {
    /// Creates a new [`CArray`] emitter
    #[must_use]
    pub const fn new(alignment: Alignment) -> Self {
        Self { alignment }
    }

    /// Renders `bitmap` as a C header named after `name`
    ///
    /// # Errors
    ///
    /// Errors if `name` holds no character usable in a C identifier, or if aligning the pixel
    /// array overflows one of the 4-byte header fields
    #[instrument(skip(self, bitmap))]
    pub fn emit(&self, bitmap: &Argb8888Bitmap, name: &str) -> Result<String, Error> {
        match self.alignment {
            Alignment::Unaligned => Self::render(bitmap, name),
            Alignment::FourByte => Self::render(&bitmap.aligned()?, name),
        }
    }

    /// Renders any [`ArrayLayout`] as a C header named after `name`
    ///
    /// # Errors
    ///
    /// See [`Self::emit`]
    pub fn render(layout: &impl ArrayLayout, name: &str) -> Result<String, Error> {
        let CName { ident, guard } = CName::new(name)?;
        let array_len = u64::from(layout.file_size()) + 1;

        let mut fields = String::new();
        let mut in_dib_header = false;
        for field in HeaderField::iter() {
            if !in_dib_header && !field.in_file_header() {
                in_dib_header = true;
                fields.push_str("\n  // DIB HEADER (BITMAPV3INFOHEADER)\n");
            }
            let bytes = field_bytes(layout, field)?;
            let _ = writeln!(fields, "  {}// {}", format_elements(&bytes), field.label());
        }
        let gap = format_elements(layout.gap());
        let pixels = format_pixel_array(layout.source().pixel_array());

        let out = format!(
            "{BANNER}
#ifndef {guard}
#define {guard}

const unsigned char {ident}[{array_len}UL] __attribute__ ((aligned (4))) =
{{
  // BITMAP FILE HEADER
{fields}
  {gap}// GAP

  // PIXEL ARRAY
  {pixels}

  0x00 // EOF
}};

#endif // {guard}
"
        );
        trace!("Generated {} bytes of C for {ident}", out.len());
        Ok(out)
    }
}

/// Renders `bitmap` verbatim as a C header
///
/// # Errors
///
/// See [`CArray::emit`]
pub fn as_c_array(bitmap: &Argb8888Bitmap, name: &str) -> Result<String, Error> {
    CArray::new(Alignment::Unaligned).emit(bitmap, name)
}

/// Renders `bitmap` as a C header with its pixel array aligned to 4 bytes
///
/// # Errors
///
/// See [`CArray::emit`]
pub fn as_c_array_aligned(bitmap: &Argb8888Bitmap, name: &str) -> Result<String, Error> {
    CArray::new(Alignment::FourByte).emit(bitmap, name)
}

fn field_bytes(layout: &impl ArrayLayout, field: HeaderField) -> Result<Vec<u8>, Error> {
    let file = layout.source().file_header();
    let dib = layout.source().dib_header();
    let value = match field {
        HeaderField::Signature => return Ok(file.signature.to_vec()),
        HeaderField::Reserved => return Ok(file.reserved.to_vec()),
        HeaderField::FileSize => u64::from(layout.file_size()),
        HeaderField::PixelArrayOffset => u64::from(layout.pixel_array_offset()),
        HeaderField::HeaderSize => u64::from(dib.header_size),
        HeaderField::Width => u64::from(dib.width),
        HeaderField::Height => u64::from(dib.height),
        HeaderField::ColorPlanes => u64::from(dib.color_planes),
        HeaderField::BitsPerPixel => u64::from(dib.bits_per_pixel),
        HeaderField::Compression => u64::from(dib.compression),
        HeaderField::ImageSize => u64::from(dib.image_size),
        HeaderField::XPixelsPerMeter => u64::from(dib.x_ppm),
        HeaderField::YPixelsPerMeter => u64::from(dib.y_ppm),
        HeaderField::ColorTable => u64::from(dib.color_table),
        HeaderField::ImportantColors => u64::from(dib.important_colors),
        HeaderField::ResolutionUnits => u64::from(dib.resolution_units),
        HeaderField::Padding => u64::from(dib.padding),
        HeaderField::FillDirection => u64::from(dib.fill_direction),
        HeaderField::HalftoneAlgorithm => u64::from(dib.halftone_algo),
        HeaderField::HalftoneParam1 => u64::from(dib.halftone_param1),
        HeaderField::HalftoneParam2 => u64::from(dib.halftone_param2),
    };
    Ok(encode_uint_le(value, field.width())?)
}

// block_format drops the last partial line, which would lose pixels here
fn format_pixel_array(pixels: &[u8]) -> String {
    let mut out = block_format(pixels, ARRAY_ELEMENTS_PER_LINE);
    let remainder = pixels.chunks_exact(ARRAY_ELEMENTS_PER_LINE).remainder();
    if !remainder.is_empty() {
        if !out.is_empty() {
            out.push_str(LINE_SEPARATOR);
        }
        out.push_str(&format_line(remainder));
    }
    out
}

use bon::Builder;
use tracing::{debug, instrument, trace};

use super::{CName, BANNER};
use crate::{bitmap::Argb8888Bitmap, error::Error, serde::block_format};

// B, G, R, A
const BYTES_PER_PIXEL: usize = 4;
const ALPHA_CHANNEL: usize = 3;

/// Size of a single glyph in pixels
#[derive(Builder, Debug, Eq, PartialEq, Copy, Clone)]
pub struct FontCell {
    /// Glyph width
    pub width: u16,
    /// Glyph height, must equal the image height
    pub height: u16,
}

impl FontCell {
    /// Creates a new [`FontCell`]
    #[must_use]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Number of pixels in a glyph
    #[must_use]
    pub const fn area(self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Alpha values of a single character, top left to bottom right
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    index: usize,
    offset: usize,
    alpha: Vec<u8>,
}

impl Glyph {
    fn empty(index: usize, cell: FontCell) -> Self {
        Self {
            index,
            offset: index * cell.area(),
            alpha: Vec::with_capacity(cell.area()),
        }
    }

    /// Position of the glyph in the strip (ASCII order)
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Position of the glyph's first byte in the generated table
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Alpha values, one per pixel
    #[must_use]
    pub fn alpha(&self) -> &[u8] {
        &self.alpha
    }
}

/// Splits an ARGB8888 bitmap holding a single row of monospace glyphs into per-glyph alpha masks
///
/// The result can be used as a mask for drawing anti-aliased text on a screen.
#[derive(Debug)]
pub struct FontExtractor<'a> {
    bitmap: &'a Argb8888Bitmap,
    cell: FontCell,
    n_glyphs: usize,
}

impl<'a> FontExtractor<'a> {
    /// Creates a new [`FontExtractor`]
    ///
    /// # Errors
    ///
    /// Returns [`Error::FontDimensions`] if the image width is not a multiple of the font width or
    /// the image height differs from the font height, and [`Error::Truncated`] if the pixel array
    /// is too short for the image size
    pub fn new(bitmap: &'a Argb8888Bitmap, cell: FontCell) -> Result<Self, Error> {
        let (width, height) = (bitmap.width(), bitmap.height());
        if cell.width == 0
            || cell.height == 0
            || width % u32::from(cell.width) != 0
            || height != u32::from(cell.height)
        {
            return Err(Error::FontDimensions {
                image: (width, height),
                font: (cell.width, cell.height),
            });
        }

        let needed = width as usize * height as usize * BYTES_PER_PIXEL;
        let actual = bitmap.pixel_array().len();
        if actual < needed {
            return Err(Error::Truncated { needed, actual });
        }

        let n_glyphs = (width / u32::from(cell.width)) as usize;
        debug!(
            "{n_glyphs} glyphs of {}x{} pixels",
            cell.width, cell.height
        );
        Ok(Self {
            bitmap,
            cell,
            n_glyphs,
        })
    }

    /// Number of glyphs in the strip
    #[must_use]
    pub const fn n_glyphs(&self) -> usize {
        self.n_glyphs
    }

    /// Glyph size
    #[must_use]
    pub const fn cell(&self) -> FontCell {
        self.cell
    }

    /// Extracts the alpha mask of every glyph
    #[must_use]
    pub fn glyphs(&self) -> Vec<Glyph> {
        let line_width = self.bitmap.width() as usize;
        let font_width = usize::from(self.cell.width);

        // one value per pixel, bottom left to top right of the whole strip
        let alpha: Vec<u8> = self
            .bitmap
            .pixel_array()
            .iter()
            .skip(ALPHA_CHANNEL)
            .step_by(BYTES_PER_PIXEL)
            .copied()
            .collect();

        let mut glyphs: Vec<_> = (0..self.n_glyphs)
            .map(|i| Glyph::empty(i, self.cell))
            .collect();
        // rows are stored bottom to top
        for row in (0..usize::from(self.cell.height)).rev() {
            for (i, glyph) in glyphs.iter_mut().enumerate() {
                let start = row * line_width + i * font_width;
                glyph
                    .alpha
                    .extend_from_slice(&alpha[start..start + font_width]);
            }
        }
        glyphs
    }

    /// Renders the glyphs as a C font table named after `name`
    ///
    /// The table is followed by an `sFONT_AA` descriptor holding the table, the font width and
    /// the font height.
    ///
    /// # Errors
    ///
    /// Errors if `name` holds no character usable in a C identifier
    #[instrument(skip(self))]
    pub fn as_c_font(&self, name: &str) -> Result<String, Error> {
        let CName { ident, .. } = CName::new(name)?;
        let FontCell { width, height } = self.cell;

        let table: String = self
            .glyphs()
            .iter()
            .map(|glyph| {
                format!(
                    "\n  // @{}\n  {}\n",
                    glyph.offset(),
                    block_format(glyph.alpha(), usize::from(width))
                )
            })
            .collect();

        let out = format!(
            "{BANNER}
#include <stdint.h>

#ifndef T_FONT_AA_
#define T_FONT_AA_
// Struct for anti-aliased monospace fonts.
typedef struct _tFont_AA
{{
  const uint8_t *table;
  uint16_t width;
  uint16_t height;
}} sFONT_AA;
#endif // T_FONT_AA_

const uint8_t {ident}_table[] =
{{{table}
  0x00 // end of array
}};

sFONT_AA {ident} = {{
  {ident}_table,
  {width}, // font width
  {height} // font height
}};
"
        );
        trace!("Generated {} bytes of C for {ident}", out.len());
        Ok(out)
    }
}

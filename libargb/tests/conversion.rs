use std::fs;

mod common;
use common::{alpha_strip, bmp_bytes, one_pixel};
use libargb::{
    as_c_array, as_c_array_aligned,
    serde::{block_format, decode_uint_le, encode_uint_le, error::Error as CodecError},
    Alignment, Argb8888Bitmap, ArrayLayout, CArray, Error, FontCell, FontExtractor,
};
use mktemp::Temp;

const ONE_PIXEL_ARRAY: &str = r"/* Generated with argb2c */
#ifndef INCLUDE_PIXEL_H_
#define INCLUDE_PIXEL_H_

const unsigned char pixel[72UL] __attribute__ ((aligned (4))) =
{
  // BITMAP FILE HEADER
  0x42, 0x4D, // SIGNATURE
  0x47, 0x00, 0x00, 0x00, // FILE SIZE
  0x00, 0x00, 0x00, 0x00, // RESERVED
  0x46, 0x00, 0x00, 0x00, // PIXEL ARRAY OFFSET

  // DIB HEADER (BITMAPV3INFOHEADER)
  0x38, 0x00, 0x00, 0x00, // HEADER SIZE
  0x01, 0x00, 0x00, 0x00, // IMAGE WIDTH
  0x01, 0x00, 0x00, 0x00, // IMAGE HEIGHT
  0x01, 0x00, // NUMBER OF COLOR PLANES
  0x20, 0x00, // NUMBER OF BITS PER PIXEL
  0x03, 0x00, 0x00, 0x00, // COMPRESSION METHOD
  0x04, 0x00, 0x00, 0x00, // SIZE OF THE RAW BITMAP DATA
  0x13, 0x0B, 0x00, 0x00, // HORIZONTAL RESOLUTION OF THE IMAGE
  0x13, 0x0B, 0x00, 0x00, // VERTICAL RESOLUTION OF THE IMAGE
  0x00, 0x00, 0x00, 0x00, // NUMBER OF COLORS IN THE COLOR PALETTE
  0x00, 0x00, 0x00, 0x00, // NUMBER OF IMPORTANT COLORS USED
  0x00, 0x00, // UNITS FOR THE HORIZONTAL AND VERTICAL RESOLUTIONS
  0xFF, 0x00, // PADDING
  0x00, 0xFF, // DIRECTION IN WHICH THE BITS FILL THE BITMAP
  0x00, 0x00, // HALFTONING ALGORITHM
  0xFF, 0x00, 0x00, 0x00, // HALFTONING PARAMETER 1
  0x00, 0x00, 0x00, 0xFF, // HALFTONING PARAMETER 2

  // GAP

  // PIXEL ARRAY
  0x11, 0x22, 0x33, 0x44,

  0x00 // EOF
};

#endif // INCLUDE_PIXEL_H_
";

#[test]
fn one_pixel_array() -> anyhow::Result<()> {
    let bmp = Argb8888Bitmap::from_bytes(&one_pixel())?;
    assert_eq!(as_c_array(&bmp, "pixel")?, ONE_PIXEL_ARRAY);
    Ok(())
}

#[test]
fn one_pixel_aligned_array() -> anyhow::Result<()> {
    let bmp = Argb8888Bitmap::from_bytes(&one_pixel())?;
    let aligned = bmp.aligned()?;
    assert_eq!(aligned.delta(), 2);
    assert_eq!(aligned.gap(), &[0, 0]);
    assert_eq!(aligned.pixel_array_offset(), 72);
    assert_eq!(aligned.file_size(), 73);

    let out = as_c_array_aligned(&bmp, "pixel")?;
    assert!(out.contains("const unsigned char pixel[74UL] __attribute__ ((aligned (4))) ="));
    assert!(out.contains("\n  0x49, 0x00, 0x00, 0x00, // FILE SIZE\n"));
    assert!(out.contains("\n  0x48, 0x00, 0x00, 0x00, // PIXEL ARRAY OFFSET\n"));
    assert!(out.contains("\n  0x00, 0x00, // GAP\n"));
    assert!(out.contains("\n  0x11, 0x22, 0x33, 0x44,\n"));
    Ok(())
}

#[test]
fn aligned_pixel_array_starts_on_4_bytes() -> anyhow::Result<()> {
    for gap in 0..8 {
        let bmp = Argb8888Bitmap::from_bytes(&bmp_bytes(1, 1, gap, &[0; 4]))?;
        let aligned = bmp.aligned()?;
        let offset = bmp.pixel_array_offset();
        assert_eq!(aligned.pixel_array_offset() % 4, 0);
        assert_eq!(aligned.pixel_array_offset() - offset, aligned.delta());
        assert_eq!(aligned.file_size() - bmp.file_size(), aligned.delta());
        assert_eq!(aligned.gap().len(), bmp.gap().len() + aligned.delta() as usize);
        if offset % 2 == 0 {
            assert_eq!(aligned.delta(), offset % 4);
        }
        if offset == 71 {
            assert_eq!(aligned.delta(), 1);
        }
    }
    Ok(())
}

#[test]
fn already_aligned_output_is_unchanged() -> anyhow::Result<()> {
    let bmp = Argb8888Bitmap::from_bytes(&bmp_bytes(2, 1, 2, &[7; 8]))?;
    assert_eq!(bmp.pixel_array_offset(), 72);
    assert_eq!(bmp.aligned()?.delta(), 0);
    assert_eq!(as_c_array_aligned(&bmp, "img")?, as_c_array(&bmp, "img")?);
    Ok(())
}

#[test]
fn every_byte_is_emitted() -> anyhow::Result<()> {
    // 5 pixels = 20 bytes, not a multiple of 12
    let pixels: Vec<u8> = (0..20).collect();
    let bmp = Argb8888Bitmap::from_bytes(&bmp_bytes(5, 1, 3, &pixels))?;
    for alignment in [Alignment::Unaligned, Alignment::FourByte] {
        let out = CArray::new(alignment).emit(&bmp, "strip")?;
        let expected_len = match alignment {
            Alignment::Unaligned => bmp.file_size() + 1,
            Alignment::FourByte => bmp.aligned()?.file_size() + 1,
        };
        assert!(out.contains(&format!("strip[{expected_len}UL]")));
        assert_eq!(out.matches("0x").count(), expected_len as usize);
    }
    Ok(())
}

#[test]
fn emitting_twice_is_identical() -> anyhow::Result<()> {
    let bmp = Argb8888Bitmap::from_bytes(&bmp_bytes(3, 3, 0, &[0xA5; 36]))?;
    let first = Temp::new_file()?;
    let second = Temp::new_file()?;
    fs::write(&first, as_c_array(&bmp, "twice")?)?;
    fs::write(&second, as_c_array(&bmp, "twice")?)?;
    let hash_1 = sha256::try_digest(&first).unwrap();
    let hash_2 = sha256::try_digest(&second).unwrap();
    assert_eq!(hash_1, hash_2);
    Ok(())
}

#[test]
fn include_guard_from_file_name() -> anyhow::Result<()> {
    let bmp = Argb8888Bitmap::from_bytes(&one_pixel())?;
    let out = as_c_array(&bmp, "my-font v2")?;
    assert!(out.contains("#ifndef INCLUDE_MYFONTV2_H_\n#define INCLUDE_MYFONTV2_H_\n"));
    assert!(out.contains("const unsigned char myfontv2[72UL]"));
    assert!(out.ends_with("#endif // INCLUDE_MYFONTV2_H_\n"));

    assert!(matches!(
        as_c_array(&bmp, "---"),
        Err(Error::Codec(CodecError::InvalidName(_)))
    ));
    Ok(())
}

#[test]
fn include_guard_keeps_leading_digit() -> anyhow::Result<()> {
    let bmp = Argb8888Bitmap::from_bytes(&one_pixel())?;
    let out = as_c_array(&bmp, "8x8 font")?;
    assert!(out.contains("#ifndef INCLUDE_8X8FONT_H_\n#define INCLUDE_8X8FONT_H_\n"));
    assert!(out.contains("const unsigned char _8x8font[72UL]"));
    assert!(out.ends_with("#endif // INCLUDE_8X8FONT_H_\n"));

    let strip = alpha_strip(&[&[1, 2], &[3, 4]]);
    let font_bmp = Argb8888Bitmap::from_bytes(&strip)?;
    let font = FontExtractor::new(&font_bmp, FontCell::new(1, 2))?;
    let out = font.as_c_font("7seg")?;
    assert!(out.contains("const uint8_t _7seg_table[] ="));
    assert!(out.contains("sFONT_AA _7seg = {\n  _7seg_table,"));
    Ok(())
}

#[test]
fn block_format_drops_partial_line() {
    let bytes: Vec<u8> = (1..=13).collect();
    let out = block_format(&bytes, 12);
    assert_eq!(
        out,
        "0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C,"
    );
    assert!(!out.contains("0x0D"));
    assert_eq!(block_format(&bytes[..11], 12), "");
}

#[test]
fn codec_round_trip() {
    for (value, n) in [(0, 1), (0xFF, 1), (70, 4), (0xDEAD_BEEF, 4), (0x1234, 2), (1 << 40, 6)] {
        let bytes = encode_uint_le(value, n).unwrap();
        assert_eq!(bytes.len(), n);
        assert_eq!(decode_uint_le(&bytes), Ok(value));
    }
    assert_eq!(
        encode_uint_le(1 << 32, 4),
        Err(CodecError::Overflow {
            value: 1 << 32,
            bytes: 4
        })
    );
}

#[test]
fn font_glyphs_are_top_left_to_bottom_right() -> anyhow::Result<()> {
    let strip = alpha_strip(&[&[10, 11, 20, 21], &[12, 13, 22, 23]]);
    let bmp = Argb8888Bitmap::from_bytes(&strip)?;
    let font = FontExtractor::new(&bmp, FontCell::builder().width(2).height(2).build())?;
    assert_eq!(font.n_glyphs(), 2);

    let glyphs = font.glyphs();
    assert_eq!(glyphs.len(), 2);
    assert_eq!(glyphs[0].alpha(), &[10, 11, 12, 13]);
    assert_eq!(glyphs[1].alpha(), &[20, 21, 22, 23]);
    assert_eq!((glyphs[1].index(), glyphs[1].offset()), (1, 4));
    Ok(())
}

#[test]
fn font_extraction_keeps_every_alpha_value() -> anyhow::Result<()> {
    let rows: Vec<Vec<u8>> = (0..3u8)
        .map(|y| (0..12u8).map(|x| y * 12 + x).collect())
        .collect();
    let rows: Vec<&[u8]> = rows.iter().map(Vec::as_slice).collect();
    let bmp = Argb8888Bitmap::from_bytes(&alpha_strip(&rows))?;
    let cell = FontCell::new(4, 3);
    let font = FontExtractor::new(&bmp, cell)?;
    let glyphs = font.glyphs();

    assert_eq!(glyphs.len(), 3);
    let total: usize = glyphs.iter().map(|g| g.alpha().len()).sum();
    assert_eq!(total, cell.area() * font.n_glyphs());
    // top left pixel of the image
    assert_eq!(glyphs[0].alpha()[0], 0);
    // bottom right pixel of the last glyph
    assert_eq!(glyphs[2].alpha().last(), Some(&35));
    Ok(())
}

#[test]
fn font_c_table() -> anyhow::Result<()> {
    let strip = alpha_strip(&[&[10, 11, 20, 21], &[12, 13, 22, 23]]);
    let bmp = Argb8888Bitmap::from_bytes(&strip)?;
    let font = FontExtractor::new(&bmp, FontCell::new(2, 2))?;
    let out = font.as_c_font("font 2x2")?;

    assert!(out.contains(
        "const uint8_t font2x2_table[] =
{
  // @0
  0x0A, 0x0B,
  0x0C, 0x0D,

  // @4
  0x14, 0x15,
  0x16, 0x17,

  0x00 // end of array
};"
    ));
    assert!(out.contains(
        "sFONT_AA font2x2 = {
  font2x2_table,
  2, // font width
  2 // font height
};"
    ));
    assert!(out.contains("typedef struct _tFont_AA"));
    Ok(())
}

#[test]
fn font_dimension_mismatch() -> anyhow::Result<()> {
    let strip = alpha_strip(&[&[0; 5], &[0; 5]]);
    let bmp = Argb8888Bitmap::from_bytes(&strip)?;

    for cell in [FontCell::new(2, 2), FontCell::new(5, 3), FontCell::new(0, 2)] {
        assert!(matches!(
            FontExtractor::new(&bmp, cell),
            Err(Error::FontDimensions { image: (5, 2), .. })
        ));
    }
    assert!(FontExtractor::new(&bmp, FontCell::new(5, 2)).is_ok());
    Ok(())
}

#[test]
fn font_needs_complete_pixel_array() -> anyhow::Result<()> {
    // claims 2x2 but only holds 3 pixels
    let bmp = Argb8888Bitmap::from_bytes(&bmp_bytes(2, 2, 0, &[0; 12]))?;
    assert!(matches!(
        FontExtractor::new(&bmp, FontCell::new(1, 2)),
        Err(Error::Truncated {
            needed: 16,
            actual: 12
        })
    ));
    Ok(())
}

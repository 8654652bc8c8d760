#![allow(dead_code)]

pub const HEADERS_LEN: usize = 70;

// byte offsets of a few header fields
pub const FILE_SIZE: usize = 2;
pub const PIXEL_ARRAY_OFFSET: usize = 10;
pub const HEADER_SIZE: usize = 14;
pub const BITS_PER_PIXEL: usize = 28;

/// Builds an ARGB8888 bitmap file with `gap` zero bytes between the DIB header and `pixels`
pub fn bmp_bytes(width: u32, height: u32, gap: usize, pixels: &[u8]) -> Vec<u8> {
    let offset = HEADERS_LEN + gap;
    let file_size = offset + pixels.len();
    let mut out = Vec::with_capacity(file_size);
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&u32::try_from(file_size).unwrap().to_le_bytes());
    out.extend_from_slice(&[0; 4]);
    out.extend_from_slice(&u32::try_from(offset).unwrap().to_le_bytes());

    out.extend_from_slice(&56u32.to_le_bytes());
    out.extend_from_slice(&width.to_le_bytes());
    out.extend_from_slice(&height.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&32u16.to_le_bytes());
    // BI_BITFIELDS
    out.extend_from_slice(&3u32.to_le_bytes());
    out.extend_from_slice(&u32::try_from(pixels.len()).unwrap().to_le_bytes());
    out.extend_from_slice(&2835u32.to_le_bytes());
    out.extend_from_slice(&2835u32.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    // red, green, blue and alpha masks
    for mask in [0x00FF_0000u32, 0x0000_FF00, 0x0000_00FF, 0xFF00_0000] {
        out.extend_from_slice(&mask.to_le_bytes());
    }
    assert_eq!(out.len(), HEADERS_LEN);

    out.resize(offset, 0);
    out.extend_from_slice(pixels);
    out
}

/// A 1x1 bitmap whose file size field claims 71 bytes
pub fn one_pixel() -> Vec<u8> {
    let mut bmp = bmp_bytes(1, 1, 0, &[0x11, 0x22, 0x33, 0x44]);
    set_u32(&mut bmp, FILE_SIZE, 71);
    bmp
}

/// Builds a glyph strip from per-pixel alpha values, rows given top to bottom
pub fn alpha_strip(rows: &[&[u8]]) -> Vec<u8> {
    let width = u32::try_from(rows[0].len()).unwrap();
    let height = u32::try_from(rows.len()).unwrap();
    let pixels: Vec<u8> = rows
        .iter()
        .rev()
        .flat_map(|row| row.iter().flat_map(|&a| [0x01, 0x02, 0x03, a]))
        .collect();
    bmp_bytes(width, height, 0, &pixels)
}

pub fn set_u32(bmp: &mut [u8], at: usize, value: u32) {
    bmp[at..at + 4].copy_from_slice(&value.to_le_bytes());
}

pub fn set_u16(bmp: &mut [u8], at: usize, value: u16) {
    bmp[at..at + 2].copy_from_slice(&value.to_le_bytes());
}

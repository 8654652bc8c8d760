use nom::{
    bytes::complete::take,
    number::complete::{le_u16, le_u32},
    IResult,
};

/// Bitmap file header, the first 14 bytes of every BMP file
#[derive(Default, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct FileHeader {
    /// Magic bytes, `BM` for Windows bitmaps
    pub signature: [u8; 2],
    /// Size of the whole file in bytes
    pub file_size: u32,
    /// Application specific, usually zero
    pub reserved: [u8; 4],
    /// Offset of the pixel array from the start of the file
    pub pixel_array_offset: u32,
}

/// DIB header of type `BITMAPV3INFOHEADER` (56 bytes)
///
/// ## Note
///
/// Only [`DibHeader::header_size`] and [`DibHeader::bits_per_pixel`] are validated, the
/// remaining fields are copied to the output untouched.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct DibHeader {
    /// Size of this header, 56 for `BITMAPV3INFOHEADER`
    pub header_size: u32,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Number of color planes
    pub color_planes: u16,
    /// Bit depth, 32 for ARGB8888
    pub bits_per_pixel: u16,
    /// Compression method
    pub compression: u32,
    /// Size of the raw bitmap data
    pub image_size: u32,
    /// Horizontal resolution (pixels per meter)
    pub x_ppm: u32,
    /// Vertical resolution (pixels per meter)
    pub y_ppm: u32,
    /// Number of colors in the palette
    pub color_table: u32,
    /// Number of important colors
    pub important_colors: u32,
    /// Units of the resolution fields
    pub resolution_units: u16,
    /// Padding
    pub padding: u16,
    /// Direction in which the bits fill the bitmap
    pub fill_direction: u16,
    /// Halftoning algorithm
    pub halftone_algo: u16,
    /// First halftoning parameter
    pub halftone_param1: u32,
    /// Second halftoning parameter
    pub halftone_param2: u32,
}

fn byte_array<const N: usize>(input: &[u8]) -> IResult<&[u8], [u8; N]> {
    let (input, bytes) = take(N)(input)?;
    let mut out = [0; N];
    out.copy_from_slice(bytes);
    Ok((input, out))
}

pub(crate) fn parse_file_header(input: &[u8]) -> IResult<&[u8], FileHeader> {
    let (input, signature) = byte_array::<2>(input)?;
    let (input, file_size) = le_u32(input)?;
    let (input, reserved) = byte_array::<4>(input)?;
    let (input, pixel_array_offset) = le_u32(input)?;
    Ok((
        input,
        FileHeader {
            signature,
            file_size,
            reserved,
            pixel_array_offset,
        },
    ))
}

pub(crate) fn parse_dib_header(input: &[u8]) -> IResult<&[u8], DibHeader> {
    let (input, header_size) = le_u32(input)?;
    let (input, width) = le_u32(input)?;
    let (input, height) = le_u32(input)?;
    let (input, color_planes) = le_u16(input)?;
    let (input, bits_per_pixel) = le_u16(input)?;
    let (input, compression) = le_u32(input)?;
    let (input, image_size) = le_u32(input)?;
    let (input, x_ppm) = le_u32(input)?;
    let (input, y_ppm) = le_u32(input)?;
    let (input, color_table) = le_u32(input)?;
    let (input, important_colors) = le_u32(input)?;
    let (input, resolution_units) = le_u16(input)?;
    let (input, padding) = le_u16(input)?;
    let (input, fill_direction) = le_u16(input)?;
    let (input, halftone_algo) = le_u16(input)?;
    let (input, halftone_param1) = le_u32(input)?;
    let (input, halftone_param2) = le_u32(input)?;
    Ok((
        input,
        DibHeader {
            header_size,
            width,
            height,
            color_planes,
            bits_per_pixel,
            compression,
            image_size,
            x_ppm,
            y_ppm,
            color_table,
            important_colors,
            resolution_units,
            padding,
            fill_direction,
            halftone_algo,
            halftone_param1,
            halftone_param2,
        },
    ))
}

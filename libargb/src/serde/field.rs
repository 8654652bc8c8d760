use std::ops::Range;

use strum::{EnumCount, EnumIter, IntoStaticStr};

/// The fields of the bitmap file header and the `BITMAPV3INFOHEADER`, in file order
///
/// The string representation of each variant is the label written next to the field in the
/// generated C array.
#[derive(Debug, IntoStaticStr, EnumIter, EnumCount, PartialEq, Eq, Copy, Clone)]
pub enum HeaderField {
    /// Always `BM`
    #[strum(serialize = "SIGNATURE")]
    Signature,
    /// Size of the whole file in bytes
    #[strum(serialize = "FILE SIZE")]
    FileSize,
    /// Application specific
    #[strum(serialize = "RESERVED")]
    Reserved,
    /// Offset of the first pixel from the start of the file
    #[strum(serialize = "PIXEL ARRAY OFFSET")]
    PixelArrayOffset,
    /// Size of the DIB header
    #[strum(serialize = "HEADER SIZE")]
    HeaderSize,
    /// Image width in pixels
    #[strum(serialize = "IMAGE WIDTH")]
    Width,
    /// Image height in pixels
    #[strum(serialize = "IMAGE HEIGHT")]
    Height,
    /// Number of color planes (1)
    #[strum(serialize = "NUMBER OF COLOR PLANES")]
    ColorPlanes,
    /// Bit depth
    #[strum(serialize = "NUMBER OF BITS PER PIXEL")]
    BitsPerPixel,
    /// Compression method
    #[strum(serialize = "COMPRESSION METHOD")]
    Compression,
    /// Size of the raw bitmap data
    #[strum(serialize = "SIZE OF THE RAW BITMAP DATA")]
    ImageSize,
    /// Horizontal resolution in pixels per meter
    #[strum(serialize = "HORIZONTAL RESOLUTION OF THE IMAGE")]
    XPixelsPerMeter,
    /// Vertical resolution in pixels per meter
    #[strum(serialize = "VERTICAL RESOLUTION OF THE IMAGE")]
    YPixelsPerMeter,
    /// Number of palette entries
    #[strum(serialize = "NUMBER OF COLORS IN THE COLOR PALETTE")]
    ColorTable,
    /// Number of important colors
    #[strum(serialize = "NUMBER OF IMPORTANT COLORS USED")]
    ImportantColors,
    /// Resolution units
    #[strum(serialize = "UNITS FOR THE HORIZONTAL AND VERTICAL RESOLUTIONS")]
    ResolutionUnits,
    /// Padding
    #[strum(serialize = "PADDING")]
    Padding,
    /// Fill direction
    #[strum(serialize = "DIRECTION IN WHICH THE BITS FILL THE BITMAP")]
    FillDirection,
    /// Halftoning algorithm
    #[strum(serialize = "HALFTONING ALGORITHM")]
    HalftoneAlgorithm,
    /// First halftoning parameter
    #[strum(serialize = "HALFTONING PARAMETER 1")]
    HalftoneParam1,
    /// Second halftoning parameter
    #[strum(serialize = "HALFTONING PARAMETER 2")]
    HalftoneParam2,
}

impl HeaderField {
    /// Label used in generated comments
    #[must_use]
    pub fn label(self) -> &'static str {
        Into::<&'static str>::into(self)
    }

    /// Number of bytes the field occupies
    #[must_use]
    pub const fn width(self) -> usize {
        match self {
            Self::Signature
            | Self::ColorPlanes
            | Self::BitsPerPixel
            | Self::ResolutionUnits
            | Self::Padding
            | Self::FillDirection
            | Self::HalftoneAlgorithm => 2,
            _ => 4,
        }
    }

    /// Byte range of the field, counted from the start of the file
    #[must_use]
    pub const fn range(self) -> Range<usize> {
        let start = match self {
            Self::Signature => 0,
            Self::FileSize => 2,
            Self::Reserved => 6,
            Self::PixelArrayOffset => 10,
            Self::HeaderSize => 14,
            Self::Width => 18,
            Self::Height => 22,
            Self::ColorPlanes => 26,
            Self::BitsPerPixel => 28,
            Self::Compression => 30,
            Self::ImageSize => 34,
            Self::XPixelsPerMeter => 38,
            Self::YPixelsPerMeter => 42,
            Self::ColorTable => 46,
            Self::ImportantColors => 50,
            Self::ResolutionUnits => 54,
            Self::Padding => 56,
            Self::FillDirection => 58,
            Self::HalftoneAlgorithm => 60,
            Self::HalftoneParam1 => 62,
            Self::HalftoneParam2 => 66,
        };
        start..start + self.width()
    }

    /// Whether the field belongs to the 14 byte file header (as opposed to the DIB header)
    #[must_use]
    pub const fn in_file_header(self) -> bool {
        matches!(
            self,
            Self::Signature | Self::FileSize | Self::Reserved | Self::PixelArrayOffset
        )
    }
}

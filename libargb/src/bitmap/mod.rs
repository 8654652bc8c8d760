#![allow(clippy::module_name_repetitions)]

pub(crate) mod aligned;
pub(crate) mod header;

/// Module containing the raw header types
///
/// Header fields are exposed as they were read from the file
pub mod raw {
    pub use crate::bitmap::header::{DibHeader, FileHeader};
}

use crate::{error::Error, BITS_PER_PIXEL, DIB_HEADER_LEN, HEADERS_LEN, SIGNATURE};
use aligned::AlignedBitmap;
use header::{parse_dib_header, parse_file_header, DibHeader, FileHeader};
use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};
use tracing::{debug, trace, warn};

/// The parts of a bitmap that change when its pixel array is moved
///
/// Implemented by [`Argb8888Bitmap`] (the file as read) and [`AlignedBitmap`] (the file with the
/// pixel array moved to a 4-byte boundary). Everything else is shared with [`Self::source`].
pub trait ArrayLayout {
    /// The decoded bitmap this layout is based on
    fn source(&self) -> &Argb8888Bitmap;
    /// Value of the file size field
    fn file_size(&self) -> u32;
    /// Value of the pixel array offset field
    fn pixel_array_offset(&self) -> u32;
    /// Bytes between the end of the DIB header and the pixel array
    fn gap(&self) -> &[u8];
}

/// A decoded ARGB8888 bitmap
///
/// Holds both headers, the gap between the DIB header and the pixel array, and the pixel array
/// itself. The pixel rows are stored bottom to top, each pixel as blue, green, red, alpha.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argb8888Bitmap {
    file_header: FileHeader,
    dib_header: DibHeader,
    gap: Vec<u8>,
    pixel_array: Vec<u8>,
}

impl Argb8888Bitmap {
    /// Decodes a bitmap from the complete content of a BMP file
    ///
    /// # Errors
    ///
    /// Checks are made in this order, the first failing one is returned:
    /// - Signature is not `BM` ([`Error::InvalidSignature`]), checked on whatever bytes are present
    /// - Input shorter than both headers ([`Error::Truncated`])
    /// - DIB header is not a `BITMAPV3INFOHEADER` ([`Error::UnexpectedHeaderSize`])
    /// - Bit depth is not 32 ([`Error::UnsupportedBitsPerPixel`])
    /// - Pixel array offset points into the headers ([`Error::InvalidPixelArrayOffset`])
    /// - Input shorter than the pixel array offset or the file size ([`Error::Truncated`])
    pub fn from_bytes(data: &[u8]) -> Result<Self, Error> {
        if let Some(signature) = data.first_chunk::<2>() {
            if *signature != SIGNATURE {
                return Err(Error::InvalidSignature {
                    expected: SIGNATURE,
                    actual: *signature,
                });
            }
        }

        let headers_len = HEADERS_LEN as usize;
        if data.len() < headers_len {
            return Err(Error::Truncated {
                needed: headers_len,
                actual: data.len(),
            });
        }
        let truncated = |_: nom::Err<nom::error::Error<&[u8]>>| Error::Truncated {
            needed: headers_len,
            actual: data.len(),
        };
        let (rest, file_header) = parse_file_header(data).map_err(truncated)?;
        let (_, dib_header) = parse_dib_header(rest).map_err(truncated)?;
        trace!("File header: {:?}", &file_header);
        trace!("DIB header: {:?}", &dib_header);

        if dib_header.header_size != DIB_HEADER_LEN {
            return Err(Error::UnexpectedHeaderSize {
                expected: DIB_HEADER_LEN,
                actual: dib_header.header_size,
            });
        }
        if dib_header.bits_per_pixel != BITS_PER_PIXEL {
            return Err(Error::UnsupportedBitsPerPixel {
                expected: BITS_PER_PIXEL,
                actual: dib_header.bits_per_pixel,
            });
        }

        let offset = file_header.pixel_array_offset;
        if offset < HEADERS_LEN {
            return Err(Error::InvalidPixelArrayOffset {
                minimum: HEADERS_LEN,
                actual: offset,
            });
        }
        let offset = offset as usize;
        let file_size = file_header.file_size as usize;
        let needed = offset.max(file_size);
        if data.len() < needed {
            return Err(Error::Truncated {
                needed,
                actual: data.len(),
            });
        }
        if data.len() > file_size {
            warn!(
                "File size field ({file_size}) is smaller than the data ({}), keeping the trailing bytes",
                data.len()
            );
        }

        let gap = data[headers_len..offset].to_vec();
        let pixel_array = data[offset..].to_vec();
        debug!(
            "Decoded {}x{} bitmap: gap {}, pixel array {}",
            dib_header.width,
            dib_header.height,
            gap.len(),
            pixel_array.len()
        );

        Ok(Self {
            file_header,
            dib_header,
            gap,
            pixel_array,
        })
    }

    /// Reads a bitmap until the end of the provided reader
    ///
    /// # Errors
    ///
    /// This function errors if reading fails, see [`Self::from_bytes`] for the remaining errors
    pub fn from_reader(mut r: impl Read) -> Result<Self, Error> {
        let mut data = Vec::new();
        let read = r.read_to_end(&mut data)?;
        debug!("read {read} bytes");
        Self::from_bytes(&data)
    }

    /// Reads a bitmap from the provided file path
    ///
    /// # Errors
    ///
    /// This function errors if the file cannot be opened or read, see [`Self::from_bytes`] for the
    /// remaining errors
    pub fn from_file<P: AsRef<Path>>(filename: P) -> Result<Self, Error> {
        let file = File::open(filename)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Returns a view of the bitmap whose pixel array starts on a 4-byte boundary
    ///
    /// # Errors
    ///
    /// Errors if the adjusted file size or pixel array offset no longer fits into 4 bytes
    pub fn aligned(&self) -> Result<AlignedBitmap<'_>, Error> {
        AlignedBitmap::new(self)
    }

    /// Returns a reference to the [`FileHeader`]
    #[must_use]
    pub const fn file_header(&self) -> &FileHeader {
        &self.file_header
    }

    /// Returns a reference to the [`DibHeader`]
    #[must_use]
    pub const fn dib_header(&self) -> &DibHeader {
        &self.dib_header
    }

    /// Returns the pixel array, rows bottom to top
    #[must_use]
    pub fn pixel_array(&self) -> &[u8] {
        &self.pixel_array
    }

    /// Returns the image width
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.dib_header.width
    }

    /// Returns the image height
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.dib_header.height
    }
}

impl ArrayLayout for Argb8888Bitmap {
    fn source(&self) -> &Argb8888Bitmap {
        self
    }

    fn file_size(&self) -> u32 {
        self.file_header.file_size
    }

    fn pixel_array_offset(&self) -> u32 {
        self.file_header.pixel_array_offset
    }

    fn gap(&self) -> &[u8] {
        &self.gap
    }
}

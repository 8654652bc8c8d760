use tracing::debug;

use super::{ArrayLayout, Argb8888Bitmap};
use crate::{error::Error, serde};

// the pixel array must start on a multiple of this
const ALIGNMENT: u32 = 4;

/// An [`Argb8888Bitmap`] with extra zero bytes added to its gap, so that the pixel array starts at
/// a 4-byte boundary
///
/// For ARGB8888 the default pixel array offset is 70. Even if the start of the array holding the
/// complete file is 4-byte aligned in memory, the pixel array is not. Adding 2 bytes to the gap
/// fixes this. In general `delta` is the distance to the next multiple of 4 (equal to
/// `pixel_array_offset % 4` whenever the offset is even), and the file size and pixel array offset
/// fields are increased by the same amount.
///
/// For odd offsets this differs from padding by `pixel_array_offset % 4` (offset 71 gets 1 byte
/// instead of 3), which would leave the pixel array unaligned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedBitmap<'a> {
    source: &'a Argb8888Bitmap,
    delta: u32,
    gap: Vec<u8>,
    file_size: u32,
    pixel_array_offset: u32,
}

impl<'a> AlignedBitmap<'a> {
    pub(crate) fn new(source: &'a Argb8888Bitmap) -> Result<Self, Error> {
        let offset = source.pixel_array_offset();
        let delta = (ALIGNMENT - offset % ALIGNMENT) % ALIGNMENT;

        let mut gap = source.gap().to_vec();
        gap.resize(gap.len() + delta as usize, 0);

        let pixel_array_offset = fit_u32(u64::from(offset) + u64::from(delta))?;
        let file_size = fit_u32(u64::from(source.file_size()) + u64::from(delta))?;
        debug!("Aligning pixel array: offset {offset} -> {pixel_array_offset} (delta {delta})");

        Ok(Self {
            source,
            delta,
            gap,
            file_size,
            pixel_array_offset,
        })
    }

    /// Number of zero bytes added to the gap
    #[must_use]
    pub const fn delta(&self) -> u32 {
        self.delta
    }
}

fn fit_u32(value: u64) -> Result<u32, Error> {
    u32::try_from(value).map_err(|_| {
        Error::from(serde::error::Error::Overflow {
            value,
            bytes: std::mem::size_of::<u32>(),
        })
    })
}

impl ArrayLayout for AlignedBitmap<'_> {
    fn source(&self) -> &Argb8888Bitmap {
        self.source
    }

    fn file_size(&self) -> u32 {
        self.file_size
    }

    fn pixel_array_offset(&self) -> u32 {
        self.pixel_array_offset
    }

    fn gap(&self) -> &[u8] {
        &self.gap
    }
}

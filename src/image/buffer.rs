use super::traits::{ImageView, ImageViewMut};
use crate::error::{EngineError, Result};
use crate::partition::Partition;
use crate::worker::RowBand;

/// Owned interleaved 8-bit image, `width * height * channels` bytes,
/// sample `(pixel, c)` at `pixel * channels + c`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    channels: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap decoded bytes, checking the length against the dimensions.
    pub fn new(width: usize, height: usize, channels: usize, data: Vec<u8>) -> Result<Self> {
        let expected = byte_len(width, height, channels)?;
        if data.len() != expected {
            return Err(EngineError::InvalidBuffer {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Every pixel set to `pixel` (whose length fixes the channel count).
    pub fn filled(width: usize, height: usize, pixel: &[u8]) -> Result<Self> {
        if pixel.is_empty() {
            return Err(EngineError::config("fill pixel has no channels"));
        }
        byte_len(width, height, pixel.len())?;
        Self::new(width, height, pixel.len(), pixel.repeat(width * height))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Hand out one mutable band per partition. The partitions must be the
    /// ordered contiguous cover produced by [`crate::partition::plan`] for
    /// this buffer; anything else is a planner bug and panics.
    pub fn split_bands(&mut self, partitions: &[Partition]) -> Vec<RowBand<'_>> {
        split_bands(&mut self.data, self.width, self.channels, partitions)
    }
}

/// `width * height * channels`, or `InvalidConfiguration` when it overflows.
pub(crate) fn byte_len(width: usize, height: usize, channels: usize) -> Result<usize> {
    width
        .checked_mul(height)
        .and_then(|px| px.checked_mul(channels))
        .ok_or_else(|| EngineError::config(format!("{width}x{height}x{channels} overflows")))
}

/// Band splitting over a raw byte slice, see [`PixelBuffer::split_bands`].
pub fn split_bands<'a>(
    mut rest: &'a mut [u8],
    width: usize,
    channels: usize,
    partitions: &[Partition],
) -> Vec<RowBand<'a>> {
    let row_len = width * channels;
    let mut next_row = 0;
    let mut bands = Vec::with_capacity(partitions.len());
    for part in partitions {
        assert_eq!(
            part.start_row, next_row,
            "partition {} starts at row {}, expected {}",
            part.index, part.start_row, next_row
        );
        assert_eq!(part.start_pixel_index, part.start_row * width);
        let len = part.row_count() * row_len;
        assert!(
            len <= rest.len(),
            "partition {} (rows {:?}) runs past the end of the buffer",
            part.index,
            part.rows()
        );
        let (head, tail) = std::mem::take(&mut rest).split_at_mut(len);
        rest = tail;
        next_row = part.end_row;
        bands.push(RowBand::new(*part, head, width, channels));
    }
    bands
}

impl ImageView for PixelBuffer {
    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn channels(&self) -> usize {
        self.channels
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let len = self.row_len();
        &self.data[y * len..(y + 1) * len]
    }
}

impl ImageViewMut for PixelBuffer {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let len = self.row_len();
        &mut self.data[y * len..(y + 1) * len]
    }
}

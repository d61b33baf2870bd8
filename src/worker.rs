//! Per-partition grayscale transform.
//!
//! Each worker owns a [`RowBand`]: the partition it was planned for plus the
//! mutable bytes of exactly those rows. Because bands come from splitting the
//! buffer with `split_at_mut`, no two workers can reach the same byte.
//!
//! Luma is the truncating mean of the first three channels, accumulated in
//! `u16` (3 * 255 fits). Any further channel (alpha) is left untouched. The
//! transform is idempotent: after one pass r == g == b, whose mean is itself.
use crate::image::{ImageView, ImageViewMut};
use crate::partition::Partition;
use log::debug;

/// Mutable view of the rows one worker is responsible for.
#[derive(Debug)]
pub struct RowBand<'a> {
    partition: Partition,
    data: &'a mut [u8],
    width: usize,
    channels: usize,
}

impl<'a> RowBand<'a> {
    pub fn new(partition: Partition, data: &'a mut [u8], width: usize, channels: usize) -> Self {
        assert_eq!(
            data.len(),
            partition.row_count() * width * channels,
            "band for partition {} does not match rows {:?}",
            partition.index,
            partition.rows()
        );
        Self {
            partition,
            data,
            width,
            channels,
        }
    }

    #[inline]
    pub fn partition(&self) -> Partition {
        self.partition
    }
}

impl ImageView for RowBand<'_> {
    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.partition.row_count()
    }
    #[inline]
    fn channels(&self) -> usize {
        self.channels
    }
    /// Row `y` relative to the band's first row.
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let len = self.row_len();
        &self.data[y * len..(y + 1) * len]
    }
}

impl ImageViewMut for RowBand<'_> {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let len = self.row_len();
        &mut self.data[y * len..(y + 1) * len]
    }
}

#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((r as u16 + g as u16 + b as u16) / 3) as u8
}

/// Grayscale a contiguous run of interleaved pixels in place.
pub fn grayscale_in_place(pixels: &mut [u8], channels: usize) {
    assert!(channels >= 3, "grayscale needs at least 3 channels, got {channels}");
    for px in pixels.chunks_exact_mut(channels) {
        let y = luma(px[0], px[1], px[2]);
        px[0] = y;
        px[1] = y;
        px[2] = y;
    }
}

/// Transform every pixel of the band, rows in increasing order.
pub fn run(mut band: RowBand<'_>) {
    let part = band.partition();
    if part.is_empty() {
        debug!("worker {}: empty partition, nothing to do", part.index);
        return;
    }
    let channels = band.channels;
    band.for_each_row_mut(|_, row| grayscale_in_place(row, channels));
    debug!(
        "worker {}: rows {:?} done ({} pixels from index {})",
        part.index,
        part.rows(),
        part.row_count() * band.width,
        part.start_pixel_index
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::plan;

    fn band_over(data: &mut [u8], width: usize, channels: usize) -> RowBand<'_> {
        let height = data.len() / (width * channels);
        let part = plan(height, 1, width).unwrap()[0];
        RowBand::new(part, data, width, channels)
    }

    #[test]
    fn luma_truncates() {
        assert_eq!(luma(10, 20, 33), 21);
        assert_eq!(luma(10, 20, 34), 21);
        assert_eq!(luma(10, 20, 35), 21);
        assert_eq!(luma(10, 20, 36), 22);
        assert_eq!(luma(255, 255, 255), 255);
        assert_eq!(luma(0, 0, 2), 0);
    }

    #[test]
    fn run_writes_luma_to_rgb_only() {
        let mut data = vec![10, 20, 33, 200, 90, 60, 30, 7];
        run(band_over(&mut data, 2, 4));
        assert_eq!(data, vec![21, 21, 21, 200, 60, 60, 60, 7]);
    }

    #[test]
    fn run_is_idempotent() {
        let mut once: Vec<u8> = (0..96u32).map(|i| (i * 37 % 256) as u8).collect();
        run(band_over(&mut once, 4, 3));
        let mut twice = once.clone();
        run(band_over(&mut twice, 4, 3));
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_band_is_a_no_op() {
        let mut data: Vec<u8> = Vec::new();
        let part = plan(0, 3, 5).unwrap()[2];
        run(RowBand::new(part, &mut data, 5, 3));
        assert!(data.is_empty());
    }

    #[test]
    #[should_panic(expected = "does not match rows")]
    fn mismatched_band_panics() {
        let mut data = vec![0u8; 5];
        let part = plan(2, 1, 1).unwrap()[0];
        RowBand::new(part, &mut data, 1, 3);
    }
}

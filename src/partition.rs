//! Static row partitioning of an image across a fixed number of workers.
//!
//! Worker `t` of `n` owns rows `[floor(h*t/n), floor(h*(t+1)/n))`. The floor
//! formula alone produces a contiguous, ordered, disjoint cover of `[0, h)`
//! whose band heights differ by at most one row; no remainder special case is
//! needed. When `n > h` the excess bands are empty.
use crate::error::{EngineError, Result};
use serde::Serialize;
use std::ops::Range;

/// Half-open row range owned by exactly one worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Partition {
    pub index: usize,
    pub start_row: usize,
    pub end_row: usize,
    /// Flat pixel index of the first pixel in `start_row`.
    pub start_pixel_index: usize,
}

impl Partition {
    #[inline]
    pub fn rows(&self) -> Range<usize> {
        self.start_row..self.end_row
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.end_row - self.start_row
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start_row == self.end_row
    }
}

/// Split `[0, height)` into `worker_count` contiguous bands.
pub fn plan(height: usize, worker_count: usize, width: usize) -> Result<Vec<Partition>> {
    if worker_count == 0 {
        return Err(EngineError::config("worker count must be at least 1"));
    }
    let boundary = |t: usize| ((height as u128 * t as u128) / worker_count as u128) as usize;
    Ok((0..worker_count)
        .map(|t| {
            let start_row = boundary(t);
            Partition {
                index: t,
                start_row,
                end_row: boundary(t + 1),
                start_pixel_index: start_row * width,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_cover(parts: &[Partition], height: usize) {
        let mut next = 0;
        for (i, p) in parts.iter().enumerate() {
            assert_eq!(p.index, i);
            assert_eq!(p.start_row, next, "gap or overlap before partition {i}");
            assert!(p.end_row >= p.start_row);
            next = p.end_row;
        }
        assert_eq!(next, height);
    }

    #[test]
    fn partitions_cover_height_for_many_shapes() {
        for height in 0..40 {
            for workers in 1..12 {
                let parts = plan(height, workers, 7).unwrap();
                assert_eq!(parts.len(), workers);
                assert_cover(&parts, height);
                let min = parts.iter().map(Partition::row_count).min().unwrap();
                let max = parts.iter().map(Partition::row_count).max().unwrap();
                assert!(max - min <= 1, "h={height} n={workers}: {min}..{max}");
            }
        }
    }

    #[test]
    fn excess_workers_get_empty_partitions() {
        for height in 0..6 {
            for workers in (height + 1)..10 {
                let parts = plan(height, workers, 3).unwrap();
                let empty = parts.iter().filter(|p| p.is_empty()).count();
                assert!(empty >= workers - height);
            }
        }
    }

    #[test]
    fn single_row_five_workers() {
        let parts = plan(1, 5, 4).unwrap();
        assert_eq!(parts.iter().filter(|p| p.is_empty()).count(), 4);
        let full = parts.iter().find(|p| !p.is_empty()).unwrap();
        assert_eq!(full.rows(), 0..1);
        assert_eq!(full.start_pixel_index, 0);
    }

    #[test]
    fn start_pixel_index_tracks_rows() {
        let parts = plan(10, 3, 8).unwrap();
        let starts: Vec<_> = parts.iter().map(|p| p.start_row).collect();
        assert_eq!(starts, vec![0, 3, 6]);
        assert_eq!(parts[2].start_pixel_index, 48);
        assert_eq!(parts[2].row_count(), 4);
    }

    #[test]
    fn zero_workers_is_rejected() {
        let err = plan(10, 0, 10).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfiguration(_)));
    }
}

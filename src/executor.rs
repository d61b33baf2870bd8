//! Fork/join driver: plan partitions, launch one worker per partition,
//! join them all, report the elapsed wall time.
//!
//! The join is the only synchronization point. Workers never share a byte:
//! each one receives the `&mut` slice of its own rows, so the buffer needs no
//! lock. The call returns only after every worker finished, so callers never
//! observe a partially transformed buffer.
use crate::error::{EngineError, Result};
use crate::image::buffer::{byte_len, split_bands};
use crate::image::{ImageView, PixelBuffer};
use crate::partition::{self, Partition};
use crate::worker::{self, RowBand};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::panic;
use std::thread;
use std::time::{Duration, Instant};

/// How workers are materialized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// One named OS thread per partition (scoped threads).
    #[default]
    Threads,
    /// A dedicated rayon pool with exactly `worker_count` threads.
    /// Requires the `parallel` feature.
    Rayon,
}

#[derive(Clone, Debug)]
pub struct ExecutionReport {
    /// Launch of the first worker to join of the last one.
    pub elapsed: Duration,
    pub partitions: Vec<Partition>,
    pub backend: Backend,
}

impl ExecutionReport {
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

#[derive(Clone, Debug)]
pub struct ParallelExecutor {
    worker_count: usize,
    backend: Backend,
}

impl ParallelExecutor {
    pub fn new(worker_count: usize) -> Self {
        Self {
            worker_count,
            backend: Backend::default(),
        }
    }

    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Grayscale `buffer` in place.
    pub fn execute(&self, buffer: &mut PixelBuffer) -> Result<ExecutionReport> {
        let (width, height, channels) = (buffer.width(), buffer.height(), buffer.channels());
        self.execute_raw(buffer.as_bytes_mut(), width, height, channels)
    }

    /// Grayscale a raw interleaved buffer of `width * height * channels` bytes.
    pub fn execute_raw(
        &self,
        bytes: &mut [u8],
        width: usize,
        height: usize,
        channels: usize,
    ) -> Result<ExecutionReport> {
        if channels < 3 {
            return Err(EngineError::config(format!(
                "grayscale needs at least 3 channels, image has {channels}"
            )));
        }
        let expected = byte_len(width, height, channels)?;
        if bytes.len() != expected {
            return Err(EngineError::InvalidBuffer {
                expected,
                actual: bytes.len(),
            });
        }

        let partitions = partition::plan(height, self.worker_count, width)?;
        debug!(
            "planned {} partitions over {} rows: {:?}",
            partitions.len(),
            height,
            partitions.iter().map(Partition::rows).collect::<Vec<_>>()
        );
        let bands = split_bands(bytes, width, channels, &partitions);

        let start = Instant::now();
        match self.backend {
            Backend::Threads => run_threads(bands)?,
            Backend::Rayon => run_rayon(bands, self.worker_count)?,
        }
        let elapsed = start.elapsed();

        info!(
            "{} workers ({:?}) finished {}x{} in {:.3} ms",
            self.worker_count,
            self.backend,
            width,
            height,
            elapsed.as_secs_f64() * 1000.0
        );
        Ok(ExecutionReport {
            elapsed,
            partitions,
            backend: self.backend,
        })
    }
}

/// Grayscale `buffer` with `worker_count` scoped OS threads.
pub fn execute(buffer: &mut PixelBuffer, worker_count: usize) -> Result<ExecutionReport> {
    ParallelExecutor::new(worker_count).execute(buffer)
}

fn run_threads(bands: Vec<RowBand<'_>>) -> Result<()> {
    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(bands.len());
        for band in bands {
            let index = band.partition().index;
            let handle = thread::Builder::new()
                .name(format!("gray-worker-{index}"))
                .spawn_scoped(scope, move || worker::run(band))
                .map_err(|source| EngineError::WorkerLaunchFailure {
                    worker: index,
                    source,
                })?;
            handles.push(handle);
        }
        for handle in handles {
            if let Err(payload) = handle.join() {
                panic::resume_unwind(payload);
            }
        }
        Ok(())
    })
}

#[cfg(feature = "parallel")]
fn run_rayon(bands: Vec<RowBand<'_>>, worker_count: usize) -> Result<()> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(worker_count)
        .thread_name(|i| format!("gray-pool-{i}"))
        .build()
        .map_err(pool_launch_failure)?;
    pool.scope(|scope| {
        for band in bands {
            scope.spawn(move |_| worker::run(band));
        }
    });
    Ok(())
}

#[cfg(feature = "parallel")]
fn pool_launch_failure(err: rayon::ThreadPoolBuildError) -> EngineError {
    EngineError::WorkerLaunchFailure {
        worker: 0,
        source: std::io::Error::other(err.to_string()),
    }
}

#[cfg(not(feature = "parallel"))]
fn run_rayon(_bands: Vec<RowBand<'_>>, _worker_count: usize) -> Result<()> {
    Err(EngineError::config(
        "rayon backend requested but the `parallel` feature is disabled",
    ))
}

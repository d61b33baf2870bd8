#![doc = include_str!("../README.md")]

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod executor;
pub mod image;
pub mod partition;
pub mod pipeline;
pub mod worker;

pub use crate::error::EngineError;
pub use crate::executor::{execute, Backend, ExecutionReport, ParallelExecutor};
pub use crate::image::PixelBuffer;
pub use crate::partition::{plan, Partition};

/// Small prelude for quick experiments.
///
/// ```no_run
/// use gray_engine::prelude::*;
///
/// # fn main() -> Result<(), EngineError> {
/// let mut img = PixelBuffer::filled(640, 480, &[90, 60, 30])?;
/// let report = ParallelExecutor::new(4).execute(&mut img)?;
/// println!("{} partitions in {:.3} ms", report.partitions.len(), report.elapsed_ms());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{ImageView, PixelBuffer};
    pub use crate::{EngineError, ParallelExecutor, Partition};
}

//! Serializable reports produced by a conversion run.

pub mod run;
pub mod timing;

pub use run::{InputDescriptor, RunReport};
pub use timing::{StageTiming, TimingBreakdown};

pub mod runtime;

pub use runtime::{load_config, RuntimeConfig, USAGE};

use crate::error::{EngineError, Result};
use crate::executor::Backend;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const USAGE: &str = "Usage: gray_engine <input> <output> <workers> | gray_engine <config.json>";

#[derive(Clone, Debug, Deserialize)]
pub struct RuntimeConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Kept signed; non-positive values are rejected by `worker_count`.
    pub workers: i64,
    #[serde(default)]
    pub backend: Backend,
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

impl RuntimeConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>, workers: i64) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            workers,
            backend: Backend::default(),
            report_json: None,
        }
    }

    /// Validated worker count; zero or negative is a configuration error.
    pub fn worker_count(&self) -> Result<usize> {
        if self.workers <= 0 {
            return Err(EngineError::config(format!(
                "worker count must be positive, got {}",
                self.workers
            )));
        }
        usize::try_from(self.workers)
            .map_err(|_| EngineError::config(format!("worker count {} is too large", self.workers)))
    }

    /// Build from process arguments (without the program name): either
    /// `<input> <output> <workers>` or a single `<config.json>`.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        match args {
            [config] => load_config(Path::new(config.as_ref())),
            [input, output, workers] => {
                let workers = workers.as_ref().trim().parse::<i64>().map_err(|e| {
                    EngineError::config(format!("bad worker count {:?}: {e}", workers.as_ref()))
                })?;
                Ok(Self::new(input.as_ref(), output.as_ref(), workers))
            }
            _ => Err(EngineError::config(USAGE)),
        }
    }
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig> {
    let contents = fs::read_to_string(path).map_err(|e| EngineError::io(path, e))?;
    serde_json::from_str(&contents).map_err(|e| {
        EngineError::config(format!("failed to parse config {}: {e}", path.display()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_args() {
        let cfg = RuntimeConfig::from_args(&["in.jpg", "out.ppm", "6"]).unwrap();
        assert_eq!(cfg.input, PathBuf::from("in.jpg"));
        assert_eq!(cfg.output, PathBuf::from("out.ppm"));
        assert_eq!(cfg.worker_count().unwrap(), 6);
        assert_eq!(cfg.backend, Backend::Threads);
    }

    #[test]
    fn non_positive_workers_rejected() {
        for w in ["0", "-3"] {
            let cfg = RuntimeConfig::from_args(&["a", "b", w]).unwrap();
            assert!(matches!(
                cfg.worker_count(),
                Err(EngineError::InvalidConfiguration(_))
            ));
        }
    }

    #[test]
    fn garbage_workers_rejected() {
        let err = RuntimeConfig::from_args(&["a", "b", "many"]).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfiguration(_)));
    }

    #[test]
    fn wrong_arity_reports_usage() {
        let err = RuntimeConfig::from_args(&["a", "b"]).unwrap_err();
        assert!(err.to_string().contains("Usage"));
    }

    #[test]
    fn json_config_with_defaults() {
        let cfg: RuntimeConfig =
            serde_json::from_str(r#"{"input": "a.png", "output": "b.ppm", "workers": 3}"#).unwrap();
        assert_eq!(cfg.worker_count().unwrap(), 3);
        assert_eq!(cfg.backend, Backend::Threads);
        assert!(cfg.report_json.is_none());

        let cfg: RuntimeConfig = serde_json::from_str(
            r#"{"input": "a.png", "output": "b.ppm", "workers": 2,
                "backend": "rayon", "report_json": "r.json"}"#,
        )
        .unwrap();
        assert_eq!(cfg.backend, Backend::Rayon);
        assert_eq!(cfg.report_json, Some(PathBuf::from("r.json")));
    }
}

//! End-to-end conversion: decode → parallel grayscale → `P6` output.
//!
//! Worker count and backend are validated before the input is even opened.
//! If the transform fails nothing is written to the output path.
use crate::config::RuntimeConfig;
use crate::diagnostics::{InputDescriptor, RunReport, TimingBreakdown};
use crate::error::Result;
use crate::executor::ParallelExecutor;
use crate::image::io::{load_color_image, save_ppm, write_json_file};
use crate::image::ppm::encode_ppm;
use crate::image::{ImageView, PixelBuffer};
use log::info;
use std::time::Instant;

/// Grayscale `buffer` in place and return the serialized pixel map.
pub fn grayscale_to_ppm(buffer: &mut PixelBuffer, worker_count: usize) -> Result<Vec<u8>> {
    ParallelExecutor::new(worker_count).execute(buffer)?;
    Ok(encode_ppm(buffer))
}

/// Run the whole conversion described by `config`.
pub fn convert_file(config: &RuntimeConfig) -> Result<RunReport> {
    let executor = ParallelExecutor::new(config.worker_count()?).with_backend(config.backend);
    let mut timing = TimingBreakdown::default();

    let start = Instant::now();
    let mut buffer = load_color_image(&config.input)?;
    timing.push("decode", start.elapsed());
    info!(
        "{}: {}x{} pixels, {} channels per pixel",
        config.input.display(),
        buffer.width(),
        buffer.height(),
        buffer.channels()
    );
    info!(
        "grayscaling with {} workers ({:?} backend)",
        executor.worker_count(),
        executor.backend()
    );

    let start = Instant::now();
    let exec = executor.execute(&mut buffer)?;
    timing.push("grayscale", start.elapsed());

    let start = Instant::now();
    save_ppm(&buffer, &config.output)?;
    timing.push("encode", start.elapsed());
    info!(
        "wrote {} ({} bytes of pixel data)",
        config.output.display(),
        buffer.as_bytes().len()
    );

    let report = RunReport {
        input: InputDescriptor {
            path: Some(config.input.clone()),
            width: buffer.width(),
            height: buffer.height(),
            channels: buffer.channels(),
        },
        output: Some(config.output.clone()),
        worker_count: executor.worker_count(),
        backend: exec.backend,
        transform_ms: exec.elapsed_ms(),
        partitions: exec.partitions,
        timing,
    };
    if let Some(path) = &config.report_json {
        write_json_file(path, &report)?;
        info!("wrote report {}", path.display());
    }
    Ok(report)
}

use gray_engine::config::RuntimeConfig;
use gray_engine::pipeline::convert_file;
use std::env;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), gray_engine::EngineError> {
    let args: Vec<String> = env::args().skip(1).collect();
    let config = RuntimeConfig::from_args(&args)?;
    let report = convert_file(&config)?;
    println!(
        "Grayscaled {}x{} image with {} workers in {:.6} seconds",
        report.input.width,
        report.input.height,
        report.worker_count,
        report.transform_ms / 1000.0
    );
    Ok(())
}

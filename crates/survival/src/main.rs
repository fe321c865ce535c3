//! `survival` binary: runs the pipeline on `$DATA_DIR` (default `src/data`).
//!
//! Logs go to stderr through `tracing`; set `RUST_LOG` to change the level.
//! Exits with status 1 on any error.

use std::process::ExitCode;

use survival::{run, RunConfig};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let outcome = RunConfig::from_env().and_then(|config| run(&config));
    match outcome {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("ERROR: {err}");
            ExitCode::FAILURE
        }
    }
}

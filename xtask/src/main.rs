use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

mod commands;

fn main() -> ExitCode {
    // stdout carries the generated table; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    commands::run()
}

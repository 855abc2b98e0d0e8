use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ideas::cli::{self, Cli};

fn main() {
    // Quiet by default; RUST_LOG=debug shows file activity and rejected input
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    cli::run(cli);
}

//! flow-right-sample
//!
//! Prints the last of the given words in uppercase.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin flow-right-sample
//! # THREE
//!
//! RUST_LOG=flow_right_sample=debug cargo run --bin flow-right-sample -- alpha beta
//! # BETA
//! ```

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use flow_right_sample::{exit_status, run};

#[derive(Parser)]
#[command(name = "flow-right-sample")]
#[command(about = "Prints the last of the given words in uppercase")]
struct Cli {
    /// Words to process (defaults to `one two three`)
    words: Vec<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flow_right_sample=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let outcome = run(cli.words, &mut std::io::stdout().lock());

    ExitCode::from(exit_status(&outcome))
}

//! FieldVolt CLI entry point

use std::process::ExitCode;

use clap::Parser;

use fieldvolt::cli::{self, Cli};

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    cli::run(cli).await
}

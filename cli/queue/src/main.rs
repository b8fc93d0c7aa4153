//! qm-queue CLI
//!
//! SQS send/receive/purge for quartermaster.

use clap::Parser;

mod args;
mod run;

use args::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // Logging goes to stderr so stdout is clean for tool output
    qm_cli_common::init_logging(args.log_level)?;

    run::execute(args).await
}

//! qm-bucket CLI
//!
//! S3 object listing for quartermaster.

use clap::Parser;

mod args;
mod run;

use args::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // Logging goes to stderr so stdout is clean for the listing
    qm_cli_common::init_logging(args.log_level)?;

    run::execute(args).await
}

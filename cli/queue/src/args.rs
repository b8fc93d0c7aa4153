//! CLI argument definitions for qm-queue.

use clap::{Parser, Subcommand};
use qm_cli_common::LogLevel;

/// Send, receive, and purge messages on an SQS queue.
///
/// The queue is addressed by exactly one of `--queue-url`, `--queue-name`,
/// or `--from-tf`, checked in that order.
///
/// ## Examples
///
/// Send one message plus a batch of five:
///   qm-queue --queue-name orders send --message "restock" --batch 5
///
/// Receive and delete up to ten messages:
///   qm-queue --queue-url https://sqs.../orders recv --max 10 --delete
///
/// Purge a LocalStack queue:
///   qm-queue --queue-name orders --endpoint http://localhost:4566 purge
#[derive(Parser, Debug)]
#[command(name = "qm-queue")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Queue URL
    #[arg(long, env = "QM_QUEUE_URL")]
    pub queue_url: Option<String>,

    /// Queue name, mapped to a URL via a lookup call
    #[arg(long)]
    pub queue_name: Option<String>,

    /// Read the queue URL from `terraform output -raw queue_url`
    #[arg(long)]
    pub from_tf: bool,

    /// AWS region
    #[arg(long, env = "AWS_REGION")]
    pub region: Option<String>,

    /// Custom SQS endpoint URL (for LocalStack)
    #[arg(long, env = "QM_SQS_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Command,
}

/// Queue operation to perform.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Send one message, optionally followed by a batch
    Send {
        /// Message text
        #[arg(long, default_value = "hello from qm-queue")]
        message: String,

        /// Environment tag attached as a message attribute
        #[arg(long, default_value = "dev")]
        env: String,

        /// Also send N extra messages as one batch call (max 10)
        #[arg(long, default_value = "0")]
        batch: usize,
    },

    /// Receive messages until a maximum count or an empty poll
    Recv {
        /// Max messages to fetch
        #[arg(long, default_value = "5")]
        max: usize,

        /// Visibility timeout in seconds
        #[arg(long, default_value = "30")]
        vtimeout: i32,

        /// Delete each message after printing it
        #[arg(long)]
        delete: bool,
    },

    /// Purge all messages from the queue
    Purge,
}

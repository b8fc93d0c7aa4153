//! CLI argument definitions for qm-bucket.

use clap::Parser;
use qm_cli_common::LogLevel;

/// List objects in an S3 bucket.
///
/// Prints every key under the optional prefix, then a summary block with
/// object count, total size, and the newest and largest objects seen.
///
/// ## Examples
///
/// Basic usage:
///   qm-bucket --bucket my-bucket
///
/// Scoped to a prefix, against LocalStack:
///   qm-bucket --bucket my-bucket --prefix data/ --endpoint http://localhost:4566
///
/// Bucket name from the provisioning output:
///   qm-bucket --from-tf
#[derive(Parser, Debug)]
#[command(name = "qm-bucket")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// S3 bucket name
    #[arg(short, long, env = "QM_BUCKET")]
    pub bucket: Option<String>,

    /// Optional key prefix
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// AWS region
    #[arg(long, env = "AWS_REGION")]
    pub region: Option<String>,

    /// Read the bucket name from `terraform output -raw bucket_name`
    #[arg(long)]
    pub from_tf: bool,

    /// Custom S3 endpoint URL (for LocalStack)
    #[arg(long, env = "QM_S3_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

//! Main execution logic for the qm-bucket CLI.

use anyhow::Result;
use futures::{StreamExt, pin_mut};
use qm_bucket::{BucketConfig, ListingSummary, create_s3_client, list_objects};
use qm_cli_common::format_bytes;
use qm_error::{ErrorTier, QmError, classify_error};
use qm_provision::{ProvisionedOutputs, TerraformOutputs};
use tracing::debug;

use crate::args::Cli;

/// Execute the listing with the provided arguments.
pub async fn execute(args: Cli) -> Result<()> {
    let Some(bucket) = resolve_bucket(&args, &TerraformOutputs::new())? else {
        println!("Provide --bucket <name> (or use --from-tf).");
        return Ok(());
    };

    // An empty prefix filters nothing; treat it as absent
    let prefix = args.prefix.as_deref().filter(|p| !p.is_empty());

    let mut config = BucketConfig::new(&bucket);

    if let Some(prefix) = prefix {
        config = config.with_prefix(prefix);
    }

    if let Some(region) = &args.region {
        config = config.with_region(region);
    }

    if let Some(endpoint) = &args.endpoint {
        config = config.with_endpoint(endpoint);
    }

    let client = create_s3_client(&config).await?;

    println!("Bucket: {bucket}");
    if let Some(prefix) = prefix {
        println!("Prefix: {prefix}");
    }

    let mut summary = ListingSummary::new();
    let stream = list_objects(&client, &config.bucket, config.prefix.as_deref());
    pin_mut!(stream);

    while let Some(entry) = stream.next().await {
        match entry {
            Ok(entry) => {
                println!("{}", entry.key);
                summary.observe(&entry);
            }
            // A failed listing ends the command without a summary block
            Err(e) => return render_failure(e),
        }
    }

    if summary.is_empty() {
        println!("(no objects found)");
    }

    println!();
    for line in summary.report_lines() {
        println!("{line}");
    }

    debug!(
        objects = summary.count,
        total = %format_bytes(summary.total_bytes),
        "Listing complete"
    );

    Ok(())
}

/// Resolve the bucket name: explicit flag first, then the provisioning
/// output `bucket_name` when `--from-tf` is set.
///
/// `Ok(None)` means neither source was supplied; the caller prints a
/// usage hint. A provisioning failure is fatal.
fn resolve_bucket(args: &Cli, outputs: &impl ProvisionedOutputs) -> Result<Option<String>> {
    if let Some(bucket) = &args.bucket {
        return Ok(Some(bucket.clone()));
    }

    if args.from_tf {
        return Ok(Some(outputs.output("bucket_name")?));
    }

    Ok(None)
}

/// Render an operational failure as an `[ERROR]` line on stdout and
/// swallow it; fatal errors propagate to the process exit.
fn render_failure(error: QmError) -> Result<()> {
    match classify_error(&error) {
        ErrorTier::Operational => {
            println!("[ERROR] {error}");
            Ok(())
        }
        ErrorTier::Fatal => Err(error.into()),
    }
}

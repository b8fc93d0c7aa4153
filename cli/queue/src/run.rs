//! Main execution logic for the qm-queue CLI.

use anyhow::Result;
use chrono::Utc;
use qm_error::{ErrorTier, QmError, classify_error};
use qm_provision::TerraformOutputs;
use qm_queue::{
    OutboundPayload, QueueConfig, QueueLocator, ReceiveEvent, ReceiveOptions, SqsQueue,
    batch_bodies, create_sqs_client, receive_up_to, resolve_queue_url,
};
use tracing::debug;

use crate::args::{Cli, Command};

/// Execute the requested queue operation.
///
/// Resolution failures propagate out of here and end the process with a
/// non-zero exit; operation failures are rendered as `[ERROR]` lines and
/// swallowed.
pub async fn execute(args: Cli) -> Result<()> {
    let mut config = QueueConfig::new();

    if let Some(region) = &args.region {
        config = config.with_region(region);
    }

    if let Some(endpoint) = &args.endpoint {
        config = config.with_endpoint(endpoint);
    }

    let client = create_sqs_client(&config).await?;

    let locator = QueueLocator {
        queue_url: args.queue_url.clone(),
        queue_name: args.queue_name.clone(),
        from_tf: args.from_tf,
    };

    let queue_url = resolve_queue_url(&locator, &TerraformOutputs::new(), &client).await?;

    match args.command {
        Command::Send {
            message,
            env,
            batch,
        } => {
            let queue = SqsQueue::new(client, queue_url);
            run_send(&queue, &message, &env, batch)
                .await
                .or_else(|e| render_failure("send", "", e))
        }
        Command::Recv {
            max,
            vtimeout,
            delete,
        } => {
            let queue = SqsQueue::new(client, queue_url).with_visibility_timeout(vtimeout);
            run_recv(&queue, max, delete)
                .await
                .or_else(|e| render_failure("receive", "", e))
        }
        Command::Purge => {
            let queue = SqsQueue::new(client, queue_url);
            run_purge(&queue)
                .await
                .or_else(|e| render_failure("purge", " (note: only once per 60s)", e))
        }
    }
}

async fn run_send(
    queue: &SqsQueue,
    message: &str,
    env: &str,
    batch: usize,
) -> qm_error::Result<()> {
    let payload = OutboundPayload::new(message, Utc::now().timestamp());
    let body = queue.send(&payload, env).await?;
    println!("Sent: {body}");

    if batch > 0 {
        let bodies = batch_bodies(message, batch, Utc::now().timestamp())?;
        let outcome = queue.send_batch(bodies).await?;
        println!("Batch sent: {} / {}", outcome.delivered, outcome.attempted);
    }

    Ok(())
}

async fn run_recv(queue: &SqsQueue, max: usize, delete: bool) -> qm_error::Result<()> {
    let options = ReceiveOptions {
        max,
        delete_after_read: delete,
    };

    let total = receive_up_to(queue, &options, |event| match event {
        ReceiveEvent::Message(body) => println!("\nReceived: {body}"),
        ReceiveEvent::Deleted => println!("  -> deleted"),
        ReceiveEvent::Retained => {
            println!("  -> not deleted (will reappear after visibility timeout)")
        }
        ReceiveEvent::EmptyPoll => println!("(no messages)"),
    })
    .await?;

    debug!(total, "Receive loop finished");
    Ok(())
}

async fn run_purge(queue: &SqsQueue) -> qm_error::Result<()> {
    queue.purge().await?;
    println!("Purge requested (may take up to 60s; allowed once per 60s).");
    Ok(())
}

/// Render an operational failure as an `[ERROR]` line on stdout and
/// swallow it; fatal errors propagate to the process exit.
fn render_failure(operation: &str, suffix: &str, error: QmError) -> Result<()> {
    match classify_error(&error) {
        ErrorTier::Operational => {
            println!("[ERROR] {operation}: {error}{suffix}");
            Ok(())
        }
        ErrorTier::Fatal => Err(error.into()),
    }
}

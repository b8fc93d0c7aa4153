//! Queue URL resolution.
//!
//! A queue can be addressed three ways on the command line; resolution
//! tries them in fixed priority order and fails fatally when none is
//! supplied, before any queue operation runs.

use async_trait::async_trait;
use aws_sdk_sqs::Client;
use qm_error::{QmError, QueueError, Result};
use qm_provision::ProvisionedOutputs;
use tracing::debug;

/// Where the queue URL may come from, as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct QueueLocator {
    /// Explicit queue URL
    pub queue_url: Option<String>,

    /// Queue name, mapped to a URL via a lookup call
    pub queue_name: Option<String>,

    /// Read the URL from the provisioning output `queue_url`
    pub from_tf: bool,
}

/// Maps a queue name to its URL.
#[async_trait]
pub trait QueueLookup {
    /// Return the URL of the queue named `name`.
    async fn queue_url_for(&self, name: &str) -> Result<String>;
}

#[async_trait]
impl QueueLookup for Client {
    async fn queue_url_for(&self, name: &str) -> Result<String> {
        let resp = self
            .get_queue_url()
            .queue_name(name)
            .send()
            .await
            .map_err(|e| QueueError::Lookup(format!("get_queue_url: {e}")))?;

        resp.queue_url
            .ok_or_else(|| QueueError::Lookup(format!("no URL returned for queue '{name}'")).into())
    }
}

/// Resolve the queue URL from exactly one source.
///
/// Priority: explicit URL, then the `queue_url` provisioning output, then
/// a name lookup. When the URL is explicit no lookup call is made.
pub async fn resolve_queue_url(
    locator: &QueueLocator,
    outputs: &impl ProvisionedOutputs,
    lookup: &impl QueueLookup,
) -> Result<String> {
    if let Some(url) = &locator.queue_url {
        debug!(%url, "Using explicit queue URL");
        return Ok(url.clone());
    }

    if locator.from_tf {
        return outputs.output("queue_url");
    }

    if let Some(name) = &locator.queue_name {
        debug!(%name, "Looking up queue URL by name");
        return lookup.queue_url_for(name).await;
    }

    Err(QmError::Config(
        "Provide --queue-url, --queue-name, or --from-tf.".to_string(),
    ))
}

//! SQS-backed queue operations.

use async_trait::async_trait;
use aws_sdk_sqs::Client;
use aws_sdk_sqs::types::{MessageAttributeValue, SendMessageBatchRequestEntry};
use qm_error::{QueueError, Result};
use tracing::debug;

use crate::message::{BatchOutcome, InboundMessage, OutboundPayload};
use crate::receive::MessageSource;

/// Value of the `source` message attribute stamped on single sends.
pub const SOURCE_TAG: &str = "qm-queue";

/// A resolved queue plus the client to operate on it.
pub struct SqsQueue {
    client: Client,
    queue_url: String,
    wait_time_seconds: i32,
    visibility_timeout: i32,
}

impl SqsQueue {
    /// Create queue operations for a resolved queue URL.
    ///
    /// Defaults: 10-second long-poll wait, 30-second visibility timeout.
    pub fn new(client: Client, queue_url: impl Into<String>) -> Self {
        Self {
            client,
            queue_url: queue_url.into(),
            wait_time_seconds: 10,
            visibility_timeout: 30,
        }
    }

    /// Set the long-poll wait time (clamped to the 0-20 second API range).
    pub fn with_wait_time(mut self, seconds: i32) -> Self {
        self.wait_time_seconds = seconds.clamp(0, 20);
        self
    }

    /// Set the visibility timeout applied to received messages.
    pub fn with_visibility_timeout(mut self, seconds: i32) -> Self {
        self.visibility_timeout = seconds;
        self
    }

    /// The queue URL these operations are bound to.
    pub fn queue_url(&self) -> &str {
        &self.queue_url
    }

    /// Send one message tagged with `env` and `source` string attributes.
    ///
    /// Returns the JSON body that was sent, for confirmation output.
    pub async fn send(&self, payload: &OutboundPayload, env: &str) -> Result<String> {
        let body = payload.to_json()?;

        let env_attr = string_attribute(env)?;
        let source_attr = string_attribute(SOURCE_TAG)?;

        self.client
            .send_message()
            .queue_url(&self.queue_url)
            .message_body(&body)
            .message_attributes("env", env_attr)
            .message_attributes("source", source_attr)
            .send()
            .await
            .map_err(|e| QueueError::Send(format!("{e}")))?;

        debug!(bytes = body.len(), "Sent message");
        Ok(body)
    }

    /// Send pre-built bodies as one batch call.
    ///
    /// Entries get locally unique ids `m0..`. The outcome carries the
    /// service's per-entry success count next to the attempted count; a
    /// partially failed batch is not an error.
    pub async fn send_batch(&self, bodies: Vec<String>) -> Result<BatchOutcome> {
        let attempted = bodies.len();
        if attempted == 0 {
            return Ok(BatchOutcome {
                delivered: 0,
                attempted: 0,
            });
        }

        let mut entries = Vec::with_capacity(attempted);
        for (i, body) in bodies.into_iter().enumerate() {
            let entry = SendMessageBatchRequestEntry::builder()
                .id(format!("m{i}"))
                .message_body(body)
                .build()
                .map_err(|e| QueueError::Send(format!("invalid batch entry: {e}")))?;
            entries.push(entry);
        }

        let resp = self
            .client
            .send_message_batch()
            .queue_url(&self.queue_url)
            .set_entries(Some(entries))
            .send()
            .await
            .map_err(|e| QueueError::Send(format!("{e}")))?;

        let delivered = resp.successful().len();
        debug!(delivered, attempted, "Sent message batch");

        Ok(BatchOutcome {
            delivered,
            attempted,
        })
    }

    /// Request a purge of the whole queue.
    ///
    /// The service completes the purge asynchronously (up to 60 seconds)
    /// and allows only one purge per queue per 60 seconds.
    pub async fn purge(&self) -> Result<()> {
        self.client
            .purge_queue()
            .queue_url(&self.queue_url)
            .send()
            .await
            .map_err(|e| QueueError::Purge(format!("{e}")))?;

        debug!("Purge requested");
        Ok(())
    }
}

#[async_trait]
impl MessageSource for SqsQueue {
    async fn poll(&self, max_messages: i32) -> Result<Vec<InboundMessage>> {
        let resp = self
            .client
            .receive_message()
            .queue_url(&self.queue_url)
            .max_number_of_messages(max_messages)
            .wait_time_seconds(self.wait_time_seconds)
            .visibility_timeout(self.visibility_timeout)
            .send()
            .await
            .map_err(|e| QueueError::Receive(format!("{e}")))?;

        let messages = resp.messages.unwrap_or_default();
        debug!(count = messages.len(), "Received messages");

        Ok(messages
            .into_iter()
            .map(|m| InboundMessage {
                body: m.body.unwrap_or_default(),
                receipt_handle: m.receipt_handle.unwrap_or_default(),
            })
            .collect())
    }

    async fn delete(&self, receipt_handle: &str) -> Result<()> {
        self.client
            .delete_message()
            .queue_url(&self.queue_url)
            .receipt_handle(receipt_handle)
            .send()
            .await
            .map_err(|e| QueueError::Delete(format!("{e}")))?;

        Ok(())
    }
}

fn string_attribute(value: &str) -> Result<MessageAttributeValue> {
    MessageAttributeValue::builder()
        .data_type("String")
        .string_value(value)
        .build()
        .map_err(|e| QueueError::Send(format!("invalid message attribute: {e}")).into())
}

//! Message payloads for the send path and records for the receive path.

use qm_error::{QueueError, Result};
use serde::{Deserialize, Serialize};

/// Maximum entries per batch send, imposed by the SQS API.
pub const MAX_BATCH: usize = 10;

/// The JSON body of an outbound message: `{"msg":<text>,"ts":<unix seconds>}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutboundPayload {
    /// Message text
    pub msg: String,

    /// Unix timestamp in seconds, taken when the payload was built
    pub ts: i64,
}

impl OutboundPayload {
    /// Create a payload from message text and a unix timestamp.
    pub fn new(msg: impl Into<String>, ts: i64) -> Self {
        Self {
            msg: msg.into(),
            ts,
        }
    }

    /// Serialize to the JSON wire body.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| QueueError::Serialize(format!("{e}")).into())
    }
}

/// Build the bodies for a batch send: `<text>-0` through `<text>-(n-1)`,
/// all stamped with the same timestamp, clamped to [`MAX_BATCH`] entries.
pub fn batch_bodies(message: &str, requested: usize, ts: i64) -> Result<Vec<String>> {
    (0..requested.min(MAX_BATCH))
        .map(|i| OutboundPayload::new(format!("{message}-{i}"), ts).to_json())
        .collect()
}

/// Result of a batch send: how many entries the service accepted out of
/// how many were attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Entries the service reported as successful
    pub delivered: usize,

    /// Entries submitted in the batch call
    pub attempted: usize,
}

/// A received message.
///
/// The receipt handle is the one-time token for deleting this specific
/// delivery; it is useless once the message is deleted or its visibility
/// timeout lapses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    /// Message body as delivered
    pub body: String,

    /// Deletion capability for this delivery
    pub receipt_handle: String,
}

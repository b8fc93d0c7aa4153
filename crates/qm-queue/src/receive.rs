//! Bounded receive loop.
//!
//! The loop polls until a caller-specified total has been received or a
//! poll comes back empty, whichever happens first. It is written against
//! the [`MessageSource`] trait so the quota math, the stop-on-empty rule,
//! and the delete discipline can be tested with a scripted fake.

use async_trait::async_trait;
use qm_error::Result;

use crate::message::{InboundMessage, MAX_BATCH};

/// A source of messages that can be polled and acknowledged.
///
/// Implemented by [`crate::SqsQueue`] for the real service.
#[async_trait]
pub trait MessageSource {
    /// Poll for up to `max_messages` messages. An empty result means the
    /// source had nothing to deliver within its wait window.
    async fn poll(&self, max_messages: i32) -> Result<Vec<InboundMessage>>;

    /// Delete one delivery by its receipt handle.
    async fn delete(&self, receipt_handle: &str) -> Result<()>;
}

/// Caller-facing knobs for the receive loop.
#[derive(Debug, Clone, Copy)]
pub struct ReceiveOptions {
    /// Stop after this many messages in total
    pub max: usize,

    /// Delete each message after printing it
    pub delete_after_read: bool,
}

/// What happened during the loop, in order, for the command layer to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReceiveEvent {
    /// A message arrived; carries its body
    Message(String),

    /// The preceding message was deleted
    Deleted,

    /// The preceding message was left on the queue and will reappear
    /// after its visibility timeout
    Retained,

    /// A poll returned nothing; the loop stops here
    EmptyPoll,
}

/// Drive the receive loop, emitting a [`ReceiveEvent`] for each observable
/// step as it happens.
///
/// Each poll asks for `min(10, remaining quota)` messages. The loop ends on
/// the first empty poll even when fewer than `max` messages have arrived,
/// and never polls at all when `max` is zero. With `delete_after_read` set,
/// exactly one delete is issued per message, with that message's own
/// receipt handle. Returns the total number of messages received.
pub async fn receive_up_to<S, F>(
    source: &S,
    options: &ReceiveOptions,
    mut on_event: F,
) -> Result<usize>
where
    S: MessageSource,
    F: FnMut(ReceiveEvent),
{
    let mut total = 0usize;

    while total < options.max {
        let batch_size = (options.max - total).min(MAX_BATCH) as i32;
        let messages = source.poll(batch_size).await?;

        if messages.is_empty() {
            on_event(ReceiveEvent::EmptyPoll);
            break;
        }

        for message in messages {
            total += 1;
            on_event(ReceiveEvent::Message(message.body));

            if options.delete_after_read {
                source.delete(&message.receipt_handle).await?;
                on_event(ReceiveEvent::Deleted);
            } else {
                on_event(ReceiveEvent::Retained);
            }
        }
    }

    Ok(total)
}

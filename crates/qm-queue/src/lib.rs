//! qm-queue - SQS send/receive/purge for quartermaster.
//!
//! This crate provides the queue half of the toolkit: resolving a queue URL
//! from one of several sources, sending single and batched messages, a
//! bounded receive loop with long polling, and purge.
//!
//! The pieces a command needs to exercise without AWS are behind seams:
//! queue-name lookup is the [`QueueLookup`] trait, and the receive loop is
//! driven through the [`MessageSource`] trait, both implemented by
//! [`SqsQueue`] for the real service.
//!
//! # Example
//!
//! ```ignore
//! use qm_queue::{OutboundPayload, QueueConfig, SqsQueue, create_sqs_client};
//!
//! let client = create_sqs_client(&QueueConfig::new()).await?;
//! let queue = SqsQueue::new(client, queue_url);
//!
//! let body = queue.send(&OutboundPayload::new("hello", ts), "dev").await?;
//! println!("Sent: {body}");
//! ```

pub mod client;
pub mod message;
pub mod receive;
pub mod resolve;
pub mod sqs;

pub use client::{QueueConfig, create_sqs_client};
pub use message::{BatchOutcome, InboundMessage, MAX_BATCH, OutboundPayload, batch_bodies};
pub use receive::{MessageSource, ReceiveEvent, ReceiveOptions, receive_up_to};
pub use resolve::{QueueLocator, QueueLookup, resolve_queue_url};
pub use sqs::SqsQueue;

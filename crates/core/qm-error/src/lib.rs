//! Error types and failure-tier classification for quartermaster.
//!
//! This crate provides:
//! - [`QmError`] - Top-level error enum shared by both tools
//! - Domain-specific errors ([`StorageError`], [`QueueError`], [`ProvisionError`])
//! - [`ErrorTier`] distinguishing fatal configuration failures from
//!   operational failures that are reported and swallowed
//! - [`classify_error`] mapping an error to its tier

use thiserror::Error;

/// Top-level error type for quartermaster.
#[derive(Error, Debug)]
pub enum QmError {
    /// Object-storage errors (listing)
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Message-queue errors (lookup, send, receive, delete, purge)
    #[error("Queue error: {0}")]
    Queue(#[from] QueueError),

    /// Provisioning-output errors (terraform shell-out)
    #[error("Provisioning error: {0}")]
    Provision(#[from] ProvisionError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic errors (wrapped anyhow)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Object-storage errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// A page of the object listing could not be fetched
    #[error("List failed: {0}")]
    List(String),
}

/// Message-queue errors.
#[derive(Error, Debug)]
pub enum QueueError {
    /// Queue-name-to-URL lookup failed
    #[error("URL lookup failed: {0}")]
    Lookup(String),

    /// A send or batch-send call failed
    #[error("Send failed: {0}")]
    Send(String),

    /// A receive poll failed
    #[error("Receive failed: {0}")]
    Receive(String),

    /// Deleting a received message failed
    #[error("Delete failed: {0}")]
    Delete(String),

    /// Purging the queue failed
    #[error("Purge failed: {0}")]
    Purge(String),

    /// Message payload serialization failed
    #[error("Serialization failed: {0}")]
    Serialize(String),
}

/// Provisioning-output errors.
#[derive(Error, Debug)]
pub enum ProvisionError {
    /// The provisioning tool could not be executed at all
    #[error("Tool could not be run: {0}")]
    Spawn(String),

    /// The provisioning tool ran but did not yield the requested output
    #[error("Output lookup failed: {0}")]
    Lookup(String),
}

/// Failure tier for reporting decisions.
///
/// Fatal errors abort the invocation before any API work proceeds;
/// operational errors are rendered as a single `[ERROR]` line and the
/// enclosing operation stops gracefully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorTier {
    /// No endpoint identifier resolvable, provisioning failure, or
    /// name-lookup failure - exit with a message, non-zero status
    Fatal,

    /// A storage/queue call failed after the endpoint was resolved -
    /// report on stdout, keep exit status zero
    Operational,
}

/// Classifies an error to determine how the command layer reports it.
pub fn classify_error(error: &QmError) -> ErrorTier {
    match error {
        QmError::Storage(e) => classify_storage_error(e),
        QmError::Queue(e) => classify_queue_error(e),
        QmError::Provision(_) => ErrorTier::Fatal,
        QmError::Config(_) => ErrorTier::Fatal,
        QmError::Other(_) => ErrorTier::Operational,
    }
}

fn classify_storage_error(error: &StorageError) -> ErrorTier {
    match error {
        StorageError::List(_) => ErrorTier::Operational,
    }
}

fn classify_queue_error(error: &QueueError) -> ErrorTier {
    match error {
        QueueError::Lookup(_) => ErrorTier::Fatal,
        QueueError::Send(_) => ErrorTier::Operational,
        QueueError::Receive(_) => ErrorTier::Operational,
        QueueError::Delete(_) => ErrorTier::Operational,
        QueueError::Purge(_) => ErrorTier::Operational,
        QueueError::Serialize(_) => ErrorTier::Operational,
    }
}

/// Result type alias using QmError.
pub type Result<T> = std::result::Result<T, QmError>;

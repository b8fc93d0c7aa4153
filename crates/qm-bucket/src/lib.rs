//! qm-bucket - S3 object listing for quartermaster.
//!
//! This crate provides the listing half of the toolkit: walking a bucket
//! (optionally under a prefix) page by page and folding the results into
//! a small summary of what was seen.
//!
//! # Example
//!
//! ```ignore
//! use futures::{pin_mut, StreamExt};
//! use qm_bucket::{BucketConfig, ListingSummary, create_s3_client, list_objects};
//!
//! let config = BucketConfig::new("my-bucket").with_prefix("data/");
//! let client = create_s3_client(&config).await?;
//!
//! let mut summary = ListingSummary::default();
//! let stream = list_objects(&client, &config.bucket, config.prefix.as_deref());
//! pin_mut!(stream);
//!
//! while let Some(entry) = stream.next().await {
//!     let entry = entry?;
//!     println!("{}", entry.key);
//!     summary.observe(&entry);
//! }
//! ```

pub mod client;
pub mod list;
pub mod summary;

pub use client::{BucketConfig, create_s3_client};
pub use list::{ObjectEntry, list_objects};
pub use summary::ListingSummary;

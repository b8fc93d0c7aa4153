//! S3 object listing with pagination support.

use async_stream::try_stream;
use aws_sdk_s3::Client;
use chrono::{DateTime, Utc};
use futures::Stream;
use qm_error::{Result, StorageError};

/// A single object returned by a bucket listing.
#[derive(Debug, Clone)]
pub struct ObjectEntry {
    /// The object key (full path within the bucket)
    pub key: String,

    /// Size of the object in bytes
    pub size: u64,

    /// Last modified timestamp
    pub last_modified: Option<DateTime<Utc>>,
}

/// List objects in an S3 bucket with optional prefix filtering.
///
/// Returns a stream of [`ObjectEntry`] items, handling pagination
/// automatically. Every entry the service returns is yielded, so the
/// number of items seen by the caller matches the bucket's object count
/// under the prefix.
///
/// # Example
///
/// ```ignore
/// use futures::{pin_mut, StreamExt};
///
/// let stream = list_objects(&client, "my-bucket", Some("data/"));
/// pin_mut!(stream);
///
/// while let Some(result) = stream.next().await {
///     let entry = result?;
///     println!("{} ({} bytes)", entry.key, entry.size);
/// }
/// ```
pub fn list_objects<'a>(
    client: &'a Client,
    bucket: &'a str,
    prefix: Option<&'a str>,
) -> impl Stream<Item = Result<ObjectEntry>> + 'a {
    let bucket = bucket.to_string();
    let prefix = prefix.map(|s| s.to_string());

    try_stream! {
        let mut continuation_token: Option<String> = None;

        loop {
            let mut req = client.list_objects_v2().bucket(&bucket);

            if let Some(ref prefix) = prefix {
                req = req.prefix(prefix);
            }

            if let Some(ref token) = continuation_token {
                req = req.continuation_token(token);
            }

            let resp = req.send().await.map_err(|e| {
                StorageError::List(format!("{e}"))
            })?;

            if let Some(contents) = resp.contents {
                for obj in contents {
                    let last_modified = obj.last_modified.and_then(|t| {
                        DateTime::from_timestamp(t.secs(), t.subsec_nanos())
                    });

                    yield ObjectEntry {
                        key: obj.key.unwrap_or_default(),
                        size: obj.size.unwrap_or(0) as u64,
                        last_modified,
                    };
                }
            }

            // Check if there are more results
            if resp.is_truncated == Some(true) {
                continuation_token = resp.next_continuation_token;
                if continuation_token.is_none() {
                    // No more pages
                    break;
                }
            } else {
                break;
            }
        }
    }
}

//! S3 client configuration and creation.

use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;
use qm_error::Result;

/// Configuration for S3 access.
///
/// Credentials come from the default provider chain (environment,
/// profile, instance metadata), same as the rest of the toolkit.
#[derive(Debug, Clone, Default)]
pub struct BucketConfig {
    /// S3 bucket name
    pub bucket: String,

    /// Optional prefix to filter objects
    pub prefix: Option<String>,

    /// AWS region
    pub region: Option<String>,

    /// Custom endpoint URL (for LocalStack)
    pub endpoint: Option<String>,
}

impl BucketConfig {
    /// Create a new BucketConfig with the required bucket name.
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            ..Default::default()
        }
    }

    /// Set the prefix for filtering objects.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Set the AWS region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set a custom endpoint (for LocalStack).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }
}

/// Create an S3 client from configuration.
pub async fn create_s3_client(config: &BucketConfig) -> Result<Client> {
    use aws_config::Region;

    let mut aws_config_loader = aws_config::defaults(BehaviorVersion::latest());

    if let Some(region) = &config.region {
        aws_config_loader = aws_config_loader.region(Region::new(region.clone()));
    }

    if let Some(endpoint) = &config.endpoint {
        aws_config_loader = aws_config_loader.endpoint_url(endpoint);
    }

    let aws_config = aws_config_loader.load().await;

    let s3_config_builder = aws_sdk_s3::config::Builder::from(&aws_config);

    // Path-style access is required when talking to LocalStack
    let s3_config = if config.endpoint.is_some() {
        s3_config_builder.force_path_style(true).build()
    } else {
        s3_config_builder.build()
    };

    Ok(Client::from_conf(s3_config))
}

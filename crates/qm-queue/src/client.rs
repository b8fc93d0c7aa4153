//! SQS client configuration and creation.

use aws_config::BehaviorVersion;
use aws_sdk_sqs::Client;
use qm_error::Result;

/// Configuration for SQS access.
///
/// The queue URL itself is resolved separately (see [`crate::resolve`]);
/// this only covers how the client reaches the service.
#[derive(Debug, Clone, Default)]
pub struct QueueConfig {
    /// AWS region
    pub region: Option<String>,

    /// Custom endpoint URL (for LocalStack)
    pub endpoint: Option<String>,
}

impl QueueConfig {
    /// Create a config that uses the default region and endpoint.
    pub fn new() -> Self {
        Self::default()
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

/// Create an SQS client from configuration.
pub async fn create_sqs_client(config: &QueueConfig) -> Result<Client> {
    use aws_config::Region;

    let mut aws_config_loader = aws_config::defaults(BehaviorVersion::latest());

    if let Some(region) = &config.region {
        aws_config_loader = aws_config_loader.region(Region::new(region.clone()));
    }

    if let Some(endpoint) = &config.endpoint {
        aws_config_loader = aws_config_loader.endpoint_url(endpoint);
    }

    let aws_config = aws_config_loader.load().await;
    Ok(Client::new(&aws_config))
}

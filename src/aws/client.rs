//! AWS client setup and configuration
//!
//! Credentials come from the SDK's standard resolution chain (environment
//! variables, shared credentials file, instance role); nothing is
//! reimplemented here.

use aws_config::{BehaviorVersion, Region};
use aws_sdk_ec2::Client;

/// Interface for the EC2 key pair API across regions
#[derive(Debug, Clone)]
pub struct AwsKeyPairInterface {
    pub(crate) bootstrap_region: String,
}

impl AwsKeyPairInterface {
    /// Create a new interface. `bootstrap_region` is only used to enumerate
    /// the regions the per-key operations then fan out over.
    pub fn new(bootstrap_region: impl Into<String>) -> Self {
        AwsKeyPairInterface {
            bootstrap_region: bootstrap_region.into(),
        }
    }

    /// Build a client scoped to one region from the default credential chain.
    pub(crate) async fn client_for(&self, region: &str) -> Client {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;

        Client::new(&config)
    }
}

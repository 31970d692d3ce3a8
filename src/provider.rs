//! Provider seam between the region iteration and the EC2 API

use async_trait::async_trait;

use crate::aws::Ec2Error;

/// Defines the per-region key pair operations the import and delete flows
/// iterate over. The real implementation wraps the AWS SDK; tests substitute
/// a mock.
#[async_trait]
pub trait KeyPairProvider: Send + Sync {
    /// List every region available to the account.
    async fn list_regions(&self) -> Result<Vec<String>, Ec2Error>;

    /// Register public key material under `key_name` in one region and return
    /// the fingerprint the provider computed for it.
    async fn import_key_pair(
        &self,
        region: &str,
        key_name: &str,
        material: &[u8],
        dry_run: bool,
    ) -> Result<String, Ec2Error>;

    /// Whether a key pair named `key_name` exists in one region. Lookup
    /// failures read as absent.
    async fn key_pair_exists(&self, region: &str, key_name: &str, dry_run: bool) -> bool;

    /// Delete the key pair named `key_name` from one region.
    async fn delete_key_pair(
        &self,
        region: &str,
        key_name: &str,
        dry_run: bool,
    ) -> Result<(), Ec2Error>;
}

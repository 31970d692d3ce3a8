//! EC2 key pair operations
//!
//! One region-scoped client per call; the dry-run flag is passed through to
//! the provider so it can validate permissions without mutating anything.

use async_trait::async_trait;
use aws_sdk_ec2::primitives::Blob;
use log::debug;

use super::client::AwsKeyPairInterface;
use super::types::Ec2Error;
use crate::provider::KeyPairProvider;

#[async_trait]
impl KeyPairProvider for AwsKeyPairInterface {
    async fn list_regions(&self) -> Result<Vec<String>, Ec2Error> {
        self.describe_regions().await
    }

    async fn import_key_pair(
        &self,
        region: &str,
        key_name: &str,
        material: &[u8],
        dry_run: bool,
    ) -> Result<String, Ec2Error> {
        let client = self.client_for(region).await;

        let result = client
            .import_key_pair()
            .key_name(key_name)
            .public_key_material(Blob::new(material))
            .dry_run(dry_run)
            .send()
            .await
            .map_err(Ec2Error::from_sdk)?;

        let fingerprint = result
            .key_fingerprint()
            .ok_or_else(|| {
                Ec2Error::SdkOperationError("response carried no key fingerprint".to_string())
            })?
            .to_string();

        Ok(fingerprint)
    }

    async fn key_pair_exists(&self, region: &str, key_name: &str, dry_run: bool) -> bool {
        let client = self.client_for(region).await;

        match client
            .describe_key_pairs()
            .key_names(key_name)
            .dry_run(dry_run)
            .send()
            .await
        {
            Ok(result) => !result.key_pairs().is_empty(),
            Err(err) => {
                debug!(
                    "DescribeKeyPairs failed in {region}: {}",
                    Ec2Error::from_sdk(err)
                );
                false
            }
        }
    }

    async fn delete_key_pair(
        &self,
        region: &str,
        key_name: &str,
        dry_run: bool,
    ) -> Result<(), Ec2Error> {
        let client = self.client_for(region).await;

        client
            .delete_key_pair()
            .key_name(key_name)
            .dry_run(dry_run)
            .send()
            .await
            .map_err(Ec2Error::from_sdk)?;

        Ok(())
    }
}

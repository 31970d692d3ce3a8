//! Region enumeration

use super::client::AwsKeyPairInterface;
use super::types::Ec2Error;

impl AwsKeyPairInterface {
    /// Enumerate every region visible to the account. Region listing itself
    /// needs an endpoint, so the call goes through the bootstrap region.
    pub async fn describe_regions(&self) -> Result<Vec<String>, Ec2Error> {
        let client = self.client_for(&self.bootstrap_region).await;

        let result = client
            .describe_regions()
            .send()
            .await
            .map_err(Ec2Error::from_sdk)?;

        let regions = result
            .regions()
            .iter()
            .filter_map(|region| region.region_name().map(str::to_string))
            .collect();

        Ok(regions)
    }
}

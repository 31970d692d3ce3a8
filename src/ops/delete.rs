//! Key pair deletion across all regions

use crate::aws::Ec2Error;
use crate::error::{KeymasterError, KeymasterResult};
use crate::logging::log_region_operation;
use crate::provider::KeyPairProvider;
use crate::report::{status_line, KeyPairAction, RegionOutcome, RegionReport};

/// Delete the key pair named `key_name` from every available region,
/// printing one status line per region.
///
/// Each region is checked for the key pair first; when the check finds
/// nothing (or fails), the delete is skipped for that region. Per-region
/// failures are printed and collected; only a failed region listing aborts.
pub async fn delete_key_pair<P>(
    provider: &P,
    key_name: &str,
    dry_run: bool,
) -> KeymasterResult<Vec<RegionReport>>
where
    P: KeyPairProvider + ?Sized,
{
    let regions = provider
        .list_regions()
        .await
        .map_err(|err| KeymasterError::RegionListing(err.to_string()))?;
    log::debug!(
        "Deleting keypair '{key_name}' from {} regions",
        regions.len()
    );

    let mut reports = Vec::with_capacity(regions.len());
    for region in regions {
        if !provider.key_pair_exists(&region, key_name, dry_run).await {
            let outcome = RegionOutcome::DoesNotExist;
            println!(
                "{}",
                status_line(KeyPairAction::Delete, &region, key_name, &outcome)
            );
            reports.push(RegionReport { region, outcome });
            continue;
        }

        let outcome = match provider.delete_key_pair(&region, key_name, dry_run).await {
            Ok(()) => RegionOutcome::Deleted,
            Err(Ec2Error::DryRunOperation) if dry_run => RegionOutcome::DryRunSimulated,
            Err(err) => RegionOutcome::Failed(err.to_string()),
        };

        log_region_operation(
            "delete",
            &region,
            !matches!(outcome, RegionOutcome::Failed(_)),
        );
        println!(
            "{}",
            status_line(KeyPairAction::Delete, &region, key_name, &outcome)
        );
        reports.push(RegionReport { region, outcome });
    }

    Ok(reports)
}

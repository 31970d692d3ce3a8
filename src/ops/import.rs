//! Key pair import across all regions

use std::fs;
use std::path::Path;

use crate::aws::Ec2Error;
use crate::error::{KeymasterError, KeymasterResult};
use crate::logging::log_region_operation;
use crate::provider::KeyPairProvider;
use crate::report::{status_line, KeyPairAction, RegionOutcome, RegionReport};

/// Import the public key at `public_key_path` into every available region
/// under `key_name`, printing one status line per region.
///
/// The key material is read once and shared across all regions. Per-region
/// failures are printed and collected, never propagated; only an unreadable
/// key file or a failed region listing abort the operation, both before any
/// regional request is made.
pub async fn import_key_pair<P>(
    provider: &P,
    key_name: &str,
    public_key_path: &Path,
    dry_run: bool,
) -> KeymasterResult<Vec<RegionReport>>
where
    P: KeyPairProvider + ?Sized,
{
    // Read before touching any region; an unreadable file is fatal.
    let material = fs::read(public_key_path)?;

    let regions = provider
        .list_regions()
        .await
        .map_err(|err| KeymasterError::RegionListing(err.to_string()))?;
    log::debug!(
        "Importing keypair '{key_name}' into {} regions",
        regions.len()
    );

    let mut reports = Vec::with_capacity(regions.len());
    for region in regions {
        let outcome = match provider
            .import_key_pair(&region, key_name, &material, dry_run)
            .await
        {
            Ok(fingerprint) => RegionOutcome::Imported { fingerprint },
            Err(Ec2Error::DryRunOperation) if dry_run => RegionOutcome::DryRunSimulated,
            Err(Ec2Error::DuplicateKeyPair) => RegionOutcome::AlreadyExists,
            Err(err) => RegionOutcome::Failed(err.to_string()),
        };

        log_region_operation(
            "import",
            &region,
            !matches!(outcome, RegionOutcome::Failed(_)),
        );
        println!(
            "{}",
            status_line(KeyPairAction::Import, &region, key_name, &outcome)
        );
        reports.push(RegionReport { region, outcome });
    }

    Ok(reports)
}

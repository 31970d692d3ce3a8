//! End-to-end import and delete flows over a mock provider

use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use keymaster::cli::{self, Commands};
use keymaster::{Ec2Error, KeyPairProvider, KeymasterConfig, KeymasterError, RegionOutcome};

/// What the mock does when a key pair is imported into a given region.
#[derive(Debug, Clone, Copy)]
enum ImportBehavior {
    Succeed(&'static str),
    Duplicate,
    Fail(&'static str),
}

#[derive(Debug, Default)]
struct CallCounts {
    list_regions: usize,
    import: usize,
    exists: usize,
    delete: usize,
}

struct MockProvider {
    regions: Vec<(&'static str, ImportBehavior)>,
    key_exists: bool,
    calls: Mutex<CallCounts>,
}

impl MockProvider {
    fn new(regions: Vec<(&'static str, ImportBehavior)>, key_exists: bool) -> Self {
        MockProvider {
            regions,
            key_exists,
            calls: Mutex::new(CallCounts::default()),
        }
    }

    fn counts(&self) -> CallCounts {
        let calls = self.calls.lock().unwrap();
        CallCounts {
            list_regions: calls.list_regions,
            import: calls.import,
            exists: calls.exists,
            delete: calls.delete,
        }
    }
}

#[async_trait]
impl KeyPairProvider for MockProvider {
    async fn list_regions(&self) -> Result<Vec<String>, Ec2Error> {
        self.calls.lock().unwrap().list_regions += 1;
        Ok(self
            .regions
            .iter()
            .map(|(region, _)| region.to_string())
            .collect())
    }

    async fn import_key_pair(
        &self,
        region: &str,
        _key_name: &str,
        _material: &[u8],
        dry_run: bool,
    ) -> Result<String, Ec2Error> {
        self.calls.lock().unwrap().import += 1;
        let (_, behavior) = self
            .regions
            .iter()
            .find(|(candidate, _)| *candidate == region)
            .expect("import requested for an unlisted region");

        match behavior {
            ImportBehavior::Succeed(_) if dry_run => Err(Ec2Error::DryRunOperation),
            ImportBehavior::Succeed(fingerprint) => Ok(fingerprint.to_string()),
            ImportBehavior::Duplicate => Err(Ec2Error::DuplicateKeyPair),
            ImportBehavior::Fail(message) => Err(Ec2Error::SdkOperationError(message.to_string())),
        }
    }

    async fn key_pair_exists(&self, _region: &str, _key_name: &str, _dry_run: bool) -> bool {
        self.calls.lock().unwrap().exists += 1;
        self.key_exists
    }

    async fn delete_key_pair(
        &self,
        _region: &str,
        _key_name: &str,
        _dry_run: bool,
    ) -> Result<(), Ec2Error> {
        self.calls.lock().unwrap().delete += 1;
        Ok(())
    }
}

fn write_public_key() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"ssh-rsa AAAAB3NzaC1yc2EAAAADAQABAAABgQC7 test@host")
        .unwrap();
    file
}

fn three_region_provider() -> MockProvider {
    MockProvider::new(
        vec![
            ("us-east-1", ImportBehavior::Succeed("ab:cd:ef:01")),
            ("eu-west-1", ImportBehavior::Duplicate),
            (
                "ap-southeast-2",
                ImportBehavior::Fail("UnauthorizedOperation: You are not authorized"),
            ),
        ],
        true,
    )
}

#[tokio::test]
async fn test_import_mixed_outcomes_across_regions() {
    let provider = three_region_provider();
    let key_file = write_public_key();

    let reports = keymaster::ops::import_key_pair(&provider, "mykey", key_file.path(), false)
        .await
        .unwrap();

    assert_eq!(reports.len(), 3);
    assert_eq!(
        reports[0].outcome,
        RegionOutcome::Imported {
            fingerprint: "ab:cd:ef:01".to_string()
        }
    );
    assert_eq!(reports[1].outcome, RegionOutcome::AlreadyExists);
    match &reports[2].outcome {
        RegionOutcome::Failed(reason) => {
            assert!(reason.contains("UnauthorizedOperation: You are not authorized"))
        }
        other => panic!("expected a failure outcome, got {other:?}"),
    }

    // Iteration ran to completion despite the failure.
    let counts = provider.counts();
    assert_eq!(counts.import, 3);
}

#[tokio::test]
async fn test_import_preserves_region_order() {
    let provider = three_region_provider();
    let key_file = write_public_key();

    let reports = keymaster::ops::import_key_pair(&provider, "mykey", key_file.path(), false)
        .await
        .unwrap();

    let regions: Vec<&str> = reports.iter().map(|r| r.region.as_str()).collect();
    assert_eq!(regions, ["us-east-1", "eu-west-1", "ap-southeast-2"]);
}

#[tokio::test]
async fn test_import_dry_run_reports_simulated() {
    let provider = MockProvider::new(
        vec![("us-east-1", ImportBehavior::Succeed("ab:cd:ef:01"))],
        true,
    );
    let key_file = write_public_key();

    let reports = keymaster::ops::import_key_pair(&provider, "mykey", key_file.path(), true)
        .await
        .unwrap();

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].outcome, RegionOutcome::DryRunSimulated);
}

#[tokio::test]
async fn test_import_unreadable_key_file_makes_no_provider_calls() {
    let provider = three_region_provider();
    let missing = PathBuf::from("/nonexistent/keymaster-test/id_rsa.pub");

    let result = keymaster::ops::import_key_pair(&provider, "mykey", &missing, false).await;

    assert!(matches!(result, Err(KeymasterError::Io(_))));
    let counts = provider.counts();
    assert_eq!(counts.list_regions, 0);
    assert_eq!(counts.import, 0);
}

#[tokio::test]
async fn test_region_listing_failure_aborts_import() {
    struct ListingFails;

    #[async_trait]
    impl KeyPairProvider for ListingFails {
        async fn list_regions(&self) -> Result<Vec<String>, Ec2Error> {
            Err(Ec2Error::SdkOperationError("connection refused".to_string()))
        }

        async fn import_key_pair(
            &self,
            _region: &str,
            _key_name: &str,
            _material: &[u8],
            _dry_run: bool,
        ) -> Result<String, Ec2Error> {
            panic!("no regional call should be made")
        }

        async fn key_pair_exists(&self, _region: &str, _key_name: &str, _dry_run: bool) -> bool {
            panic!("no regional call should be made")
        }

        async fn delete_key_pair(
            &self,
            _region: &str,
            _key_name: &str,
            _dry_run: bool,
        ) -> Result<(), Ec2Error> {
            panic!("no regional call should be made")
        }
    }

    let key_file = write_public_key();
    let result = keymaster::ops::import_key_pair(&ListingFails, "mykey", key_file.path(), false).await;

    match result {
        Err(KeymasterError::RegionListing(reason)) => {
            assert!(reason.contains("connection refused"))
        }
        other => panic!("expected a region-listing failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_delete_ghost_key_skips_every_delete_call() {
    let provider = MockProvider::new(
        vec![
            ("us-east-1", ImportBehavior::Succeed("unused")),
            ("eu-west-1", ImportBehavior::Succeed("unused")),
            ("ap-southeast-2", ImportBehavior::Succeed("unused")),
        ],
        false,
    );

    let reports = keymaster::ops::delete_key_pair(&provider, "ghost", false)
        .await
        .unwrap();

    assert_eq!(reports.len(), 3);
    assert!(reports
        .iter()
        .all(|report| report.outcome == RegionOutcome::DoesNotExist));

    let counts = provider.counts();
    assert_eq!(counts.exists, 3);
    assert_eq!(counts.delete, 0);
}

#[tokio::test]
async fn test_delete_existing_key_in_every_region() {
    let provider = three_region_provider();

    let reports = keymaster::ops::delete_key_pair(&provider, "mykey", false)
        .await
        .unwrap();

    assert_eq!(reports.len(), 3);
    assert!(reports
        .iter()
        .all(|report| report.outcome == RegionOutcome::Deleted));
    assert_eq!(provider.counts().delete, 3);
}

#[tokio::test]
async fn test_import_empty_name_aborts_before_any_provider_call() {
    let provider = three_region_provider();
    let key_file = write_public_key();
    let config = KeymasterConfig::default();

    cli::process_command(
        &provider,
        &config,
        Commands::Import {
            name: Some("   ".to_string()),
            public_key_file: Some(key_file.path().to_path_buf()),
        },
        false,
    )
    .await
    .unwrap();

    let counts = provider.counts();
    assert_eq!(counts.list_regions, 0);
    assert_eq!(counts.import, 0);
}

#[tokio::test]
async fn test_delete_empty_name_aborts_before_any_provider_call() {
    let provider = three_region_provider();
    let config = KeymasterConfig::default();

    cli::process_command(
        &provider,
        &config,
        Commands::Delete {
            name: Some(String::new()),
        },
        false,
    )
    .await
    .unwrap();

    let counts = provider.counts();
    assert_eq!(counts.list_regions, 0);
    assert_eq!(counts.exists, 0);
    assert_eq!(counts.delete, 0);
}

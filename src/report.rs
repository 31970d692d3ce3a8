//! Per-region outcome reporting and status-line formatting

/// Which key pair operation produced an outcome. Dry-run and failure lines
/// word themselves differently for import and delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPairAction {
    Import,
    Delete,
}

/// Per-region outcome of a key pair operation, held only long enough to
/// print and report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionOutcome {
    /// Key registered; the provider returned this fingerprint.
    Imported { fingerprint: String },
    /// The region already holds a key pair under this name.
    AlreadyExists,
    Deleted,
    /// No key pair under this name, so no delete was attempted.
    DoesNotExist,
    /// The provider validated the request without performing it.
    DryRunSimulated,
    Failed(String),
}

/// A region paired with what happened there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionReport {
    pub region: String,
    pub outcome: RegionOutcome,
}

/// Render the status line printed for one region. The label column is padded
/// to a fixed width so the messages align.
pub fn status_line(
    action: KeyPairAction,
    region: &str,
    key_name: &str,
    outcome: &RegionOutcome,
) -> String {
    let label = format!("{region}:");

    match outcome {
        RegionOutcome::Imported { fingerprint } => {
            format!("{label:<16} Imported keypair '{key_name}' - {fingerprint}")
        }
        RegionOutcome::AlreadyExists => {
            format!("{label:<16} Keypair '{key_name}' already exists.")
        }
        RegionOutcome::Deleted => {
            format!("{label:<16} Deleted keypair '{key_name}'")
        }
        RegionOutcome::DoesNotExist => {
            format!("{label:<16} Keypair '{key_name}' does not exist")
        }
        RegionOutcome::DryRunSimulated => {
            let verb = match action {
                KeyPairAction::Import => "Imported",
                KeyPairAction::Delete => "Deleted",
            };
            format!("[Dry Run] {label:<16} {verb} keypair '{key_name}'")
        }
        RegionOutcome::Failed(reason) => {
            let verb = match action {
                KeyPairAction::Import => "import",
                KeyPairAction::Delete => "delete",
            };
            format!("{label:<16} Could not {verb} keypair '{key_name}' - {reason}")
        }
    }
}

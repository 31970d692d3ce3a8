#[derive(Debug, thiserror::Error)]
pub enum KeymasterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Region listing failed: {0}")]
    RegionListing(String),
}

pub type KeymasterResult<T> = Result<T, KeymasterError>;

//! AWS types and error definitions
//!
//! Contains the error taxonomy for EC2 key pair operations.

use aws_sdk_ec2::error::{ProvideErrorMetadata, SdkError};

/// Error type for EC2 key pair operations
#[derive(Debug, thiserror::Error)]
pub enum Ec2Error {
    /// The provider validated the request without performing it.
    #[error("dry run operation would have succeeded")]
    DryRunOperation,

    #[error("keypair already exists")]
    DuplicateKeyPair,

    #[error("keypair does not exist")]
    KeyPairNotFound,

    #[error("SDK operation error: {0}")]
    SdkOperationError(String),
}

impl Ec2Error {
    /// Classify an SDK error by its error-metadata code. Anything without a
    /// recognized code collapses to `SdkOperationError` with the provider's
    /// message.
    pub(crate) fn from_sdk<E>(err: SdkError<E>) -> Self
    where
        E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
    {
        match err.code() {
            Some("DryRunOperation") => Ec2Error::DryRunOperation,
            Some("InvalidKeyPair.Duplicate") => Ec2Error::DuplicateKeyPair,
            Some("InvalidKeyPair.NotFound") => Ec2Error::KeyPairNotFound,
            code => {
                let message = err
                    .message()
                    .map(str::to_string)
                    .unwrap_or_else(|| err.to_string());
                match code {
                    Some(code) => Ec2Error::SdkOperationError(format!("{code}: {message}")),
                    None => Ec2Error::SdkOperationError(message),
                }
            }
        }
    }
}

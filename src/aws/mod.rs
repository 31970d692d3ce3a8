//! AWS EC2 integration
//!
//! Client construction, region enumeration, and the key pair operations
//! backing the [`KeyPairProvider`](crate::provider::KeyPairProvider) trait.

pub mod client;
pub mod keypairs;
pub mod regions;
pub mod types;

pub use client::AwsKeyPairInterface;
pub use types::Ec2Error;

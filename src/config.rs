use log::warn;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KeymasterConfig {
    /// Region used for the initial region-listing call. Region enumeration
    /// itself needs an endpoint, so one region is fixed up front.
    #[serde(default = "default_bootstrap_region")]
    pub bootstrap_region: String,
    /// Public key path offered as the prompt default when none is supplied.
    #[serde(default)]
    pub default_public_key: Option<PathBuf>,
}

fn default_bootstrap_region() -> String {
    "us-east-1".to_string()
}

impl Default for KeymasterConfig {
    fn default() -> Self {
        let default_public_key = match dirs::home_dir() {
            Some(home) => Some(home.join(".ssh").join("id_rsa.pub")),
            None => {
                // Fall back to prompting with no default if the home
                // directory cannot be determined
                warn!("Could not determine home directory, no default public key path");
                None
            }
        };

        Self {
            bootstrap_region: default_bootstrap_region(),
            default_public_key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bootstrap_region() {
        let config = KeymasterConfig::default();
        assert_eq!(config.bootstrap_region, "us-east-1");
    }

    #[test]
    fn test_default_public_key_under_ssh_dir() {
        let config = KeymasterConfig::default();
        if let Some(path) = config.default_public_key {
            assert!(path.ends_with(".ssh/id_rsa.pub"));
        }
    }
}

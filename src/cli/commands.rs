//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "keymaster")]
#[command(about = "Import a public key into all AWS regions with a single command")]
pub struct Cli {
    /// Checks whether you have the required permissions, without attempting
    /// the request
    #[arg(long = "dry-run", global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Imports a public key into all AWS regions
    Import {
        /// Name for the key pair (will prompt if not provided)
        name: Option<String>,

        /// Path to the public key file (will prompt if not provided,
        /// defaulting to ~/.ssh/id_rsa.pub)
        public_key_file: Option<PathBuf>,
    },

    /// Deletes a keypair with the specified name from all AWS regions
    Delete {
        /// Name of the key pair to delete (will prompt if not provided)
        name: Option<String>,
    },

    /// Display the version of keymaster
    Version,
}

//! CLI module: argument parsing, prompting, and dispatch

pub mod commands;
pub mod prompt;

pub use commands::{Cli, Commands};

use clap::{CommandFactory, Parser};
use std::error::Error;
use std::path::{Path, PathBuf};

use crate::aws::AwsKeyPairInterface;
use crate::config::KeymasterConfig;
use crate::ops;
use crate::provider::KeyPairProvider;

/// Entry point for the CLI application
#[tokio::main]
pub async fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = KeymasterConfig::default();
    let provider = AwsKeyPairInterface::new(config.bootstrap_region.clone());

    process_command(&provider, &config, command, cli.dry_run).await
}

/// Process the CLI command. The dry-run flag travels as an explicit
/// parameter from here down to every provider call.
pub async fn process_command(
    provider: &dyn KeyPairProvider,
    config: &KeymasterConfig,
    command: Commands,
    dry_run: bool,
) -> Result<(), Box<dyn Error>> {
    match command {
        Commands::Import {
            name,
            public_key_file,
        } => handle_import(provider, config, name, public_key_file, dry_run).await,

        Commands::Delete { name } => handle_delete(provider, name, dry_run).await,

        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

async fn handle_import(
    provider: &dyn KeyPairProvider,
    config: &KeymasterConfig,
    name: Option<String>,
    public_key_file: Option<PathBuf>,
    dry_run: bool,
) -> Result<(), Box<dyn Error>> {
    let prompted = name.is_none() || public_key_file.is_none();

    let name = match name {
        Some(name) => name.trim().to_string(),
        None => prompt::prompt_key_name()?,
    };
    let public_key = match public_key_file {
        Some(path) => {
            let trimmed = path.to_string_lossy().trim().to_string();
            (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
        }
        None => prompt::prompt_public_key(config.default_public_key.as_deref())?,
    };
    if prompted {
        println!();
    }

    let Some(name) = validated_key_name(&name) else {
        eprintln!("Key name is required.\n");
        print_subcommand_usage("import")?;
        return Ok(());
    };
    let Some(public_key) = public_key else {
        eprintln!("Public key file is required.\n");
        print_subcommand_usage("import")?;
        return Ok(());
    };
    let public_key = expand_path(&public_key);

    if let Err(err) = ops::import_key_pair(provider, name, &public_key, dry_run).await {
        eprintln!("Could not import key pair: {err}");
    }
    Ok(())
}

async fn handle_delete(
    provider: &dyn KeyPairProvider,
    name: Option<String>,
    dry_run: bool,
) -> Result<(), Box<dyn Error>> {
    let name = match name {
        Some(name) => name.trim().to_string(),
        None => {
            let name = prompt::prompt_key_name()?;
            println!();
            name
        }
    };

    let Some(name) = validated_key_name(&name) else {
        eprintln!("Key name is required.\n");
        print_subcommand_usage("delete")?;
        return Ok(());
    };

    if let Err(err) = ops::delete_key_pair(provider, name, dry_run).await {
        eprintln!("Could not delete key pair: {err}");
    }
    Ok(())
}

/// A key name is usable once surrounding whitespace is stripped and
/// something remains.
fn validated_key_name(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Expand `~` and environment variables in a user-supplied path
/// (e.g. "~/.ssh/id_rsa.pub" -> "/home/user/.ssh/id_rsa.pub")
fn expand_path(path: &Path) -> PathBuf {
    match shellexpand::full(&path.to_string_lossy()) {
        Ok(expanded) => PathBuf::from(expanded.to_string()),
        Err(_) => path.to_path_buf(),
    }
}

fn print_subcommand_usage(name: &str) -> Result<(), Box<dyn Error>> {
    let mut cmd = Cli::command();
    if let Some(sub) = cmd.find_subcommand_mut(name) {
        sub.print_help()?;
    }
    Ok(())
}

//! Storage commands

use super::resolve_args;
use crate::cloud::api::CloudApi;
use crate::resolver::CachingStorage;
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct StorageCmd {
    #[command(subcommand)]
    command: StorageCommand,
}

#[derive(Debug, Subcommand)]
enum StorageCommand {
    /// List all storages
    List,
    /// Show storage details
    Show {
        /// Storages to show
        #[arg(required = true, value_name = "UUID/Title")]
        storages: Vec<String>,
    },
}

pub async fn run(cmd: StorageCmd, api: &dyn CloudApi) -> Result<()> {
    match cmd.command {
        StorageCommand::List => list(api).await,
        StorageCommand::Show { storages } => show(api, &storages).await,
    }
}

async fn list(api: &dyn CloudApi) -> Result<()> {
    let storages = api.list_storages().await?;
    println!("{:<38} {:<30} {:<12} {:>8}  {}", "UUID", "Title", "Zone", "Size", "State");
    for storage in storages {
        println!(
            "{:<38} {:<30} {:<12} {:>5} GiB  {}",
            storage.uuid, storage.title, storage.zone, storage.size_gib, storage.state
        );
    }
    Ok(())
}

async fn show(api: &dyn CloudApi, args: &[String]) -> Result<()> {
    let mut provider = CachingStorage::new();
    let resolver = provider.get(api).await?;
    let uuids = resolve_args(&resolver, args)?;

    for uuid in &uuids {
        let storage = provider.get_cached(uuid)?;
        println!("UUID:    {}", storage.uuid);
        println!("Title:   {}", storage.title);
        println!("Zone:    {}", storage.zone);
        println!("Size:    {} GiB", storage.size_gib);
        println!("State:   {}", storage.state);
        if let Some(created_at) = storage.created_at {
            println!("Created: {}", created_at.format("%Y-%m-%d %H:%M"));
        }
        println!();
    }
    Ok(())
}

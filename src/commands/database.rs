//! Database commands

use crate::cloud::api::CloudApi;
use crate::resolver::CachingDatabase;
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct DatabaseCmd {
    #[command(subcommand)]
    command: DatabaseCommand,
}

#[derive(Debug, Subcommand)]
enum DatabaseCommand {
    /// List all managed databases
    List,
    /// Show database details
    Show {
        /// Database to show
        #[arg(value_name = "UUID/Title")]
        database: String,
    },
}

pub async fn run(cmd: DatabaseCmd, api: &dyn CloudApi) -> Result<()> {
    match cmd.command {
        DatabaseCommand::List => list(api).await,
        DatabaseCommand::Show { database } => show(api, &database).await,
    }
}

async fn list(api: &dyn CloudApi) -> Result<()> {
    let databases = api.list_databases().await?;
    println!("{:<38} {:<30} {:<8} {:<12} {}", "UUID", "Title", "Type", "Zone", "State");
    for database in databases {
        println!(
            "{:<38} {:<30} {:<8} {:<12} {}",
            database.uuid, database.title, database.database_type, database.zone, database.state
        );
    }
    Ok(())
}

async fn show(api: &dyn CloudApi, arg: &str) -> Result<()> {
    let mut provider = CachingDatabase::new();
    let resolver = provider.get(api).await?;
    let uuid = resolver.resolve(arg).get_only()?;

    let database = provider.get_cached(&uuid)?;
    println!("UUID:   {}", database.uuid);
    println!("Title:  {}", database.title);
    println!("Type:   {}", database.database_type);
    println!("Zone:   {}", database.zone);
    println!("State:  {}", database.state);
    Ok(())
}

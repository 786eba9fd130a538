//! Router commands

use crate::cloud::api::CloudApi;
use crate::cloud::fanout::{fetch_concurrent, MAX_CONCURRENT_FETCHES};
use crate::resolver::CachingRouter;
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct RouterCmd {
    #[command(subcommand)]
    command: RouterCommand,
}

#[derive(Debug, Subcommand)]
enum RouterCommand {
    /// List all routers
    List,
    /// Show a router and its attached networks
    Show {
        /// Router to show
        #[arg(value_name = "UUID/Name")]
        router: String,
    },
}

pub async fn run(cmd: RouterCmd, api: &dyn CloudApi) -> Result<()> {
    match cmd.command {
        RouterCommand::List => list(api).await,
        RouterCommand::Show { router } => show(api, &router).await,
    }
}

async fn list(api: &dyn CloudApi) -> Result<()> {
    let routers = api.list_routers().await?;
    println!("{:<38} {:<30} {:<10} {}", "UUID", "Name", "Type", "Networks");
    for router in routers {
        println!(
            "{:<38} {:<30} {:<10} {}",
            router.uuid,
            router.name,
            router.router_type,
            router.attached_networks.len()
        );
    }
    Ok(())
}

async fn show(api: &dyn CloudApi, arg: &str) -> Result<()> {
    let mut provider = CachingRouter::new();
    let resolver = provider.get(api).await?;
    let uuid = resolver.resolve(arg).get_only()?;
    let router = provider.get_cached(&uuid)?;

    // each attached network needs its own detail call; bound the fan-out
    let networks = fetch_concurrent(
        &router.attached_networks,
        MAX_CONCURRENT_FETCHES,
        |network_uuid| async move { api.get_network_details(&network_uuid).await },
    )
    .await?;

    println!("UUID:  {}", router.uuid);
    println!("Name:  {}", router.name);
    println!("Type:  {}", router.router_type);
    if networks.is_empty() {
        println!("Networks: none");
    } else {
        println!("Networks:");
        for network in &networks {
            println!(
                "  {:<38} {:<24} {:<10} {}",
                network.uuid, network.name, network.network_type, network.zone
            );
        }
    }
    Ok(())
}

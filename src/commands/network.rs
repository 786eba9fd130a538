//! Network commands

use crate::cloud::api::CloudApi;
use crate::resolver::CachingNetwork;
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct NetworkCmd {
    #[command(subcommand)]
    command: NetworkCommand,
}

#[derive(Debug, Subcommand)]
enum NetworkCommand {
    /// List all networks
    List,
    /// Show network details
    Show {
        /// Network to show
        #[arg(value_name = "UUID/Name")]
        network: String,
    },
}

pub async fn run(cmd: NetworkCmd, api: &dyn CloudApi) -> Result<()> {
    match cmd.command {
        NetworkCommand::List => list(api).await,
        NetworkCommand::Show { network } => show(api, &network).await,
    }
}

async fn list(api: &dyn CloudApi) -> Result<()> {
    let networks = api.list_networks().await?;
    println!("{:<38} {:<30} {:<10} {}", "UUID", "Name", "Type", "Zone");
    for network in networks {
        println!(
            "{:<38} {:<30} {:<10} {}",
            network.uuid, network.name, network.network_type, network.zone
        );
    }
    Ok(())
}

async fn show(api: &dyn CloudApi, arg: &str) -> Result<()> {
    let mut provider = CachingNetwork::new();
    let resolver = provider.get(api).await?;
    let uuid = resolver.resolve(arg).get_only()?;

    // the listing already carries everything we render, no second fetch
    let network = provider.get_cached(&uuid)?;
    println!("UUID:    {}", network.uuid);
    println!("Name:    {}", network.name);
    println!("Type:    {}", network.network_type);
    println!("Zone:    {}", network.zone);
    match &network.router {
        Some(router) => println!("Router:  {}", router),
        None => println!("Router:  none"),
    }
    Ok(())
}

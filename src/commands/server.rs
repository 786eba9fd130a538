//! Server commands

use super::resolve_args;
use crate::cloud::api::CloudApi;
use crate::cloud::fanout::{fetch_concurrent, MAX_CONCURRENT_FETCHES};
use crate::cloud::types::{Server, ServerInterface};
use crate::resolver::CachingServer;
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct ServerCmd {
    #[command(subcommand)]
    command: ServerCommand,
}

#[derive(Debug, Subcommand)]
enum ServerCommand {
    /// List all servers
    List,
    /// Show detailed information about one or more servers
    Show {
        /// Servers to show
        #[arg(required = true, value_name = "UUID/Title/Hostname")]
        servers: Vec<String>,
    },
    /// Delete one or more servers
    Delete {
        /// Servers to delete; a wildcard pattern selects several at once
        #[arg(required = true, value_name = "UUID/Title/Hostname")]
        servers: Vec<String>,
    },
}

pub async fn run(cmd: ServerCmd, api: &dyn CloudApi) -> Result<()> {
    match cmd.command {
        ServerCommand::List => list(api).await,
        ServerCommand::Show { servers } => show(api, &servers).await,
        ServerCommand::Delete { servers } => delete(api, &servers).await,
    }
}

async fn list(api: &dyn CloudApi) -> Result<()> {
    let servers = api.list_servers().await?;
    println!(
        "{:<38} {:<24} {:<24} {:<12} {:<10}",
        "UUID", "Hostname", "Title", "Zone", "State"
    );
    for server in servers {
        println!(
            "{:<38} {:<24} {:<24} {:<12} {:<10}",
            server.uuid, server.hostname, server.title, server.zone, server.state
        );
    }
    Ok(())
}

async fn show(api: &dyn CloudApi, args: &[String]) -> Result<()> {
    let mut provider = CachingServer::new();
    let resolver = provider.get(api).await?;
    let uuids = resolve_args(&resolver, args)?;

    let details = fetch_concurrent(&uuids, MAX_CONCURRENT_FETCHES, |uuid| async move {
        api.get_server_details(&uuid).await
    })
    .await?;

    for detail in &details {
        // base fields come from the cached listing object, only the
        // networking section needs the detail fetch
        let cached = provider.get_cached(&detail.server.uuid)?;
        print_server(&cached, &detail.networking);
    }
    Ok(())
}

fn print_server(server: &Server, networking: &[ServerInterface]) {
    println!("UUID:       {}", server.uuid);
    println!("Title:      {}", server.title);
    println!("Hostname:   {}", server.hostname);
    println!("Plan:       {}", server.plan);
    println!("Zone:       {}", server.zone);
    println!("State:      {}", server.state);
    if let Some(created_at) = server.created_at {
        println!("Created:    {}", created_at.format("%Y-%m-%d %H:%M"));
    }
    if !networking.is_empty() {
        println!("Interfaces:");
        for interface in networking {
            println!(
                "  {:<10} {:<38} {}",
                interface.interface_type,
                interface.network,
                interface.ip_addresses.join(", ")
            );
        }
    }
    println!();
}

async fn delete(api: &dyn CloudApi, args: &[String]) -> Result<()> {
    let mut provider = CachingServer::new();
    let resolver = provider.get(api).await?;

    let mut uuids = Vec::new();
    for arg in args {
        uuids.extend(resolver.resolve(arg).get_matching()?);
    }
    uuids.sort();
    uuids.dedup();

    let deleted = fetch_concurrent(&uuids, MAX_CONCURRENT_FETCHES, |uuid| async move {
        api.delete_server(&uuid).await?;
        Ok(uuid)
    })
    .await?;

    for uuid in deleted {
        println!("Deleted server {}", uuid);
    }
    Ok(())
}

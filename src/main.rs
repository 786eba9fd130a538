use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;

use nimbusctl::cloud::api::CloudApi;
use nimbusctl::cloud::client::CloudClient;
use nimbusctl::cloud::types::{
    Account, Database, FileStorage, Gateway, IpAddress, KubernetesCluster, LoadBalancer, Network,
    NetworkPeering, ObjectStorage, Router, Server, ServerGroup, Storage, Token,
};
use nimbusctl::commands;
use nimbusctl::completion::server::{StartedServer, StoppedServer};
use nimbusctl::completion::{Complete, Directive, Provider};
use nimbusctl::config::Config;

/// Command-line tool for the Nimbus cloud platform
#[derive(Parser, Debug)]
#[command(name = "nimbusctl", version, about, long_about = None)]
struct Cli {
    /// API base URL override
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Manage servers
    Server(commands::server::ServerCmd),
    /// Manage networks
    Network(commands::network::NetworkCmd),
    /// Manage routers
    Router(commands::router::RouterCmd),
    /// Manage storages
    Storage(commands::storage::StorageCmd),
    /// Manage databases
    Database(commands::database::DatabaseCmd),
    /// Generate a shell completion script
    Completion {
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Complete a positional argument (invoked by the completion scripts)
    #[command(hide = true)]
    Complete {
        resource: String,
        #[arg(default_value = "")]
        word: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

fn setup_logging(level: LogLevel) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let tracing_level = level.to_tracing_level()?;

    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    else {
        return None;
    };

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_writer(non_blocking.with_max_level(tracing_level))
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("nimbusctl started with log level: {:?}", level);

    Some(guard)
}

fn get_log_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("nimbusctl").join("nimbusctl.log");
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".nimbusctl").join("nimbusctl.log");
    }
    PathBuf::from("nimbusctl.log")
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = setup_logging(cli.log_level);

    match cli.command {
        // completion script generation needs no API client
        Command::Completion { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "nimbusctl", &mut io::stdout());
            Ok(())
        }
        command => {
            let config = Config::load();
            let base_url = config.effective_api_url(cli.api_url.as_deref())?;
            let token = config.effective_token()?;
            let client = CloudClient::new(base_url, token)?;

            match command {
                Command::Server(cmd) => commands::server::run(cmd, &client).await,
                Command::Network(cmd) => commands::network::run(cmd, &client).await,
                Command::Router(cmd) => commands::router::run(cmd, &client).await,
                Command::Storage(cmd) => commands::storage::run(cmd, &client).await,
                Command::Database(cmd) => commands::database::run(cmd, &client).await,
                Command::Complete { resource, word } => {
                    run_complete(&client, &resource, &word).await
                }
                Command::Completion { .. } => unreachable!("handled above"),
            }
        }
    }
}

/// Run the completion provider for a resource type and print the
/// suggestions in the format the generated scripts consume: one per line,
/// then a `:<directive>` marker.
async fn run_complete(api: &dyn CloudApi, resource: &str, word: &str) -> Result<()> {
    let provider: Box<dyn Provider> = match resource {
        "account" => Box::new(Complete::<Account>::default()),
        "server" => Box::new(Complete::<Server>::default()),
        "started-server" => Box::new(StartedServer),
        "stopped-server" => Box::new(StoppedServer),
        "storage" => Box::new(Complete::<Storage>::default()),
        "network" => Box::new(Complete::<Network>::default()),
        "router" => Box::new(Complete::<Router>::default()),
        "database" => Box::new(Complete::<Database>::default()),
        "kubernetes" => Box::new(Complete::<KubernetesCluster>::default()),
        "load-balancer" => Box::new(Complete::<LoadBalancer>::default()),
        "gateway" => Box::new(Complete::<Gateway>::default()),
        "object-storage" => Box::new(Complete::<ObjectStorage>::default()),
        "server-group" => Box::new(Complete::<ServerGroup>::default()),
        "token" => Box::new(Complete::<Token>::default()),
        "file-storage" => Box::new(Complete::<FileStorage>::default()),
        "network-peering" => Box::new(Complete::<NetworkPeering>::default()),
        "ip-address" => Box::new(Complete::<IpAddress>::default()),
        _ => {
            // unknown resource type: completion never hard-fails
            println!(":{}", Directive::default().code());
            return Ok(());
        }
    };

    let (suggestions, directive) = provider.complete_argument(api, word).await;
    for suggestion in suggestions {
        println!("{}", suggestion);
    }
    println!(":{}", directive.code());
    Ok(())
}

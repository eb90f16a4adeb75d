//! # dnsock
//!
//! Command line front end: resolves one name through the configured
//! default socket (or `--socket`) and prints the answers as JSON.

mod bootstrap;

use clap::{Args, Parser, Subcommand};
use dnsock_application::{Dns, SocketFactory};
use dnsock_domain::{CliOverrides, Lookup, QueryOptions};
use dnsock_infrastructure::dns::SocketManager;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "dnsock")]
#[command(version)]
#[command(about = "Pluggable DNS lookups over DNS-over-HTTPS or the host resolver")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Perform a DNS lookup
    Query(QueryArgs),
}

#[derive(Args)]
struct QueryArgs {
    /// The domain name to resolve
    name: String,

    /// The record type to lookup
    #[arg(default_value = "A")]
    record_type: String,

    /// Socket to use instead of the configured default
    #[arg(short, long)]
    socket: Option<String>,

    /// DoH endpoint for the selected socket
    #[arg(long)]
    endpoint: Option<String>,

    /// Send questions one after another instead of concurrently
    #[arg(long)]
    sync: bool,

    /// Ask the upstream for DNSSEC records (do=1)
    #[arg(long)]
    dnssec: bool,

    /// Let the upstream validate DNSSEC (drops cd=1)
    #[arg(long)]
    no_cd: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Query(args) => {
            let level_from_cli = cli.log_level.is_some();
            let overrides = CliOverrides {
                socket: args.socket.clone(),
                endpoint: args.endpoint.clone(),
                log_level: cli.log_level,
            };
            let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
            bootstrap::init_logging(&config, level_from_cli);

            info!(
                config_file = cli.config.as_deref().unwrap_or("default"),
                default_socket = %config.dns.default,
                "Configuration loaded"
            );

            let manager: Arc<dyn SocketFactory> = Arc::new(SocketManager::new(config.dns));
            let dns = Dns::new(manager);

            run_query(&dns, &args).await
        }
    }
}

async fn run_query(dns: &Dns, args: &QueryArgs) -> anyhow::Result<()> {
    let options = QueryOptions::default()
        .with_async(!args.sync)
        .with_dnssec(args.dnssec)
        .with_checking_disabled(!args.no_cd);

    debug!(name = %args.name, record_type = %args.record_type, "Running query");

    let answers = dns
        .query(Lookup::single(&args.name, &args.record_type), &options)
        .await?
        .resolve(options.throw_on_error)
        .await?;

    let output = if args.pretty {
        serde_json::to_string_pretty(&answers)?
    } else {
        serde_json::to_string(&answers)?
    };
    println!("{}", output);

    Ok(())
}

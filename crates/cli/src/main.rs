mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use dispatch::tools::{CONTAINER_CHECK, COUNTRY_DATA, PORT_EXTRACTOR};
use dispatch::{ResponseEnvelope, ToolHost};
use serde_json::Value;
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use error::Result;

#[derive(Parser)]
#[command(name = "portcheck")]
#[command(about = "Port lookup, container validation and port extraction tools for LLM agents", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (defaults to ./portcheck.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a country_data tool call
    CountryData {
        /// JSON payload in any supported wrapper shape, or `-` for stdin
        payload: String,
    },
    /// Run a container_check tool call
    ContainerCheck {
        /// JSON payload in any supported wrapper shape, or `-` for stdin
        payload: String,
    },
    /// Run a port_extractor tool call
    PortExtract {
        /// JSON payload in any supported wrapper shape, or `-` for stdin
        payload: String,
    },
    /// List catalog entries
    Entries,
    /// Serve the tools over MCP on stdin/stdout
    Serve,
}

/// The tool returned a success envelope.
const EXIT_OK: u8 = 0;
/// The tool returned a failure envelope.
const EXIT_FAILED: u8 = 1;
/// The CLI itself failed (config, catalog, I/O).
const EXIT_ERROR: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

async fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::discover(cli.config.as_deref())?;
    init_logging(config.log.env_filter()?, cli.verbose);

    let catalog = Arc::new(config.catalog()?);
    info!(entries = catalog.len(), "catalog ready");

    match cli.command {
        Commands::CountryData { payload } => {
            let host = ToolHost::new(catalog, config.resolver());
            cmd_call(&host, COUNTRY_DATA, &payload).await
        }
        Commands::ContainerCheck { payload } => {
            let host = ToolHost::new(catalog, config.resolver());
            cmd_call(&host, CONTAINER_CHECK, &payload).await
        }
        Commands::PortExtract { payload } => {
            let host = ToolHost::new(catalog, config.resolver());
            cmd_call(&host, PORT_EXTRACTOR, &payload).await
        }
        Commands::Entries => cmd_entries(&catalog),
        Commands::Serve => {
            let server = mcp::Server::new(ToolHost::new(catalog, config.resolver()));
            server.serve_stdio().await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn cmd_call(host: &ToolHost, tool: &str, payload: &str) -> Result<ExitCode> {
    let payload = read_payload(payload, tokio::io::stdin()).await?;
    let envelope = host.invoke(tool, &Value::String(payload));
    println!("{}", serde_json::to_string_pretty(&envelope.to_wire())?);
    Ok(ExitCode::from(exit_status(&envelope)))
}

/// The payload argument itself, or all of `stdin` when it is `-`.
async fn read_payload<R: AsyncRead + Unpin>(arg: &str, mut stdin: R) -> std::io::Result<String> {
    if arg != "-" {
        return Ok(arg.to_string());
    }
    let mut input = String::new();
    stdin.read_to_string(&mut input).await?;
    Ok(input)
}

fn exit_status(envelope: &ResponseEnvelope) -> u8 {
    if envelope.is_ok() { EXIT_OK } else { EXIT_FAILED }
}

fn cmd_entries(catalog: &catalog::EntryCatalog) -> Result<ExitCode> {
    if catalog.is_empty() {
        println!("No entries.");
        return Ok(ExitCode::SUCCESS);
    }

    println!("{:<10}  {:<24}  COUNTRY", "ID", "NAME");
    println!("{}", "-".repeat(50));
    for entry in catalog.entries() {
        println!("{:<10}  {:<24}  {}", entry.id, entry.name, entry.country);
    }
    Ok(ExitCode::SUCCESS)
}

/// Log to stderr; stdout carries tool output and the MCP stream.
fn init_logging(configured: EnvFilter, verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or(configured),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

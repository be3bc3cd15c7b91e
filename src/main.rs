use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Instrument};

use crud_apps::api;
use crud_apps::app_system::{setup_tracing, AppSystem};
use crud_apps::config::{AppConfig, CliArgs};

#[derive(Parser)]
#[command(name = "crud_apps")]
#[command(about = "In-memory users, products, blog and todo JSON API")]
#[command(version)]
struct Cli {
    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Load the demo records at startup
    #[arg(long)]
    seed: bool,

    /// Start with empty collections
    #[arg(long)]
    no_seed: bool,

    /// -v for debug, -vv for trace
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,
}

impl Cli {
    fn overrides(&self) -> CliArgs {
        let seed = match (self.seed, self.no_seed) {
            (true, _) => Some(true),
            (false, true) => Some(false),
            (false, false) => None,
        };
        CliArgs {
            config: self.config.as_ref().map(|p| p.display().to_string()),
            port: self.port,
            seed,
            verbose: self.verbose,
            print_config: self.print_config,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let args = cli.overrides();

    let mut config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    config.apply_cli_overrides(&args);
    config.validate()?;

    if args.print_config {
        println!("{}", config.to_pretty_json()?);
        return Ok(());
    }

    setup_tracing(&config.logging);

    let system = AppSystem::start(&config.store)
        .instrument(tracing::info_span!("startup"))
        .await
        .map_err(anyhow::Error::msg)
        .context("Failed to start entity actors")?;

    let app = api::router(system.state());
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    system.shutdown().await.map_err(anyhow::Error::msg)?;
    info!("Application completed successfully");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}

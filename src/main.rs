//! Command-line entry point.
//!
//! ```bash
//! # Print the best and worst hours
//! labour-report analyze --shifts work_shifts.csv --sales transactions.csv
//!
//! # Print the whole report as JSON
//! labour-report analyze --shifts work_shifts.csv --sales transactions.csv --json
//!
//! # Serve POST /report
//! labour-report serve --addr 127.0.0.1:8080 --config report.yaml
//! ```
//!
//! Logging goes to stderr and honours `RUST_LOG` (default `info`).

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use labour_report::api::{AppState, create_router};
use labour_report::config::ConfigLoader;
use labour_report::input;

#[derive(Parser, Debug)]
#[command(name = "labour-report", version, about = "Hourly labour cost to sales report")]
struct Cli {
    /// YAML report configuration
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a report from CSV tables
    Analyze {
        /// Worker shifts CSV (start_time,end_time,break_notes,pay_rate)
        #[arg(long)]
        shifts: PathBuf,
        /// Sales CSV (time,amount)
        #[arg(long)]
        sales: PathBuf,
        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Serve the HTTP API
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "0.0.0.0:8080")]
        addr: SocketAddr,
    },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = ConfigLoader::load_or_default(cli.config.as_deref())?.into_config();

    match cli.command {
        Command::Analyze {
            shifts,
            sales,
            json,
        } => {
            let report = input::run(&shifts, &sales, &config).with_context(|| {
                format!(
                    "building report from {} and {}",
                    shifts.display(),
                    sales.display()
                )
            })?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("best hour: {}", report.best_hour);
                println!("worst hour: {}", report.worst_hour);
            }
        }
        Command::Serve { addr } => {
            let app = create_router(AppState::new(config));
            info!("Server listening on http://{}", addr);
            let listener = tokio::net::TcpListener::bind(addr).await?;
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}

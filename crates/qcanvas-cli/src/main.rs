//! qcanvas Command-Line Interface
//!
//! Replays canvas event scripts headlessly and exports or executes the
//! resulting circuit.
//!
//! ```text
//!   qcanvas export --script session.yaml --output circuit.json
//!   qcanvas graph  --script session.yaml
//!   qcanvas run    --script session.yaml --endpoint http://127.0.0.1:8000/run
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{common, export, graph, run, version};

/// qcanvas - drag-and-drop quantum circuit canvas
#[derive(Parser)]
#[command(name = "qcanvas")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Settings file (defaults to ~/.qcanvas/config.yaml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay an event script and print the execution payload
    Export {
        /// Event script (YAML or JSON)
        #[arg(short, long)]
        script: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Replay an event script and print the visual graph
    Graph {
        /// Event script (YAML or JSON)
        #[arg(short, long)]
        script: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Replay an event script and send the circuit to an execution endpoint
    Run {
        /// Event script (YAML or JSON)
        #[arg(short, long)]
        script: String,

        /// Execution endpoint URL
        #[arg(short, long, env = "QCANVAS_ENDPOINT")]
        endpoint: Option<String>,

        /// Request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
    },

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let result = match common::load_settings(cli.config.as_deref()) {
        Ok(settings) => match cli.command {
            Commands::Export { script, output } => {
                export::execute(&script, output.as_deref(), &settings)
            }

            Commands::Graph { script, output } => {
                graph::execute(&script, output.as_deref(), &settings)
            }

            Commands::Run {
                script,
                endpoint,
                timeout,
            } => run::execute(&script, endpoint.as_deref(), timeout, &settings).await,

            Commands::Version => {
                version::execute();
                Ok(())
            }
        },
        Err(e) => Err(e),
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

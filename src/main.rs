use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{error, info, warn};

use dtop::app::App;
use dtop::config::Config;
use dtop::core::{DtopError, ViewMode};

/// dtop - a graphical CLI for your Docker instance
#[derive(Parser, Debug)]
#[command(name = "dtop")]
#[command(about = "dtop is a CLI to view and manage your Docker instance.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<std::path::PathBuf>,

    /// Docker host to connect to
    #[arg(short = 'H', long, value_name = "HOST", global = true)]
    host: Option<String>,

    /// Include stopped containers
    #[arg(short, long, global = true)]
    all: bool,

    /// Enable debug logging to file
    #[arg(short, long, global = true)]
    debug: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List running containers (default)
    #[command(alias = "ps")]
    Containers,

    /// List images
    Images,

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let mode = match cli.command {
        Some(Commands::Version) => {
            print_version();
            return;
        }
        Some(Commands::Images) => ViewMode::ListImages,
        Some(Commands::Containers) | None => ViewMode::ListContainers,
    };

    if let Err(e) = run_tui(cli, mode).await {
        error!("dtop failed: {:#}", e);
        let message = e
            .downcast_ref::<DtopError>()
            .map(DtopError::user_message)
            .unwrap_or_else(|| format!("{:#}", e));
        eprintln!("dtop 🖥 {}", message);
        std::process::exit(1);
    }
}

fn print_version() {
    println!("dtop {}", env!("CARGO_PKG_VERSION"));
    println!(
        "Platform: {} {}",
        std::env::consts::OS,
        std::env::consts::ARCH
    );
}

async fn run_tui(cli: Cli, mode: ViewMode) -> Result<()> {
    // Load configuration
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default().unwrap_or_default(),
    };

    // Override config with CLI arguments
    let config = apply_cli_overrides(config, &cli);

    init_logging(&config);
    info!("Starting dtop v{}", env!("CARGO_PKG_VERSION"));

    let mut app = App::new(config, mode);
    app.run().await?;

    info!("dtop shutting down gracefully");
    Ok(())
}

/// Log to a file so the TUI is not polluted
fn init_logging(config: &Config) {
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.logging.file)
        .ok();

    if let Some(file) = log_file {
        tracing_subscriber::fmt()
            .with_env_filter(format!("dtop={}", config.logging.level))
            .with_writer(std::sync::Arc::new(file))
            .init();
    } else {
        // If can't open log file, disable logging
        tracing_subscriber::fmt().with_env_filter("off").init();
        warn!("Could not open log file {}", config.logging.file.display());
    }
}

fn apply_cli_overrides(mut config: Config, cli: &Cli) -> Config {
    if let Some(host) = &cli.host {
        config.docker.host = Some(host.clone());
    }
    if cli.all {
        config.docker.all = true;
    }
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    if cli.debug {
        config.logging.level = "debug".to_string();
    }
    config
}

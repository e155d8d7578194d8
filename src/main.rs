//! connwatch binary entry point.
//!
//! Parses startup options, opens the transition journal, and runs the
//! monitor loop until a termination signal arrives.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use connwatch::{HttpProber, Monitor, MonitorConfig, TransitionJournal};
use tokio::sync::broadcast;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// connwatch - internet connectivity transition monitor
#[derive(Parser, Debug)]
#[command(name = "connwatch", version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, env = "CONNWATCH_CONFIG")]
    config: Option<PathBuf>,

    /// Check interval in seconds (overrides config file)
    #[arg(short, long, env = "CONNWATCH_INTERVAL")]
    interval: Option<u64>,

    /// Log file path (overrides config file)
    #[arg(short, long, env = "CONNWATCH_LOGFILE")]
    logfile: Option<PathBuf>,

    /// Print transition messages to stdout (overrides config file)
    #[arg(short, long, env = "CONNWATCH_PRINT")]
    print: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Diagnostics go to stderr; stdout is reserved for echoed transitions.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,connwatch=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // Load configuration (CLI > ENV > config file > defaults)
    let mut config = match cli.config {
        Some(ref path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            MonitorConfig::load(path)?
        }
        None => MonitorConfig::default(),
    };

    if let Some(secs) = cli.interval {
        config.interval = Duration::from_secs(secs);
    }
    if let Some(logfile) = cli.logfile {
        config.log_file = logfile;
    }
    if cli.print {
        config.echo = true;
    }
    config.validate()?;

    tracing::info!(
        "Check interval: {:?}, Log file: {}, Echo: {}",
        config.interval,
        config.log_file.display(),
        config.echo,
    );

    // Fatal if the journal cannot be opened: no probe cycle may run with
    // a broken logging target.
    let journal = TransitionJournal::open(&config.log_file, config.echo)?;
    let prober = HttpProber::new()?;

    if config.echo {
        println!(
            "Monitoring internet connection. Check interval: {:?}, Log file: {}",
            config.interval,
            config.log_file.display(),
        );
    }

    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
    tokio::spawn(async move {
        shutdown_signal().await;
        let _ = shutdown_tx.send(());
    });

    Monitor::new(prober, journal, config.interval)
        .run(shutdown_rx)
        .await;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal");
        }
    }
}

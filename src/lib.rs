//! connwatch - internet connectivity transition monitor.
//!
//! Periodically probes a fixed well-known HTTP endpoint and appends a
//! timestamped line to a log file whenever connectivity flips between
//! connected and disconnected. Optionally mirrors the message to stdout.
//!
//! # Architecture
//!
//! - **[`probe`]**: one-shot HTTP reachability checks
//! - **[`transition`]**: pure connectivity-transition detection
//! - **[`journal`]**: append-only transition log with optional stdout echo
//! - **[`monitor`]**: the probe / detect / record / sleep loop
//! - **[`config`]**: startup configuration with file, env, and CLI layering
//!
//! # Example
//!
//! ```rust,no_run
//! use connwatch::{HttpProber, Monitor, MonitorConfig, TransitionJournal};
//! use tokio::sync::broadcast;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = MonitorConfig::default();
//! let journal = TransitionJournal::open(&config.log_file, config.echo)?;
//! let prober = HttpProber::new()?;
//!
//! let (_shutdown_tx, shutdown_rx) = broadcast::channel(1);
//! Monitor::new(prober, journal, config.interval)
//!     .run(shutdown_rx)
//!     .await;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod journal;
pub mod monitor;
pub mod probe;
pub mod transition;

pub use config::{ConfigError, MonitorConfig, DEFAULT_INTERVAL, DEFAULT_LOG_FILE};
pub use journal::{JournalError, TransitionJournal};
pub use monitor::Monitor;
pub use probe::{HttpProber, ProbeError, Prober, PROBE_TIMEOUT, TEST_URL};
pub use transition::{detect_transition, Transition};

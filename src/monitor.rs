//! Monitoring loop: probe, detect, record, sleep.
//!
//! A single sequential task. The only blocking operations are the probe,
//! bounded by its timeout, and the interval wait. The wait is cancellable
//! so a shutdown signal stops the loop promptly.

use std::time::Duration;

use tokio::sync::broadcast;

use crate::journal::{JournalError, TransitionJournal};
use crate::probe::Prober;
use crate::transition::detect_transition;

/// Drives the probe cycle and owns the connectivity state.
pub struct Monitor<P: Prober> {
    prober: P,
    journal: TransitionJournal,
    interval: Duration,
    connected: bool,
}

impl<P: Prober> Monitor<P> {
    /// Create a monitor.
    ///
    /// The initial state is disconnected, so a first successful probe
    /// records "restored". Literal behavior, preserved: there is no
    /// warm-up probe at startup.
    pub fn new(prober: P, journal: TransitionJournal, interval: Duration) -> Self {
        Self {
            prober,
            journal,
            interval,
            connected: false,
        }
    }

    /// Current connectivity state (true = last probe succeeded).
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Execute one probe cycle: probe, update state, record a transition
    /// if one occurred.
    ///
    /// # Errors
    /// Returns `JournalError` if a transition could not be appended to
    /// the journal. The state is updated regardless.
    pub async fn run_once(&mut self) -> Result<(), JournalError> {
        let result = self.prober.probe().await;
        let (state, transition) = detect_transition(result, self.connected);
        self.connected = state;

        if let Some(transition) = transition {
            tracing::info!(%transition, "connectivity transition");
            self.journal.record(transition)?;
        }
        Ok(())
    }

    /// Run until the shutdown channel fires.
    ///
    /// The wait starts after each cycle's work completes, so the real
    /// period is probe latency plus the configured interval.
    pub async fn run(mut self, mut shutdown: broadcast::Receiver<()>) {
        tracing::info!(interval = ?self.interval, "monitor starting");

        loop {
            if let Err(e) = self.run_once().await {
                tracing::error!(error = %e, "failed to record transition");
            }

            tokio::select! {
                _ = tokio::time::sleep(self.interval) => {}
                _ = shutdown.recv() => {
                    tracing::info!("monitor received shutdown signal, exiting loop");
                    break;
                }
            }
        }
    }
}

impl<P: Prober> std::fmt::Debug for Monitor<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Monitor")
            .field("interval", &self.interval)
            .field("connected", &self.connected)
            .finish_non_exhaustive()
    }
}

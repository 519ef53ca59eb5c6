//! Reporter runtime integration.
//!
//! Bridges the sync game loop with async score submission: submissions are
//! spawned onto a private tokio runtime and never awaited by the caller.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use tokio::runtime::Runtime;
use tokio::task::JoinHandle;

use crate::client::submit_score;
use crate::config::ReporterConfig;

/// Something that accepts final scores.
///
/// Returns true if a submission was dispatched.
pub trait ScoreSink {
    fn report(&mut self, identity: Option<&str>, score: u32) -> bool;

    /// Wait up to `grace` for outstanding submissions before exit.
    fn finish(&mut self, _grace: Duration) {}
}

impl<S: ScoreSink + ?Sized> ScoreSink for Box<S> {
    fn report(&mut self, identity: Option<&str>, score: u32) -> bool {
        (**self).report(identity, score)
    }

    fn finish(&mut self, grace: Duration) {
        (**self).finish(grace)
    }
}

/// A sink that drops everything (reporting disabled).
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ScoreSink for NullSink {
    fn report(&mut self, _identity: Option<&str>, _score: u32) -> bool {
        false
    }
}

/// Fire-and-forget HTTP score reporter.
pub struct ScoreReporter {
    rt: Runtime,
    config: Arc<ReporterConfig>,
    in_flight: Vec<JoinHandle<()>>,
}

impl ScoreReporter {
    pub fn new(config: ReporterConfig) -> std::io::Result<Self> {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("score-reporter")
            .enable_all()
            .build()?;
        Ok(Self {
            rt,
            config: Arc::new(config),
            in_flight: Vec::new(),
        })
    }

    pub fn config(&self) -> &ReporterConfig {
        &self.config
    }

    /// Submissions not yet finished.
    pub fn pending(&mut self) -> usize {
        self.in_flight.retain(|h| !h.is_finished());
        self.in_flight.len()
    }
}

impl ScoreSink for ScoreReporter {
    fn report(&mut self, identity: Option<&str>, score: u32) -> bool {
        let Some(username) = identity.map(str::trim).filter(|s| !s.is_empty()) else {
            debug!("no signed-in player, score {score} not submitted");
            return false;
        };
        if self.config.disabled {
            debug!("score reporting disabled, score {score} not submitted");
            return false;
        }

        let username = username.to_string();
        let config = Arc::clone(&self.config);
        info!("submitting score {score} for {username} to {}", config.endpoint);

        self.in_flight.retain(|h| !h.is_finished());
        let handle = self.rt.spawn(async move {
            match submit_score(&config, &username, score).await {
                Ok(reply) => match reply.message {
                    Some(message) => info!("score server: {message}"),
                    None => info!("score {score} for {username} accepted"),
                },
                Err(err) => warn!("score submission failed: {err}"),
            }
        });
        self.in_flight.push(handle);
        true
    }

    /// Give in-flight submissions up to `grace` to finish; the rest are
    /// abandoned when the reporter is dropped.
    fn finish(&mut self, grace: Duration) {
        let handles = std::mem::take(&mut self.in_flight);
        if handles.is_empty() {
            return;
        }
        let waited = self.rt.block_on(async {
            tokio::time::timeout(grace, async {
                for handle in handles {
                    let _ = handle.await;
                }
            })
            .await
        });
        if waited.is_err() {
            warn!("score submission still pending after {grace:?}, abandoning");
        }
    }
}

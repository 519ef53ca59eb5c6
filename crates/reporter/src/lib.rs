//! Score reporter - best-effort submission of final scores
//!
//! When a game ends, the final score is sent to a remote store together with
//! the signed-in player's name. Reporting is strictly fire-and-forget:
//!
//! - No player signed in: nothing is sent at all
//! - Submissions run on a private tokio runtime; the game loop never waits
//! - Failures (connect, timeout, bad status) are logged and dropped, never
//!   retried, and never touch game state
//!
//! # Wire format
//!
//! ```text
//! POST /api/save-score HTTP/1.1
//! Host: localhost:3000
//! Content-Type: application/json
//!
//! {"username":"mai","score":2048}
//! ```
//!
//! A JSON reply with a `message` field is logged.
//!
//! # Environment Variables
//!
//! - `TUI_2048_SCORE_URL`: endpoint (default `http://localhost:3000/api/save-score`)
//! - `TUI_2048_REPORT_TIMEOUT_MS`: per-submission timeout (default 5000)
//! - `TUI_2048_REPORT_DISABLED`: set to "1" or "true" to disable reporting
//! - `TUI_2048_USER`: the signed-in player

pub mod client;
pub mod config;
pub mod error;
pub mod runtime;

pub use client::{submit_score, Endpoint, ScorePayload, ServerReply};
pub use config::{identity_from_env, ReporterConfig, DEFAULT_SCORE_URL};
pub use error::ReportError;
pub use runtime::{NullSink, ScoreReporter, ScoreSink};

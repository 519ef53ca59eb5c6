//! Reporter configuration from the environment.

use std::env;
use std::time::Duration;

pub const DEFAULT_SCORE_URL: &str = "http://localhost:3000/api/save-score";
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;

/// Where and how final scores are submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReporterConfig {
    /// Full `http://` URL of the score endpoint.
    pub endpoint: String,
    /// Upper bound for one submission, connect through response body.
    pub timeout: Duration,
    /// Skip every submission.
    pub disabled: bool,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_SCORE_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            disabled: false,
        }
    }
}

impl ReporterConfig {
    /// Read `TUI_2048_SCORE_URL`, `TUI_2048_REPORT_TIMEOUT_MS` and
    /// `TUI_2048_REPORT_DISABLED`, falling back to defaults.
    pub fn from_env() -> Self {
        let endpoint = env::var("TUI_2048_SCORE_URL")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SCORE_URL.to_string());

        let timeout_ms = env::var("TUI_2048_REPORT_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        Self {
            endpoint,
            timeout: Duration::from_millis(timeout_ms),
            disabled: Self::is_disabled(),
        }
    }

    /// `TUI_2048_REPORT_DISABLED` set to `1` or `true`.
    pub fn is_disabled() -> bool {
        env::var("TUI_2048_REPORT_DISABLED")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    }
}

/// The signed-in player, from `TUI_2048_USER`. Blank counts as absent.
pub fn identity_from_env() -> Option<String> {
    env::var("TUI_2048_USER")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

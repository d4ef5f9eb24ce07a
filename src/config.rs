//! Application defaults and environment overrides.
//!
//! Overrides are read from the process environment, which `main` populates
//! from a `.env` file via `dotenv` before anything else runs.

use std::time::Duration;

/// Prefix offered when interface detection fails.
pub const DEFAULT_PREFIX: u8 = 24;

/// Address returned when no local IPv4 address can be discovered.
pub const FALLBACK_ADDRESS: &str = "127.0.0.1";

/// UDP "connect" target used to learn the primary local address. No packet is sent.
pub const PROBE_TARGET: &str = "8.8.8.8:80";

/// Upper bound for a single `ip`/`ifconfig`/`ipconfig` run.
pub const COMMAND_TIMEOUT: Duration = Duration::from_secs(10);

/// Tool output above this size is rejected.
pub const MAX_COMMAND_OUTPUT: usize = 500_000;

/// Poll interval while waiting on a child process.
pub const COMMAND_POLL_MSEC: u64 = 20;

/// Base of the documentation links embedded in classification comments.
pub const REPO_URL: &str = "https://github.com/lancalc/lancalc";

/// Default log4rs configuration file.
pub const LOG_CONFIG_FILE: &str = "log4rs.yml";

pub const ENV_LOG_CONFIG: &str = "LANCALC_LOG_CONFIG";
pub const ENV_COMMAND_TIMEOUT: &str = "LANCALC_COMMAND_TIMEOUT_SECS";

/// Path of the log4rs YAML file, honouring `LANCALC_LOG_CONFIG`.
pub fn log_config_file() -> String {
    std::env::var(ENV_LOG_CONFIG)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| LOG_CONFIG_FILE.to_string())
}

/// Subprocess timeout, honouring `LANCALC_COMMAND_TIMEOUT_SECS`.
pub fn command_timeout() -> Duration {
    parse_timeout(std::env::var(ENV_COMMAND_TIMEOUT).ok().as_deref())
}

fn parse_timeout(value: Option<&str>) -> Duration {
    match value.map(|v| v.trim().parse::<u64>()) {
        Some(Ok(secs)) if secs > 0 => Duration::from_secs(secs),
        Some(_) => {
            log::warn!("Ignoring invalid {ENV_COMMAND_TIMEOUT}={:?}", value);
            COMMAND_TIMEOUT
        }
        None => COMMAND_TIMEOUT,
    }
}

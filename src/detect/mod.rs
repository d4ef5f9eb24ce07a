//! Best-effort detection of the local interface prefix.
//!
//! - [`command`] - Running system tools with a timeout
//! - [`local_ip`] - Primary local address discovery
//! - [`linux`], [`macos`], [`windows`] - Per-platform output parsers
//!
//! Detection never fails: any problem falls back to `/24`.

mod command;
pub mod linux;
mod local_ip;
pub mod macos;
pub mod windows;

pub use command::run;
pub use local_ip::local_ip;

use crate::config::{self, DEFAULT_PREFIX};
use crate::error::Result;
use crate::processing::cidr_from_netmask;
use regex::Regex;
use std::time::Duration;

/// Lines after the address line searched for its netmask.
const MASK_SEARCH_WINDOW: usize = 4;

/// Source of a best-guess prefix length for a local address.
pub trait DetectPrefix {
    /// Prefix in 0..=32 for `address`; never fails.
    fn detect_prefix(&self, address: &str) -> u8;

    /// Primary local IPv4 address to run detection against.
    fn local_address(&self) -> String {
        local_ip()
    }
}

/// Platform-specific detector, chosen once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixDetector {
    Windows,
    MacOs,
    Linux,
    Unknown,
}

impl PrefixDetector {
    /// Detector for the platform this binary was built for.
    pub fn current() -> PrefixDetector {
        if cfg!(target_os = "windows") {
            PrefixDetector::Windows
        } else if cfg!(target_os = "macos") {
            PrefixDetector::MacOs
        } else if cfg!(target_os = "linux") {
            PrefixDetector::Linux
        } else {
            PrefixDetector::Unknown
        }
    }

    /// Run the platform tools; `Ok(None)` when they ran but told us nothing.
    pub fn try_detect(&self, address: &str, timeout: Duration) -> Result<Option<u8>> {
        match self {
            PrefixDetector::Windows => windows::detect(address, timeout),
            PrefixDetector::MacOs => macos::detect(address, timeout),
            PrefixDetector::Linux | PrefixDetector::Unknown => linux::detect(address, timeout),
        }
    }
}

impl DetectPrefix for PrefixDetector {
    fn detect_prefix(&self, address: &str) -> u8 {
        match self.try_detect(address, config::command_timeout()) {
            Ok(Some(prefix)) => {
                log::debug!("{self:?} detected /{prefix} for {address}");
                prefix
            }
            Ok(None) => {
                log::info!("No prefix found for {address}, using /{DEFAULT_PREFIX}");
                DEFAULT_PREFIX
            }
            Err(e) => {
                log::error!("{self:?} CIDR detection failed: {e}");
                DEFAULT_PREFIX
            }
        }
    }
}

/// Scan the lines following each line that mentions `ip` for `keyword`
/// and convert the dotted mask captured by `mask_re`.
pub(crate) fn netmask_after_address(
    output: &str,
    ip: &str,
    keyword: &str,
    mask_re: &Regex,
) -> Option<u8> {
    let lines: Vec<&str> = output.lines().collect();
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.contains(ip))
        .find_map(|(i, _)| {
            lines
                .iter()
                .skip(i + 1)
                .take(MASK_SEARCH_WINDOW)
                .filter(|line| line.contains(keyword))
                .filter_map(|line| mask_re.captures(line))
                .find_map(|caps| cidr_from_netmask(caps.get(1)?.as_str()).ok())
        })
}

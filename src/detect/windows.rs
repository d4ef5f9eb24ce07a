//! Prefix detection from `ipconfig` output.

use super::command::run;
use super::netmask_after_address;
use crate::error::Result;
use regex::Regex;
use std::sync::OnceLock;
use std::time::Duration;

static MASK_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_mask_regex() -> &'static Regex {
    MASK_REGEX.get_or_init(|| Regex::new(r"(\d+\.\d+\.\d+\.\d+)").expect("Invalid Regex"))
}

pub fn detect(ip: &str, timeout: Duration) -> Result<Option<u8>> {
    let output = run("ipconfig", timeout)?;
    Ok(prefix_from_ipconfig(&output, ip))
}

/// Find the `Subnet Mask` line printed just below `ip`.
pub fn prefix_from_ipconfig(output: &str, ip: &str) -> Option<u8> {
    netmask_after_address(output, ip, "Subnet Mask", get_mask_regex())
}

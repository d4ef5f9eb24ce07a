//! Prefix detection from `ifconfig` output.

use super::command::run;
use super::netmask_after_address;
use crate::error::Result;
use crate::processing::cidr_from_netmask;
use regex::Regex;
use std::net::Ipv4Addr;
use std::sync::OnceLock;
use std::time::Duration;

static NETMASK_REGEX: OnceLock<Regex> = OnceLock::new();
static HEX_NETMASK_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_netmask_regex() -> &'static Regex {
    NETMASK_REGEX
        .get_or_init(|| Regex::new(r"netmask (\d+\.\d+\.\d+\.\d+)").expect("Invalid Regex"))
}

fn get_hex_netmask_regex() -> &'static Regex {
    HEX_NETMASK_REGEX
        .get_or_init(|| Regex::new(r"netmask 0x([0-9a-fA-F]{8})\b").expect("Invalid Regex"))
}

pub fn detect(ip: &str, timeout: Duration) -> Result<Option<u8>> {
    let output = run("ifconfig", timeout)?;
    Ok(prefix_from_ifconfig(&output, ip))
}

/// Netmask of the `inet` line for `ip`.
///
/// BSD `ifconfig` prints `netmask 0xffffff00` on the address line; a dotted
/// `netmask` within the following lines is accepted as well.
pub fn prefix_from_ifconfig(output: &str, ip: &str) -> Option<u8> {
    output
        .lines()
        .filter(|line| line.split_whitespace().any(|word| word == ip))
        .find_map(hex_netmask_prefix)
        .or_else(|| netmask_after_address(output, ip, "netmask", get_netmask_regex()))
}

fn hex_netmask_prefix(line: &str) -> Option<u8> {
    let caps = get_hex_netmask_regex().captures(line)?;
    let bits = u32::from_str_radix(&caps[1], 16).ok()?;
    cidr_from_netmask(&Ipv4Addr::from(bits).to_string()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_from_ifconfig_dotted() {
        let output = "en0: flags=8863<UP,BROADCAST,RUNNING> mtu 1500
\tinet 192.168.50.7
\tnetmask 255.255.255.128 broadcast 192.168.50.127
\tstatus: active
";
        assert_eq!(prefix_from_ifconfig(output, "192.168.50.7"), Some(25));
    }

    #[test]
    fn test_prefix_from_ifconfig_hex_mask() {
        let output = "lo0: flags=8049<UP,LOOPBACK,RUNNING,MULTICAST> mtu 16384
\tinet 127.0.0.1 netmask 0xff000000
en0: flags=8863<UP,BROADCAST,SMART,RUNNING,SIMPLEX,MULTICAST> mtu 1500
\tinet6 fe80::10c5:7f2a:9b1e:3d4c%en0 prefixlen 64 secured scopeid 0x6
\tinet 192.168.50.7 netmask 0xfffff000 broadcast 192.168.63.255
\tstatus: active
";
        assert_eq!(prefix_from_ifconfig(output, "192.168.50.7"), Some(20));
        assert_eq!(prefix_from_ifconfig(output, "127.0.0.1"), Some(8));
        assert_eq!(prefix_from_ifconfig(output, "192.168.50.70"), None);
    }
}

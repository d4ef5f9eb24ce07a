//! Prefix detection from the Linux routing table (`ip route`).

use super::command::run;
use crate::config::DEFAULT_PREFIX;
use crate::error::Result;
use crate::models::MAX_LENGTH;
use itertools::Itertools;
use regex::Regex;
use std::sync::OnceLock;
use std::time::Duration;

static PREFIX_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_prefix_regex() -> &'static Regex {
    PREFIX_REGEX.get_or_init(|| Regex::new(r"/(\d+)").expect("Invalid Regex"))
}

pub fn detect(ip: &str, timeout: Duration) -> Result<Option<u8>> {
    match run(&format!("ip route get {ip}"), timeout) {
        Ok(route_get) if has_source_route(&route_get, ip) => {
            let routes = run("ip route show", timeout)?;
            if let Some(prefix) = prefix_for_address(&routes, ip) {
                return Ok(Some(prefix));
            }
        }
        Ok(_) => log::debug!("no src route for {ip}"),
        Err(e) => log::debug!("ip route get {ip} failed: {e}"),
    }

    let routes = run("ip route show", timeout)?;
    Ok(prefix_via_default_gateway(&routes))
}

/// `ip route get` names the address as the route source.
pub fn has_source_route(route_get: &str, ip: &str) -> bool {
    route_get
        .lines()
        .any(|line| line.contains("src") && line.contains(ip))
}

fn first_three_octets(s: &str) -> Vec<&str> {
    s.split('.').take(3).collect()
}

/// Prefix of the first route whose destination shares the first three octets with `ip`.
pub fn prefix_for_address(routes: &str, ip: &str) -> Option<u8> {
    let wanted = first_three_octets(ip);
    routes
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter(|line| {
            line.split_whitespace()
                .next()
                .map(|dest| first_three_octets(dest) == wanted)
                .unwrap_or(false)
        })
        .find_map(route_prefix)
}

/// Prefix of the connected route that holds the default gateway.
pub fn prefix_via_default_gateway(routes: &str) -> Option<u8> {
    let default_route = routes
        .lines()
        .find(|line| !line.trim().is_empty() && line.contains("default"))?;
    let (_, gateway) = default_route
        .split_whitespace()
        .tuple_windows()
        .find(|(word, _)| *word == "via")?;
    log::debug!("default gateway {gateway}");
    prefix_for_address(routes, gateway)
}

/// `/N` of a route line; an `N` outside 0..=32 gives `DEFAULT_PREFIX`.
fn route_prefix(line: &str) -> Option<u8> {
    let caps = get_prefix_regex().captures(line)?;
    match caps[1].parse::<u8>() {
        Ok(prefix) if prefix <= MAX_LENGTH => Some(prefix),
        _ => {
            log::warn!("Route prefix /{} out of range, using /{DEFAULT_PREFIX}", &caps[1]);
            Some(DEFAULT_PREFIX)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROUTE_GET: &str =
        "192.168.1.100 dev wlp2s0 src 192.168.1.100 uid 1000 \n    cache <local> \n";

    const ROUTES: &str = "default via 192.168.1.1 dev wlp2s0 proto dhcp metric 600
172.17.0.0/16 dev docker0 proto kernel scope link src 172.17.0.1 linkdown
192.168.1.0/24 dev wlp2s0 proto kernel scope link src 192.168.1.100 metric 600
";

    #[test]
    fn test_has_source_route() {
        assert!(has_source_route(ROUTE_GET, "192.168.1.100"));
        assert!(!has_source_route(ROUTE_GET, "10.0.0.5"));
        assert!(!has_source_route("", "192.168.1.100"));
    }

    #[test]
    fn test_prefix_for_address() {
        assert_eq!(prefix_for_address(ROUTES, "192.168.1.100"), Some(24));
        assert_eq!(prefix_for_address(ROUTES, "172.17.0.1"), Some(16));
        assert_eq!(prefix_for_address(ROUTES, "10.8.0.2"), None);
    }

    #[test]
    fn test_prefix_via_default_gateway() {
        assert_eq!(prefix_via_default_gateway(ROUTES), Some(24));
        assert_eq!(
            prefix_via_default_gateway("10.0.0.0/8 dev eth0 scope link\n"),
            None
        );
        assert_eq!(
            prefix_via_default_gateway("default dev ppp0 scope link\n"),
            None
        );
    }

    #[test]
    fn test_out_of_range_prefix_uses_default() {
        let routes = "10.1.2.0/64 dev tun0\n10.1.2.0/23 dev eth1\n";
        assert_eq!(prefix_for_address(routes, "10.1.2.9"), Some(DEFAULT_PREFIX));
        assert_eq!(route_prefix("10.1.2.0/4096 dev tun0"), Some(DEFAULT_PREFIX));
        assert_eq!(route_prefix("10.1.2.0/0 dev tun0"), Some(0));
        assert_eq!(route_prefix("10.1.2.0 dev tun0"), None);
    }
}

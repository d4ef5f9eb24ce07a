//! Subnet computation: network, broadcast, host range and host count.

use super::classify::{classify, is_special};
use super::parser::{parse_cidr, validate_ip};
use crate::error::Result;
use crate::models::{
    offset_addr, Ipv4, ResultKind, SubnetResult, HOSTS_POINT_TO_POINT, HOSTS_SINGLE, SENTINEL,
};

/// Compute subnet information for an address and prefix length.
///
/// Host bits in `ip` are cleared to find the network. Special-use ranges
/// produce an `info` result with sentinel host fields, except loopback
/// which keeps a real host range.
///
/// # Examples
/// ```
/// let res = lancalc::compute("192.168.1.1", 24).unwrap();
/// assert_eq!(res.network, "192.168.1.0");
/// assert_eq!(res.hosts, "254");
/// ```
pub fn compute(ip: &str, prefix: u8) -> Result<SubnetResult> {
    log::debug!("compute({ip}, {prefix})");

    let ipv4 = validate_ip(ip)
        .and_then(|addr| Ipv4::from_parts(addr, prefix))
        .map_err(|e| {
            log::error!("Error in compute: {e}");
            e
        })?;
    let network = ipv4.network();
    let special = is_special(&network);
    let comment = if special {
        classify(&network).map(|c| c.comment()).unwrap_or_default()
    } else {
        String::new()
    };

    let result = if special {
        special_result(&network, comment)
    } else {
        normal_result(&network, comment)
    };
    log::debug!(
        "{network} -> kind={kind} hosts={hosts}",
        kind = result.kind,
        hosts = result.hosts
    );
    Ok(result)
}

/// Parse `address/prefix` and compute its subnet information.
pub fn compute_from_cidr(cidr: &str) -> Result<SubnetResult> {
    let (ip, prefix) = parse_cidr(cidr)?;
    compute(&ip, prefix)
}

fn special_result(network: &Ipv4, comment: String) -> SubnetResult {
    let (hostmin, hostmax, hosts) = if network.lo().octets()[0] == 127 {
        // loopback keeps the plain arithmetic, even where it goes negative on /31 and /32
        (
            offset_addr(network.lo(), 1).to_string(),
            offset_addr(network.hi(), -1).to_string(),
            (network.num_addresses() as i64 - 2).to_string(),
        )
    } else {
        (SENTINEL.to_string(), SENTINEL.to_string(), SENTINEL.to_string())
    };

    SubnetResult {
        network: network.lo().to_string(),
        prefix: format!("/{}", network.mask()),
        netmask: network.netmask().to_string(),
        broadcast: SENTINEL.to_string(),
        hostmin,
        hostmax,
        hosts,
        comment,
        kind: ResultKind::Info,
    }
}

fn normal_result(network: &Ipv4, comment: String) -> SubnetResult {
    let (hostmin, hostmax, hosts) = match network.mask() {
        31 => (network.lo(), network.hi(), HOSTS_POINT_TO_POINT.to_string()),
        32 => (network.lo(), network.lo(), HOSTS_SINGLE.to_string()),
        _ => (
            offset_addr(network.lo(), 1),
            offset_addr(network.hi(), -1),
            (network.num_addresses() - 2).to_string(),
        ),
    };

    SubnetResult {
        network: network.lo().to_string(),
        prefix: format!("/{}", network.mask()),
        netmask: network.netmask().to_string(),
        broadcast: network.hi().to_string(),
        hostmin: hostmin.to_string(),
        hostmax: hostmax.to_string(),
        hosts,
        comment,
        kind: ResultKind::Normal,
    }
}

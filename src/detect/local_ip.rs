//! Primary local IPv4 address discovery.

use crate::config::{FALLBACK_ADDRESS, PROBE_TARGET};
use crate::error::{LanCalcError, Result};
use std::net::{IpAddr, Ipv4Addr, SocketAddr, ToSocketAddrs, UdpSocket};

/// Return the primary local IPv4 address.
///
/// A UDP socket is "connected" to a public address so the OS picks the
/// outgoing interface; nothing is sent. Falls back to resolving the host
/// name, then to `127.0.0.1`.
pub fn local_ip() -> String {
    match probe_route_source() {
        Ok(ip) => return ip.to_string(),
        Err(e) => log::error!("Local address probe failed: {e}"),
    }
    match resolve_hostname() {
        Ok(ip) => ip.to_string(),
        Err(e) => {
            log::error!("Hostname resolution failed: {e}");
            FALLBACK_ADDRESS.to_string()
        }
    }
}

fn probe_route_source() -> Result<Ipv4Addr> {
    let socket = UdpSocket::bind(("0.0.0.0", 0))?;
    socket.connect(PROBE_TARGET)?;
    match socket.local_addr()? {
        SocketAddr::V4(addr) if !addr.ip().is_unspecified() => Ok(*addr.ip()),
        other => Err(LanCalcError::Io(format!("unexpected local address {other}"))),
    }
}

fn resolve_hostname() -> Result<Ipv4Addr> {
    let host = system_hostname()?;
    log::debug!("resolving host name {host}");
    first_ipv4((host.as_str(), 0).to_socket_addrs()?)
        .ok_or_else(|| LanCalcError::Io(format!("no IPv4 address for {host}")))
}

/// Host name as reported by the OS, not the shell environment.
fn system_hostname() -> Result<String> {
    let host = gethostname::gethostname().to_string_lossy().into_owned();
    if host.is_empty() {
        return Err(LanCalcError::Io("host name not set".to_string()));
    }
    Ok(host)
}

fn first_ipv4(addrs: impl Iterator<Item = SocketAddr>) -> Option<Ipv4Addr> {
    addrs.map(|a| a.ip()).find_map(|ip| match ip {
        IpAddr::V4(v4) => Some(v4),
        IpAddr::V6(_) => None,
    })
}

//! Conversions between dotted netmasks and prefix lengths.

use crate::error::{LanCalcError, Result};
use crate::models::{netmask_addr, MAX_LENGTH};

/// Convert a dotted netmask such as `255.255.240.0` to its prefix length.
///
/// The mask must be four octets forming a run of 1 bits followed by a run
/// of 0 bits.
pub fn cidr_from_netmask(mask: &str) -> Result<u8> {
    let invalid = || LanCalcError::InvalidNetmask(mask.to_string());

    let octets = mask
        .split('.')
        .map(|p| p.trim().parse::<u8>())
        .collect::<std::result::Result<Vec<u8>, _>>()
        .map_err(|e| {
            log::debug!("netmask {mask:?} rejected: {e}");
            invalid()
        })?;
    let octets: [u8; 4] = octets.try_into().map_err(|_| {
        log::debug!("netmask {mask:?} rejected: expected 4 octets");
        invalid()
    })?;

    let bits = u32::from_be_bytes(octets);
    if bits.leading_ones() + bits.trailing_zeros() != MAX_LENGTH as u32 {
        log::debug!("netmask {mask:?} rejected: bits {bits:032b} not contiguous");
        return Err(invalid());
    }

    Ok(bits.count_ones() as u8)
}

/// Dotted-decimal netmask for a prefix length.
pub fn netmask_from_prefix(prefix: u8) -> Result<String> {
    Ok(netmask_addr(prefix)?.to_string())
}

/// Every prefix from /0 to /32 paired with its netmask.
pub fn netmask_table() -> Vec<(u8, String)> {
    (0..=MAX_LENGTH)
        .filter_map(|p| netmask_from_prefix(p).ok().map(|m| (p, m)))
        .collect()
}

//! CIDR text parsing and input validation.

use crate::error::{LanCalcError, Result};
use crate::models::MAX_LENGTH;
use std::net::Ipv4Addr;

/// Validate a dotted-quad IPv4 address.
///
/// Exactly four decimal octets in 0-255 are accepted; surrounding
/// whitespace and octal-looking leading zeros are not.
pub fn validate_ip(ip: &str) -> Result<Ipv4Addr> {
    ip.parse::<Ipv4Addr>()
        .map_err(|_| LanCalcError::InvalidAddress(ip.to_string()))
}

/// Validate a prefix length given as text, returning it as an integer.
pub fn validate_prefix(prefix: &str) -> Result<u8> {
    let value: i64 = prefix
        .trim()
        .parse()
        .map_err(|_| LanCalcError::InvalidPrefix(prefix.to_string()))?;
    if (0..=MAX_LENGTH as i64).contains(&value) {
        Ok(value as u8)
    } else {
        Err(LanCalcError::InvalidPrefix(prefix.to_string()))
    }
}

/// Split `address/prefix` into an address and a validated prefix.
///
/// The address is validated as given, so surrounding whitespace on it is
/// rejected as invalid; the prefix may be padded.
///
/// # Examples
/// ```
/// use lancalc::processing::parse_cidr;
/// assert_eq!(parse_cidr("10.0.0.1/8").unwrap(), ("10.0.0.1".to_string(), 8));
/// ```
pub fn parse_cidr(cidr: &str) -> Result<(String, u8)> {
    if !cidr.contains('/') {
        return Err(LanCalcError::format("Missing '/' separator"));
    }
    let parts: Vec<&str> = cidr.split('/').collect();
    if parts.len() != 2 {
        return Err(LanCalcError::format(format!("Invalid CIDR format: {cidr}")));
    }

    validate_ip(parts[0])?;
    let prefix = validate_prefix(parts[1])?;

    Ok((parts[0].trim().to_string(), prefix))
}

//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4`] for an (address, prefix) pair along with the bit
//! arithmetic used to derive network, broadcast and netmask values.

use crate::error::{LanCalcError, Result};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

fn check_len(len: u8) -> Result<()> {
    if len > MAX_LENGTH {
        Err(LanCalcError::InvalidPrefix(len.to_string()))
    } else {
        Ok(())
    }
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use lancalc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32> {
    check_len(len)?;
    Ok(mask_for_len(len))
}

/// Mask for a length already known to be at most `MAX_LENGTH`.
fn mask_for_len(len: u8) -> u32 {
    let right_len = MAX_LENGTH - len;
    let all_bits = u32::MAX as u64;

    ((all_bits >> right_len) << right_len) as u32
}

/// Dotted-decimal netmask for a prefix length, e.g. `/20` -> `255.255.240.0`.
pub fn netmask_addr(len: u8) -> Result<Ipv4Addr> {
    Ok(Ipv4Addr::from(get_cidr_mask(len)?))
}

/// Address `offset` positions away, wrapping around the 32-bit space.
pub fn offset_addr(addr: Ipv4Addr, offset: i64) -> Ipv4Addr {
    Ipv4Addr::from((u32::from(addr) as i64).wrapping_add(offset) as u32)
}

/// IPv4 address with a validated prefix length.
///
/// The address may carry host bits; [`Ipv4::network`] clears them.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    addr: Ipv4Addr,
    mask: u8,
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    pub fn new(addr_cidr: &str) -> Result<Ipv4> {
        addr_cidr.parse()
    }

    pub fn from_parts(addr: Ipv4Addr, mask: u8) -> Result<Ipv4> {
        check_len(mask)?;
        Ok(Ipv4 { addr, mask })
    }

    pub fn mask(&self) -> u8 {
        self.mask
    }

    /// The same prefix with host bits cleared.
    pub fn network(&self) -> Ipv4 {
        Ipv4 {
            addr: self.lo(),
            mask: self.mask,
        }
    }

    fn mask_bits(&self) -> u32 {
        // mask is checked on construction
        mask_for_len(self.mask)
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) & self.mask_bits())
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) | !self.mask_bits())
    }

    pub fn netmask(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.mask_bits())
    }

    pub fn num_addresses(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.mask)
    }

    /// True when this network lies entirely inside `other`.
    pub fn subnet_of(&self, other: &Ipv4) -> bool {
        self.mask >= other.mask && other.network().contains(self.lo())
    }

    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        u32::from(addr) & self.mask_bits() == u32::from(self.lo())
    }
}

impl FromStr for Ipv4 {
    type Err = LanCalcError;

    fn from_str(s: &str) -> Result<Ipv4> {
        let (addr, mask) = crate::processing::parse_cidr(s)?;
        let addr: Ipv4Addr = addr
            .parse()
            .map_err(|_| LanCalcError::InvalidAddress(addr.clone()))?;
        Ipv4::from_parts(addr, mask)
    }
}

impl fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

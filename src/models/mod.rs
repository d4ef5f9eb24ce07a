//! Domain models for subnet calculations.
//!
//! - [`Ipv4`] - IPv4 address with CIDR notation support
//! - [`SubnetResult`] - the record returned by a subnet computation

mod ipv4;
mod subnet_result;

// Re-export public types
pub use ipv4::{get_cidr_mask, netmask_addr, offset_addr, Ipv4, MAX_LENGTH};
pub use subnet_result::{
    ResultKind, SubnetResult, HOSTS_POINT_TO_POINT, HOSTS_SINGLE, SENTINEL,
};

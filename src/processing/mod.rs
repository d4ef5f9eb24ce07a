//! Subnet calculation logic.
//!
//! - [`parser`] - CIDR text parsing and validation
//! - [`netmask`] - Netmask/prefix conversion
//! - [`classify`] - Special-use range detection and RFC labels
//! - [`compute`] - Subnet computation

mod classify;
mod compute;
mod netmask;
mod parser;

// Re-export public functions
pub use classify::{
    classify, classify_ipv4_range, is_special, is_special_range, split_comment, Classification,
    SPECIAL_RANGES,
};
pub use compute::{compute, compute_from_cidr};
pub use netmask::{cidr_from_netmask, netmask_from_prefix, netmask_table};
pub use parser::{parse_cidr, validate_ip, validate_prefix};

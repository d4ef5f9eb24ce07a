//! LanCalc: IPv4 subnet calculator.
//!
//! Computes network, broadcast, host range and netmask for an
//! `address/prefix` pair, labels special-use ranges with their RFC, and
//! guesses the prefix of the local interface.

pub mod cli;
pub mod config;
pub mod detect;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use detect::{DetectPrefix, PrefixDetector};
pub use error::{LanCalcError, Result};
pub use models::{ResultKind, SubnetResult};
pub use processing::{cidr_from_netmask, compute, compute_from_cidr, parse_cidr};

//! Subnet calculation result model.

use serde::Serialize;
use std::fmt;

/// Placeholder for fields that carry no ordinary value in a given branch.
pub const SENTINEL: &str = "*";
/// Host count of a /31 point-to-point link.
pub const HOSTS_POINT_TO_POINT: &str = "2*";
/// Host count of a single-address /32.
pub const HOSTS_SINGLE: &str = "1*";

/// Distinguishes ordinary networks from special-use ranges.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Normal,
    Info,
}

impl ResultKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultKind::Normal => "normal",
            ResultKind::Info => "info",
        }
    }
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything derived from one (address, prefix) pair.
///
/// All fields are strings: the host fields may hold sentinels such as
/// `"*"`, `"1*"` or `"2*"`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetResult {
    pub network: String,
    /// Formatted as `/N`.
    pub prefix: String,
    pub netmask: String,
    pub broadcast: String,
    pub hostmin: String,
    pub hostmax: String,
    pub hosts: String,
    /// RFC citation for special ranges, empty otherwise.
    pub comment: String,
    pub kind: ResultKind,
}

impl SubnetResult {
    pub fn is_special(&self) -> bool {
        self.kind == ResultKind::Info
    }

    /// `(label, value)` pairs in display order, comment excluded.
    pub fn fields(&self) -> [(&'static str, &str); 7] {
        [
            ("network", self.network.as_str()),
            ("prefix", self.prefix.as_str()),
            ("netmask", self.netmask.as_str()),
            ("broadcast", self.broadcast.as_str()),
            ("hostmin", self.hostmin.as_str()),
            ("hostmax", self.hostmax.as_str()),
            ("hosts", self.hosts.as_str()),
        ]
    }
}

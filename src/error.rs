//! Error types for subnet calculations.

use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LanCalcError>;

/// Errors raised while validating input or probing the local system.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LanCalcError {
    /// Missing or malformed `/` separator in CIDR text.
    #[error("{0}")]
    Format(String),

    /// Address is not four dot-separated octets in 0-255.
    #[error("Invalid IP address: {0}")]
    InvalidAddress(String),

    /// Prefix is not an integer or lies outside 0-32.
    #[error("Invalid prefix: {0}")]
    InvalidPrefix(String),

    /// Netmask has the wrong arity or a non-contiguous bit pattern.
    #[error("Invalid netmask: {0}")]
    InvalidNetmask(String),

    /// External tool failed, timed out or produced unusable output.
    #[error("Command failed: {0}")]
    Command(String),

    /// I/O failure while spawning a tool or opening a socket.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for LanCalcError {
    fn from(e: std::io::Error) -> Self {
        LanCalcError::Io(e.to_string())
    }
}

impl LanCalcError {
    pub fn format<S: Into<String>>(msg: S) -> Self {
        LanCalcError::Format(msg.into())
    }

    pub fn command<S: Into<String>>(msg: S) -> Self {
        LanCalcError::Command(msg.into())
    }

    /// True for the four validation kinds, which callers report as user errors.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            LanCalcError::Format(_)
                | LanCalcError::InvalidAddress(_)
                | LanCalcError::InvalidPrefix(_)
                | LanCalcError::InvalidNetmask(_)
        )
    }
}

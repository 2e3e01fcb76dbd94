//! Unified error type for the nucled-lib crate.
//!
//! [`NucLedError`] wraps the module-specific errors (`WmiError`,
//! `ParseError`) and domain-specific kinds (`Io`, `Config`). `From`
//! impls allow `?` to propagate across module boundaries seamlessly.

use std::fmt;

use crate::command::ParseError;
use crate::wmi::WmiError;

/// Unified error type for nucled-lib operations.
#[derive(Debug)]
pub enum NucLedError {
    /// Transport error: the WMI call produced no usable output buffer.
    Wmi(WmiError),
    /// Input error: the command string was rejected before any call.
    Parse(ParseError),
    /// Standard I/O error (config persistence).
    Io(std::io::Error),
    /// Configuration validation error.
    Config(String),
}

impl fmt::Display for NucLedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NucLedError::Wmi(e) => write!(f, "{e}"),
            NucLedError::Parse(e) => write!(f, "invalid command: {e}"),
            NucLedError::Io(e) => write!(f, "I/O error: {e}"),
            NucLedError::Config(e) => write!(f, "Config error: {e}"),
        }
    }
}

impl std::error::Error for NucLedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NucLedError::Wmi(e) => Some(e),
            NucLedError::Parse(e) => Some(e),
            NucLedError::Io(e) => Some(e),
            NucLedError::Config(_) => None,
        }
    }
}

impl From<WmiError> for NucLedError {
    fn from(e: WmiError) -> Self {
        NucLedError::Wmi(e)
    }
}

impl From<ParseError> for NucLedError {
    fn from(e: ParseError) -> Self {
        NucLedError::Parse(e)
    }
}

impl From<std::io::Error> for NucLedError {
    fn from(e: std::io::Error) -> Self {
        NucLedError::Io(e)
    }
}

/// Crate-level Result alias using [`NucLedError`].
pub type Result<T> = std::result::Result<T, NucLedError>;

//! Crate-level error types.

use std::fmt;

/// Errors produced by the vitrine crate.
#[derive(Debug)]
pub enum VitrineError {
    /// Rejected configuration (empty item list, bad spring coefficients).
    InvalidConfig(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for VitrineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(msg) => {
                write!(f, "invalid configuration: {msg}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for VitrineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::InvalidConfig(_) | Self::OptionsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for VitrineError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

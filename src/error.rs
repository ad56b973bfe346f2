// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The notification API was used without a mounted toast provider.
    ProviderNotMounted,
    /// A toast kind name did not match any known kind.
    InvalidKind(String),
    /// A position name did not match any of the six anchors.
    InvalidPosition(String),
    Io(String),
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ProviderNotMounted => {
                write!(f, "use_notify must be called within a mounted ToastProvider")
            }
            Error::InvalidKind(name) => write!(
                f,
                "Invalid toast kind '{}' (expected success, error, warning or info)",
                name
            ),
            Error::InvalidPosition(name) => write!(
                f,
                "Invalid toast position '{}' (expected top-left, top-right, top-center, \
                 bottom-left, bottom-right or bottom-center)",
                name
            ),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Locale(BundleLoadError),
}

/// Failure modes of a translation-bundle fetch.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BundleLoadError {
    /// The request never produced a response (DNS, connect, TLS, ...).
    Network(String),

    /// The server answered with a non-success status code.
    Status(u16),

    /// The response body was not a key-to-string mapping.
    Malformed(String),
}

impl BundleLoadError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            BundleLoadError::Network(_) => "error-locale-load-network",
            BundleLoadError::Status(_) => "error-locale-load-status",
            BundleLoadError::Malformed(_) => "error-locale-load-malformed",
        }
    }

    /// Whether the server reported that no bundle exists for the requested
    /// locale tag.
    pub fn is_not_found(&self) -> bool {
        matches!(self, BundleLoadError::Status(404))
    }
}

impl fmt::Display for BundleLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BundleLoadError::Network(msg) => write!(f, "Network error: {}", msg),
            BundleLoadError::Status(code) => write!(f, "HTTP status: {}", code),
            BundleLoadError::Malformed(msg) => write!(f, "Malformed bundle: {}", msg),
        }
    }
}

impl std::error::Error for BundleLoadError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Locale(e) => write!(f, "Locale Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<BundleLoadError> for Error {
    fn from(err: BundleLoadError) -> Self {
        Error::Locale(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

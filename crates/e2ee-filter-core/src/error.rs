//! Shared error type across matrix-e2ee-filter crates.

use thiserror::Error;

/// Stable error codes for host surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Configuration rejected at load time.
    ConfigInvalid,
    /// Identifier without an extractable origin.
    MalformedIdentifier,
    /// Internal failure.
    Internal,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::ConfigInvalid => "CONFIG_INVALID",
            ErrorCode::MalformedIdentifier => "MALFORMED_IDENTIFIER",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Why an origin could not be extracted from an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error("empty identifier")]
    Empty,
    #[error("unknown sigil {0:?}")]
    UnknownSigil(char),
    #[error("no ':' separator")]
    MissingSeparator,
    #[error("empty localpart")]
    EmptyLocalpart,
    #[error("invalid server name: {0}")]
    InvalidServerName(String),
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, FilterError>;

/// Unified error type used by core and module.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("config: {0}")]
    Config(String),
    #[error("malformed identifier: {0}")]
    Extraction(#[from] ExtractionError),
    #[error("internal: {0}")]
    Internal(String),
}

impl FilterError {
    pub fn code(&self) -> ErrorCode {
        match self {
            FilterError::Config(_) => ErrorCode::ConfigInvalid,
            FilterError::Extraction(_) => ErrorCode::MalformedIdentifier,
            FilterError::Internal(_) => ErrorCode::Internal,
        }
    }
}

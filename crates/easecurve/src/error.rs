use std::result::Result as StdResult;

use thiserror::Error;

/// Errors produced while building or querying a curve catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// An identifier was registered twice. This is a configuration bug.
    #[error("duplicate curve identifier: {0}")]
    DuplicateCurveIdentifier(String),
    /// No curve is registered under the identifier.
    #[error("curve not found: {0}")]
    CurveNotFound(String),
}

/// Convenience alias for results returned by this crate.
pub type Result<T> = StdResult<T, Error>;

//! Error types for subnet calculation.

use crate::models::Family;
use thiserror::Error;

/// Why a CIDR string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidReason {
    #[error("Address cannot be empty")]
    Empty,

    #[error("Only one '/' permitted in '{0}'")]
    TooManySlashes(String),

    #[error("'{addr}' does not appear to be an {family} address")]
    MalformedAddress { addr: String, family: Family },

    #[error("'{0}' is not a valid netmask")]
    InvalidPrefix(String),
}

/// Failure of [`crate::calculate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Bad syntax, out of range prefix or wrong family literal.
    #[error("Error: Invalid {family} address or prefix. {reason}")]
    Invalid {
        family: Family,
        reason: InvalidReason,
    },

    /// Anything else. Not reachable through valid use of the address models.
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

impl CalcError {
    pub fn invalid(family: Family, reason: InvalidReason) -> Self {
        CalcError::Invalid { family, reason }
    }
}

//! Core error types for address arithmetic.

use super::Family;

/// Errors produced by the address-space computations.
///
/// Every failure here is deterministic for a given input; nothing is retried
/// or recovered internally. Callers decide whether to log-and-continue.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum NetError {
    /// Malformed address/CIDR text or a prefix length out of bounds.
    #[error("parse error: {0}")]
    Parse(String),

    /// Start address greater than end address in a range operation.
    #[error("invalid range: start must not exceed end ({start} > {end})")]
    InvalidRange { start: String, end: String },

    /// Two different address families used in one operation.
    #[error("address family mismatch: {0} vs {1}")]
    FamilyMismatch(Family, Family),
}

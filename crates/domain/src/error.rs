//! Unified error types for the domain layer
//!
//! Provides a common error type for vocabulary lookups, enabling consistent
//! error handling without forcing adapters to use String.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Integer code does not belong to the block kind set
    #[error("Unknown story block code: {code}")]
    UnknownBlockCode { code: u16 },

    /// Name does not belong to the block kind set
    #[error("Unknown story block kind: {0}")]
    UnknownBlockName(String),
}

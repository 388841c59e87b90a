//! Settlement errors.
//!
//! No error in this crate is locally recoverable. Each one indicates a
//! protocol-level inconsistency; the surrounding engine must reject the
//! block (or abort bootstrap) and discard the ledger overlay.

use lib_crypto::AddressError;
use lib_types::{Amount, ConfigError};
use thiserror::Error;

/// Error during genesis distribution or block settlement
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// A burn would drive a balance negative. Fee sufficiency is validated
    /// before block inclusion, so this firing means the chain state and the
    /// block disagree.
    #[error("Insufficient balance: have {have}, need {need}")]
    InsufficientBalance { have: Amount, need: Amount },

    /// `primary_index` is outside the validator set resolved for the block's
    /// height. A configuration inconsistency, not a recoverable condition.
    #[error("Invalid validator index {index} for validator set of {validator_count}")]
    InvalidValidatorIndex { index: u32, validator_count: usize },

    #[error("Arithmetic overflow")]
    Overflow,

    #[error("Conservation invariant violated: {0}")]
    ConservationViolated(String),

    #[error("Address derivation failed: {0}")]
    Address(#[from] AddressError),

    #[error("Invalid protocol config: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for token operations
pub type TokenResult<T> = Result<T, TokenError>;

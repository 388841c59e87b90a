//! Genesis protocol parameters.
//!
//! Loading (files, env, CLI) is the node's concern; this is the validated
//! data shape the settlement core consumes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::primitives::{Amount, PublicKey};

/// Error validating protocol parameters
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Standby committee must not be empty")]
    EmptyCommittee,
}

/// Genesis parameters of the native token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolConfig {
    /// Committee public keys fixed at genesis, in protocol order
    pub standby_committee: Vec<PublicKey>,
    /// Total supply minted to the committee address at genesis (atomic units)
    pub initial_supply: Amount,
}

impl ProtocolConfig {
    /// Check the parameters are usable for genesis distribution.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.standby_committee.is_empty() {
            return Err(ConfigError::EmptyCommittee);
        }
        Ok(())
    }
}

//! Designated-role resolution seam.
//!
//! Which public keys occupy a role at a given height is decided by the
//! chain's role-election subsystem. Settlement consumes the answer through
//! this trait and never caches it across heights.

use serde::{Deserialize, Serialize};

use lib_types::{BlockHeight, PublicKey};

/// Named on-chain functions whose occupants are elected per height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DesignatedRole {
    /// Block-producing validators
    Validator,
    /// Governance committee
    Committee,
}

/// Height-dependent lookup of a role's designated public keys.
pub trait ValidatorResolver {
    /// Ordered keys holding `role` as of `height`. Order is part of
    /// consensus: `Block::primary_index` indexes into it.
    fn designated_keys(&self, role: DesignatedRole, height: BlockHeight) -> Vec<PublicKey>;
}

//! Ember cryptography foundation.
//!
//! Canonical consensus hashing and deterministic account derivation.
//! Curve math and signature verification live in the node's identity layer;
//! the settlement core only needs stable hashes of key material.

pub mod address;
pub mod hashing;

pub use address::{committee_address, multi_sig_address, single_sig_address, AddressError};
pub use hashing::{canonical_consensus_hash, hash_domain};

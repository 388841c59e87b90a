//! Deterministic account derivation.
//!
//! An account identifier is the canonical consensus hash of a domain-tagged
//! verification script: either a single public key or a threshold set of
//! keys. Derivation is pure and must be byte-identical on every node.
//!
//! Multi-signature derivation sorts keys bytewise first, so the same key set
//! always yields the same account no matter the order it was supplied in.

use thiserror::Error;

use lib_types::{Address, PublicKey};

use crate::hashing::hash_domain;

const SINGLE_SIG_TAG: &str = "ember/account/single-sig/v1";
const MULTI_SIG_TAG: &str = "ember/account/multi-sig/v1";

/// Error deriving a multi-signature account
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("Key set must not be empty")]
    EmptyKeySet,

    #[error("Invalid threshold {threshold} for {key_count} keys")]
    InvalidThreshold { threshold: usize, key_count: usize },
}

/// Derive the account controlled by a single key.
pub fn single_sig_address(key: &PublicKey) -> Address {
    Address::new(hash_domain(SINGLE_SIG_TAG, &[key.as_bytes()]))
}

/// Derive the account controlled by `threshold`-of-`keys` signatures.
///
/// Keys are sorted bytewise before hashing; derivation is independent of the
/// order the caller supplies them in.
pub fn multi_sig_address(threshold: usize, keys: &[PublicKey]) -> Result<Address, AddressError> {
    if keys.is_empty() {
        return Err(AddressError::EmptyKeySet);
    }
    if threshold == 0 || threshold > keys.len() {
        return Err(AddressError::InvalidThreshold {
            threshold,
            key_count: keys.len(),
        });
    }

    let mut sorted: Vec<&PublicKey> = keys.iter().collect();
    sorted.sort();

    let threshold_bytes = (threshold as u32).to_le_bytes();
    let mut segments: Vec<&[u8]> = Vec::with_capacity(sorted.len() + 1);
    segments.push(&threshold_bytes);
    for key in &sorted {
        segments.push(key.as_bytes());
    }
    Ok(Address::new(hash_domain(MULTI_SIG_TAG, &segments)))
}

/// Derive the committee account: a majority multi-signature over the
/// committee key set (`n - (n - 1) / 2` of `n`).
pub fn committee_address(keys: &[PublicKey]) -> Result<Address, AddressError> {
    if keys.is_empty() {
        return Err(AddressError::EmptyKeySet);
    }
    let majority = keys.len() - (keys.len() - 1) / 2;
    multi_sig_address(majority, keys)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(tag: u8) -> PublicKey {
        PublicKey::new([tag; 33])
    }

    #[test]
    fn test_single_sig_is_deterministic() {
        assert_eq!(single_sig_address(&key(1)), single_sig_address(&key(1)));
        assert_ne!(single_sig_address(&key(1)), single_sig_address(&key(2)));
    }

    #[test]
    fn test_multi_sig_is_key_order_independent() {
        let forward = multi_sig_address(2, &[key(1), key(2), key(3)]).unwrap();
        let reversed = multi_sig_address(2, &[key(3), key(2), key(1)]).unwrap();
        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_multi_sig_threshold_changes_account() {
        let keys = [key(1), key(2), key(3)];
        let two_of_three = multi_sig_address(2, &keys).unwrap();
        let three_of_three = multi_sig_address(3, &keys).unwrap();
        assert_ne!(two_of_three, three_of_three);
    }

    #[test]
    fn test_multi_sig_rejects_bad_thresholds() {
        let keys = [key(1), key(2)];
        assert_eq!(
            multi_sig_address(0, &keys),
            Err(AddressError::InvalidThreshold { threshold: 0, key_count: 2 })
        );
        assert_eq!(
            multi_sig_address(3, &keys),
            Err(AddressError::InvalidThreshold { threshold: 3, key_count: 2 })
        );
        assert_eq!(multi_sig_address(1, &[]), Err(AddressError::EmptyKeySet));
    }

    #[test]
    fn test_single_and_multi_sig_never_collide() {
        // 1-of-1 multi-sig over a key is a different account than the
        // single-sig account of that key (distinct domain tags).
        let single = single_sig_address(&key(7));
        let one_of_one = multi_sig_address(1, &[key(7)]).unwrap();
        assert_ne!(single, one_of_one);
    }

    #[test]
    fn test_committee_threshold_is_majority() {
        // n = 7 -> majority 4
        let keys: Vec<PublicKey> = (1..=7).map(key).collect();
        assert_eq!(
            committee_address(&keys).unwrap(),
            multi_sig_address(4, &keys).unwrap()
        );

        // n = 1 -> majority 1
        assert_eq!(
            committee_address(&keys[..1]).unwrap(),
            multi_sig_address(1, &keys[..1]).unwrap()
        );

        // n = 4 -> majority 3
        assert_eq!(
            committee_address(&keys[..4]).unwrap(),
            multi_sig_address(3, &keys[..4]).unwrap()
        );
    }

    #[test]
    fn test_committee_rejects_empty_set() {
        assert_eq!(committee_address(&[]), Err(AddressError::EmptyKeySet));
    }
}

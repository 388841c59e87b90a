//! Hashing for Ember consensus commitments.
//!
//! **BLAKE3 is the canonical hash function for all consensus-critical data.**
//!
//! Account identifiers, block commitments, and any other value that enters a
//! consensus-critical path must be hashed with BLAKE3. Mixing hash functions
//! across nodes produces mismatched commitments and forks the chain.

/// The canonical hash function for all consensus-critical data.
pub const CONSENSUS_HASH_FUNCTION: &str = "BLAKE3";

/// Computes the canonical consensus hash of `data` using BLAKE3.
pub fn canonical_consensus_hash(data: &[u8]) -> [u8; 32] {
    blake3::hash(data).into()
}

/// Computes a domain-separated hash over multiple segments.
///
/// The tag is hashed first so the same byte material under different tags
/// never collides (e.g. single-sig vs multi-sig account scripts). Each
/// segment is length-prefixed, so segment boundaries are part of the
/// commitment and cannot be shifted without changing the hash.
pub fn hash_domain(tag: &str, segments: &[&[u8]]) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&(tag.len() as u32).to_le_bytes());
    hasher.update(tag.as_bytes());
    for segment in segments {
        hasher.update(&(segment.len() as u32).to_le_bytes());
        hasher.update(segment);
    }
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_consensus_hash_is_deterministic() {
        let data = b"consensus-critical commitment";
        assert_eq!(canonical_consensus_hash(data), canonical_consensus_hash(data));
    }

    #[test]
    fn test_canonical_consensus_hash_matches_blake3() {
        let data = b"account script";
        let expected: [u8; 32] = blake3::hash(data).into();
        assert_eq!(canonical_consensus_hash(data), expected);
    }

    #[test]
    fn test_hash_domain_separates_tags() {
        let payload: &[&[u8]] = &[b"same", b"material"];
        assert_ne!(hash_domain("tag-a", payload), hash_domain("tag-b", payload));
    }

    #[test]
    fn test_hash_domain_commits_to_segment_boundaries() {
        assert_ne!(
            hash_domain("tag", &[b"ab", b"c"]),
            hash_domain("tag", &[b"a", b"bc"]),
        );
    }

    #[test]
    fn test_hash_domain_is_deterministic() {
        let segments: &[&[u8]] = &[b"threshold", b"key material"];
        assert_eq!(hash_domain("t", segments), hash_domain("t", segments));
    }
}

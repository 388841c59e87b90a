//! Token identity.

use serde::{Deserialize, Serialize};

/// Token symbol
pub const SYMBOL: &str = "EMB";

/// Fixed decimal scale (atomic units per whole token = 10^DECIMALS)
pub const DECIMALS: u8 = 8;

/// Atomic units in one whole token
pub const ONE_TOKEN: u128 = 100_000_000;

/// Descriptor for callers that surface token metadata (RPC, explorers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenIdentity {
    pub symbol: &'static str,
    pub decimals: u8,
}

impl TokenIdentity {
    /// The native fee token.
    pub const fn native() -> Self {
        Self {
            symbol: SYMBOL,
            decimals: DECIMALS,
        }
    }
}

impl Default for TokenIdentity {
    fn default() -> Self {
        Self::native()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_constants_agree() {
        let identity = TokenIdentity::native();
        assert_eq!(identity.symbol, "EMB");
        assert_eq!(identity.decimals, 8);
        assert_eq!(ONE_TOKEN, 10u128.pow(DECIMALS as u32));
    }
}

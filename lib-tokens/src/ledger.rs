//! The `FungibleLedger` capability.
//!
//! The balance ledger itself (storage engine, account iteration, overlays)
//! belongs to the chain's storage layer. Settlement only needs the four
//! operations below, so the seam is a trait the storage layer implements.

use lib_types::{Address, Amount};

use crate::errors::TokenResult;

/// Minimal ledger interface for the native token.
///
/// Implementations must apply each call atomically and in the order issued:
/// settlement correctness depends on a later `burn` observing the balance
/// left by an earlier one. A call may block on storage I/O, but must not
/// interleave with another settlement's calls.
pub trait FungibleLedger {
    /// Current balance of `account` (zero for unknown accounts).
    fn balance_of(&self, account: &Address) -> Amount;

    /// Total supply in circulation.
    fn total_supply(&self) -> Amount;

    /// Credit `amount` to `account` and grow total supply.
    ///
    /// Succeeds for any amount barring supply overflow; a zero amount is a
    /// no-op and must not fail. `notify` controls whether the ledger emits a
    /// transfer notification to observers (settlement mints are silent).
    fn mint(&mut self, account: &Address, amount: Amount, notify: bool) -> TokenResult<()>;

    /// Debit `amount` from `account` and shrink total supply.
    ///
    /// Fails with [`crate::TokenError::InsufficientBalance`] when
    /// `amount > balance_of(account)`. A zero amount is a no-op.
    fn burn(&mut self, account: &Address, amount: Amount) -> TokenResult<()>;
}

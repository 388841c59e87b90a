//! Reusable test fixtures.
//!
//! `MemoryLedger` stands in for the chain's balance storage and
//! `FixedResolver` for the role-election subsystem. They are also used by
//! the integration suite, so they live here rather than under `#[cfg(test)]`.

use std::collections::HashMap;

use lib_types::{Address, Amount, BlockHeight, PublicKey};

use crate::errors::{TokenError, TokenResult};
use crate::ledger::FungibleLedger;
use crate::resolver::{DesignatedRole, ValidatorResolver};

/// In-memory ledger with a running total supply and a notification log.
///
/// `Clone` is cheap enough to model the engine's overlay semantics in tests:
/// settle against a clone, commit it on `Ok`, drop it on `Err`.
#[derive(Debug, Clone, Default)]
pub struct MemoryLedger {
    balances: HashMap<Address, Amount>,
    total_supply: Amount,
    notifications: Vec<(Address, Amount)>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint `amount` to `account` outside any settlement, silently.
    /// Panics on supply overflow; fixtures seed small amounts.
    pub fn seed(&mut self, account: &Address, amount: Amount) {
        *self.balances.entry(*account).or_insert(0) += amount;
        self.total_supply += amount;
    }

    /// Transfer notifications emitted by `mint(.., notify: true)`.
    pub fn notifications(&self) -> &[(Address, Amount)] {
        &self.notifications
    }
}

impl FungibleLedger for MemoryLedger {
    fn balance_of(&self, account: &Address) -> Amount {
        self.balances.get(account).copied().unwrap_or(0)
    }

    fn total_supply(&self) -> Amount {
        self.total_supply
    }

    fn mint(&mut self, account: &Address, amount: Amount, notify: bool) -> TokenResult<()> {
        let new_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;
        let balance = self.balances.entry(*account).or_insert(0);
        *balance = balance.checked_add(amount).ok_or(TokenError::Overflow)?;
        self.total_supply = new_supply;
        if notify {
            self.notifications.push((*account, amount));
        }
        Ok(())
    }

    fn burn(&mut self, account: &Address, amount: Amount) -> TokenResult<()> {
        let balance = self.balances.entry(*account).or_insert(0);
        if amount > *balance {
            return Err(TokenError::InsufficientBalance {
                have: *balance,
                need: amount,
            });
        }
        *balance -= amount;
        self.total_supply -= amount;
        Ok(())
    }
}

/// Resolver that designates the same ordered key set at every height.
#[derive(Debug, Clone, Default)]
pub struct FixedResolver {
    validators: Vec<PublicKey>,
}

impl FixedResolver {
    pub fn new(validators: Vec<PublicKey>) -> Self {
        Self { validators }
    }
}

impl ValidatorResolver for FixedResolver {
    fn designated_keys(&self, role: DesignatedRole, _height: BlockHeight) -> Vec<PublicKey> {
        match role {
            DesignatedRole::Validator => self.validators.clone(),
            DesignatedRole::Committee => Vec::new(),
        }
    }
}

//! Per-block fee settlement.
//!
//! Invoked once per finalized block, after all transaction effects have
//! applied and before the block is committed. Burns `system_fee +
//! network_fee` from every sender in block order, then mints the accumulated
//! network fees to the block's primary validator.
//!
//! # Determinism
//!
//! Execution is single-threaded and strictly ordered. Burns must not be
//! reordered or parallelized: when one sender appears in several
//! transactions, each burn observes the balance left by the previous one.
//! The mint is sequenced after the last burn; no other ledger reader may
//! observe the state in between, so the block boundary sees one atomic
//! supply transition.
//!
//! # Failure
//!
//! Every error is consensus-fatal. The engine must reject the block and
//! discard the ledger overlay the settlement ran against; there is no
//! partial commit and no retry.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use lib_crypto::single_sig_address;
use lib_types::{Address, Amount, Block};

use crate::errors::{TokenError, TokenResult};
use crate::ledger::FungibleLedger;
use crate::resolver::{DesignatedRole, ValidatorResolver};

/// Summary of one block's settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementReceipt {
    /// Account of the validator that produced the block
    pub primary: Address,
    /// Network fees re-minted to the primary validator
    pub network_fee_minted: Amount,
    /// System fees destroyed; total supply shrinks by exactly this much
    pub system_fee_burned: Amount,
}

/// Settle a finalized block's fees against the ledger.
///
/// Burns each transaction's total fee from its sender in block order,
/// resolves the validator set for `block.height`, and mints the accumulated
/// network fees to the account of the validator at `block.primary_index`.
/// An empty block still mints (amount zero, a no-op that must not fail).
///
/// On `Err` the ledger overlay is in an undefined intermediate state and
/// must be discarded by the caller along with the block.
pub fn on_block_persisted<L, R>(
    ledger: &mut L,
    resolver: &R,
    block: &Block,
) -> TokenResult<SettlementReceipt>
where
    L: FungibleLedger,
    R: ValidatorResolver,
{
    let supply_before = ledger.total_supply();

    let mut total_network_fee: Amount = 0;
    let mut total_system_fee: Amount = 0;
    for tx in &block.transactions {
        let fee = tx.total_fee().ok_or(TokenError::Overflow)?;
        ledger.burn(&tx.sender, fee)?;
        total_network_fee = total_network_fee
            .checked_add(tx.network_fee)
            .ok_or(TokenError::Overflow)?;
        total_system_fee = total_system_fee
            .checked_add(tx.system_fee)
            .ok_or(TokenError::Overflow)?;
        debug!(sender = %tx.sender, fee, "burned transaction fees");
    }

    let validators = resolver.designated_keys(DesignatedRole::Validator, block.height);
    let primary_key = validators.get(block.primary_index as usize).ok_or(
        TokenError::InvalidValidatorIndex {
            index: block.primary_index,
            validator_count: validators.len(),
        },
    )?;
    let primary = single_sig_address(primary_key);
    ledger.mint(&primary, total_network_fee, false)?;

    // supply_before - supply_after must equal the system fees destroyed;
    // network fees cancel out (burned from senders, minted to the primary).
    let supply_after = ledger.total_supply();
    let destroyed = supply_before
        .checked_sub(supply_after)
        .ok_or_else(|| conservation_error(supply_before, supply_after, total_system_fee))?;
    if destroyed != total_system_fee {
        return Err(conservation_error(supply_before, supply_after, total_system_fee));
    }

    info!(
        height = block.height,
        primary = %primary,
        network_fee_minted = total_network_fee,
        system_fee_burned = total_system_fee,
        "block fees settled"
    );

    Ok(SettlementReceipt {
        primary,
        network_fee_minted: total_network_fee,
        system_fee_burned: total_system_fee,
    })
}

fn conservation_error(before: Amount, after: Amount, system_fee: Amount) -> TokenError {
    TokenError::ConservationViolated(format!(
        "supply_before ({before}) - supply_after ({after}) != total system fee ({system_fee})"
    ))
}

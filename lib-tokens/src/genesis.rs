//! One-time genesis distribution.

use tracing::info;

use lib_crypto::committee_address;
use lib_types::{Address, ProtocolConfig};

use crate::errors::TokenResult;
use crate::ledger::FungibleLedger;

/// Mint the initial supply to the committee account.
///
/// Derives the committee account (majority multi-signature over
/// `standby_committee`) and mints `initial_supply` to it, silently (no
/// transfer notification). Returns the committee address.
///
/// # Precondition
///
/// The chain bootstrap sequence must call this exactly once, before any
/// block is settled. There is no internal guard: a second invocation
/// double-mints and corrupts total supply. The guard is the bootstrap
/// sequence itself, which runs genesis on an empty ledger and never again.
pub fn initialize<L: FungibleLedger>(
    ledger: &mut L,
    config: &ProtocolConfig,
) -> TokenResult<Address> {
    config.validate()?;
    let committee = committee_address(&config.standby_committee)?;
    ledger.mint(&committee, config.initial_supply, false)?;
    info!(
        committee = %committee,
        initial_supply = config.initial_supply,
        "genesis distribution minted"
    );
    Ok(committee)
}

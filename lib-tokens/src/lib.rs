//! Ember native fee token.
//!
//! Consensus-critical economic settlement: how value enters circulation at
//! genesis and how transaction fees are burned from senders and re-minted to
//! the block's primary validator on every finalized block. Every validating
//! node must reach byte-identical ledger state from identical inputs.
//!
//! # Key Types
//!
//! - [`FungibleLedger`]: capability trait over the chain's balance storage
//! - [`ValidatorResolver`]: height-dependent designated-role lookup
//! - [`TokenError`]: fatal settlement errors (nothing here is retryable)
//! - [`SettlementReceipt`]: per-block settlement summary
//!
//! # Execution
//!
//! [`initialize`] runs exactly once at chain bootstrap, before any block
//! settles. [`on_block_persisted`] runs once per finalized block, after all
//! transaction effects have applied and before the block is committed. Both
//! mutate the ledger only through [`FungibleLedger`] calls; on any error the
//! engine must discard the block's entire ledger overlay.

pub mod errors;
pub mod genesis;
pub mod ledger;
pub mod resolver;
pub mod settlement;
pub mod testing;
pub mod token;

pub use errors::{TokenError, TokenResult};
pub use genesis::initialize;
pub use ledger::FungibleLedger;
pub use resolver::{DesignatedRole, ValidatorResolver};
pub use settlement::{on_block_persisted, SettlementReceipt};
pub use token::{TokenIdentity, DECIMALS, ONE_TOKEN, SYMBOL};

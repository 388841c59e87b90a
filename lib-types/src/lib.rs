//! Ember settlement-core primitives.
//! Stable, protocol-neutral, behavior-free.
//!
//! Rule: No String identifiers in consensus state. Ever.

pub mod block;
pub mod config;
pub mod primitives;

// Canonical consensus types
pub use block::{Block, Transaction};
pub use config::{ConfigError, ProtocolConfig};
pub use primitives::{Address, Amount, BlockHeight, PublicKey};

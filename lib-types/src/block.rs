//! Settlement view of finalized blocks.
//!
//! These are the fields of a block that the fee-settlement path consumes.
//! Full wire formats (headers, witnesses, merkle commitments) live in the
//! node's block-relay layer, not here.

use serde::{Deserialize, Serialize};

use crate::primitives::{Address, Amount, BlockHeight};

/// Fee view of a transaction included in a finalized block.
///
/// Immutable once included. `system_fee` pays for execution and is destroyed
/// at settlement; `network_fee` is a priority fee re-minted to the block's
/// primary validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Account debited for both fees
    pub sender: Address,
    /// Execution-cost fee (burned)
    pub system_fee: Amount,
    /// Priority fee (recirculated to the primary validator)
    pub network_fee: Amount,
}

impl Transaction {
    /// Total amount burned from the sender, `None` on overflow.
    pub fn total_fee(&self) -> Option<Amount> {
        self.system_fee.checked_add(self.network_fee)
    }
}

/// Settlement view of a finalized block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Canonical position of this block in the chain
    pub height: BlockHeight,
    /// Index into the height's validator set selecting the block producer
    pub primary_index: u32,
    /// Transactions in consensus order
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// Sum of all system fees in the block, `None` on overflow.
    pub fn total_system_fee(&self) -> Option<Amount> {
        self.transactions
            .iter()
            .try_fold(0u128, |acc, tx| acc.checked_add(tx.system_fee))
    }

    /// Sum of all network fees in the block, `None` on overflow.
    pub fn total_network_fee(&self) -> Option<Amount> {
        self.transactions
            .iter()
            .try_fold(0u128, |acc, tx| acc.checked_add(tx.network_fee))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(sender: u8, system_fee: Amount, network_fee: Amount) -> Transaction {
        Transaction {
            sender: Address::new([sender; 32]),
            system_fee,
            network_fee,
        }
    }

    #[test]
    fn test_total_fee() {
        assert_eq!(tx(1, 10, 5).total_fee(), Some(15));
        assert_eq!(tx(1, Amount::MAX, 1).total_fee(), None);
    }

    #[test]
    fn test_block_fee_totals() {
        let block = Block {
            height: 7,
            primary_index: 0,
            transactions: vec![tx(1, 10, 5), tx(2, 20, 7)],
        };
        assert_eq!(block.total_system_fee(), Some(30));
        assert_eq!(block.total_network_fee(), Some(12));
    }

    #[test]
    fn test_empty_block_fee_totals_are_zero() {
        let block = Block {
            height: 0,
            primary_index: 0,
            transactions: vec![],
        };
        assert_eq!(block.total_system_fee(), Some(0));
        assert_eq!(block.total_network_fee(), Some(0));
    }

    #[test]
    fn test_fee_total_overflow_is_reported() {
        let block = Block {
            height: 1,
            primary_index: 0,
            transactions: vec![tx(1, Amount::MAX, 0), tx(2, 1, 0)],
        };
        assert_eq!(block.total_system_fee(), None);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let block = Block {
            height: 42,
            primary_index: 3,
            transactions: vec![tx(9, 100, 1)],
        };
        let serialized = bincode::serialize(&block).unwrap();
        let deserialized: Block = bincode::deserialize(&serialized).unwrap();
        assert_eq!(block, deserialized);
    }
}

//! Funds ledger adapter.
//!
//! In-memory implementation of the `FundsLedger` port. Balances live
//! behind a single lock, which gives the serializing, all-or-nothing
//! semantics the service expects from a real settlement layer.

use crate::ports::{FundsLedger, LedgerError};
use parking_lot::RwLock;
use shared_types::{Address, Amount};
use std::collections::HashMap;

/// In-memory balance ledger.
#[derive(Default)]
pub struct InMemoryLedger {
    balances: RwLock<HashMap<Address, Amount>>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an address with an opening balance (test fixture helper).
    pub fn fund(&self, address: Address, amount: Amount) {
        *self.balances.write().entry(address).or_insert(0) += amount;
    }
}

impl FundsLedger for InMemoryLedger {
    fn balance(&self, address: &Address) -> Amount {
        self.balances.read().get(address).copied().unwrap_or(0)
    }

    fn debit(&self, address: &Address, amount: Amount) -> Result<(), LedgerError> {
        let mut balances = self.balances.write();
        let balance = balances.entry(*address).or_insert(0);
        if *balance < amount {
            return Err(LedgerError::InsufficientFunds {
                address: *address,
                required: amount,
                available: *balance,
            });
        }
        *balance -= amount;
        Ok(())
    }

    fn credit(&self, address: &Address, amount: Amount) {
        *self.balances.write().entry(*address).or_insert(0) += amount;
    }
}

//! Driven ports (outbound dependencies)

use crate::events::BeaconEvent;
use async_trait::async_trait;
use shared_types::{Address, Amount};

/// Event sink for observers.
///
/// Reveals, finalizations, and slashing payouts are pushed here;
/// measurement harnesses subscribe instead of polling round state.
#[async_trait]
pub trait EventSink: Send + Sync {
    async fn publish(&self, event: BeaconEvent) -> Result<(), String>;
}

/// Errors a funds ledger can report.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error(
        "insufficient funds for 0x{}: required {required} wei, available {available} wei",
        hex::encode(.address)
    )]
    InsufficientFunds {
        address: Address,
        required: Amount,
        available: Amount,
    },
}

/// Ledger holding participant balances.
///
/// The service escrows deposits by debiting the committer and pays
/// out forfeitures by crediting the slashing caller. Calls are
/// synchronous and atomic; the ledger serializes internally.
pub trait FundsLedger: Send + Sync {
    /// Current balance of an address.
    fn balance(&self, address: &Address) -> Amount;

    /// Remove funds from an address, failing if the balance is short.
    fn debit(&self, address: &Address, amount: Amount) -> Result<(), LedgerError>;

    /// Add funds to an address.
    fn credit(&self, address: &Address, amount: Amount);
}

/// Time source for deadline checks.
pub trait TimeSource: Send + Sync {
    /// Get current unix timestamp in seconds.
    fn now(&self) -> u64;
}

// Shared clocks (test harnesses keep a handle to advance time).
impl<T: TimeSource + ?Sized> TimeSource for std::sync::Arc<T> {
    fn now(&self) -> u64 {
        (**self).now()
    }
}

/// Default time source using system time.
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }
}

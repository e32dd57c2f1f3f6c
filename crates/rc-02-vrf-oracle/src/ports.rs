//! Capability interface between consumers and the randomness oracle.
//!
//! The whole contract is "request -> eventual single callback with one
//! uint value". Consumers never learn how the word is produced; the
//! coordinator never learns what it is used for.

use crate::error::OracleResult;
use crate::SubscriptionId;
use async_trait::async_trait;
use shared_types::{Address, RequestId, U256};

/// Outbound capability a consumer holds on the oracle.
#[async_trait]
pub trait RandomnessOracle: Send + Sync {
    /// Ask for one random word. The reply arrives later through the
    /// consumer's `fulfill_random` callback, exactly once.
    async fn request_random(
        &self,
        subscription: SubscriptionId,
        consumer: Address,
    ) -> OracleResult<RequestId>;
}

/// Inbound callback the oracle invokes on delivery.
#[async_trait]
pub trait RandomnessConsumer: Send + Sync {
    async fn fulfill_random(&self, request_id: RequestId, value: U256) -> OracleResult<()>;
}

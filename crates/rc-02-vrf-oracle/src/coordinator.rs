//! Mock VRF coordinator.
//!
//! Test double for the external oracle service: subscription
//! accounting, a per-request base fee, and deterministic word
//! derivation (keccak over the request id). Fulfillment is driven by
//! the test itself, standing in for the oracle's off-chain round trip.

use crate::error::{OracleError, OracleResult};
use crate::ports::{RandomnessConsumer, RandomnessOracle};
use crate::SubscriptionId;
use async_trait::async_trait;
use parking_lot::RwLock;
use sha3::{Digest, Keccak256};
use shared_types::{Address, Amount, RequestId, U256};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, info};

struct Subscription {
    balance: Amount,
    consumers: HashSet<Address>,
}

struct PendingRequest {
    subscription: SubscriptionId,
    consumer: Address,
}

#[derive(Default)]
struct CoordinatorState {
    next_subscription: SubscriptionId,
    next_request: RequestId,
    subscriptions: HashMap<SubscriptionId, Subscription>,
    pending: HashMap<RequestId, PendingRequest>,
}

/// Mock oracle coordinator.
pub struct MockVrfCoordinator {
    /// Fee charged to the subscription per fulfilled request.
    base_fee: Amount,
    state: RwLock<CoordinatorState>,
    /// Registered callback targets, keyed by consumer address.
    callbacks: RwLock<HashMap<Address, Arc<dyn RandomnessConsumer>>>,
}

impl MockVrfCoordinator {
    pub fn new(base_fee: Amount) -> Self {
        Self {
            base_fee,
            state: RwLock::new(CoordinatorState::default()),
            callbacks: RwLock::new(HashMap::new()),
        }
    }

    /// Open a new, empty subscription.
    pub fn create_subscription(&self) -> SubscriptionId {
        let mut state = self.state.write();
        state.next_subscription += 1;
        let id = state.next_subscription;
        state.subscriptions.insert(
            id,
            Subscription {
                balance: 0,
                consumers: HashSet::new(),
            },
        );
        id
    }

    /// Top up a subscription's balance.
    pub fn fund_subscription(
        &self,
        subscription: SubscriptionId,
        amount: Amount,
    ) -> OracleResult<()> {
        let mut state = self.state.write();
        let sub = state
            .subscriptions
            .get_mut(&subscription)
            .ok_or(OracleError::UnknownSubscription(subscription))?;
        sub.balance += amount;
        Ok(())
    }

    /// Authorize a consumer address on a subscription.
    pub fn add_consumer(
        &self,
        subscription: SubscriptionId,
        consumer: Address,
    ) -> OracleResult<()> {
        let mut state = self.state.write();
        let sub = state
            .subscriptions
            .get_mut(&subscription)
            .ok_or(OracleError::UnknownSubscription(subscription))?;
        sub.consumers.insert(consumer);
        Ok(())
    }

    /// Register the callback target behind a consumer address.
    pub fn register_callback(&self, consumer: Address, target: Arc<dyn RandomnessConsumer>) {
        self.callbacks.write().insert(consumer, target);
    }

    /// Deliver the word for an outstanding request.
    ///
    /// Charges the base fee, derives the word deterministically from
    /// the request id, and invokes the consumer callback exactly once
    /// (the request is consumed even if the callback errors).
    pub async fn fulfill_random_words(&self, request_id: RequestId) -> OracleResult<U256> {
        let (consumer, value) = {
            let mut state = self.state.write();
            let pending = state
                .pending
                .remove(&request_id)
                .ok_or(OracleError::UnknownRequest(request_id))?;

            let subscription = pending.subscription;
            let sub = state
                .subscriptions
                .get_mut(&subscription)
                .ok_or(OracleError::UnknownSubscription(subscription))?;
            if sub.balance < self.base_fee {
                let available = sub.balance;
                // Undelivered request stays consumed, as the mock's
                // fee check precedes the callback.
                return Err(OracleError::InsufficientSubscriptionBalance {
                    subscription,
                    required: self.base_fee,
                    available,
                });
            }
            sub.balance -= self.base_fee;

            (pending.consumer, derive_word(request_id))
        };

        let target = self
            .callbacks
            .read()
            .get(&consumer)
            .cloned()
            .ok_or(OracleError::UnknownConsumer(consumer))?;

        target
            .fulfill_random(request_id, value)
            .await
            .map_err(|e| OracleError::Callback(e.to_string()))?;

        info!(request_id, value = %value, "oracle request fulfilled");
        Ok(value)
    }

    /// Number of requests awaiting fulfillment.
    pub fn pending_count(&self) -> usize {
        self.state.read().pending.len()
    }

    /// Remaining balance of a subscription.
    pub fn subscription_balance(&self, subscription: SubscriptionId) -> OracleResult<Amount> {
        let state = self.state.read();
        state
            .subscriptions
            .get(&subscription)
            .map(|s| s.balance)
            .ok_or(OracleError::UnknownSubscription(subscription))
    }
}

#[async_trait]
impl RandomnessOracle for MockVrfCoordinator {
    async fn request_random(
        &self,
        subscription: SubscriptionId,
        consumer: Address,
    ) -> OracleResult<RequestId> {
        let mut state = self.state.write();
        let sub = state
            .subscriptions
            .get(&subscription)
            .ok_or(OracleError::UnknownSubscription(subscription))?;
        if !sub.consumers.contains(&consumer) {
            return Err(OracleError::ConsumerNotAuthorized {
                subscription,
                consumer,
            });
        }

        state.next_request += 1;
        let request_id = state.next_request;
        state.pending.insert(
            request_id,
            PendingRequest {
                subscription,
                consumer,
            },
        );

        debug!(request_id, subscription, "oracle request queued");
        Ok(request_id)
    }
}

/// Derive the delivered word from the request id.
///
/// keccak256 over the 32-byte big-endian request id; deterministic for
/// a given request, unpredictable to the requester beforehand in the
/// real service this doubles for.
fn derive_word(request_id: RequestId) -> U256 {
    let mut word = [0u8; 32];
    U256::from(request_id).to_big_endian(&mut word);
    U256::from_big_endian(&Keccak256::digest(word))
}

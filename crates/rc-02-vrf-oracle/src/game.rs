//! Minimal oracle consumer.
//!
//! The cost/security baseline the commit-reveal engine is measured
//! against: one `play` request, one callback, O(1) per draw no matter
//! how many players exist.

use crate::error::{OracleError, OracleResult};
use crate::ports::{RandomnessConsumer, RandomnessOracle};
use crate::SubscriptionId;
use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{Address, RequestId, U256};
use std::sync::Arc;
use tracing::info;

#[derive(Default)]
struct GameState {
    outstanding: Option<RequestId>,
    random_result: Option<U256>,
}

/// A game that draws its randomness from the oracle.
pub struct VrfGame<O: RandomnessOracle> {
    address: Address,
    subscription: SubscriptionId,
    oracle: Arc<O>,
    state: RwLock<GameState>,
}

impl<O: RandomnessOracle> VrfGame<O> {
    pub fn new(address: Address, subscription: SubscriptionId, oracle: Arc<O>) -> Self {
        Self {
            address,
            subscription,
            oracle,
            state: RwLock::new(GameState::default()),
        }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// Request a fresh random word (the `RequestSent` notification is
    /// the returned id).
    pub async fn play(&self) -> OracleResult<RequestId> {
        let request_id = self
            .oracle
            .request_random(self.subscription, self.address)
            .await?;

        self.state.write().outstanding = Some(request_id);
        info!(request_id, "game requested randomness");
        Ok(request_id)
    }

    /// The last delivered word, if any.
    pub fn random_result(&self) -> Option<U256> {
        self.state.read().random_result
    }
}

#[async_trait]
impl<O: RandomnessOracle> RandomnessConsumer for VrfGame<O> {
    async fn fulfill_random(&self, request_id: RequestId, value: U256) -> OracleResult<()> {
        let mut state = self.state.write();
        if state.outstanding != Some(request_id) {
            return Err(OracleError::UnexpectedRequest(request_id));
        }

        state.outstanding = None;
        state.random_result = Some(value);
        Ok(())
    }
}

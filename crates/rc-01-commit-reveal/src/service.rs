//! Beacon service - core business logic
//!
//! # Architecture
//! - Explicit round arena keyed by `RoundId` (no global current-round
//!   state; a long-lived service runs many rounds without redeploy)
//! - Domain validates every precondition before any mutation, so a
//!   rejected call is observable but leaves no trace
//! - Deposits are escrowed through the `FundsLedger` port and paid
//!   back out only by slashing

use crate::domain::{Phase, Round, RoundError, RoundResult};
use crate::events::{
    BeaconEvent, ParticipantSlashedEvent, RandomnessFinalizedEvent, RevealConfirmedEvent,
};
use crate::metrics;
use crate::ports::{
    EventSink, FundsLedger, RandomBeaconApi, SystemTimeSource, TimeSource,
};
use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{display_address, Address, Amount, Hash, ParticipantView, RoundId, U256};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Beacon service configuration.
#[derive(Debug, Clone)]
pub struct BeaconConfig {
    /// Length of the reveal window armed on `Commit -> Reveal`.
    pub reveal_window_secs: u64,
}

impl Default for BeaconConfig {
    fn default() -> Self {
        Self {
            // 10 minutes, the window used by the slashing variant.
            reveal_window_secs: 600,
        }
    }
}

/// Commit-reveal randomness service.
pub struct BeaconService<E, L>
where
    E: EventSink,
    L: FundsLedger,
{
    event_sink: Arc<E>,
    ledger: Arc<L>,
    rounds: RwLock<HashMap<RoundId, Round>>,
    next_round_id: AtomicU64,
    config: BeaconConfig,
    time_source: Box<dyn TimeSource>,
}

impl<E, L> BeaconService<E, L>
where
    E: EventSink,
    L: FundsLedger,
{
    /// Create a new `BeaconService`.
    pub fn new(event_sink: Arc<E>, ledger: Arc<L>, config: BeaconConfig) -> Self {
        Self {
            event_sink,
            ledger,
            rounds: RwLock::new(HashMap::new()),
            next_round_id: AtomicU64::new(1),
            config,
            time_source: Box::new(SystemTimeSource),
        }
    }

    /// Set custom time source (for testing).
    pub fn with_time_source(mut self, time_source: Box<dyn TimeSource>) -> Self {
        self.time_source = time_source;
        self
    }

    fn with_round<R>(
        &self,
        round_id: RoundId,
        f: impl FnOnce(&Round) -> RoundResult<R>,
    ) -> RoundResult<R> {
        let rounds = self.rounds.read();
        let round = rounds
            .get(&round_id)
            .ok_or(RoundError::UnknownRound(round_id))?;
        f(round)
    }

    async fn publish(&self, event: BeaconEvent) -> RoundResult<()> {
        self.event_sink
            .publish(event)
            .await
            .map_err(RoundError::EventSink)
    }

    // === OPERATIONS ===

    /// Open a fresh round with a fixed entry fee.
    pub fn open_round(&self, entry_fee: Amount) -> RoundId {
        let round_id = self.next_round_id.fetch_add(1, Ordering::SeqCst);
        self.rounds
            .write()
            .insert(round_id, Round::new(round_id, entry_fee));

        metrics::record_round_created();
        info!(round_id, entry_fee, "opened randomness round");
        round_id
    }

    /// Register a commitment and escrow the deposit.
    ///
    /// Preconditions are validated before the ledger debit, and the
    /// debit happens before the registry mutation, so neither a
    /// domain rejection nor an overdraft leaves partial state.
    pub fn submit_commit(
        &self,
        round_id: RoundId,
        caller: Address,
        commitment: Hash,
        deposit: Amount,
    ) -> RoundResult<()> {
        let mut rounds = self.rounds.write();
        let round = rounds
            .get_mut(&round_id)
            .ok_or(RoundError::UnknownRound(round_id))?;

        round.validate_commit(&caller, deposit)?;
        self.ledger
            .debit(&caller, deposit)
            .map_err(|e| RoundError::Ledger(e.to_string()))?;
        round.commit(caller, commitment, deposit)?;

        metrics::record_commit();
        debug!(
            round_id,
            participant = %display_address(&caller),
            deposit,
            "commitment accepted"
        );
        Ok(())
    }

    /// Administrative `Commit -> Reveal` transition.
    pub fn begin_reveal_phase(&self, round_id: RoundId) -> RoundResult<u64> {
        let now = self.time_source.now();
        let deadline = {
            let mut rounds = self.rounds.write();
            let round = rounds
                .get_mut(&round_id)
                .ok_or(RoundError::UnknownRound(round_id))?;
            round.start_reveal(now, self.config.reveal_window_secs)?
        };

        info!(round_id, deadline, "round entered reveal phase");
        Ok(deadline)
    }

    /// Verify and record a revealed secret, then notify observers.
    pub async fn submit_reveal(
        &self,
        round_id: RoundId,
        caller: Address,
        secret: U256,
    ) -> RoundResult<()> {
        {
            let mut rounds = self.rounds.write();
            let round = rounds
                .get_mut(&round_id)
                .ok_or(RoundError::UnknownRound(round_id))?;
            round.reveal(caller, secret)?;
        }

        metrics::record_reveal();
        info!(
            round_id,
            participant = %display_address(&caller),
            "reveal verified"
        );
        self.publish(BeaconEvent::RevealConfirmed(RevealConfirmedEvent {
            round_id,
            participant: caller,
            secret,
        }))
        .await
    }

    /// Forfeit an unrevealed participant's deposit to `caller`.
    pub async fn enforce_slash(
        &self,
        round_id: RoundId,
        caller: Address,
        target: Address,
    ) -> RoundResult<Amount> {
        let now = self.time_source.now();
        let amount = {
            let mut rounds = self.rounds.write();
            let round = rounds
                .get_mut(&round_id)
                .ok_or(RoundError::UnknownRound(round_id))?;
            round.slash(target, now)?
        };

        self.ledger.credit(&caller, amount);
        metrics::record_slash();
        warn!(
            round_id,
            target = %display_address(&target),
            claimant = %display_address(&caller),
            amount,
            "deposit forfeited: committed but never revealed"
        );
        self.publish(BeaconEvent::ParticipantSlashed(ParticipantSlashedEvent {
            round_id,
            target,
            claimant: caller,
            amount,
        }))
        .await?;
        Ok(amount)
    }

    /// Finalize the round and return the combined random value.
    pub async fn compute_final_random(&self, round_id: RoundId) -> RoundResult<U256> {
        let value = {
            let mut rounds = self.rounds.write();
            let round = rounds
                .get_mut(&round_id)
                .ok_or(RoundError::UnknownRound(round_id))?;
            round.finalize()?
        };

        metrics::record_round_finalized();
        info!(round_id, value = %value, "round finalized");
        self.publish(BeaconEvent::RandomnessFinalized(RandomnessFinalizedEvent {
            round_id,
            value,
        }))
        .await?;
        Ok(value)
    }

    // === QUERIES ===

    pub fn round_phase(&self, round_id: RoundId) -> RoundResult<Phase> {
        self.with_round(round_id, |round| Ok(round.phase()))
    }

    pub fn round_entry_fee(&self, round_id: RoundId) -> RoundResult<Amount> {
        self.with_round(round_id, |round| Ok(round.entry_fee()))
    }

    pub fn round_deadline(&self, round_id: RoundId) -> RoundResult<Option<u64>> {
        self.with_round(round_id, |round| Ok(round.reveal_deadline()))
    }

    pub fn participant_list_at(
        &self,
        round_id: RoundId,
        index: usize,
    ) -> RoundResult<Option<Address>> {
        self.with_round(round_id, |round| Ok(round.registry().participant_at(index)))
    }

    pub fn participant_views(&self, round_id: RoundId) -> RoundResult<Vec<ParticipantView>> {
        self.with_round(round_id, |round| Ok(round.registry().views()))
    }

    pub fn round_final_value(&self, round_id: RoundId) -> RoundResult<Option<U256>> {
        self.with_round(round_id, |round| Ok(round.final_value()))
    }
}

#[async_trait]
impl<E, L> RandomBeaconApi for BeaconService<E, L>
where
    E: EventSink,
    L: FundsLedger,
{
    async fn create_round(&self, entry_fee: Amount) -> RoundId {
        self.open_round(entry_fee)
    }

    async fn commit(
        &self,
        round_id: RoundId,
        caller: Address,
        commitment: Hash,
        deposit: Amount,
    ) -> RoundResult<()> {
        self.submit_commit(round_id, caller, commitment, deposit)
    }

    async fn start_reveal_phase(&self, round_id: RoundId) -> RoundResult<u64> {
        self.begin_reveal_phase(round_id)
    }

    async fn reveal(&self, round_id: RoundId, caller: Address, secret: U256) -> RoundResult<()> {
        self.submit_reveal(round_id, caller, secret).await
    }

    async fn slash_participant(
        &self,
        round_id: RoundId,
        caller: Address,
        target: Address,
    ) -> RoundResult<Amount> {
        self.enforce_slash(round_id, caller, target).await
    }

    async fn final_random(&self, round_id: RoundId) -> RoundResult<U256> {
        self.compute_final_random(round_id).await
    }

    async fn phase(&self, round_id: RoundId) -> RoundResult<Phase> {
        self.round_phase(round_id)
    }

    async fn participant_at(&self, round_id: RoundId, index: usize) -> RoundResult<Option<Address>> {
        self.participant_list_at(round_id, index)
    }

    async fn participants(&self, round_id: RoundId) -> RoundResult<Vec<ParticipantView>> {
        self.participant_views(round_id)
    }

    async fn final_value(&self, round_id: RoundId) -> RoundResult<Option<U256>> {
        self.round_final_value(round_id)
    }
}

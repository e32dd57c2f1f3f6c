//! Driving ports (inbound API)

use crate::domain::{Phase, RoundResult};
use async_trait::async_trait;
use shared_types::{Address, Amount, Hash, ParticipantView, RoundId, U256};

/// Primary randomness-beacon API.
///
/// One service instance runs an arena of independent rounds; every
/// operation names its round explicitly, so there is no hidden
/// current-round state shared across callers.
#[async_trait]
pub trait RandomBeaconApi: Send + Sync {
    /// Open a fresh round in `Commit` phase with a fixed entry fee.
    async fn create_round(&self, entry_fee: Amount) -> RoundId;

    /// Register a commitment, escrowing `deposit` from `caller`.
    async fn commit(
        &self,
        round_id: RoundId,
        caller: Address,
        commitment: Hash,
        deposit: Amount,
    ) -> RoundResult<()>;

    /// Administrative `Commit -> Reveal` transition; arms the reveal
    /// deadline and returns it.
    async fn start_reveal_phase(&self, round_id: RoundId) -> RoundResult<u64>;

    /// Disclose a secret previously committed to.
    async fn reveal(&self, round_id: RoundId, caller: Address, secret: U256) -> RoundResult<()>;

    /// Forfeit the deposit of a committed, unrevealed participant
    /// after the deadline; the deposit goes to `caller`.
    async fn slash_participant(
        &self,
        round_id: RoundId,
        caller: Address,
        target: Address,
    ) -> RoundResult<Amount>;

    /// Finalize the round and return the XOR of revealed secrets.
    async fn final_random(&self, round_id: RoundId) -> RoundResult<U256>;

    // === Queries ===

    /// Current phase of a round.
    async fn phase(&self, round_id: RoundId) -> RoundResult<Phase>;

    /// Entrant at a position of the insertion-ordered list.
    async fn participant_at(&self, round_id: RoundId, index: usize) -> RoundResult<Option<Address>>;

    /// Snapshot of all entrants in insertion order.
    async fn participants(&self, round_id: RoundId) -> RoundResult<Vec<ParticipantView>>;

    /// Final random value, if the round is finalized.
    async fn final_value(&self, round_id: RoundId) -> RoundResult<Option<U256>>;
}

//! Commit-reveal lottery.
//!
//! Players buy in with a commitment plus the ticket price, reveal
//! their secrets, and the pot goes to the entrant selected by the
//! round's final random value modulo the player count. Decentralized
//! end to end, and it inherits the commit-reveal engine's
//! last-revealer exposure along with its slashing deterrent.

use crate::error::LotteryResult;
use parking_lot::RwLock;
use rc_01_commit_reveal::{BeaconService, EventSink, FundsLedger};
use shared_types::{display_address, Address, Amount, Hash, RoundId, U256};
use std::sync::Arc;
use tracing::info;

/// One lottery game on top of one beacon round.
pub struct RandaoLottery<E, L>
where
    E: EventSink,
    L: FundsLedger,
{
    beacon: Arc<BeaconService<E, L>>,
    ledger: Arc<L>,
    round_id: RoundId,
    ticket_price: Amount,
    winner: RwLock<Option<Address>>,
}

impl<E, L> RandaoLottery<E, L>
where
    E: EventSink,
    L: FundsLedger,
{
    /// Open a fresh beacon round and wrap it as a lottery.
    pub fn open(
        beacon: Arc<BeaconService<E, L>>,
        ledger: Arc<L>,
        ticket_price: Amount,
    ) -> Self {
        let round_id = beacon.open_round(ticket_price);
        Self {
            beacon,
            ledger,
            round_id,
            ticket_price,
            winner: RwLock::new(None),
        }
    }

    pub fn round_id(&self) -> RoundId {
        self.round_id
    }

    pub fn ticket_price(&self) -> Amount {
        self.ticket_price
    }

    pub fn winner(&self) -> Option<Address> {
        *self.winner.read()
    }

    /// Buy a ticket: commitment plus the exact ticket price.
    pub fn enter(&self, caller: Address, commitment: Hash, payment: Amount) -> LotteryResult<()> {
        self.beacon
            .submit_commit(self.round_id, caller, commitment, payment)?;
        Ok(())
    }

    /// Close ticket sales and open the reveal window.
    pub fn close_entries(&self) -> LotteryResult<u64> {
        Ok(self.beacon.begin_reveal_phase(self.round_id)?)
    }

    /// Reveal a ticket's secret.
    pub async fn reveal(&self, caller: Address, secret: U256) -> LotteryResult<()> {
        self.beacon
            .submit_reveal(self.round_id, caller, secret)
            .await?;
        Ok(())
    }

    /// Finalize the round and pay the whole pot to the selected
    /// entrant. The index is the final value modulo the player count,
    /// taken over the insertion-ordered ticket list.
    pub async fn pick_winner(&self) -> LotteryResult<Address> {
        let players = self.beacon.participant_views(self.round_id)?;
        if players.is_empty() {
            return Err(crate::error::LotteryError::NoPlayers);
        }

        // Phase gate inside finalize makes a second draw impossible.
        let value = self.beacon.compute_final_random(self.round_id).await?;

        let index = (value % U256::from(players.len() as u64)).low_u64() as usize;
        let winner = players[index].address;
        let pot = self.ticket_price * players.len() as Amount;

        self.ledger.credit(&winner, pot);
        *self.winner.write() = Some(winner);

        info!(
            round_id = self.round_id,
            winner = %display_address(&winner),
            pot,
            "lottery pot paid out"
        );
        Ok(winner)
    }
}

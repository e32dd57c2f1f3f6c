//! Oracle-backed lottery.
//!
//! Players only pay the ticket price; the draw is one oracle request
//! and one callback, O(1) regardless of how many tickets were sold.
//! No player move can bias the outcome; the trade is trusting the
//! coordinator and paying its fee.

use crate::error::{LotteryError, LotteryResult};
use async_trait::async_trait;
use parking_lot::RwLock;
use rc_01_commit_reveal::FundsLedger;
use rc_02_vrf_oracle::{
    OracleError, OracleResult, RandomnessConsumer, RandomnessOracle, SubscriptionId,
};
use shared_types::{display_address, Address, Amount, RequestId, U256};
use std::sync::Arc;
use tracing::info;

struct VrfLotteryState {
    ticket_price: Amount,
    players: Vec<Address>,
    pot: Amount,
    outstanding: Option<RequestId>,
    winner: Option<Address>,
}

/// Lottery drawing its winner from the oracle.
pub struct VrfLottery<O, L>
where
    O: RandomnessOracle,
    L: FundsLedger,
{
    address: Address,
    owner: Address,
    subscription: SubscriptionId,
    oracle: Arc<O>,
    ledger: Arc<L>,
    state: RwLock<VrfLotteryState>,
}

impl<O, L> VrfLottery<O, L>
where
    O: RandomnessOracle,
    L: FundsLedger,
{
    pub fn new(
        address: Address,
        owner: Address,
        subscription: SubscriptionId,
        oracle: Arc<O>,
        ledger: Arc<L>,
        ticket_price: Amount,
    ) -> Self {
        Self {
            address,
            owner,
            subscription,
            oracle,
            ledger,
            state: RwLock::new(VrfLotteryState {
                ticket_price,
                players: Vec::new(),
                pot: 0,
                outstanding: None,
                winner: None,
            }),
        }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn ticket_price(&self) -> Amount {
        self.state.read().ticket_price
    }

    pub fn winner(&self) -> Option<Address> {
        self.state.read().winner
    }

    pub fn player_count(&self) -> usize {
        self.state.read().players.len()
    }

    /// Owner-managed ticket price; entries paying the old price after
    /// a change are rejected.
    pub fn set_ticket_price(&self, caller: Address, new_price: Amount) -> LotteryResult<()> {
        if caller != self.owner {
            return Err(LotteryError::NotOwner(caller));
        }
        self.state.write().ticket_price = new_price;
        info!(new_price, "ticket price updated");
        Ok(())
    }

    /// Buy a ticket for the exact current price. Sales are closed
    /// while a draw is pending: the requested word must settle over
    /// the player list it was requested for.
    pub fn enter(&self, caller: Address, payment: Amount) -> LotteryResult<()> {
        let mut state = self.state.write();
        if state.outstanding.is_some() {
            return Err(LotteryError::DrawPending);
        }
        if payment != state.ticket_price {
            return Err(LotteryError::WrongTicketPrice {
                required: state.ticket_price,
                got: payment,
            });
        }

        self.ledger
            .debit(&caller, payment)
            .map_err(|e| LotteryError::Ledger(e.to_string()))?;
        state.players.push(caller);
        state.pot += payment;
        Ok(())
    }

    /// Owner requests the draw; the winner is paid in the callback.
    pub async fn pick_winner(&self, caller: Address) -> LotteryResult<RequestId> {
        {
            let state = self.state.read();
            if caller != self.owner {
                return Err(LotteryError::NotOwner(caller));
            }
            if state.players.is_empty() {
                return Err(LotteryError::NoPlayers);
            }
            if state.outstanding.is_some() {
                return Err(LotteryError::DrawPending);
            }
        }

        let request_id = self
            .oracle
            .request_random(self.subscription, self.address)
            .await?;
        self.state.write().outstanding = Some(request_id);
        Ok(request_id)
    }
}

#[async_trait]
impl<O, L> RandomnessConsumer for VrfLottery<O, L>
where
    O: RandomnessOracle,
    L: FundsLedger,
{
    async fn fulfill_random(&self, request_id: RequestId, value: U256) -> OracleResult<()> {
        let (winner, pot) = {
            let mut state = self.state.write();
            if state.outstanding != Some(request_id) {
                return Err(OracleError::UnexpectedRequest(request_id));
            }

            let index = (value % U256::from(state.players.len() as u64)).low_u64() as usize;
            let winner = state.players[index];
            let pot = state.pot;

            state.outstanding = None;
            state.winner = Some(winner);
            state.players.clear();
            state.pot = 0;
            (winner, pot)
        };

        self.ledger.credit(&winner, pot);
        info!(
            request_id,
            winner = %display_address(&winner),
            pot,
            "vrf lottery pot paid out"
        );
        Ok(())
    }
}

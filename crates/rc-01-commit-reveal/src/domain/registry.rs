//! Participant registry.
//!
//! Tracks which addresses entered the round, their staked deposit and
//! commitment hash, plus the insertion-ordered entrant list the
//! aggregator iterates over. Order is fixed at commit time.

use super::error::{RoundError, RoundResult};
use shared_types::{Address, Amount, Hash, ParticipantView, U256};
use std::collections::HashMap;

/// State held per committed participant.
#[derive(Debug, Clone)]
pub struct Participant {
    /// Commitment hash submitted during the commit phase.
    pub commitment: Hash,
    /// Deposit escrowed at commit time (equals the round's entry fee).
    pub deposit: Amount,
    /// True once a reveal succeeded.
    pub revealed: bool,
    /// The revealed secret, set only after a successful reveal.
    pub secret: Option<U256>,
    /// True once the deposit was forfeited; a slashed participant can
    /// neither reveal late nor be slashed twice.
    pub slashed: bool,
}

/// Registry of all entrants of one round.
#[derive(Debug, Default)]
pub struct Registry {
    entries: HashMap<Address, Participant>,
    /// Insertion order, never reordered.
    order: Vec<Address>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new participant.
    ///
    /// Rejects a duplicate commit from the same address.
    pub fn register(
        &mut self,
        address: Address,
        commitment: Hash,
        deposit: Amount,
    ) -> RoundResult<()> {
        if self.entries.contains_key(&address) {
            return Err(RoundError::AlreadyCommitted(address));
        }

        self.entries.insert(
            address,
            Participant {
                commitment,
                deposit,
                revealed: false,
                secret: None,
                slashed: false,
            },
        );
        self.order.push(address);
        Ok(())
    }

    pub fn contains(&self, address: &Address) -> bool {
        self.entries.contains_key(address)
    }

    pub fn get(&self, address: &Address) -> Option<&Participant> {
        self.entries.get(address)
    }

    pub(crate) fn get_mut(&mut self, address: &Address) -> Option<&mut Participant> {
        self.entries.get_mut(address)
    }

    /// Entrants in insertion order.
    pub fn order(&self) -> &[Address] {
        &self.order
    }

    /// Entrant at a given position of the ordering list.
    pub fn participant_at(&self, index: usize) -> Option<Address> {
        self.order.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn revealed_count(&self) -> usize {
        self.entries.values().filter(|p| p.revealed).count()
    }

    /// Iterate participants in insertion order.
    pub fn iter_ordered(&self) -> impl Iterator<Item = (&Address, &Participant)> {
        self.order.iter().map(move |addr| {
            let participant = self
                .entries
                .get(addr)
                .expect("ordering list entry without registry entry");
            (addr, participant)
        })
    }

    /// Snapshot of all entries for external queries.
    pub fn views(&self) -> Vec<ParticipantView> {
        self.iter_ordered()
            .map(|(addr, p)| ParticipantView {
                address: *addr,
                commitment: p.commitment,
                deposit: p.deposit,
                revealed: p.revealed,
                slashed: p.slashed,
            })
            .collect()
    }
}

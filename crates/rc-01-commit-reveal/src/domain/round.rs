//! A single randomness round: phase state machine plus the state it
//! guards.
//!
//! The round owns its participant registry and ordering list; no
//! participant outlives the round it joined. All mutations validate
//! every precondition before touching state, so a rejected call leaves
//! the round exactly as it was (all-or-nothing per call).

use super::aggregator;
use super::commitment::verify_commitment;
use super::error::{RoundError, RoundResult};
use super::phase::Phase;
use super::registry::Registry;
use super::slashing;
use shared_types::{Address, Amount, Hash, RoundId, U256};

/// One commit-reveal randomness round.
#[derive(Debug)]
pub struct Round {
    id: RoundId,
    phase: Phase,
    /// Fixed deposit every entrant must stake, immutable after creation.
    entry_fee: Amount,
    /// Unix-seconds deadline, set on the Commit -> Reveal transition.
    reveal_deadline: Option<u64>,
    /// Set once on the Reveal -> Finalized transition.
    final_value: Option<U256>,
    registry: Registry,
}

impl Round {
    pub fn new(id: RoundId, entry_fee: Amount) -> Self {
        Self {
            id,
            phase: Phase::Commit,
            entry_fee,
            reveal_deadline: None,
            final_value: None,
            registry: Registry::new(),
        }
    }

    pub fn id(&self) -> RoundId {
        self.id
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn entry_fee(&self) -> Amount {
        self.entry_fee
    }

    pub fn reveal_deadline(&self) -> Option<u64> {
        self.reveal_deadline
    }

    pub fn final_value(&self) -> Option<U256> {
        self.final_value
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    fn require_phase(&self, expected: Phase) -> RoundResult<()> {
        if self.phase != expected {
            return Err(RoundError::WrongPhase {
                expected,
                actual: self.phase,
            });
        }
        Ok(())
    }

    /// Check every `commit` precondition without mutating.
    ///
    /// The service runs this before escrowing the deposit so a ledger
    /// failure cannot leave a half-registered participant.
    pub fn validate_commit(&self, caller: &Address, deposit: Amount) -> RoundResult<()> {
        self.require_phase(Phase::Commit)?;
        if self.registry.contains(caller) {
            return Err(RoundError::AlreadyCommitted(*caller));
        }
        if deposit != self.entry_fee {
            return Err(RoundError::DepositMismatch {
                required: self.entry_fee,
                got: deposit,
            });
        }
        Ok(())
    }

    /// Register a commitment. Legal only in `Commit` phase; the
    /// deposit must equal the entry fee exactly and the caller must
    /// not have committed before.
    pub fn commit(&mut self, caller: Address, commitment: Hash, deposit: Amount) -> RoundResult<()> {
        self.validate_commit(&caller, deposit)?;
        self.registry.register(caller, commitment, deposit)
    }

    /// Transition `Commit -> Reveal` and arm the reveal deadline.
    ///
    /// Returns the deadline (now + `reveal_window_secs`).
    pub fn start_reveal(&mut self, now: u64, reveal_window_secs: u64) -> RoundResult<u64> {
        self.require_phase(Phase::Commit)?;

        let deadline = now + reveal_window_secs;
        self.phase = Phase::Reveal;
        self.reveal_deadline = Some(deadline);
        Ok(deadline)
    }

    /// Disclose a secret. Legal only in `Reveal` phase; the recomputed
    /// commitment hash must match the one stored at commit time.
    pub fn reveal(&mut self, caller: Address, secret: U256) -> RoundResult<()> {
        self.require_phase(Phase::Reveal)?;

        let participant = self
            .registry
            .get(&caller)
            .ok_or(RoundError::UnknownParticipant(caller))?;

        if participant.slashed {
            return Err(RoundError::AlreadySlashed(caller));
        }
        if participant.revealed {
            return Err(RoundError::AlreadyRevealed(caller));
        }
        if !verify_commitment(&participant.commitment, secret) {
            return Err(RoundError::CommitmentMismatch(caller));
        }

        // Preconditions hold: record the secret.
        let participant = self
            .registry
            .get_mut(&caller)
            .ok_or(RoundError::UnknownParticipant(caller))?;
        participant.revealed = true;
        participant.secret = Some(secret);
        Ok(())
    }

    /// Transition `Reveal -> Finalized` and compute the final random
    /// value as the XOR of all revealed secrets.
    ///
    /// Partial reveals still finalize; withheld secrets simply drop
    /// out of the XOR. Calling again after finalization fails on the
    /// phase gate.
    pub fn finalize(&mut self) -> RoundResult<U256> {
        self.require_phase(Phase::Reveal)?;

        let value = aggregator::aggregate(&self.registry);
        self.phase = Phase::Finalized;
        self.final_value = Some(value);
        Ok(value)
    }

    /// Forfeit the deposit of a committed, unrevealed participant
    /// strictly after the reveal deadline. Returns the forfeited
    /// amount for the service to pay out to the slashing caller.
    pub fn slash(&mut self, target: Address, now: u64) -> RoundResult<Amount> {
        self.require_phase(Phase::Reveal)?;

        let deadline = self
            .reveal_deadline
            .expect("reveal phase without armed deadline");
        slashing::enforce(&mut self.registry, target, now, deadline)
    }
}

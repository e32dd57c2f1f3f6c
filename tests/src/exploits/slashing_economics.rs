//! Deadline-gated slashing and the economics of withholding.
//!
//! Slashing makes withholding cost a deposit, but deterrence is a
//! question of magnitude: an attacker who stands to win the whole pot
//! only walks away when the penalty is at least pot-sized.

#[cfg(test)]
mod tests {
    use crate::integration::{addr, deploy_beacon, OPENING_BALANCE};
    use rc_01_commit_reveal::{commitment_hash, FundsLedger, Phase, RoundError};
    use shared_types::{Amount, ETHER, U256};

    const ENTRY_FEE: Amount = ETHER;

    #[tokio::test]
    async fn test_slash_rejected_while_reveal_window_open() {
        let fx = deploy_beacon(2);
        let round = fx.service.open_round(ENTRY_FEE);
        fx.service
            .submit_commit(round, addr(1), commitment_hash(U256::from(5u64)), ENTRY_FEE)
            .unwrap();
        fx.service.begin_reveal_phase(round).unwrap();

        let err = fx
            .service
            .enforce_slash(round, addr(2), addr(1))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            RoundError::RevealWindowOpen { remaining_secs: 600 }
        ));
        assert_eq!(fx.ledger.balance(&addr(2)), OPENING_BALANCE);
    }

    #[tokio::test]
    async fn test_slash_after_deadline_pays_deposit_to_claimant() {
        let fx = deploy_beacon(2);
        let round = fx.service.open_round(ENTRY_FEE);
        fx.service
            .submit_commit(round, addr(1), commitment_hash(U256::from(5u64)), ENTRY_FEE)
            .unwrap();
        fx.service.begin_reveal_phase(round).unwrap();

        fx.clock.advance(11 * 60);

        let amount = fx
            .service
            .enforce_slash(round, addr(2), addr(1))
            .await
            .unwrap();
        assert_eq!(amount, ENTRY_FEE);
        assert_eq!(fx.ledger.balance(&addr(2)), OPENING_BALANCE + ENTRY_FEE);

        // A second claim against the same target finds nothing left.
        let err = fx
            .service
            .enforce_slash(round, addr(2), addr(1))
            .await
            .unwrap_err();
        assert!(matches!(err, RoundError::AlreadySlashed(a) if a == addr(1)));
        assert_eq!(fx.ledger.balance(&addr(2)), OPENING_BALANCE + ENTRY_FEE);
    }

    #[tokio::test]
    async fn test_slashed_participant_locked_out_of_reveal() {
        let fx = deploy_beacon(2);
        let round = fx.service.open_round(ENTRY_FEE);
        let secret = U256::from(5u64);
        fx.service
            .submit_commit(round, addr(1), commitment_hash(secret), ENTRY_FEE)
            .unwrap();
        fx.service.begin_reveal_phase(round).unwrap();
        fx.clock.advance(11 * 60);
        fx.service
            .enforce_slash(round, addr(2), addr(1))
            .await
            .unwrap();

        let err = fx
            .service
            .submit_reveal(round, addr(1), secret)
            .await
            .unwrap_err();
        assert!(matches!(err, RoundError::AlreadySlashed(_)));

        // The round still finalizes without the slashed secret.
        let value = fx.service.compute_final_random(round).await.unwrap();
        assert_eq!(value, U256::zero());
        assert_eq!(fx.service.round_phase(round).unwrap(), Phase::Finalized);
    }

    #[tokio::test]
    async fn test_revealed_participant_cannot_be_slashed() {
        let fx = deploy_beacon(2);
        let round = fx.service.open_round(ENTRY_FEE);
        let secret = U256::from(5u64);
        fx.service
            .submit_commit(round, addr(1), commitment_hash(secret), ENTRY_FEE)
            .unwrap();
        fx.service.begin_reveal_phase(round).unwrap();
        fx.service.submit_reveal(round, addr(1), secret).await.unwrap();
        fx.clock.advance(11 * 60);

        let err = fx
            .service
            .enforce_slash(round, addr(2), addr(1))
            .await
            .unwrap_err();
        assert!(matches!(err, RoundError::TargetRevealed(a) if a == addr(1)));
    }

    /// Withholding with a fee-sized penalty: ten honest players put up
    /// 10 ETH; the attacker stakes 1 ETH, withholds, and forfeits only
    /// that stake while steering a pot worth eleven times as much.
    #[tokio::test]
    async fn test_fee_sized_penalty_does_not_deter_withholding() {
        let fx = deploy_beacon(12);
        let attacker = addr(11);
        let claimant = addr(12);
        let round = fx.service.open_round(ENTRY_FEE);

        for id in 1..=10 {
            fx.service
                .submit_commit(
                    round,
                    addr(id),
                    commitment_hash(U256::from(id as u64)),
                    ENTRY_FEE,
                )
                .unwrap();
        }
        fx.service
            .submit_commit(round, attacker, commitment_hash(U256::from(99u64)), ENTRY_FEE)
            .unwrap();
        let pool: Amount = 11 * ENTRY_FEE;

        fx.service.begin_reveal_phase(round).unwrap();
        for id in 1..=10 {
            fx.service
                .submit_reveal(round, addr(id), U256::from(id as u64))
                .await
                .unwrap();
        }

        // Attacker withholds, eats the slash, round finalizes without
        // their secret.
        fx.clock.advance(11 * 60);
        let penalty = fx
            .service
            .enforce_slash(round, claimant, attacker)
            .await
            .unwrap();
        fx.service.compute_final_random(round).await.unwrap();

        // The penalty is the deposit the attacker already escrowed at
        // commit time, so the whole attack costs one entry fee.
        let attack_cost = penalty;
        assert_eq!(attack_cost, ENTRY_FEE);
        assert_eq!(fx.ledger.balance(&attacker), OPENING_BALANCE - attack_cost);

        // Steering an 11 ETH pot for 1 ETH is a clear win.
        let profit = pool - attack_cost;
        assert!(profit > 0);

        // Deterrence needs a penalty that covers the whole pool; a
        // pool-sized forfeit is 11x what this protocol charges.
        let deterrent_penalty = pool;
        assert!(deterrent_penalty >= pool && deterrent_penalty > attack_cost);
        assert_eq!(deterrent_penalty, 11 * attack_cost);
    }
}

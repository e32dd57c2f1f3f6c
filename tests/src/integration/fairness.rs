//! Fairness under honest play.
//!
//! With every participant committing an independently random secret
//! and revealing honestly, the final value modulo a small k should be
//! statistically indistinguishable from uniform.

#[cfg(test)]
mod tests {
    use crate::integration::{addr, deploy_beacon};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rc_01_commit_reveal::commitment_hash;
    use shared_types::{ETHER, U256};

    const ENTRY_FEE: u128 = ETHER / 10;
    const PLAYERS: u8 = 3;

    /// Run one honest round with the given secrets, returning the
    /// final random value.
    async fn honest_round(
        fx: &crate::integration::BeaconFixture,
        secrets: &[U256],
    ) -> U256 {
        let round = fx.service.open_round(ENTRY_FEE);
        for (i, secret) in secrets.iter().enumerate() {
            fx.service
                .submit_commit(round, addr(i as u8 + 1), commitment_hash(*secret), ENTRY_FEE)
                .unwrap();
        }
        fx.service.begin_reveal_phase(round).unwrap();
        for (i, secret) in secrets.iter().enumerate() {
            fx.service
                .submit_reveal(round, addr(i as u8 + 1), *secret)
                .await
                .unwrap();
        }
        fx.service.compute_final_random(round).await.unwrap()
    }

    /// Chi-square goodness-of-fit against a uniform distribution.
    fn chi_square(observed: &[u64], expected_per_bucket: f64) -> f64 {
        observed
            .iter()
            .map(|&o| {
                let d = o as f64 - expected_per_bucket;
                d * d / expected_per_bucket
            })
            .sum()
    }

    #[tokio::test]
    async fn test_final_value_mod_k_uniform_chi_square() {
        // 240 honest rounds, k = 8 buckets, seeded so the suite is
        // reproducible. df = 7, rejection threshold 18.475 (α = 0.01).
        const ROUNDS: usize = 240;
        const K: u64 = 8;

        let fx = deploy_beacon(PLAYERS);
        // Wallets need to cover 240 deposits.
        for id in 1..=PLAYERS {
            fx.ledger.fund(addr(id), ROUNDS as u128 * ENTRY_FEE);
        }

        let mut rng = StdRng::seed_from_u64(42);
        let mut buckets = [0u64; K as usize];

        for _ in 0..ROUNDS {
            let secrets: Vec<U256> = (0..PLAYERS)
                .map(|_| U256::from(rng.gen::<u64>()))
                .collect();
            let value = honest_round(&fx, &secrets).await;
            buckets[(value % U256::from(K)).low_u64() as usize] += 1;
        }

        let statistic = chi_square(&buckets, ROUNDS as f64 / K as f64);
        assert!(
            statistic < 18.475,
            "chi-square statistic {statistic:.2} rejects uniformity; buckets: {buckets:?}"
        );
    }

    #[tokio::test]
    async fn test_winner_selection_not_degenerate() {
        // 60 honest 3-player games decided by final value mod 3; every
        // player should win at least once.
        const GAMES: usize = 60;

        let fx = deploy_beacon(PLAYERS);
        for id in 1..=PLAYERS {
            fx.ledger.fund(addr(id), GAMES as u128 * ENTRY_FEE);
        }

        let mut rng = StdRng::seed_from_u64(7);
        let mut wins = [0u64; PLAYERS as usize];

        for _ in 0..GAMES {
            let secrets: Vec<U256> = (0..PLAYERS)
                .map(|_| U256::from(rng.gen::<u64>()))
                .collect();
            let value = honest_round(&fx, &secrets).await;
            wins[(value % U256::from(PLAYERS as u64)).low_u64() as usize] += 1;
        }

        for (player, count) in wins.iter().enumerate() {
            assert!(
                *count > 0,
                "player {player} never won in {GAMES} games: {wins:?}"
            );
        }
    }
}

//! Lottery use case, both randomness sources side by side.

#[cfg(test)]
mod tests {
    use crate::integration::{addr, deploy_beacon};
    use rc_01_commit_reveal::{commitment_hash, FundsLedger, InMemoryLedger};
    use rc_02_vrf_oracle::MockVrfCoordinator;
    use rc_03_lottery::{RandaoLottery, VrfLottery};
    use shared_types::{Address, ETHER, U256};
    use std::sync::Arc;

    const TICKET: u128 = ETHER / 100;
    const VRF_LOTTERY_ADDR: Address = [0x10; 20];
    const OWNER: Address = [0xAD; 20];

    #[tokio::test]
    async fn test_randao_lottery_three_players() {
        let fx = deploy_beacon(3);
        let beacon = Arc::new(fx.service);
        let lottery = RandaoLottery::open(beacon, fx.ledger.clone(), TICKET);
        let secrets = [111u64, 222, 333];

        // Commit phase: three tickets sold.
        for (i, secret) in secrets.iter().enumerate() {
            lottery
                .enter(
                    addr(i as u8 + 1),
                    commitment_hash(U256::from(*secret)),
                    TICKET,
                )
                .unwrap();
        }

        // Reveal phase: three reveals.
        lottery.close_entries().unwrap();
        for (i, secret) in secrets.iter().enumerate() {
            lottery
                .reveal(addr(i as u8 + 1), U256::from(*secret))
                .await
                .unwrap();
        }

        // One of the three entrants takes the whole pot.
        let winner = lottery.pick_winner().await.unwrap();
        let expected_value =
            U256::from(111u64) ^ U256::from(222u64) ^ U256::from(333u64);
        let expected_index = (expected_value % U256::from(3u64)).low_u64() as u8;
        assert_eq!(winner, addr(expected_index + 1));
    }

    #[tokio::test]
    async fn test_vrf_lottery_three_players() {
        let coordinator = Arc::new(MockVrfCoordinator::new(ETHER / 10));
        let sub = coordinator.create_subscription();
        coordinator.fund_subscription(sub, 100 * ETHER).unwrap();
        coordinator.add_consumer(sub, VRF_LOTTERY_ADDR).unwrap();

        let ledger = Arc::new(InMemoryLedger::new());
        for id in 1..=3 {
            ledger.fund(addr(id), ETHER);
        }

        let lottery = Arc::new(VrfLottery::new(
            VRF_LOTTERY_ADDR,
            OWNER,
            sub,
            coordinator.clone(),
            ledger.clone(),
            TICKET,
        ));
        coordinator.register_callback(VRF_LOTTERY_ADDR, lottery.clone());

        for id in 1..=3 {
            lottery.enter(addr(id), TICKET).unwrap();
        }

        let request_id = lottery.pick_winner(OWNER).await.unwrap();
        coordinator.fulfill_random_words(request_id).await.unwrap();

        let winner = lottery.winner().expect("draw settled in the callback");
        assert_eq!(ledger.balance(&winner), ETHER - TICKET + 3 * TICKET);
    }
}

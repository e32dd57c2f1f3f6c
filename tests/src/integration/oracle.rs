//! Oracle baseline flow.
//!
//! Mirrors the deployment dance of the mock coordinator: create a
//! subscription, fund it, authorize the consumer, request, fulfill.

#[cfg(test)]
mod tests {
    use rc_02_vrf_oracle::{MockVrfCoordinator, VrfGame};
    use shared_types::{Address, ETHER, U256};
    use std::sync::Arc;

    const BASE_FEE: u128 = ETHER / 10;
    const GAME_ADDR: Address = [0x6A; 20];

    fn deploy() -> (
        Arc<MockVrfCoordinator>,
        Arc<VrfGame<MockVrfCoordinator>>,
        u64,
    ) {
        let coordinator = Arc::new(MockVrfCoordinator::new(BASE_FEE));
        let sub = coordinator.create_subscription();
        coordinator.fund_subscription(sub, 10 * ETHER).unwrap();
        coordinator.add_consumer(sub, GAME_ADDR).unwrap();

        let game = Arc::new(VrfGame::new(GAME_ADDR, sub, coordinator.clone()));
        coordinator.register_callback(GAME_ADDR, game.clone());
        (coordinator, game, sub)
    }

    #[tokio::test]
    async fn test_request_and_callback_deliver_one_word() {
        let (coordinator, game, _) = deploy();

        let request_id = game.play().await.unwrap();
        let value = coordinator.fulfill_random_words(request_id).await.unwrap();

        assert_eq!(game.random_result(), Some(value));
        assert_ne!(value, U256::zero());
    }

    #[tokio::test]
    async fn test_cost_is_flat_per_request() {
        // The subscription pays the same base fee per draw no matter
        // how much state the consumer carries: the O(1) contrast to
        // the beacon's O(n) aggregation.
        let (coordinator, game, sub) = deploy();
        let opening = coordinator.subscription_balance(sub).unwrap();

        for i in 1..=3u128 {
            let request_id = game.play().await.unwrap();
            coordinator.fulfill_random_words(request_id).await.unwrap();
            assert_eq!(
                coordinator.subscription_balance(sub).unwrap(),
                opening - i * BASE_FEE
            );
        }
    }
}

//! Error types for the oracle subsystem.

use crate::SubscriptionId;
use shared_types::{Address, Amount, RequestId};

/// Oracle error types.
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    #[error("unknown subscription: {0}")]
    UnknownSubscription(SubscriptionId),

    #[error("subscription {subscription} underfunded: required {required}, available {available}")]
    InsufficientSubscriptionBalance {
        subscription: SubscriptionId,
        required: Amount,
        available: Amount,
    },

    #[error("consumer {consumer:?} not authorized on subscription {subscription}")]
    ConsumerNotAuthorized {
        subscription: SubscriptionId,
        consumer: Address,
    },

    #[error("no callback registered for consumer {0:?}")]
    UnknownConsumer(Address),

    #[error("unknown request: {0}")]
    UnknownRequest(RequestId),

    #[error("delivery for a request this consumer never sent: {0}")]
    UnexpectedRequest(RequestId),

    #[error("consumer callback failed: {0}")]
    Callback(String),
}

/// Result type for oracle operations.
pub type OracleResult<T> = Result<T, OracleError>;

//! Error types for the cart store.

use thiserror::Error;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The cart was used after its session ended.
    #[error("Cart used outside of an active session")]
    InactiveSession,

    /// The quantity was refused by the configured [`QuantityPolicy`](crate::cart_actor::QuantityPolicy).
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// An error occurred while communicating with the store.
    #[error("Store communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CartError {
    fn from(msg: String) -> Self {
        CartError::ActorCommunicationError(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_becomes_communication_error() {
        let error: CartError = String::from("Cart store task failed: panicked").into();
        assert_eq!(
            error,
            CartError::ActorCommunicationError("Cart store task failed: panicked".to_string())
        );
    }
}

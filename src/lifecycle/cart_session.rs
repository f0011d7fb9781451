//! # Cart Session
//!
//! Starts a cart store, hands out the [`CartClient`] bound to it and stops it again.

use crate::cart_actor::{self, CartError, CartRules};
use crate::clients::CartClient;
use crate::framework::StoreHandle;
use crate::lifecycle::CartConfig;
use tracing::{error, info};

/// The activation scope of a cart.
///
/// `CartSession` is responsible for:
/// - **Activation**: starting a fresh cart store whose order starts out absent
/// - **Access**: handing the [`CartClient`] to every consumer that needs the cart
/// - **Deactivation**: stopping the store so stale clients fail instead of acting on a dead cart
///
/// Consumers receive the client explicitly (constructor or parameter), there is no global cart.
///
/// # Example
///
/// ```ignore
/// let session = CartSession::new();
/// let cart = session.client();
///
/// cart.add_product(product, 2).await?;
/// assert_eq!(cart.total_item_count()?, 2);
///
/// session.shutdown().await?;
/// assert_eq!(cart.total_item_count(), Err(CartError::InactiveSession));
/// ```
pub struct CartSession {
    /// Client for interacting with the cart store
    client: CartClient,

    /// Task handle of the running store (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl CartSession {
    /// Starts a session with the default [`CartConfig`]. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        Self::with_config(CartConfig::default())
    }

    /// Starts a session with `config`. Must be called inside a Tokio runtime.
    pub fn with_config(config: CartConfig) -> Self {
        let (actor, generic_client) =
            cart_actor::new(config.effective_buffer_size(), config.publish);
        let client = CartClient::new(generic_client);

        // The quantity rules travel as the store's runtime context.
        let handle = tokio::spawn(actor.run(CartRules::new(config.quantities)));
        info!(?config, "Cart session started");

        Self { client, handle }
    }

    /// The access point: a client bound to this session's cart.
    pub fn client(&self) -> CartClient {
        self.client.clone()
    }

    /// Ends the session.
    ///
    /// Commands already queued are applied, then the store stops. Every client handed out by this
    /// session reports [`CartError::InactiveSession`] afterwards.
    pub async fn shutdown(self) -> Result<(), CartError> {
        info!("Shutting down cart session...");

        self.client
            .inner()
            .shutdown()
            .await
            .map_err(CartClient::map_error)?;
        drop(self.client);

        if let Err(e) = self.handle.await {
            error!("Cart store task failed: {:?}", e);
            return Err(format!("Cart store task failed: {e}").into());
        }

        info!("Cart session shutdown complete.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Product;

    #[tokio::test]
    async fn test_each_session_starts_without_order() {
        let first = CartSession::new();
        first
            .client()
            .add_product(Product::with_id("P1"), 3)
            .await
            .unwrap();
        first.shutdown().await.unwrap();

        let second = CartSession::new();
        let cart = second.client();
        assert!(cart.order().unwrap().is_none());
        assert_eq!(cart.total_item_count().unwrap(), 0);
        second.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_subscriber_keeps_last_snapshot_after_shutdown() {
        let session = CartSession::new();
        let cart = session.client();
        let pending = {
            let cart = cart.clone();
            tokio::spawn(async move { cart.add_product(Product::with_id("P1"), 1).await })
        };
        pending.await.unwrap().unwrap();

        let mut updates = cart.subscribe().unwrap();
        session.shutdown().await.unwrap();

        assert_eq!(updates.borrow_and_update().quantity_of(&"P1".into()), 1);
        assert_eq!(cart.quantity_of(&"P1".into()), Err(CartError::InactiveSession));
    }
}

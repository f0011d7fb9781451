//! # Cart Client
//!
//! Provides the consumer-facing API of the cart store. It wraps a `StoreClient<Cart>` and exposes
//! the two queries and two commands of the cart, plus access to the raw order snapshot.
use crate::cart_actor::{Cart, CartCommand, CartError};
use crate::framework::{FrameworkError, Snapshot, StoreClient, StoreHandle};
use crate::model::{Order, Product, ProductId};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Client for interacting with the cart store.
///
/// Queries read the latest published snapshot and never wait. Commands are queued on the store
/// and resolve once their result has been published, so a query issued after an awaited command
/// always sees that command's effect.
#[derive(Clone)]
pub struct CartClient {
    inner: StoreClient<Cart>,
}

impl CartClient {
    pub fn new(inner: StoreClient<Cart>) -> Self {
        Self { inner }
    }
}

impl StoreHandle<Cart> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &StoreClient<Cart> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::ActorClosed => CartError::InactiveSession,
            FrameworkError::Rejected(source) => match source.downcast::<CartError>() {
                Ok(cart_error) => *cart_error,
                Err(other) => CartError::ActorCommunicationError(other.to_string()),
            },
            other => CartError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl CartClient {
    /// Sum of the quantities of every line, 0 when no order was started.
    pub fn total_item_count(&self) -> Result<i64, CartError> {
        Ok(self.snapshot()?.total_item_count())
    }

    /// Quantity held for `id`, 0 when there is no order or no such line.
    pub fn quantity_of(&self, id: &ProductId) -> Result<i64, CartError> {
        Ok(self.snapshot()?.quantity_of(id))
    }

    /// The current order, shared read-only.
    pub fn order(&self) -> Result<Option<Arc<Order>>, CartError> {
        Ok(self.snapshot()?.shared_order())
    }

    /// Adds `quantity` of `product`, starting the order if needed.
    ///
    /// Returns the snapshot published by this command.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn add_product(
        &self,
        product: Product,
        quantity: i64,
    ) -> Result<Snapshot<Cart>, CartError> {
        debug!("Sending request");
        self.inner
            .dispatch(CartCommand::AddProduct { product, quantity })
            .await
            .map_err(Self::map_error)
    }

    /// Subtracts `quantity` of `product` when the line holds at least that much.
    ///
    /// Removing from a cart without an order, removing an unknown product or removing more than
    /// present are not errors; the returned snapshot shows the unchanged quantities.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn remove_product(
        &self,
        product: Product,
        quantity: i64,
    ) -> Result<Snapshot<Cart>, CartError> {
        debug!("Sending request");
        self.inner
            .dispatch(CartCommand::RemoveProduct { product, quantity })
            .await
            .map_err(Self::map_error)
    }

    /// Waits for the next publish after `receiver`'s last seen snapshot.
    ///
    /// Fails with [`CartError::InactiveSession`] when the session ends first.
    pub async fn changed(
        receiver: &mut tokio::sync::watch::Receiver<Snapshot<Cart>>,
    ) -> Result<Snapshot<Cart>, CartError> {
        receiver
            .changed()
            .await
            .map_err(|_| CartError::InactiveSession)?;
        Ok(receiver.borrow_and_update().clone())
    }
}

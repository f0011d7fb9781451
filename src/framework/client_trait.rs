//! # StoreHandle Trait
//!
//! Provides a common interface for domain-specific clients, adding default read operations on top
//! of a generic [`StoreClient`] and mapping framework errors into the domain's error type.
use crate::framework::{FrameworkError, Snapshot, StoreClient, StoreState};
use async_trait::async_trait;
use tokio::sync::watch;

/// Trait for domain clients to inherit the standard store operations.
///
/// # Example
///
/// ```rust
/// use pedido_store::framework::{FrameworkError, StoreClient, StoreHandle, StoreState};
///
/// #[derive(Clone, Debug, Default, PartialEq)]
/// struct Counter(i64);
/// #[derive(Debug)] struct Add(i64);
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct CounterError(String);
///
/// impl StoreState for Counter {
///     type Command = Add; type Context = (); type Error = CounterError;
///     fn apply(&self, Add(n): Add, _: &()) -> Result<Option<Self>, CounterError> {
///         Ok(Some(Counter(self.0 + n)))
///     }
/// }
///
/// struct CounterClient {
///     inner: StoreClient<Counter>,
/// }
///
/// impl StoreHandle<Counter> for CounterClient {
///     type Error = CounterError;
///
///     fn inner(&self) -> &StoreClient<Counter> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         CounterError(e.to_string())
///     }
/// }
///
/// // snapshot(), fetch() and subscribe() are provided automatically!
/// async fn usage(client: CounterClient) -> Result<i64, CounterError> {
///     Ok(client.fetch().await?.0)
/// }
/// ```
#[async_trait]
pub trait StoreHandle<S: StoreState>: Send + Sync {
    /// The domain-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic StoreClient.
    fn inner(&self) -> &StoreClient<S>;

    /// Map framework errors to the domain error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Latest published snapshot, read without waiting on the store.
    fn snapshot(&self) -> Result<Snapshot<S>, Self::Error> {
        self.inner().snapshot().map_err(Self::map_error)
    }

    /// Receiver notified after every publish.
    fn subscribe(&self) -> Result<watch::Receiver<Snapshot<S>>, Self::Error> {
        self.inner().subscribe().map_err(Self::map_error)
    }

    /// Snapshot ordered after every command this client already sent.
    #[tracing::instrument(skip(self))]
    async fn fetch(&self) -> Result<Snapshot<S>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().fetch().await.map_err(Self::map_error)
    }
}

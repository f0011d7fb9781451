//! # Generic Store Server
//!
//! This module defines the `StoreActor`, the component that owns a single [`StoreState`] value,
//! applies commands to it one at a time and publishes every resulting snapshot to subscribers.

use crate::framework::client::StoreClient;
use crate::framework::error::FrameworkError;
use crate::framework::message::StoreRequest;
use crate::framework::snapshot::Snapshot;
use crate::framework::state::StoreState;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

/// When a store re-publishes a state that compares equal to the current one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublishPolicy {
    /// Publish whenever the state asks for it, even if nothing changed.
    /// Subscribers see a new revision for every accepted command.
    #[default]
    Always,
    /// Skip publishes whose state equals the current one.
    OnChange,
}

/// The generic store that owns one state value.
///
/// # Architecture Note
/// This struct is the "Server" half of the store. It owns the state and the receiver end of the
/// command channel; consumers only ever hold a [`StoreClient`].
///
/// **Concurrency Model**:
/// Commands are processed *sequentially* in `run()`. Each command computes the next state from the
/// current one with [`StoreState::apply`], so two commands can never start from the same base and
/// overwrite each other. No `Mutex` is needed: the task has exclusive ownership of the state.
///
/// # Usage Pattern
///
/// 1.  **Create**: `StoreActor::new()` returns the `actor` (server) and `client` (interface).
/// 2.  **Wire**: pass the state's context into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop in a background task.
///
/// ```rust
/// use pedido_store::framework::{PublishPolicy, StoreActor, StoreState};
///
/// #[derive(Clone, Debug, Default, PartialEq)]
/// struct Counter(i64);
///
/// #[derive(Debug)]
/// struct Add(i64);
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("counter error")]
/// struct CounterError;
///
/// impl StoreState for Counter {
///     type Command = Add;
///     type Context = ();
///     type Error = CounterError;
///
///     fn apply(&self, Add(n): Add, _: &()) -> Result<Option<Self>, CounterError> {
///         Ok(Some(Counter(self.0 + n)))
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = StoreActor::<Counter>::new(10, PublishPolicy::Always);
///     tokio::spawn(actor.run(()));
///
///     let snapshot = client.dispatch(Add(2)).await.unwrap();
///     assert_eq!(snapshot.0, 2);
///     assert_eq!(snapshot.revision(), 1);
/// }
/// ```
///
/// # Publishing
///
/// A publish stores the new state behind a fresh `Arc`, bumps the revision and replaces the value
/// in the watch channel *before* the command's caller is answered. A caller that awaited a command
/// therefore always reads its own write from [`StoreClient::snapshot`].
pub struct StoreActor<S: StoreState> {
    receiver: mpsc::Receiver<StoreRequest<S>>,
    publisher: watch::Sender<Snapshot<S>>,
    current: Snapshot<S>,
    policy: PublishPolicy,
}

impl<S: StoreState> StoreActor<S> {
    /// Creates a new `StoreActor` holding `S::default()` and its associated `StoreClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the command channel. If the channel is full,
    ///   commands wait until there is space.
    /// * `policy` - Whether equal states are re-published.
    pub fn new(buffer_size: usize, policy: PublishPolicy) -> (Self, StoreClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let current: Snapshot<S> = Snapshot::default();
        let (publisher, snapshots) = watch::channel(current.clone());
        let actor = Self {
            receiver,
            publisher,
            current,
            policy,
        };
        let client = StoreClient::new(sender, snapshots);
        (actor, client)
    }

    /// Runs the store's event loop, processing messages until every client is dropped
    /// or a shutdown is requested.
    ///
    /// # Context Injection
    /// `context` is passed to every [`StoreState::apply`] call. It is supplied here rather than in
    /// `new()` so the rules can be decided after the client has already been handed out.
    pub async fn run(mut self, context: S::Context) {
        // Extract just the type name (e.g., "Cart" instead of "pedido_store::cart_actor::entity::Cart")
        let state_type = std::any::type_name::<S>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(state_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Dispatch {
                    command,
                    respond_to,
                } => {
                    debug!(state_type, ?command, "Dispatch");
                    match self.current.apply(command, &context) {
                        Ok(Some(next)) => {
                            self.publish(state_type, next);
                            let _ = respond_to.send(Ok(self.current.clone()));
                        }
                        Ok(None) => {
                            debug!(state_type, revision = self.current.revision(), "No-op");
                            let _ = respond_to.send(Ok(self.current.clone()));
                        }
                        Err(e) => {
                            warn!(state_type, error = %e, "Command rejected");
                            let _ = respond_to.send(Err(FrameworkError::Rejected(Box::new(e))));
                        }
                    }
                }
                StoreRequest::Fetch { respond_to } => {
                    debug!(state_type, revision = self.current.revision(), "Fetch");
                    let _ = respond_to.send(Ok(self.current.clone()));
                }
                StoreRequest::Shutdown { respond_to } => {
                    info!(state_type, "Shutdown requested");
                    self.receiver.close();
                    let _ = respond_to.send(Ok(()));
                }
            }
        }

        info!(state_type, revision = self.current.revision(), "Shutdown");
    }

    fn publish(&mut self, state_type: &str, next: S) {
        if self.policy == PublishPolicy::OnChange && *self.current == next {
            debug!(state_type, revision = self.current.revision(), "Unchanged, not published");
            return;
        }
        let revision = self.current.revision() + 1;
        self.current = Snapshot::new(revision, Arc::new(next));
        // send_replace succeeds even when no subscriber is listening.
        self.publisher.send_replace(self.current.clone());
        info!(state_type, revision, "Published");
    }
}

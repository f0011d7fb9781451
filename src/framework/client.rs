//! # Generic Client
//!
//! This module defines the generic client for communicating with a store.

use crate::framework::error::FrameworkError;
use crate::framework::message::StoreRequest;
use crate::framework::snapshot::Snapshot;
use crate::framework::state::StoreState;
use tokio::sync::{mpsc, oneshot, watch};

/// ## StoreClient
///
/// The `StoreClient<S>` is the consumer-side handle of a [`StoreActor<S>`](crate::framework::StoreActor).
/// Commands travel over a Tokio mpsc channel and are answered via oneshot channels; published
/// snapshots are read from a watch channel without a round trip.
///
/// * **Cloneable** – holds a sender and a watch receiver, so cloning is inexpensive.
/// * **Sync reads** – [`snapshot`](Self::snapshot) never awaits.
/// * **Scoped** – once the store has stopped every method fails with [`FrameworkError::ActorClosed`].
pub struct StoreClient<S: StoreState> {
    sender: mpsc::Sender<StoreRequest<S>>,
    snapshots: watch::Receiver<Snapshot<S>>,
}

impl<S: StoreState> Clone for StoreClient<S> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            snapshots: self.snapshots.clone(),
        }
    }
}

impl<S: StoreState> StoreClient<S> {
    pub fn new(
        sender: mpsc::Sender<StoreRequest<S>>,
        snapshots: watch::Receiver<Snapshot<S>>,
    ) -> Self {
        Self { sender, snapshots }
    }

    /// Whether the store behind this client is still running.
    pub fn is_active(&self) -> bool {
        !self.sender.is_closed()
    }

    /// Applies `command` and returns the snapshot current after it.
    pub async fn dispatch(&self, command: S::Command) -> Result<Snapshot<S>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Dispatch {
                command,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Returns the current snapshot, ordered after every command this client already sent.
    pub async fn fetch(&self) -> Result<Snapshot<S>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Fetch { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Asks the store to stop accepting messages.
    ///
    /// Commands already queued are still applied. Afterwards every clone of this
    /// client reports [`FrameworkError::ActorClosed`].
    pub async fn shutdown(&self) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Shutdown { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Returns the latest published snapshot without waiting on the store.
    pub fn snapshot(&self) -> Result<Snapshot<S>, FrameworkError> {
        if !self.is_active() {
            return Err(FrameworkError::ActorClosed);
        }
        Ok(self.snapshots.borrow().clone())
    }

    /// Returns a receiver that is notified after every publish.
    ///
    /// The receiver starts with the current snapshot marked as seen, so
    /// `changed().await` resolves on the *next* publish.
    pub fn subscribe(&self) -> Result<watch::Receiver<Snapshot<S>>, FrameworkError> {
        if !self.is_active() {
            return Err(FrameworkError::ActorClosed);
        }
        let mut receiver = self.snapshots.clone();
        let _ = receiver.borrow_and_update();
        Ok(receiver)
    }
}

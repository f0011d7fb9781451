//! # Generic Messages
//!
//! Message types exchanged between the [`StoreClient`](crate::framework::StoreClient) and the
//! [`StoreActor`](crate::framework::StoreActor).

use crate::framework::error::FrameworkError;
use crate::framework::snapshot::Snapshot;
use crate::framework::state::StoreState;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the store.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the store.
///
/// - **Dispatch**: run a [`StoreState::Command`] and reply with the snapshot current *after* it.
///   If the command published, the reply is the new snapshot.
/// - **Fetch**: reply with the current snapshot. Because the store processes messages in order,
///   the reply reflects every command the same client sent before.
/// - **Shutdown**: close the channel. Queued messages are drained, new ones are refused.
#[derive(Debug)]
pub enum StoreRequest<S: StoreState> {
    Dispatch {
        command: S::Command,
        respond_to: Response<Snapshot<S>>,
    },
    Fetch {
        respond_to: Response<Snapshot<S>>,
    },
    Shutdown {
        respond_to: Response<()>,
    },
}

//! # Mock Store & Testing Guide
//!
//! The `MockStore<S>` type hands out a real [`StoreClient<S>`] whose messages are answered from a
//! queue of expectations instead of by a running [`StoreActor`](crate::framework::StoreActor).
//! It lets you test the logic *around* a client (error mapping, result shaping) deterministically.
//!
//! ## When to use Mocks vs a Real Store
//!
//! | Feature | MockStore | Real Store |
//! |---------|-----------|------------|
//! | **State** | No real state (expectations) | Real command processing |
//! | **Use Case** | Unit testing client wrappers | Testing `apply` or the full session |
//! | **Error Injection** | Easy (`return_err`) | Requires a state that rejects |
//!
//! ## Example
//!
//! ```rust
//! use pedido_store::framework::mock::MockStore;
//! use pedido_store::framework::{FrameworkError, StoreState};
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct Counter(i64);
//! #[derive(Debug)] struct Add(i64);
//! #[derive(Debug, thiserror::Error)] #[error("counter error")] struct CounterError;
//!
//! impl StoreState for Counter {
//!     type Command = Add; type Context = (); type Error = CounterError;
//!     fn apply(&self, Add(n): Add, _: &()) -> Result<Option<Self>, CounterError> {
//!         Ok(Some(Counter(self.0 + n)))
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockStore::<Counter>::new();
//!     mock.expect_dispatch().return_ok(Counter(7));
//!     mock.expect_dispatch().return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.dispatch(Add(1)).await.unwrap().0, 7);
//!     assert!(matches!(client.dispatch(Add(1)).await, Err(FrameworkError::ActorClosed)));
//!
//!     mock.verify();
//! }
//! ```
//!
//! ## Mocking Utilities
//!
//! Use [`create_mock_client`] to get a client and the raw request receiver, or the fluent
//! [`MockStore`] API.

use crate::framework::client::StoreClient;
use crate::framework::error::FrameworkError;
use crate::framework::message::StoreRequest;
use crate::framework::snapshot::Snapshot;
use crate::framework::state::StoreState;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot, watch};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the response to give it.
enum Expectation<S: StoreState> {
    Dispatch { response: Result<S, FrameworkError> },
    Fetch { response: Result<S, FrameworkError> },
}

/// A mock store with expectation tracking for fluent testing.
///
/// Successful responses are published to the client's watch channel with an increasing
/// revision, so `snapshot()` on the mocked client agrees with what `dispatch()` returned.
pub struct MockStore<S: StoreState> {
    client: StoreClient<S>,
    expectations: Arc<Mutex<VecDeque<Expectation<S>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<S: StoreState> Default for MockStore<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StoreState> MockStore<S> {
    /// Creates a new mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<S>>(100);
        let (publisher, snapshots) = watch::channel(Snapshot::<S>::default());
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            let mut revision = 0;
            while let Some(request) = receiver.recv().await {
                if let StoreRequest::Shutdown { respond_to } = request {
                    receiver.close();
                    let _ = respond_to.send(Ok(()));
                    continue;
                }
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        StoreRequest::Dispatch { respond_to, .. },
                        Some(Expectation::Dispatch { response }),
                    ) => {
                        let reply = response.map(|state: S| {
                            revision += 1;
                            let snapshot = Snapshot::new(revision, Arc::new(state));
                            publisher.send_replace(snapshot.clone());
                            snapshot
                        });
                        let _ = respond_to.send(reply);
                    }
                    (StoreRequest::Fetch { respond_to }, Some(Expectation::Fetch { response })) => {
                        let reply = response.map(|state| Snapshot::new(revision, Arc::new(state)));
                        let _ = respond_to.send(reply);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender, snapshots),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StoreClient<S> {
        self.client.clone()
    }

    /// Expects a `dispatch` operation.
    pub fn expect_dispatch(&mut self) -> DispatchExpectationBuilder<S> {
        DispatchExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `fetch` operation.
    pub fn expect_fetch(&mut self) -> FetchExpectationBuilder<S> {
        FetchExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `dispatch` expectations.
pub struct DispatchExpectationBuilder<S: StoreState> {
    expectations: Arc<Mutex<VecDeque<Expectation<S>>>>,
}

impl<S: StoreState> DispatchExpectationBuilder<S> {
    /// The dispatch succeeds and publishes `state`.
    pub fn return_ok(self, state: S) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Dispatch {
            response: Ok(state),
        });
    }

    /// The dispatch fails with `error`.
    pub fn return_err(self, error: FrameworkError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Dispatch {
            response: Err(error),
        });
    }
}

/// Builder for `fetch` expectations.
pub struct FetchExpectationBuilder<S: StoreState> {
    expectations: Arc<Mutex<VecDeque<Expectation<S>>>>,
}

impl<S: StoreState> FetchExpectationBuilder<S> {
    /// The fetch returns `state` at the current revision.
    pub fn return_ok(self, state: S) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Fetch {
            response: Ok(state),
        });
    }

    /// The fetch fails with `error`.
    pub fn return_err(self, error: FrameworkError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Fetch {
            response: Err(error),
        });
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// Nothing answers the requests: the test reads them with [`expect_dispatch`] and replies
/// through the returned responder. The watch side is returned too so the test can publish.
pub fn create_mock_client<S: StoreState>(
    buffer_size: usize,
) -> (
    StoreClient<S>,
    mpsc::Receiver<StoreRequest<S>>,
    watch::Sender<Snapshot<S>>,
) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let (publisher, snapshots) = watch::channel(Snapshot::default());
    (StoreClient::new(sender, snapshots), receiver, publisher)
}

/// Helper to verify that the next message is a Dispatch request
pub async fn expect_dispatch<S: StoreState>(
    receiver: &mut mpsc::Receiver<StoreRequest<S>>,
) -> Option<(
    S::Command,
    oneshot::Sender<Result<Snapshot<S>, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Dispatch {
            command,
            respond_to,
        }) => Some((command, respond_to)),
        _ => None,
    }
}

/// Builds the snapshot a mocked store would answer with.
pub fn snapshot_of<S: StoreState>(revision: u64, state: S) -> Snapshot<S> {
    Snapshot::new(revision, Arc::new(state))
}

//! # StoreState Trait
//!
//! The `StoreState` trait defines the contract a piece of application state must satisfy to be
//! held by the generic [`StoreActor`](crate::framework::StoreActor). The state is a single value
//! (not a collection keyed by id) and every command is a **pure transformation** from the current
//! value to the next one.
//!
//! # Architecture Note
//! `apply` takes `&self` and returns the next value. The store swaps the new value in behind a
//! fresh `Arc`, so a snapshot a consumer already holds never changes.
//!
//! # Context
//! Like the runtime context of an actor, `Context` is injected into `run()` rather than stored in
//! the state. It carries the rules a command is evaluated against (e.g. validation policies).

use std::fmt::Debug;

/// Trait that any state value must implement to be managed by a [`StoreActor`](crate::framework::StoreActor).
///
/// # Contract
/// - `Default` is the state of a freshly activated store.
/// - `apply` returns `Ok(None)` when the command is a no-op that must **not** be published.
/// - `apply` returns `Ok(Some(next))` when `next` must be published, even if it compares equal to
///   the current value (the [`PublishPolicy`](crate::framework::PublishPolicy) decides whether
///   equal values are re-published).
pub trait StoreState: Clone + Debug + Default + PartialEq + Send + Sync + 'static {
    /// The commands this state understands (e.g. `AddProduct`).
    type Command: Send + Sync + Debug;

    /// The rules injected into the store at `run()` time.
    /// Use `()` if commands need no configuration.
    type Context: Send + Sync;

    /// The error returned when a command is rejected.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Compute the next state for `command`.
    fn apply(
        &self,
        command: Self::Command,
        ctx: &Self::Context,
    ) -> Result<Option<Self>, Self::Error>;
}

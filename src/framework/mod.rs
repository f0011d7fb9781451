//! Generic single-state store engine.
//!
//! This module provides the building blocks for holding one piece of application state behind a
//! serial command loop and sharing immutable snapshots of it with any number of consumers.
//!
//! # Main Components
//!
//! - [`StoreState`] - Trait that state types implement to be managed by a store
//! - [`StoreActor`] - Generic store that applies commands and publishes snapshots
//! - [`StoreClient`] - Cloneable handle for dispatching commands and reading snapshots
//! - [`StoreHandle`] - Trait domain clients implement to inherit the standard reads
//! - [`Snapshot`] - Immutable, revisioned view of the state
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning a store.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod error;
pub mod message;
pub mod mock;
pub mod snapshot;
pub mod state;

// Re-export core types for convenience
pub use actor::{PublishPolicy, StoreActor};
pub use client::StoreClient;
pub use client_trait::StoreHandle;
pub use error::FrameworkError;
pub use message::{Response, StoreRequest};
pub use snapshot::Snapshot;
pub use state::StoreState;

//! # Session Lifecycle
//!
//! Everything around the cart store that is not the cart itself:
//!
//! - [`CartSession`] - activates a store, hands out clients, shuts it down
//! - [`CartConfig`] - channel size and the publish/quantity policies
//! - [`setup_tracing`] - logging initialization, see the [`tracing`](self::tracing) module
//!
//! ## Activation Scope
//!
//! A cart lives exactly as long as its session:
//!
//! 1. **Activate** - `CartSession::new()` spawns a store holding no order
//! 2. **Inject** - `session.client()` is passed to each consumer that reads or edits the cart
//! 3. **Deactivate** - `session.shutdown()` drains queued commands and stops the store
//!
//! A client kept past step 3 fails every call with
//! [`CartError::InactiveSession`](crate::cart_actor::CartError::InactiveSession).

pub mod cart_session;
pub mod config;
pub mod tracing;

pub use cart_session::*;
pub use config::*;
pub use self::tracing::setup_tracing;

//! # Cart Actor
//!
//! The cart ("pedido") store: the [`Cart`] state plus everything needed to run it on the generic
//! [`StoreActor`](crate::framework::StoreActor).
//!
//! ## Structure
//!
//! - [`entity`] - [`StoreState`](crate::framework::StoreState) implementation for [`Cart`]
//! - [`actions`] - [`CartCommand`], the mutations a consumer can request
//! - [`rules`] - [`CartRules`] and [`QuantityPolicy`], injected at `run()` time
//! - [`error`] - [`CartError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the store and its client
//!
//! ## Usage
//!
//! ```rust
//! use pedido_store::cart_actor::{self, CartRules};
//! use pedido_store::clients::CartClient;
//! use pedido_store::framework::PublishPolicy;
//! use pedido_store::model::Product;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = cart_actor::new(32, PublishPolicy::Always);
//!     let client = CartClient::new(generic_client);
//!
//!     tokio::spawn(actor.run(CartRules::default()));
//!
//!     client.add_product(Product::with_id("P1"), 3).await?;
//!     assert_eq!(client.quantity_of(&"P1".into())?, 3);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;
pub mod rules;

pub use actions::*;
pub use entity::*;
pub use error::*;
pub use rules::*;

use crate::framework::{PublishPolicy, StoreActor, StoreClient};

/// Creates a new cart store and its client. The cart starts with no order.
pub fn new(buffer_size: usize, policy: PublishPolicy) -> (StoreActor<Cart>, StoreClient<Cart>) {
    StoreActor::new(buffer_size, policy)
}

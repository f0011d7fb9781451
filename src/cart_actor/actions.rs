//! Commands understood by the cart store.
//!
//! Each variant is evaluated by [`Cart::apply`](crate::cart_actor::Cart) as a pure transformation
//! of the current cart.

use crate::model::Product;

/// Mutations a consumer can request.
#[derive(Debug, Clone)]
pub enum CartCommand {
    /// Adds `quantity` of `product`, creating the order on first use.
    AddProduct { product: Product, quantity: i64 },
    /// Subtracts `quantity` of `product` if the line holds at least that much.
    RemoveProduct { product: Product, quantity: i64 },
}

//! Pure data structures (DTOs) for the cart: products, order lines and orders.

pub mod order;
pub mod product;

pub use order::*;
pub use product::*;

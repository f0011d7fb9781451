//! Rules the cart evaluates commands against, injected when the store is started.

use crate::cart_actor::CartError;
use serde::{Deserialize, Serialize};

/// What cart commands do with a zero or negative quantity.
///
/// Under `AcceptAny` a negative remove raises the line, the mirror of a negative add.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityPolicy {
    /// Any integer is added as-is, so a negative add decrements the line.
    #[default]
    AcceptAny,
    /// Quantities below 1 are rejected with [`CartError::InvalidQuantity`](crate::cart_actor::CartError)
    /// by both `AddProduct` and `RemoveProduct`.
    RejectNonPositive,
}

/// Runtime context of the cart store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CartRules {
    pub quantities: QuantityPolicy,
}

impl CartRules {
    pub fn new(quantities: QuantityPolicy) -> Self {
        Self { quantities }
    }

    /// Fails when `quantity` is not allowed by the configured policy.
    pub fn check(&self, quantity: i64) -> Result<(), CartError> {
        match self.quantities {
            QuantityPolicy::RejectNonPositive if quantity < 1 => {
                Err(CartError::InvalidQuantity(quantity))
            }
            _ => Ok(()),
        }
    }
}

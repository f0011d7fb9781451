//! StoreState implementation for the cart.
//!
//! [`Cart`] is the value held by the generic [`StoreActor`](crate::framework::StoreActor). It has
//! two reachable shapes: no order yet (the initial state of every session) and an order with lines.
//! There is no transition back to "no order".

use super::actions::CartCommand;
use super::error::CartError;
use super::rules::CartRules;
use crate::framework::StoreState;
use crate::model::{Order, ProductId};
use std::sync::Arc;

/// The cart state: the current order, if one was started.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    order: Option<Arc<Order>>,
}

impl Cart {
    pub fn order(&self) -> Option<&Order> {
        self.order.as_deref()
    }

    /// The order behind a shared handle, without copying its lines.
    pub fn shared_order(&self) -> Option<Arc<Order>> {
        self.order.clone()
    }

    /// Sum of all quantities, 0 without an order.
    pub fn total_item_count(&self) -> i64 {
        self.order().map_or(0, Order::total_quantity)
    }

    /// Quantity of `id`, 0 without an order or without a matching line.
    pub fn quantity_of(&self, id: &ProductId) -> i64 {
        self.order().map_or(0, |order| order.quantity_of(id))
    }
}

impl StoreState for Cart {
    type Command = CartCommand;
    type Context = CartRules;
    type Error = CartError;

    /// Handles cart commands.
    ///
    /// # Commands
    /// - `AddProduct`: starts the order or adds to it; always published
    /// - `RemoveProduct`: no-op without an order, otherwise published whether or not the
    ///   line could be reduced
    ///
    /// Under [`QuantityPolicy::RejectNonPositive`] both commands refuse quantities below 1.
    fn apply(&self, command: CartCommand, rules: &CartRules) -> Result<Option<Self>, CartError> {
        match command {
            CartCommand::AddProduct { product, quantity } => {
                rules.check(quantity)?;
                let order = match self.order() {
                    Some(order) => order.with_added(product, quantity),
                    None => Order::starting_with(product, quantity),
                };
                Ok(Some(Self {
                    order: Some(Arc::new(order)),
                }))
            }
            CartCommand::RemoveProduct { product, quantity } => {
                rules.check(quantity)?;
                Ok(self.order().map(|order| Self {
                    order: Some(Arc::new(order.with_removed(&product.id, quantity))),
                }))
            }
        }
    }
}

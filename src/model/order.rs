/// The user's current order ("pedido"): an ordered list of product/quantity lines.
///
/// An `Order` is never changed in place. [`Order::with_added`] and [`Order::with_removed`] build
/// the next order from the current one, so an `Order` handed to a consumer stays exactly as it
/// was when it was published.
use crate::model::{Product, ProductId};
use serde::{Deserialize, Serialize};

/// One product and the quantity selected for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product: Product,
    pub quantity: i64,
}

impl OrderLine {
    pub fn new(product: Product, quantity: i64) -> Self {
        Self { product, quantity }
    }
}

/// Invariant: at most one line per [`ProductId`]; lines keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Order {
    lines: Vec<OrderLine>,
}

impl Order {
    /// An order holding a single line.
    pub fn starting_with(product: Product, quantity: i64) -> Self {
        Self {
            lines: vec![OrderLine::new(product, quantity)],
        }
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// The line for `id`, if the product was ever added.
    pub fn line(&self, id: &ProductId) -> Option<&OrderLine> {
        self.lines.iter().find(|line| line.product.id == *id)
    }

    /// Quantity recorded for `id`, 0 when there is no such line.
    pub fn quantity_of(&self, id: &ProductId) -> i64 {
        self.line(id).map_or(0, |line| line.quantity)
    }

    /// Sum of all line quantities, saturating at the `i64` bounds.
    pub fn total_quantity(&self) -> i64 {
        self.lines
            .iter()
            .fold(0i64, |total, line| total.saturating_add(line.quantity))
    }

    /// The order with `quantity` more of `product`.
    ///
    /// An existing line keeps its position and original product data; otherwise a new line is
    /// appended. Any quantity is accepted, including zero and negative values.
    pub fn with_added(&self, product: Product, quantity: i64) -> Self {
        let mut lines = self.lines.clone();
        match lines.iter_mut().find(|line| line.product.id == product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => lines.push(OrderLine::new(product, quantity)),
        }
        Self { lines }
    }

    /// The order with `quantity` less of `id`.
    ///
    /// The subtraction only happens when the line holds at least `quantity`; otherwise the order
    /// is returned unchanged. A line that reaches zero stays in the order.
    pub fn with_removed(&self, id: &ProductId, quantity: i64) -> Self {
        let mut lines = self.lines.clone();
        if let Some(line) = lines
            .iter_mut()
            .find(|line| line.product.id == *id && line.quantity >= quantity)
        {
            line.quantity = line.quantity.saturating_sub(quantity);
        }
        Self { lines }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str) -> Product {
        Product::with_id(id)
    }

    #[test]
    fn test_starting_order_has_single_line() {
        let order = Order::starting_with(product("P1"), 3);
        assert_eq!(order.len(), 1);
        assert_eq!(order.quantity_of(&"P1".into()), 3);
        assert_eq!(order.total_quantity(), 3);
    }

    #[test]
    fn test_adding_existing_product_merges_into_one_line() {
        let order = Order::starting_with(product("P1"), 3).with_added(product("P1"), 2);
        assert_eq!(order.len(), 1);
        assert_eq!(order.quantity_of(&"P1".into()), 5);
    }

    #[test]
    fn test_adding_new_product_appends_in_order() {
        let order = Order::starting_with(product("P1"), 1)
            .with_added(product("P2"), 2)
            .with_added(product("P3"), 3);
        let ids: Vec<&str> = order.lines().iter().map(|l| l.product.id.as_str()).collect();
        assert_eq!(ids, vec!["P1", "P2", "P3"]);
        assert_eq!(order.total_quantity(), 6);
    }

    #[test]
    fn test_existing_line_keeps_original_product_data() {
        let order = Order::starting_with(Product::new("P1", "Pão", 1.5), 1)
            .with_added(Product::new("P1", "Pão de queijo", 9.0), 1);
        let line = order.line(&"P1".into()).unwrap();
        assert_eq!(line.product.name, "Pão");
        assert_eq!(line.quantity, 2);
    }

    #[test]
    fn test_negative_add_is_accepted() {
        let order = Order::starting_with(product("P1"), 3).with_added(product("P1"), -5);
        assert_eq!(order.quantity_of(&"P1".into()), -2);
    }

    #[test]
    fn test_remove_exact_quantity_keeps_zero_line() {
        let order = Order::starting_with(product("P1"), 4).with_removed(&"P1".into(), 4);
        assert_eq!(order.quantity_of(&"P1".into()), 0);
        assert_eq!(order.len(), 1);
    }

    #[test]
    fn test_remove_more_than_present_is_skipped() {
        let order = Order::starting_with(product("P1"), 1);
        assert_eq!(order.with_removed(&"P1".into(), 5), order);
    }

    #[test]
    fn test_remove_unknown_product_is_unchanged() {
        let order = Order::starting_with(product("P1"), 1);
        assert_eq!(order.with_removed(&"P9".into(), 1), order);
    }

    #[test]
    fn test_transformations_leave_original_untouched() {
        let original = Order::starting_with(product("P1"), 2);
        let _added = original.with_added(product("P1"), 10);
        let _removed = original.with_removed(&"P1".into(), 1);
        assert_eq!(original.quantity_of(&"P1".into()), 2);
    }

    #[test]
    fn test_totals_saturate() {
        let order = Order::starting_with(product("P1"), i64::MAX).with_added(product("P2"), 1);
        assert_eq!(order.total_quantity(), i64::MAX);
        let order = order.with_added(product("P1"), 1);
        assert_eq!(order.quantity_of(&"P1".into()), i64::MAX);
    }

    #[test]
    fn test_unknown_product_quantity_is_zero() {
        assert_eq!(Order::default().quantity_of(&"nonexistent".into()), 0);
        assert_eq!(Order::default().total_quantity(), 0);
    }
}

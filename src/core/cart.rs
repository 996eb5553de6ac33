//! Shopping cart state.
//!
//! The cart holds at most one [`LineItem`] per product id and every quantity
//! stays at or above 1. All mutation goes through the methods on
//! [`CartStore`]; presentation code reads the items and subscribes to the
//! revision channel to know when to re-render.

use crate::domain::model::{LineItem, ProductId};
use tokio::sync::watch;

#[derive(Debug)]
pub struct CartStore {
    items: Vec<LineItem>,
    revision: watch::Sender<u64>,
}

impl CartStore {
    pub fn new() -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            items: Vec::new(),
            revision,
        }
    }

    /// Line items in the order they were first added.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn get(&self, id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Number of distinct line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities across all line items.
    pub fn unit_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Adds `item` unless a line item with the same id is already present.
    ///
    /// Re-adding never merges quantities; use [`CartStore::increment_item`].
    pub fn add_item(&mut self, item: LineItem) {
        debug_assert!(
            item.price.is_finite() && item.price >= 0.0,
            "line item price must be finite and non-negative, got {}",
            item.price
        );
        debug_assert!(item.quantity >= 1, "line item quantity must be at least 1");

        if self.contains(item.id) {
            tracing::debug!(id = %item.id, "Item already in cart, ignoring add");
            return;
        }

        tracing::debug!(id = %item.id, quantity = item.quantity, "Adding item to cart");
        self.items.push(item);
        self.notify();
    }

    pub fn remove_item(&mut self, id: ProductId) {
        if let Some(pos) = self.items.iter().position(|item| item.id == id) {
            self.items.remove(pos);
            tracing::debug!(%id, "Removed item from cart");
            self.notify();
        }
    }

    /// Adds one unit to an existing line item. Absent ids are ignored.
    pub fn increment_item(&mut self, id: ProductId) {
        let changed = match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => match item.quantity.checked_add(1) {
                Some(quantity) => {
                    item.quantity = quantity;
                    true
                }
                None => false,
            },
            None => false,
        };

        if changed {
            self.notify();
        }
    }

    /// Removes one unit from an existing line item, never going below 1.
    pub fn decrement_item(&mut self, id: ProductId) {
        let changed = match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) if item.quantity > 1 => {
                item.quantity -= 1;
                true
            }
            _ => false,
        };

        if changed {
            self.notify();
        }
    }

    /// Sum of `price * quantity`, recomputed on every call.
    pub fn total_price(&self) -> f64 {
        self.items.iter().map(LineItem::subtotal).sum()
    }

    /// Current revision. Advances once per state-changing operation.
    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    /// Receiver that observes a new value after every state change.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    fn notify(&self) {
        self.revision.send_modify(|revision| *revision += 1);
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, price: f64, quantity: u32) -> LineItem {
        LineItem::new(id, format!("Product {}", id), format!("product-{}.png", id), price, quantity)
    }

    fn expected_total(cart: &CartStore) -> f64 {
        cart.items()
            .iter()
            .map(|i| i.price * i.quantity as f64)
            .sum()
    }

    #[test]
    fn test_empty_cart_total_is_zero() {
        let cart = CartStore::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total_price(), 0.0);
        assert_eq!(cart.unit_count(), 0);
    }

    #[test]
    fn test_add_single_item() {
        let mut cart = CartStore::new();
        cart.add_item(item(1, 100.0, 1));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_price(), 100.0);
    }

    #[test]
    fn test_distinct_ids_in_any_order() {
        let orders: [[u64; 4]; 3] = [[1, 2, 3, 4], [4, 3, 2, 1], [2, 4, 1, 3]];
        for order in orders {
            let mut cart = CartStore::new();
            for id in order {
                cart.add_item(item(id, 10.0, 1));
            }
            assert_eq!(cart.len(), 4);
            let ids: Vec<u64> = cart.items().iter().map(|i| i.id.0).collect();
            assert_eq!(ids, order.to_vec());
        }
    }

    #[test]
    fn test_add_same_id_twice_keeps_one_entry() {
        let mut cart = CartStore::new();
        cart.add_item(item(1, 50.0, 2));
        cart.add_item(item(1, 75.0, 5));

        assert_eq!(cart.len(), 1);
        let entry = cart.get(ProductId(1)).unwrap();
        assert_eq!(entry.quantity, 2);
        assert_eq!(entry.price, 50.0);
    }

    #[test]
    fn test_increment_twice() {
        let mut cart = CartStore::new();
        cart.add_item(item(1, 50.0, 1));
        cart.increment_item(ProductId(1));
        cart.increment_item(ProductId(1));

        assert_eq!(cart.get(ProductId(1)).unwrap().quantity, 3);
        assert_eq!(cart.total_price(), 150.0);
    }

    #[test]
    fn test_remove_leaves_other_items() {
        let mut cart = CartStore::new();
        cart.add_item(item(1, 50.0, 1));
        cart.add_item(item(2, 30.0, 1));
        cart.remove_item(ProductId(1));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_price(), 30.0);
        assert!(!cart.contains(ProductId(1)));
    }

    #[test]
    fn test_decrement_floors_at_one() {
        let mut cart = CartStore::new();
        cart.add_item(item(1, 20.0, 1));
        for _ in 0..3 {
            cart.decrement_item(ProductId(1));
        }

        assert_eq!(cart.get(ProductId(1)).unwrap().quantity, 1);
        assert_eq!(cart.total_price(), 20.0);
    }

    #[test]
    fn test_absent_ids_are_noops() {
        let mut cart = CartStore::new();
        cart.add_item(item(1, 20.0, 2));
        let before = cart.items().to_vec();
        let revision = cart.revision();

        cart.remove_item(ProductId(9));
        cart.increment_item(ProductId(9));
        cart.decrement_item(ProductId(9));

        assert_eq!(cart.items(), before.as_slice());
        assert!(!cart.contains(ProductId(9)));
        assert_eq!(cart.revision(), revision);
    }

    #[test]
    fn test_total_tracks_every_mutation() {
        let mut cart = CartStore::new();
        let steps: [fn(&mut CartStore); 8] = [
            |c: &mut CartStore| c.add_item(item(1, 12.5, 2)),
            |c: &mut CartStore| c.add_item(item(2, 3.0, 1)),
            |c: &mut CartStore| c.increment_item(ProductId(2)),
            |c: &mut CartStore| c.decrement_item(ProductId(1)),
            |c: &mut CartStore| c.add_item(item(3, 0.0, 4)),
            |c: &mut CartStore| c.increment_item(ProductId(1)),
            |c: &mut CartStore| c.remove_item(ProductId(2)),
            |c: &mut CartStore| c.decrement_item(ProductId(3)),
        ];

        for step in steps {
            step(&mut cart);
            assert_eq!(cart.total_price(), expected_total(&cart));
            assert!(cart.items().iter().all(|i| i.quantity >= 1));
        }
        assert_eq!(cart.total_price(), 25.0);
    }

    #[test]
    fn test_increment_saturates() {
        let mut cart = CartStore::new();
        cart.add_item(item(1, 1.0, u32::MAX));
        let revision = cart.revision();
        cart.increment_item(ProductId(1));

        assert_eq!(cart.get(ProductId(1)).unwrap().quantity, u32::MAX);
        assert_eq!(cart.revision(), revision);
    }

    #[test]
    fn test_subscribers_see_changes_only() {
        let mut cart = CartStore::new();
        let mut rx = cart.subscribe();
        assert!(!rx.has_changed().unwrap());

        cart.add_item(item(1, 10.0, 1));
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), 1);

        cart.add_item(item(1, 10.0, 1));
        cart.decrement_item(ProductId(1));
        assert!(!rx.has_changed().unwrap());

        cart.increment_item(ProductId(1));
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), 2);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "quantity must be at least 1")]
    fn test_zero_quantity_is_a_contract_violation() {
        let mut cart = CartStore::new();
        cart.add_item(item(1, 10.0, 0));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "price must be finite and non-negative")]
    fn test_negative_price_is_a_contract_violation() {
        let mut cart = CartStore::new();
        cart.add_item(item(1, -10.0, 1));
    }
}

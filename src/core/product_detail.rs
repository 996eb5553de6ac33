//! Quantity selector of the product page.
//!
//! `max_quantity` from the catalog is enforced here as a soft limit only;
//! [`CartStore`] itself accepts any positive quantity.

use crate::core::cart::CartStore;
use crate::domain::model::{LineItem, Product};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    Changed(u32),
    LimitReached,
    AtMinimum,
}

#[derive(Debug, Clone)]
pub struct ProductDetail {
    product: Product,
    quantity: u32,
}

impl ProductDetail {
    /// Opens the selector, starting from the cart's quantity when the product
    /// is already in the cart.
    pub fn open(product: Product, cart: &CartStore) -> Self {
        let quantity = cart.get(product.id).map(|item| item.quantity).unwrap_or(1);
        Self { product, quantity }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn increase(&mut self, cart: &mut CartStore) -> QuantityChange {
        if self.quantity >= self.product.max_quantity {
            tracing::warn!(
                slug = %self.product.slug,
                max_quantity = self.product.max_quantity,
                "Limit reached for the product..."
            );
            return QuantityChange::LimitReached;
        }

        self.quantity += 1;
        cart.increment_item(self.product.id);
        QuantityChange::Changed(self.quantity)
    }

    pub fn decrease(&mut self, cart: &mut CartStore) -> QuantityChange {
        if self.quantity <= 1 {
            return QuantityChange::AtMinimum;
        }

        self.quantity -= 1;
        cart.decrement_item(self.product.id);
        QuantityChange::Changed(self.quantity)
    }

    pub fn add_to_cart(&self, cart: &mut CartStore) {
        cart.add_item(LineItem::from_product(&self.product, self.quantity));
        tracing::info!("🛒 Added to cart: {} x{}", self.product.title, self.quantity);
    }

    pub fn total_price(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ProductId;

    fn product(max_quantity: u32) -> Product {
        Product {
            id: ProductId(3),
            title: "Mechanical Keyboard".to_string(),
            slug: "mechanical-keyboard".to_string(),
            price: 80.0,
            hero_image: "keyboard.png".to_string(),
            max_quantity,
        }
    }

    #[test]
    fn test_open_uses_cart_quantity() {
        let mut cart = CartStore::new();
        assert_eq!(ProductDetail::open(product(5), &cart).quantity(), 1);

        cart.add_item(LineItem::from_product(&product(5), 3));
        assert_eq!(ProductDetail::open(product(5), &cart).quantity(), 3);
    }

    #[test]
    fn test_select_then_add() {
        let mut cart = CartStore::new();
        let mut detail = ProductDetail::open(product(5), &cart);

        assert_eq!(detail.increase(&mut cart), QuantityChange::Changed(2));
        assert_eq!(detail.increase(&mut cart), QuantityChange::Changed(3));
        // nothing in the cart yet, so increments were no-ops there
        assert!(cart.is_empty());
        assert_eq!(detail.total_price(), 240.0);

        detail.add_to_cart(&mut cart);
        assert_eq!(cart.get(ProductId(3)).unwrap().quantity, 3);
        assert_eq!(cart.total_price(), 240.0);
    }

    #[test]
    fn test_increase_stops_at_max_quantity() {
        let mut cart = CartStore::new();
        cart.add_item(LineItem::from_product(&product(2), 1));
        let mut detail = ProductDetail::open(product(2), &cart);

        assert_eq!(detail.increase(&mut cart), QuantityChange::Changed(2));
        let revision = cart.revision();
        assert_eq!(detail.increase(&mut cart), QuantityChange::LimitReached);

        assert_eq!(detail.quantity(), 2);
        assert_eq!(cart.get(ProductId(3)).unwrap().quantity, 2);
        assert_eq!(cart.revision(), revision);
    }

    #[test]
    fn test_decrease_stops_at_one() {
        let mut cart = CartStore::new();
        cart.add_item(LineItem::from_product(&product(5), 2));
        let mut detail = ProductDetail::open(product(5), &cart);

        assert_eq!(detail.decrease(&mut cart), QuantityChange::Changed(1));
        assert_eq!(detail.decrease(&mut cart), QuantityChange::AtMinimum);
        assert_eq!(cart.get(ProductId(3)).unwrap().quantity, 1);
    }
}

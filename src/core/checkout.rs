use crate::core::cart::CartStore;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutSummary {
    pub line_count: usize,
    pub unit_count: u64,
    pub total: f64,
}

impl CheckoutSummary {
    pub fn from_cart(cart: &CartStore) -> Self {
        let summary = Self {
            line_count: cart.len(),
            unit_count: cart.unit_count(),
            total: cart.total_price(),
        };
        tracing::info!(
            lines = summary.line_count,
            units = summary.unit_count,
            total = summary.total,
            "Proceeding to checkout"
        );
        summary
    }

    pub fn is_empty(&self) -> bool {
        self.line_count == 0
    }
}

impl fmt::Display for CheckoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Total amount: Rs {:.2}", self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::LineItem;

    #[test]
    fn test_summary_counts_lines_and_units() {
        let mut cart = CartStore::new();
        cart.add_item(LineItem::new(1, "Phone", "phone.png", 499.99, 2));
        cart.add_item(LineItem::new(2, "Case", "case.png", 10.0, 1));

        let summary = CheckoutSummary::from_cart(&cart);
        assert_eq!(summary.line_count, 2);
        assert_eq!(summary.unit_count, 3);
        assert_eq!(summary.to_string(), "Total amount: Rs 1009.98");
    }

    #[test]
    fn test_empty_summary() {
        let summary = CheckoutSummary::from_cart(&CartStore::new());
        assert!(summary.is_empty());
        assert_eq!(summary.to_string(), "Total amount: Rs 0.00");
    }
}

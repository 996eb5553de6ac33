//! Explicit serialization boundary for the cart. Nothing is saved unless a
//! caller asks for it.

use crate::core::cart::CartStore;
use crate::domain::model::LineItem;
use crate::domain::ports::Storage;
use crate::utils::error::{Result, StorefrontError};
use crate::utils::validation::{validate_positive_number, validate_price, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartSnapshot {
    pub items: Vec<LineItem>,
}

impl Validate for CartSnapshot {
    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for item in &self.items {
            if !seen.insert(item.id) {
                return Err(StorefrontError::validation(format!(
                    "duplicate line item for product {}",
                    item.id
                )));
            }
            validate_price("items.price", item.price)?;
            validate_positive_number("items.quantity", item.quantity, 1)?;
        }
        Ok(())
    }
}

impl CartStore {
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            items: self.items().to_vec(),
        }
    }

    /// Rebuilds a cart from a snapshot, rejecting snapshots that would break
    /// the cart invariants.
    pub fn restore(snapshot: CartSnapshot) -> Result<Self> {
        snapshot.validate()?;

        let mut cart = CartStore::new();
        for item in snapshot.items {
            cart.add_item(item);
        }
        Ok(cart)
    }
}

pub async fn save_snapshot<S: Storage>(storage: &S, path: &str, cart: &CartStore) -> Result<()> {
    let data = serde_json::to_vec_pretty(&cart.snapshot())?;
    storage.write_file(path, &data).await?;
    tracing::debug!("Saved cart snapshot with {} items to {}", cart.len(), path);
    Ok(())
}

pub async fn load_snapshot<S: Storage>(storage: &S, path: &str) -> Result<CartStore> {
    let data = storage.read_file(path).await?;
    let snapshot: CartSnapshot = serde_json::from_slice(&data)?;
    let cart = CartStore::restore(snapshot)?;
    tracing::debug!("Restored cart snapshot with {} items from {}", cart.len(), path);
    Ok(cart)
}

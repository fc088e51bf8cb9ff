use serde::{Deserialize, Serialize};

use super::Product;

/// A product in the shopper's cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    /// Creates a cart line with quantity 1
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    pub fn id(&self) -> &str {
        &self.product.id
    }
}

use tokio::sync::RwLock;

use crate::models::{CartItem, Product};

/// Read/write contract for the shopper's cart
///
/// Recommendation code never holds a store; it receives a `get_all` snapshot.
#[async_trait::async_trait]
pub trait CartStore: Send + Sync {
    /// Snapshot of every cart line, in insertion order
    async fn get_all(&self) -> Vec<CartItem>;

    /// Adds one unit of the product, appending a new line if it is not in the cart yet
    async fn add(&self, product: &Product) -> Vec<CartItem>;

    /// Drops every line with this id; absent ids are ignored
    async fn remove(&self, product_id: &str) -> Vec<CartItem>;
}

/// Cart kept in process memory
#[derive(Default)]
pub struct InMemoryCartStore {
    items: RwLock<Vec<CartItem>>,
}

impl InMemoryCartStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<CartItem>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }
}

#[async_trait::async_trait]
impl CartStore for InMemoryCartStore {
    async fn get_all(&self) -> Vec<CartItem> {
        self.items.read().await.clone()
    }

    async fn add(&self, product: &Product) -> Vec<CartItem> {
        let mut items = self.items.write().await;

        if let Some(existing) = items.iter_mut().find(|item| item.id() == product.id) {
            existing.quantity += 1;
        } else {
            items.push(CartItem::new(product.clone()));
        }

        tracing::info!(product_id = %product.id, cart_lines = items.len(), "Added to cart");
        items.clone()
    }

    async fn remove(&self, product_id: &str) -> Vec<CartItem> {
        let mut items = self.items.write().await;
        items.retain(|item| item.id() != product_id);

        tracing::info!(product_id = %product_id, cart_lines = items.len(), "Removed from cart");
        items.clone()
    }
}

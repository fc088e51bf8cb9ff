use std::sync::Arc;

use crate::{
    config::Config,
    error::AppResult,
    models::Recommendation,
    services::StylistService,
    store::{seed, CartStore, CatalogStore, InMemoryCartStore},
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    pub cart: Arc<dyn CartStore>,
    pub stylist: StylistService,
}

impl AppState {
    pub fn new(catalog: CatalogStore, cart: Arc<dyn CartStore>, stylist: StylistService) -> Self {
        Self {
            catalog: Arc::new(catalog),
            cart,
            stylist,
        }
    }

    /// Builds stores and the stylist from configuration; the cart starts with the demo item
    pub async fn from_config(config: &Config) -> AppResult<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => CatalogStore::load(path, config.current_product_id.clone()).await?,
            None => CatalogStore::seeded(config.current_product_id.clone())?,
        };
        let cart = Arc::new(InMemoryCartStore::with_items(seed::seed_cart()));

        Ok(Self::new(catalog, cart, StylistService::from_config(config)))
    }

    /// Suggestion for the product currently being viewed and the current cart
    pub async fn recommend_for_current(&self) -> AppResult<Recommendation> {
        let current = self.catalog.current_product()?;
        let cart_items = self.cart.get_all().await;
        self.stylist
            .suggest(current, &cart_items, self.catalog.all())
            .await
    }

    /// Puts the suggested product in the cart, as the widget's "Add to Cart" does
    pub async fn accept(&self, recommendation: &Recommendation) -> AppResult<()> {
        let product = self
            .catalog
            .get(&recommendation.suggestion.suggested_product_id)?;
        self.cart.add(product).await;
        Ok(())
    }
}

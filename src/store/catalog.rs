use std::path::Path;

use crate::{
    error::{AppError, AppResult},
    models::{Catalog, Product},
    store::seed,
};

/// Read-only product catalog plus the product the shopper is looking at
#[derive(Debug, Clone)]
pub struct CatalogStore {
    catalog: Catalog,
    current_product_id: String,
}

impl CatalogStore {
    pub fn new(catalog: Catalog, current_product_id: impl Into<String>) -> Self {
        Self {
            catalog,
            current_product_id: current_product_id.into(),
        }
    }

    /// Store backed by the built-in demo catalog
    pub fn seeded(current_product_id: impl Into<String>) -> AppResult<Self> {
        Ok(Self::new(Catalog::new(seed::seed_products())?, current_product_id))
    }

    /// Loads a JSON array of products from disk
    pub async fn load(path: &Path, current_product_id: impl Into<String>) -> AppResult<Self> {
        let raw = tokio::fs::read_to_string(path).await?;
        let products: Vec<Product> = serde_json::from_str(&raw)?;
        let catalog = Catalog::new(products)?;

        tracing::info!(
            path = %path.display(),
            products = catalog.len(),
            "Loaded catalog from file"
        );

        Ok(Self::new(catalog, current_product_id))
    }

    pub fn all(&self) -> &Catalog {
        &self.catalog
    }

    pub fn get(&self, product_id: &str) -> AppResult<&Product> {
        self.catalog
            .find(product_id)
            .ok_or_else(|| AppError::NotFound(format!("Product {}", product_id)))
    }

    /// The configured product, or the first catalog entry when it is missing
    pub fn current_product(&self) -> AppResult<&Product> {
        if let Some(product) = self.catalog.find(&self.current_product_id) {
            return Ok(product);
        }

        let fallback = self.catalog.first().ok_or(AppError::EmptyCatalog)?;
        tracing::warn!(
            configured = %self.current_product_id,
            fallback = %fallback.id,
            "Current product not in catalog, using first entry"
        );
        Ok(fallback)
    }
}

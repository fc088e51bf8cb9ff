use serde::Serialize;
use std::collections::HashSet;

use crate::error::{AppError, AppResult};

use super::{CatalogProjection, Product};

/// Ordered product catalog with unique ids
///
/// Order matters: the recommender takes the first qualifying entry.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids
    pub fn new(products: Vec<Product>) -> AppResult<Self> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id.as_str()) {
                return Err(AppError::InvalidInput(format!(
                    "Duplicate product id in catalog: {}",
                    product.id
                )));
            }
        }

        Ok(Self { products })
    }

    pub fn find(&self, product_id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == product_id)
    }

    pub fn first(&self) -> Option<&Product> {
        self.products.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn projection(&self) -> Vec<CatalogProjection> {
        self.products.iter().map(CatalogProjection::from).collect()
    }
}

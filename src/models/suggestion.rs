use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::Product;

/// Aesthetic classification of an assembled outfit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleTag {
    Formal,
    Casual,
    Streetwear,
}

impl Display for StyleTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleTag::Formal => write!(f, "formal"),
            StyleTag::Casual => write!(f, "casual"),
            StyleTag::Streetwear => write!(f, "streetwear"),
        }
    }
}

/// A single suggested product with its rationale
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub suggested_product_id: String,
    pub product: Product,
    pub reason: String,
    pub style_tags: Vec<StyleTag>,
}

impl Suggestion {
    pub fn new(product: Product, reason: String, style_tags: Vec<StyleTag>) -> Self {
        Self {
            suggested_product_id: product.id.clone(),
            product,
            reason,
            style_tags,
        }
    }
}

/// Which tier produced a recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "tier", rename_all = "lowercase")]
pub enum Origin {
    External { source: String },
    Heuristic,
}

/// Result of the stylist pipeline
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendation {
    pub suggestion: Suggestion,
    pub origin: Origin,
}

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Garment category
///
/// The recommender only distinguishes tops and bottoms; any other value is kept
/// verbatim in `Other` so catalogs with extra categories still load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Tshirt,
    Shirt,
    Hoodie,
    Pants,
    Jeans,
    Chinos,
    Shorts,
    Other(String),
}

/// Which outfit slot a garment fills
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Top,
    Bottom,
}

impl Category {
    pub fn slot(&self) -> Option<Slot> {
        match self {
            Category::Tshirt | Category::Shirt | Category::Hoodie => Some(Slot::Top),
            Category::Pants | Category::Jeans | Category::Chinos | Category::Shorts => {
                Some(Slot::Bottom)
            }
            Category::Other(_) => None,
        }
    }

    pub fn is_top(&self) -> bool {
        self.slot() == Some(Slot::Top)
    }

    pub fn is_bottom(&self) -> bool {
        self.slot() == Some(Slot::Bottom)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Category::Tshirt => "tshirt",
            Category::Shirt => "shirt",
            Category::Hoodie => "hoodie",
            Category::Pants => "pants",
            Category::Jeans => "jeans",
            Category::Chinos => "chinos",
            Category::Shorts => "shorts",
            Category::Other(raw) => raw,
        }
    }
}

impl From<String> for Category {
    fn from(raw: String) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "tshirt" => Category::Tshirt,
            "shirt" => Category::Shirt,
            "hoodie" => Category::Hoodie,
            "pants" => Category::Pants,
            "jeans" => Category::Jeans,
            "chinos" => Category::Chinos,
            "shorts" => Category::Shorts,
            _ => Category::Other(raw),
        }
    }
}

impl From<&str> for Category {
    fn from(raw: &str) -> Self {
        Category::from(raw.to_string())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Reference image URI, opaque to the recommender
    pub image: String,
    pub category: Category,
    pub color: String,
    pub fit: String,
    /// Display only
    pub price: f64,
}

/// Reduced view of a product sent to external suggestion sources
///
/// Price and image are left out of this call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogProjection {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub color: String,
    pub fit: String,
}

impl From<&Product> for CatalogProjection {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            category: product.category.clone(),
            color: product.color.clone(),
            fit: product.fit.clone(),
        }
    }
}

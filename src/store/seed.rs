use crate::models::{CartItem, Category, Product};

fn product(
    id: &str,
    name: &str,
    image: &str,
    category: Category,
    color: &str,
    fit: &str,
    price: f64,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        image: image.to_string(),
        category,
        color: color.to_string(),
        fit: fit.to_string(),
        price,
    }
}

const TEE_IMAGE: &str = "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=400";
const HOODIE_IMAGE: &str = "https://images.unsplash.com/photo-1556821840-3a63f95609a7?w=400";
const CHINOS_IMAGE: &str = "https://images.unsplash.com/photo-1473966968600-fa801b869a1a?w=400";
const JEANS_IMAGE: &str = "https://images.unsplash.com/photo-1542272604-787c3835535d?w=400";
const SHIRT_IMAGE: &str = "https://images.unsplash.com/photo-1594938291221-94f313b0e69a?w=400";

/// Demo catalog used when no catalog file is configured
pub fn seed_products() -> Vec<Product> {
    vec![
        product("sku001", "Black T-Shirt", TEE_IMAGE, Category::Tshirt, "black", "regular", 29.99),
        product("sku002", "White T-Shirt", TEE_IMAGE, Category::Tshirt, "white", "regular", 29.99),
        product("sku003", "Gray Hoodie", HOODIE_IMAGE, Category::Hoodie, "gray", "oversized", 59.99),
        product("sku004", "Navy Chinos", CHINOS_IMAGE, Category::Pants, "navy", "regular", 79.99),
        product("sku005", "Black Jeans", JEANS_IMAGE, Category::Pants, "black", "slim", 89.99),
        product("sku006", "White Button Shirt", SHIRT_IMAGE, Category::Shirt, "white", "regular", 49.99),
        product("sku789", "Blue Slim Jeans", JEANS_IMAGE, Category::Pants, "blue", "slim", 89.99),
    ]
}

/// Demo cart: one black tee that is not itself a catalog entry
pub fn seed_cart() -> Vec<CartItem> {
    vec![CartItem::new(product(
        "sku123",
        "Black T-Shirt",
        TEE_IMAGE,
        Category::Tshirt,
        "black",
        "regular",
        29.99,
    ))]
}

pub mod cart;
pub mod catalog;
pub mod product;
pub mod suggestion;

pub use cart::CartItem;
pub use catalog::Catalog;
pub use product::{CatalogProjection, Category, Product, Slot};
pub use suggestion::{Origin, Recommendation, StyleTag, Suggestion};

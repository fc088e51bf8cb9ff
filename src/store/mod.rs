pub mod cart;
pub mod catalog;
pub mod seed;

pub use cart::{CartStore, InMemoryCartStore};
pub use catalog::CatalogStore;

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;

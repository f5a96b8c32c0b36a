pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod repository;
pub mod state;
pub mod utils;

pub use app::{build_app, build_app_with};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use openapi::ApiDoc;
pub use state::AppState;

pub const API_NAME: &str = "Wedding Wishes API";
pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

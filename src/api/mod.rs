pub mod envelope;
pub mod system;
pub mod wishes;

pub use envelope::Envelope;

use axum::Router;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(system::routes())
        .nest("/wishes", wishes::routes())
}

pub async fn not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}

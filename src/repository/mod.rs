//! Storage access for wishes.
//!
//! Handlers only talk to [`WishRepository`]; the PostgreSQL implementation is
//! used in production and the in-memory one backs the API tests.

pub mod in_memory;
pub mod postgres;

pub use in_memory::InMemoryWishRepository;
pub use postgres::PgWishRepository;

use thiserror::Error;

use crate::models::{AttendingStatus, Wish, WishRequest, WishStats};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("wish {0} not found")]
    NotFound(i32),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("storage unavailable")]
    Unavailable,
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[axum::async_trait]
pub trait WishRepository: Send + Sync {
    /// Trivial round trip used by the health check.
    async fn ping(&self) -> RepositoryResult<()>;

    /// All wishes, most recent first.
    async fn list(&self) -> RepositoryResult<Vec<Wish>>;

    async fn find(&self, id: i32) -> RepositoryResult<Option<Wish>>;

    /// Inserts a wish stamped with the current time.
    async fn create(&self, request: &WishRequest) -> RepositoryResult<Wish>;

    /// Replaces name, message and attending. The timestamp is kept.
    async fn update(&self, id: i32, request: &WishRequest) -> RepositoryResult<Wish>;

    async fn delete(&self, id: i32) -> RepositoryResult<()>;

    /// Counts all wishes, or only those with the given attendance.
    async fn count(&self, attending: Option<AttendingStatus>) -> RepositoryResult<i64>;

    async fn stats(&self) -> RepositoryResult<WishStats> {
        let total = self.count(None).await?;
        let attending = self.count(Some(AttendingStatus::Attending)).await?;
        let not_attending = self.count(Some(AttendingStatus::NotAttending)).await?;
        let maybe = self.count(Some(AttendingStatus::Maybe)).await?;

        Ok(WishStats {
            total,
            attending,
            not_attending,
            maybe,
        })
    }
}

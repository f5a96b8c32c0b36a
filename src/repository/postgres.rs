use chrono::Utc;
use sqlx::PgPool;

use super::{RepositoryError, RepositoryResult, WishRepository};
use crate::models::{AttendingStatus, Wish, WishRequest};

#[derive(Clone)]
pub struct PgWishRepository {
    pool: PgPool,
}

impl PgWishRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[axum::async_trait]
impl WishRepository for PgWishRepository {
    async fn ping(&self) -> RepositoryResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn list(&self) -> RepositoryResult<Vec<Wish>> {
        let wishes = sqlx::query_as::<_, Wish>(
            r#"
            SELECT id, name, message, attending, "timestamp"
            FROM wishes
            ORDER BY "timestamp" DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(wishes)
    }

    async fn find(&self, id: i32) -> RepositoryResult<Option<Wish>> {
        let wish = sqlx::query_as::<_, Wish>(
            r#"SELECT id, name, message, attending, "timestamp" FROM wishes WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(wish)
    }

    async fn create(&self, request: &WishRequest) -> RepositoryResult<Wish> {
        let wish = sqlx::query_as::<_, Wish>(
            r#"
            INSERT INTO wishes (name, message, attending, "timestamp")
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, message, attending, "timestamp"
            "#,
        )
        .bind(&request.name)
        .bind(&request.message)
        .bind(request.attending)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(wish)
    }

    async fn update(&self, id: i32, request: &WishRequest) -> RepositoryResult<Wish> {
        sqlx::query_as::<_, Wish>(
            r#"
            UPDATE wishes SET
                name = $2,
                message = $3,
                attending = $4
            WHERE id = $1
            RETURNING id, name, message, attending, "timestamp"
            "#,
        )
        .bind(id)
        .bind(&request.name)
        .bind(&request.message)
        .bind(request.attending)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(RepositoryError::NotFound(id))
    }

    async fn delete(&self, id: i32) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM wishes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(id));
        }
        Ok(())
    }

    async fn count(&self, attending: Option<AttendingStatus>) -> RepositoryResult<i64> {
        let count = match attending {
            Some(status) => {
                sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM wishes WHERE attending = $1")
                    .bind(status)
                    .fetch_one(&self.pool)
                    .await?
            }
            None => {
                sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM wishes")
                    .fetch_one(&self.pool)
                    .await?
            }
        };

        Ok(count)
    }
}

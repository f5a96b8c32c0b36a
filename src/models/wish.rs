use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, Hash, ToSchema)]
#[sqlx(type_name = "attending_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttendingStatus {
    Attending,
    NotAttending,
    Maybe,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq, ToSchema)]
pub struct Wish {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Ana")]
    pub name: String,
    #[schema(example = "Congrats!")]
    pub message: String,
    pub attending: AttendingStatus,
    pub timestamp: DateTime<Utc>,
}

/// Body of create and update requests. Update replaces all three fields.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct WishRequest {
    /// Name of the person sending the wish
    #[validate(length(min = 2, max = 100))]
    #[schema(min_length = 2, max_length = 100, example = "Ana")]
    pub name: String,
    /// The wish message
    #[validate(length(min = 1, max = 500))]
    #[schema(min_length = 1, max_length = 500, example = "Congrats!")]
    pub message: String,
    /// Attendance status
    pub attending: AttendingStatus,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WishStats {
    pub total: i64,
    pub attending: i64,
    pub not_attending: i64,
    pub maybe: i64,
}

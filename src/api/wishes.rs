use axum::{extract::State, routing::get, Router};

use super::envelope::Envelope;
use crate::extract::{ValidatedJson, WishId};
use crate::models::{Wish, WishRequest, WishStats};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_wishes).post(create_wish))
        .route("/stats", get(wish_stats))
        .route("/:id", get(get_wish).put(update_wish).delete(delete_wish))
}

/// Get all wishes
///
/// Retrieves all wishes, most recent first.
#[utoipa::path(
    get,
    path = "/wishes",
    tag = "wishes",
    responses(
        (status = 200, description = "List of wishes", body = Vec<Wish>)
    )
)]
pub async fn list_wishes(State(state): State<AppState>) -> Envelope<Vec<Wish>> {
    match state.wishes.list().await {
        Ok(wishes) => Envelope::ok(wishes),
        Err(e) => Envelope::fail("Failed to fetch wishes").with_detail(e),
    }
}

/// Get wish by ID
#[utoipa::path(
    get,
    path = "/wishes/{id}",
    tag = "wishes",
    params(
        ("id" = i32, Path, description = "The ID of the wish")
    ),
    responses(
        (status = 200, description = "The wish, or `success: false` when it does not exist", body = Wish),
        (status = 400, description = "Non-numeric ID")
    )
)]
pub async fn get_wish(State(state): State<AppState>, WishId(id): WishId) -> Envelope<Wish> {
    match state.wishes.find(id).await {
        Ok(Some(wish)) => Envelope::ok(wish),
        Ok(None) => Envelope::fail("Wish not found"),
        Err(e) => Envelope::fail("Failed to fetch wish").with_detail(e),
    }
}

/// Create new wish
#[utoipa::path(
    post,
    path = "/wishes",
    tag = "wishes",
    request_body = WishRequest,
    responses(
        (status = 200, description = "Created wish", body = Wish),
        (status = 400, description = "Malformed JSON"),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn create_wish(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<WishRequest>,
) -> Envelope<Wish> {
    match state.wishes.create(&payload).await {
        Ok(wish) => {
            tracing::info!(wish_id = wish.id, "Wish created");
            Envelope::ok(wish)
        }
        Err(e) => Envelope::fail("Failed to create wish").with_detail(e),
    }
}

/// Update wish
///
/// Replaces name, message and attendance of an existing wish.
#[utoipa::path(
    put,
    path = "/wishes/{id}",
    tag = "wishes",
    params(
        ("id" = i32, Path, description = "The ID of the wish to update")
    ),
    request_body = WishRequest,
    responses(
        (status = 200, description = "Updated wish", body = Wish),
        (status = 400, description = "Malformed JSON or non-numeric ID"),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn update_wish(
    State(state): State<AppState>,
    WishId(id): WishId,
    ValidatedJson(payload): ValidatedJson<WishRequest>,
) -> Envelope<Wish> {
    match state.wishes.update(id, &payload).await {
        Ok(wish) => Envelope::ok(wish),
        Err(e) => Envelope::fail("Failed to update wish").with_detail(e),
    }
}

/// Delete wish
#[utoipa::path(
    delete,
    path = "/wishes/{id}",
    tag = "wishes",
    params(
        ("id" = i32, Path, description = "The ID of the wish to delete")
    ),
    responses(
        (status = 200, description = "Deletion result"),
        (status = 400, description = "Non-numeric ID")
    )
)]
pub async fn delete_wish(State(state): State<AppState>, WishId(id): WishId) -> Envelope<()> {
    match state.wishes.delete(id).await {
        Ok(()) => {
            tracing::info!(wish_id = id, "Wish deleted");
            Envelope::message("Wish deleted successfully")
        }
        Err(e) => Envelope::fail("Failed to delete wish").with_detail(e),
    }
}

/// Get wishes statistics
///
/// Total number of wishes and a count per attendance status.
#[utoipa::path(
    get,
    path = "/wishes/stats",
    tag = "wishes",
    responses(
        (status = 200, description = "Attendance statistics", body = WishStats)
    )
)]
pub async fn wish_stats(State(state): State<AppState>) -> Envelope<WishStats> {
    match state.wishes.stats().await {
        Ok(stats) => Envelope::ok(stats),
        Err(e) => Envelope::fail("Failed to fetch statistics").with_detail(e),
    }
}

//! User endpoints
//!
//! | Method | Path          | Store call  |
//! |--------|---------------|-------------|
//! | GET    | `/users`      | find_all    |
//! | GET    | `/users/{id}` | find_one    |
//! | POST   | `/users/save` | save        |
//! | DELETE | `/users`      | delete_all  |

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::extractors::{UserId, UserPayload};
use crate::http::server::AppState;
use crate::models::User;

/// GET /users - every stored user
async fn find_all(State(state): State<Arc<AppState>>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.store.find_all().await?;
    Ok(Json(users))
}

/// GET /users/{id} - one user, or an empty 200 when absent
async fn find_one(
    State(state): State<Arc<AppState>>,
    UserId(id): UserId,
) -> Result<Response, ApiError> {
    match state.store.find_one(id).await? {
        Some(user) => Ok(Json(user).into_response()),
        None => Ok(StatusCode::OK.into_response()),
    }
}

/// POST /users/save - insert one user
async fn save(
    State(state): State<Arc<AppState>>,
    UserPayload(user): UserPayload,
) -> Result<StatusCode, ApiError> {
    state.store.save(user).await?;
    Ok(StatusCode::OK)
}

/// DELETE /users - remove every user
async fn delete_all(State(state): State<Arc<AppState>>) -> Result<StatusCode, ApiError> {
    state.store.delete_all().await?;
    tracing::info!("all users deleted");
    Ok(StatusCode::OK)
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", get(find_all).delete(delete_all))
        .route("/users/save", post(save))
        .route("/users/{id}", get(find_one))
}

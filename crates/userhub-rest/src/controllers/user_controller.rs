//! User resource controller.

use crate::{
    responses::{ok, ApiResult},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::debug;
use userhub_core::ErrorResponse;
use userhub_service::{CreateUserRequest, UserResponse};

/// Creates the user router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_user))
        .route("/short-way/:id", get(get_user_short_way))
        .route("/:id", get(get_user))
}

/// Create a new user.
///
/// Returns the created user, echoing the store-assigned identifier.
#[utoipa::path(
    post,
    path = "/user",
    tag = "user",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = UserResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    )
)]
async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> ApiResult<UserResponse> {
    debug!("Create user request: {} {}", request.name, request.lastname);

    let response = state.user_service.create_user(request).await?;
    ok(response)
}

/// Get a user by ID via the manual cache-aside path.
#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = "user",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
async fn get_user(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<UserResponse> {
    debug!("Get user request: {}", id);

    let response = state.user_service.get_user(id).await?;
    ok(response)
}

/// Get a user by ID via the decorator cache-aside path.
#[utoipa::path(
    get,
    path = "/user/short-way/{id}",
    tag = "user",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
async fn get_user_short_way(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<UserResponse> {
    debug!("Get user request (short way): {}", id);

    let response = state.user_service.get_user_cached(id).await?;
    ok(response)
}

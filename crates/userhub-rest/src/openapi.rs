//! OpenAPI documentation configuration.

use userhub_core::{ErrorResponse, User};
use userhub_service::{CreateUserRequest, UserResponse};
use utoipa::OpenApi;

/// OpenAPI documentation for the Userhub API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Userhub API",
        version = "1.0.0",
        description = "Cache-aside user CRUD service",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        // User endpoints
        crate::controllers::user_controller::create_user,
        crate::controllers::user_controller::get_user,
        crate::controllers::user_controller::get_user_short_way,
        // Health endpoints
        crate::controllers::health_controller::health_check,
    ),
    components(
        schemas(
            User,
            ErrorResponse,
            CreateUserRequest,
            UserResponse,
            crate::controllers::health_controller::HealthResponse,
        )
    ),
    tags(
        (name = "user", description = "User create and cached read endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;

//! User-related DTOs.

use serde::{Deserialize, Serialize};
use userhub_core::{NewUser, User};

/// Request to create a new user. The id is assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateUserRequest {
    pub name: String,
    pub lastname: String,
    pub age: i32,
}

impl From<CreateUserRequest> for NewUser {
    fn from(request: CreateUserRequest) -> Self {
        Self {
            name: request.name,
            lastname: request.lastname,
            age: request.age,
        }
    }
}

/// User response DTO.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub lastname: String,
    pub age: i32,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            lastname: user.lastname,
            age: user.age,
        }
    }
}

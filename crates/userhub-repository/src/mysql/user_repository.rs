//! MySQL user repository implementation.

use crate::{pool::DatabasePool, traits::UserRepository};
use async_trait::async_trait;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;
use userhub_core::{NewUser, User, UserHubError, UserHubResult};

/// MySQL user repository implementation.
#[derive(Clone)]
pub struct MySqlUserRepository {
    pool: Arc<DatabasePool>,
}

impl MySqlUserRepository {
    /// Creates a new MySQL user repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a user.
#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    name: String,
    lastname: String,
    age: i32,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            lastname: row.lastname,
            age: row.age,
        }
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn save(&self, user: &NewUser) -> UserHubResult<User> {
        debug!("Saving user: {} {}", user.name, user.lastname);

        let result = sqlx::query(
            r#"
            INSERT INTO users (name, lastname, age)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&user.name)
        .bind(&user.lastname)
        .bind(user.age)
        .execute(self.pool.inner())
        .await?;

        let id = i64::try_from(result.last_insert_id()).map_err(|e| {
            UserHubError::Database(format!("Assigned id out of range: {}", e))
        })?;
        debug!("User saved with id: {}", id);

        Ok(user.clone().with_id(id))
    }

    async fn find_by_id(&self, id: i64) -> UserHubResult<Option<User>> {
        debug!("Finding user by id: {}", id);

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, lastname, age
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(User::from))
    }
}

impl std::fmt::Debug for MySqlUserRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlUserRepository").finish_non_exhaustive()
    }
}

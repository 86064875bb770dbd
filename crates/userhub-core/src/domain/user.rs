//! User entity.

use serde::{Deserialize, Serialize};

/// User entity.
///
/// The store is authoritative for this record; the cache may hold a
/// denormalized copy serialized as JSON. Serialization is lossless for
/// all four fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    /// Unique identifier, assigned by the store at insert time.
    pub id: i64,

    /// User's first name.
    pub name: String,

    /// User's last name.
    pub lastname: String,

    /// User's age.
    pub age: i32,
}

/// A user that has not been persisted yet. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub lastname: String,
    pub age: i32,
}

impl NewUser {
    /// Creates a new unpersisted user.
    #[must_use]
    pub fn new(name: impl Into<String>, lastname: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            lastname: lastname.into(),
            age,
        }
    }

    /// Attaches a store-assigned identifier.
    #[must_use]
    pub fn with_id(self, id: i64) -> User {
        User {
            id,
            name: self.name,
            lastname: self.lastname,
            age: self.age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_id_keeps_fields() {
        let user = NewUser::new("Ann", "Lee", 30).with_id(1);
        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Ann");
        assert_eq!(user.lastname, "Lee");
        assert_eq!(user.age, 30);
    }

    #[test]
    fn test_user_json_is_lossless() {
        let user = NewUser::new("Ann", "Lee", 30).with_id(7);
        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }
}

//! Cache key generators for consistent key naming.

/// Prefix for all cache keys to namespace them.
const CACHE_PREFIX: &str = "userhub:cache";

/// Generate a cache key for a user by ID.
#[must_use]
pub fn user_by_id(id: i64) -> String {
    format!("{}:user:id:{}", CACHE_PREFIX, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_by_id_key() {
        assert_eq!(user_by_id(42), "userhub:cache:user:id:42");
    }

    #[test]
    fn test_user_by_id_keys_are_distinct() {
        assert_ne!(user_by_id(1), user_by_id(2));
    }
}

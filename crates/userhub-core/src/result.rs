//! Result type aliases for Userhub.

use crate::UserHubError;

/// A specialized `Result` type for Userhub operations.
pub type UserHubResult<T> = Result<T, UserHubError>;

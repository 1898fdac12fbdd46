use serde::{Deserialize, Serialize};

use super::enums::Role;

/// Login account. Stored alongside the entity collections, served
/// read-only inside the full document, never mutated by the API.
/// Passwords are plaintext in the data file; a known gap, not a
/// security boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub password: String,
    pub role: Role,
}

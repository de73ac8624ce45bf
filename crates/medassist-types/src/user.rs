//! User account types.

use serde::{Deserialize, Serialize};

/// A registered user.
///
/// Users are stored alongside conversations but no HTTP route reads or
/// writes them yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

/// Payload for creating a user. The store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_not_serialized() {
        let user = User {
            id: 1,
            username: "alice".to_string(),
            password: "hunter2".to_string(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"username\":\"alice\""));
        assert!(!json.contains("hunter2"));
    }
}

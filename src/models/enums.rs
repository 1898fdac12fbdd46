use serde::{Deserialize, Serialize};

/// Access role attached to a user account. The role gate is applied by
/// the browser pages; the API itself does not check it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Doctor,
    Staff,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), r#""admin""#);
        let role: Role = serde_json::from_str(r#""staff""#).unwrap();
        assert_eq!(role, Role::Staff);
    }
}

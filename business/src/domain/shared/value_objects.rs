use serde::{Deserialize, Serialize};

/// Represents a user identifier issued by the authentication layer.
/// Plans are always read and written on behalf of one user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_user_id() {
        let user_id = UserId::new("user-42");
        assert_eq!(format!("{}", user_id), "user-42");
    }

    #[test]
    fn should_compare_user_ids_for_equality() {
        let same_1 = UserId::new("same-user");
        let same_2: UserId = "same-user".into();
        let other: UserId = "other-user".to_string().into();

        assert_eq!(same_1, same_2);
        assert_ne!(same_1, other);
    }
}

//! Provider-owned user and session records
//!
//! The identity provider owns both; the app only keeps a copy of the session
//! in browser storage the way the provider SDK would, and reads display
//! attributes from the user.

use serde::{Deserialize, Serialize};

use crate::core::avatar::avatar_label;

/// Signed-in user as reported by the identity provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
}

impl User {
    /// Two-letter avatar label for the app bar
    pub fn avatar_label(&self) -> String {
        avatar_label(self.display_name.as_deref())
    }
}

/// Provider session: the user plus the tokens needed for follow-up calls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    pub id_token: String,
    pub refresh_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_avatar_label() {
        let user = User {
            uid: "uid-1".to_string(),
            email: "jane@example.com".to_string(),
            display_name: Some("Jane Doe".to_string()),
        };
        assert_eq!(user.avatar_label(), "JD");

        let unnamed = User {
            display_name: None,
            ..user
        };
        assert_eq!(unnamed.avatar_label(), "U");
    }

    #[test]
    fn test_session_storage_roundtrip() {
        let session = Session {
            user: User {
                uid: "uid-1".to_string(),
                email: "jane@example.com".to_string(),
                display_name: None,
            },
            id_token: "id".to_string(),
            refresh_token: "refresh".to_string(),
        };
        let json = serde_json::to_string(&session).unwrap();
        let restored: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, session);
    }
}

//! Data models matching the PostgreSQL database schema

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Role assigned to every account created through signup
pub const ROLE_USER: &str = "user";

/// Role allowed to use the administration endpoints
pub const ROLE_ADMIN: &str = "admin";

/// Check whether a role grants administration rights
pub fn is_admin(role: &str) -> bool {
    role == ROLE_ADMIN
}

/// User account
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String, // Argon2 (or legacy bcrypt) hash, never plaintext
    pub role: String,
}

/// User row as listed to administrators
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserSummary {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Public part of a user shown on a profile page
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PublicUser {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// Poem
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Poem {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
}

/// Poem joined with its author's name
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PoemWithAuthor {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    /// Author's display name
    pub name: String,
}

/// Poem as listed on its owner's page
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserPoem {
    pub id: i32,
    pub title: String,
    pub content: String,
}

/// Aggregated likes for one poem; poems without likes never appear
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct LikeCount {
    pub poem_id: i32,
    pub like_count: i64,
}

/// Moderation report
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Report {
    pub id: i32,
    pub poem_id: i32,
    pub reported_by: i32,
    pub reason: String,
    pub created_at: DateTime<Utc>,
}

/// Report joined with the reporter's name and the poem's title
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ReportDetails {
    pub id: i32,
    pub poem_id: i32,
    pub reason: String,
    pub created_at: DateTime<Utc>,
    /// Name of the reporting user
    pub reporter: String,
    pub poem_title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_password_never_serialized() {
        let user = User {
            id: 7,
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            password: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
            role: ROLE_USER.to_string(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["email"], "ann@x.com");
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_is_admin() {
        assert!(is_admin(ROLE_ADMIN));
        assert!(!is_admin(ROLE_USER));
        assert!(!is_admin("Admin"));
    }

    #[test]
    fn test_poem_with_author_keeps_name_key() {
        let poem = PoemWithAuthor {
            id: 1,
            title: "Ozymandias".to_string(),
            content: "I met a traveller".to_string(),
            user_id: 3,
            created_at: Utc::now(),
            name: "Percy".to_string(),
        };

        let json = serde_json::to_value(&poem).unwrap();
        assert_eq!(json["name"], "Percy");
        assert_eq!(json["user_id"], 3);
    }

    #[test]
    fn test_like_count_serialization() {
        let count = LikeCount {
            poem_id: 4,
            like_count: 2,
        };
        let json = serde_json::to_string(&count).unwrap();
        assert_eq!(json, r#"{"poem_id":4,"like_count":2}"#);
    }
}

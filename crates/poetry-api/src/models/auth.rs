//! Authentication DTOs

use serde::{Deserialize, Serialize};
use shared::models::PublicUser;

/// Signup request
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login: bearer token plus the identity it encodes
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub role: String,
    pub user_id: i32,
}

/// Profile page: public user fields and two counters
#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub user: PublicUser,
    /// Number of poems authored
    pub poems: i64,
    /// Likes received across all authored poems
    pub likes: i64,
}

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub id: i32,      // User ID
    pub role: String, // "user" or "admin"
    pub exp: i64,     // Expiration time (as UTC timestamp)
    pub iat: i64,     // Issued at (as UTC timestamp)
}

impl Claims {
    pub fn new(user_id: i32, role: String, expiration_hours: i64) -> Self {
        let now = chrono::Utc::now().timestamp();
        let exp = now + (expiration_hours * 3600);

        Self {
            id: user_id,
            role,
            exp,
            iat: now,
        }
    }

    pub fn is_admin(&self) -> bool {
        shared::models::is_admin(&self.role)
    }
}

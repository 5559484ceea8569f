//! Bearer token service
//!
//! Issues and verifies HS256 JWTs carrying the user's id and role. Every
//! token carries an `exp` claim; lifetime comes from `JWT_EXPIRATION_HOURS`.

use crate::models::Claims;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use shared::AuthConfig;

/// Signs and validates bearer tokens with a key loaded from configuration
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiration_hours: i64,
}

impl TokenService {
    pub fn new(secret: &str, expiration_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expiration_hours,
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(&config.jwt_secret, config.jwt_expiration_hours)
    }

    /// Issue a token for `user_id` with `role`
    pub fn issue(&self, user_id: i32, role: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims::new(user_id, role.to_string(), self.expiration_hours);
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
    }

    /// Decode and validate a token (signature, algorithm and expiry)
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let validation = Validation::new(Algorithm::HS256);
        decode::<Claims>(token, &self.decoding_key, &validation).map(|data| data.claims)
    }
}

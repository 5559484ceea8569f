//! Error type shared by the services

/// Failure of a service operation
///
/// Handlers turn each variant into a `{ success: false, message }` body;
/// see `handlers::helpers::service_error_response`.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Signup with an email that is already registered
    #[error("Email already exists")]
    DuplicateEmail,

    #[error("User not found")]
    UserNotFound,

    /// Password did not match the stored hash
    #[error("Incorrect password")]
    InvalidCredentials,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Any other store failure
    #[error("Store error: {0:#}")]
    Store(#[from] anyhow::Error),

    /// Hashing, token signing or task join failures
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_messages() {
        assert_eq!(ServiceError::DuplicateEmail.to_string(), "Email already exists");
        assert_eq!(ServiceError::UserNotFound.to_string(), "User not found");
        assert_eq!(
            ServiceError::InvalidCredentials.to_string(),
            "Incorrect password"
        );
    }

    #[test]
    fn test_store_error_keeps_context_chain() {
        let err: ServiceError = anyhow!("connection reset")
            .context("Failed to create poem")
            .into();
        let message = err.to_string();
        assert!(message.contains("Failed to create poem"));
        assert!(message.contains("connection reset"));
    }
}

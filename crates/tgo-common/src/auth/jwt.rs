//! JWT identity for authenticated platform users
//!
//! The host platform's identity provider signs tokens with the shared secret. Claims carry
//! the user id and the user's site roles, which map to capabilities.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tgo_core::{Capabilities, UserId};

use crate::error::AppError;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Site roles, e.g. `tgo_player`
    #[serde(default)]
    pub roles: Vec<String>,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Get the user ID
    ///
    /// # Errors
    /// Returns an error if the subject is not a positive integer
    pub fn user_id(&self) -> Result<UserId, AppError> {
        UserId::parse(&self.sub).map_err(|_| AppError::InvalidToken)
    }

    /// Capabilities granted by the site roles
    pub fn capabilities(&self) -> Capabilities {
        Capabilities::from_roles(&self.roles)
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// JWT service for issuing and validating tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_expiry: i64,
}

impl JwtService {
    /// Create a new JWT service with the given secret and expiry in seconds
    pub fn new(secret: &str, token_expiry: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            token_expiry,
        }
    }

    /// Issue a token for a user with the given site roles
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue<S: AsRef<str>>(&self, user_id: UserId, roles: &[S]) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            roles: roles.iter().map(|r| r.as_ref().to_string()).collect(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.token_expiry)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode JWT")))
    }

    /// Decode and validate a token
    ///
    /// # Errors
    /// Returns an error if the token is invalid or expired
    pub fn validate(&self, token: &str) -> Result<Claims, AppError> {
        let validation = Validation::default();

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            }
        })?;

        Ok(token_data.claims)
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("token_expiry", &self.token_expiry)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> JwtService {
        JwtService::new("test-secret-key-that-is-long-enough", 900)
    }

    #[test]
    fn test_issue_and_validate() {
        let service = create_test_service();
        let token = service.issue(UserId::new(42), &["tgo_player"]).unwrap();

        let claims = service.validate(&token).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.user_id().unwrap(), UserId::new(42));
        assert!(claims.capabilities().has(Capabilities::REGISTER_FOR_EVENTS));
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = create_test_service()
            .issue(UserId::new(1), &["tgo_player"])
            .unwrap();
        let other = JwtService::new("another-secret-key-that-is-long", 900);
        assert!(matches!(other.validate(&token), Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_expired_token() {
        let service = JwtService::new("test-secret-key-that-is-long-enough", -120);
        let token = service.issue(UserId::new(1), &["tgo_player"]).unwrap();
        assert!(matches!(service.validate(&token), Err(AppError::TokenExpired)));
    }

    #[test]
    fn test_invalid_token() {
        let service = create_test_service();
        assert!(matches!(
            service.validate("invalid.token.here"),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn test_claims_bad_subject() {
        let claims = Claims {
            sub: "0".to_string(),
            roles: vec![],
            iat: 0,
            exp: i64::MAX,
        };
        assert!(claims.user_id().is_err());
        assert!(claims.capabilities().is_empty());
    }
}

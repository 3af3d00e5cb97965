//! Token Service
//!
//! Issues and verifies the stateless bearer tokens (HS256 JWT) that the
//! admin surface authenticates with. Nothing is persisted server-side.

use chrono::{DateTime, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::ErrorKind as JwtErrorKind,
};
use kernel::id::AdminId;
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::error::{AuthError, AuthResult};

/// Token claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Administrator id
    pub sub: String,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expiry (unix seconds)
    pub exp: i64,
}

/// Signs and verifies admin tokens
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_secs: i64,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is exact; `now > exp` is expired.
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(&config.token_secret),
            decoding_key: DecodingKey::from_secret(&config.token_secret),
            validation,
            ttl_secs: config.token_ttl_secs(),
        }
    }

    /// Issue a token for an administrator, valid from now
    pub fn issue(&self, admin_id: &AdminId) -> AuthResult<String> {
        self.issue_at(admin_id, Utc::now())
    }

    /// Issue a token as if it had been issued at `issued_at`
    pub fn issue_at(&self, admin_id: &AdminId, issued_at: DateTime<Utc>) -> AuthResult<String> {
        let iat = issued_at.timestamp();
        let claims = Claims {
            sub: admin_id.to_string(),
            iat,
            exp: iat.saturating_add(self.ttl_secs),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("Failed to sign token: {}", e)))
    }

    /// Verify a token and return the administrator id it was issued for
    pub fn verify(&self, token: &str) -> AuthResult<AdminId> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                JwtErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => {
                    tracing::debug!(error = %e, "Token rejected");
                    AuthError::TokenInvalid
                }
            }
        })?;

        AdminId::parse(&data.claims.sub).ok_or(AuthError::TokenInvalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn service(secret: &str) -> TokenService {
        TokenService::new(&AuthConfig::new(
            secret,
            crate::application::config::DEFAULT_TOKEN_TTL,
        ))
    }

    #[test]
    fn test_issue_and_verify() {
        let tokens = service("test-secret-key-12345");
        let admin_id = AdminId::new();

        let token = tokens.issue(&admin_id).unwrap();
        assert!(!token.is_empty());
        assert_eq!(tokens.verify(&token).unwrap(), admin_id);
    }

    #[test]
    fn test_garbage_is_invalid() {
        let tokens = service("test-secret-key-12345");
        assert!(matches!(
            tokens.verify("invalid.token.here"),
            Err(AuthError::TokenInvalid)
        ));
        assert!(matches!(tokens.verify(""), Err(AuthError::TokenInvalid)));
    }

    #[test]
    fn test_different_secret_is_invalid() {
        let token = service("secret1").issue(&AdminId::new()).unwrap();
        assert!(matches!(
            service("secret2").verify(&token),
            Err(AuthError::TokenInvalid)
        ));
    }

    #[test]
    fn test_expired_token() {
        let tokens = service("test-secret-key-12345");
        let issued_at = Utc::now() - Duration::days(8);
        let token = tokens.issue_at(&AdminId::new(), issued_at).unwrap();

        assert!(matches!(tokens.verify(&token), Err(AuthError::TokenExpired)));
    }

    #[test]
    fn test_tampered_payload_is_invalid() {
        let tokens = service("test-secret-key-12345");
        let token = tokens.issue(&AdminId::new()).unwrap();
        let other = tokens.issue(&AdminId::new()).unwrap();

        // Header and signature from one token, claims from another
        let parts: Vec<&str> = token.split('.').collect();
        let other_parts: Vec<&str> = other.split('.').collect();
        let forged = format!("{}.{}.{}", parts[0], other_parts[1], parts[2]);

        assert!(matches!(tokens.verify(&forged), Err(AuthError::TokenInvalid)));
    }

    #[test]
    fn test_non_uuid_subject_is_invalid() {
        let secret = "test-secret-key-12345";
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "not-a-uuid".to_string(),
            iat: now,
            exp: now + 60,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap();

        assert!(matches!(
            service(secret).verify(&token),
            Err(AuthError::TokenInvalid)
        ));
    }
}

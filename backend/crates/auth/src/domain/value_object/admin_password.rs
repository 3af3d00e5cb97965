//! Admin Password Value Objects
//!
//! Wraps the platform password primitives for the auth domain.
//!
//! ## Types
//! - `RawPassword`: Login/seed input (validated, zeroized on drop)
//! - `AdminPassword`: Argon2id hash in PHC format (safe to store)

use std::fmt;

use platform::password::{
    ClearTextPassword, HashedPassword, PasswordHashError, PasswordPolicyError,
};

use crate::error::{AuthError, AuthResult};

// ============================================================================
// Raw Password (Input)
// ============================================================================

/// Raw password from user input
///
/// Normalized (NFKC) and checked for length. Zeroized on drop.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Create and validate a raw password
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        ClearTextPassword::new(raw).map(Self)
    }

    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// Admin Password (Hashed)
// ============================================================================

/// Hashed administrator password
#[derive(Clone, PartialEq, Eq)]
pub struct AdminPassword(HashedPassword);

impl AdminPassword {
    /// Hash a raw password using Argon2id
    pub fn from_raw(raw: &RawPassword) -> AuthResult<Self> {
        raw.inner().hash().map(Self).map_err(|e| match e {
            PasswordHashError::HashingFailed(msg) => {
                AuthError::Internal(format!("Password hashing failed: {}", msg))
            }
            PasswordHashError::InvalidHashFormat => {
                AuthError::Internal("Unexpected error during password hashing".to_string())
            }
        })
    }

    /// Create from PHC string (from database)
    pub fn from_phc_string(phc_string: impl Into<String>) -> AuthResult<Self> {
        HashedPassword::from_phc_string(phc_string)
            .map(Self)
            .map_err(|_| AuthError::Internal("Invalid password hash in database".to_string()))
    }

    /// Get PHC string for database storage
    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Verify a raw password against this hash
    pub fn verify(&self, raw: &RawPassword) -> bool {
        self.0.verify(raw.inner())
    }
}

impl fmt::Debug for AdminPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

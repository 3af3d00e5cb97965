//! Admin Entity
//!
//! The single privileged identity that manages the question catalog.

use chrono::{DateTime, Utc};
use kernel::id::AdminId;

use crate::domain::value_object::{
    admin_password::AdminPassword, admin_role::AdminRole, email::Email,
};

/// Administrator entity
///
/// Holds the password hash; never serialized directly.
#[derive(Debug, Clone)]
pub struct Admin {
    /// Internal UUID identifier (token subject)
    pub admin_id: AdminId,
    /// Login email (unique, case-sensitive as stored)
    pub email: Email,
    /// Argon2id password hash
    pub password: AdminPassword,
    /// Role; only `admin` passes the role gate
    pub role: AdminRole,
    /// Inactive admins can neither log in nor pass the gate
    pub is_active: bool,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Admin {
    /// Create a new active administrator with the `admin` role
    pub fn new(email: Email, password: AdminPassword) -> Self {
        let now = Utc::now();

        Self {
            admin_id: AdminId::new(),
            email,
            password,
            role: AdminRole::Admin,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the admin may log in or pass the gate
    pub fn can_login(&self) -> bool {
        self.is_active
    }

    /// Strip the credential, leaving what the gate attaches to a request
    pub fn authenticated(&self) -> AuthenticatedAdmin {
        AuthenticatedAdmin {
            admin_id: self.admin_id,
            email: self.email.clone(),
            role: self.role.clone(),
            is_active: self.is_active,
        }
    }
}

/// Administrator as seen by downstream handlers after the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedAdmin {
    pub admin_id: AdminId,
    pub email: Email,
    pub role: AdminRole,
    pub is_active: bool,
}

impl AuthenticatedAdmin {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

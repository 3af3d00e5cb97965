//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::application::LoginOutput;
use crate::domain::entity::admin::AuthenticatedAdmin;

// ============================================================================
// Login
// ============================================================================

/// Login request
///
/// Missing fields deserialize as empty so they surface as field errors.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Admin summary embedded in the login response
#[derive(Debug, Clone, Serialize)]
pub struct AdminSummary {
    pub id: String,
    pub email: String,
    pub role: String,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub admin: AdminSummary,
    pub token: String,
}

impl From<LoginOutput> for LoginResponse {
    fn from(output: LoginOutput) -> Self {
        Self {
            admin: AdminSummary {
                id: output.admin_id.to_string(),
                email: output.email.as_str().to_string(),
                role: output.role.code().to_string(),
            },
            token: output.token,
        }
    }
}

// ============================================================================
// Profile
// ============================================================================

/// Profile response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: String,
    pub email: String,
    pub role: String,
    pub is_active: bool,
}

impl From<&AuthenticatedAdmin> for ProfileResponse {
    fn from(admin: &AuthenticatedAdmin) -> Self {
        Self {
            id: admin.admin_id.to_string(),
            email: admin.email.as_str().to_string(),
            role: admin.role.code().to_string(),
            is_active: admin.is_active,
        }
    }
}

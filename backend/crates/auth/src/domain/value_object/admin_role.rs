use serde::{Deserialize, Serialize};
use std::fmt;

/// Administrator role as stored.
///
/// Only `admin` is privileged. Any other stored value is kept verbatim so it
/// can round-trip through the database and still be rejected by the role gate.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AdminRole {
    #[default]
    Admin,
    Unrecognized(String),
}

impl AdminRole {
    #[inline]
    pub fn code(&self) -> &str {
        match self {
            AdminRole::Admin => "admin",
            AdminRole::Unrecognized(code) => code,
        }
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        matches!(self, AdminRole::Admin)
    }

    #[inline]
    pub fn from_code(code: &str) -> Self {
        match code {
            "admin" => AdminRole::Admin,
            other => {
                tracing::debug!(role = %other, "Unrecognized admin role");
                AdminRole::Unrecognized(other.to_string())
            }
        }
    }
}

impl From<String> for AdminRole {
    fn from(code: String) -> Self {
        AdminRole::from_code(&code)
    }
}

impl From<AdminRole> for String {
    fn from(role: AdminRole) -> Self {
        role.code().to_string()
    }
}

impl fmt::Display for AdminRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_role_from_code() {
        assert_eq!(AdminRole::from_code("admin"), AdminRole::Admin);
        assert_eq!(
            AdminRole::from_code("editor"),
            AdminRole::Unrecognized("editor".to_string())
        );
        // Case-sensitive, like the stored value
        assert!(!AdminRole::from_code("Admin").is_admin());
    }

    #[test]
    fn test_admin_role_code_roundtrip() {
        for code in ["admin", "viewer", ""] {
            assert_eq!(AdminRole::from_code(code).code(), code);
        }
    }

    #[test]
    fn test_admin_role_serde() {
        let json = serde_json::to_string(&AdminRole::Admin).unwrap();
        assert_eq!(json, "\"admin\"");

        let role: AdminRole = serde_json::from_str("\"viewer\"").unwrap();
        assert!(!role.is_admin());
    }
}

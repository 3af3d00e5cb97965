//! In-memory Repository
//!
//! Process-local credential store for tests and database-less runs.

use std::collections::HashMap;
use std::sync::Arc;

use kernel::id::AdminId;
use tokio::sync::RwLock;

use crate::domain::entity::admin::Admin;
use crate::domain::repository::AdminRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// In-memory admin repository
#[derive(Clone, Default)]
pub struct InMemoryAdminRepository {
    admins: Arc<RwLock<HashMap<AdminId, Admin>>>,
}

impl InMemoryAdminRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored admins
    pub async fn len(&self) -> usize {
        self.admins.read().await.len()
    }

    /// Flip the active flag; returns false if the admin is unknown
    pub async fn set_active(&self, admin_id: &AdminId, is_active: bool) -> bool {
        match self.admins.write().await.get_mut(admin_id) {
            Some(admin) => {
                admin.is_active = is_active;
                admin.updated_at = chrono::Utc::now();
                true
            }
            None => false,
        }
    }

    /// Remove an admin; returns false if it was not stored
    pub async fn remove(&self, admin_id: &AdminId) -> bool {
        self.admins.write().await.remove(admin_id).is_some()
    }
}

impl AdminRepository for InMemoryAdminRepository {
    async fn create(&self, admin: &Admin) -> AuthResult<()> {
        let mut admins = self.admins.write().await;

        if admins.values().any(|a| a.email == admin.email) {
            return Err(AuthError::AdminAlreadyExists);
        }

        admins.insert(admin.admin_id, admin.clone());
        Ok(())
    }

    async fn find_by_id(&self, admin_id: &AdminId) -> AuthResult<Option<Admin>> {
        Ok(self.admins.read().await.get(admin_id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Admin>> {
        Ok(self
            .admins
            .read()
            .await
            .values()
            .find(|a| &a.email == email)
            .cloned())
    }
}

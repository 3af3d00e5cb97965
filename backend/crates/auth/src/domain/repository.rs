//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::AdminId;

use crate::domain::entity::admin::Admin;
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// Administrator credential store
#[trait_variant::make(AdminRepository: Send)]
pub trait LocalAdminRepository {
    /// Insert a new administrator
    ///
    /// Fails with `AuthError::AdminAlreadyExists` when the email is taken.
    async fn create(&self, admin: &Admin) -> AuthResult<()>;

    /// Find administrator by ID
    async fn find_by_id(&self, admin_id: &AdminId) -> AuthResult<Option<Admin>>;

    /// Find administrator by email (exact match)
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Admin>>;
}

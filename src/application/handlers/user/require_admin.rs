//! RequireAdminHandler - admits only callers whose profile has the admin role.

use std::sync::Arc;

use crate::domain::constants::messages;
use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::Profile;
use crate::ports::ProfileReader;

#[derive(Debug, Clone)]
pub struct RequireAdminQuery {
    pub user_id: UserId,
}

pub struct RequireAdminHandler {
    profiles: Arc<dyn ProfileReader>,
}

impl RequireAdminHandler {
    pub fn new(profiles: Arc<dyn ProfileReader>) -> Self {
        Self { profiles }
    }

    /// The admin's profile, or `Forbidden` when the user has no profile row
    /// or a non-admin role.
    pub async fn handle(&self, query: RequireAdminQuery) -> Result<Profile, DomainError> {
        match self.profiles.find_by_user(&query.user_id).await? {
            Some(profile) if profile.is_admin() => Ok(profile),
            _ => {
                tracing::warn!(user_id = %query.user_id, "Refusing admin access");
                Err(DomainError::forbidden(messages::FORBIDDEN))
            }
        }
    }
}

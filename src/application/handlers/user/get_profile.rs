//! GetProfileHandler - the signed-in user's profile row.

use std::sync::Arc;

use crate::domain::constants::messages;
use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::Profile;
use crate::ports::ProfileReader;

#[derive(Debug, Clone)]
pub struct GetProfileQuery {
    pub user_id: UserId,
}

pub struct GetProfileHandler {
    profiles: Arc<dyn ProfileReader>,
}

impl GetProfileHandler {
    pub fn new(profiles: Arc<dyn ProfileReader>) -> Self {
        Self { profiles }
    }

    pub async fn handle(&self, query: GetProfileQuery) -> Result<Profile, DomainError> {
        self.profiles
            .find_by_user(&query.user_id)
            .await?
            .ok_or_else(|| DomainError::not_found(messages::PROFILE_NOT_FOUND))
    }
}

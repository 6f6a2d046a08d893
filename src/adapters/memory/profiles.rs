//! In-memory profile reader.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use super::lock_poisoned;
use crate::domain::foundation::{Caller, DomainError, UserId};
use crate::domain::user::Profile;
use crate::ports::ProfileReader;

/// In-memory `profiles` table.
#[derive(Debug, Default)]
pub struct InMemoryProfileReader {
    profiles: RwLock<Vec<Profile>>,
    force_error: RwLock<Option<DomainError>>,
}

impl InMemoryProfileReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a profile row.
    pub fn with_profile(self, profile: Profile) -> Self {
        if let Ok(mut profiles) = self.profiles.write() {
            profiles.push(profile);
        }
        self
    }

    /// Forces all reads to return the specified error.
    pub fn with_error(self, error: DomainError) -> Self {
        if let Ok(mut forced) = self.force_error.write() {
            *forced = Some(error);
        }
        self
    }
}

#[async_trait]
impl ProfileReader for InMemoryProfileReader {
    fn for_caller(self: Arc<Self>, _caller: &Caller) -> Arc<dyn ProfileReader> {
        self
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Profile>, DomainError> {
        if let Some(error) = self.force_error.read().map_err(|_| lock_poisoned())?.clone() {
            return Err(error);
        }
        let profiles = self.profiles.read().map_err(|_| lock_poisoned())?;
        Ok(profiles.iter().find(|p| &p.id == user_id).cloned())
    }
}

//! ProfileReader port for the `profiles` table.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::foundation::{Caller, DomainError, UserId};
use crate::domain::user::Profile;

/// Query operations for customer profiles
#[async_trait]
pub trait ProfileReader: Send + Sync {
    /// This repository acting for `caller`, so row-level policies apply to them.
    fn for_caller(self: Arc<Self>, caller: &Caller) -> Arc<dyn ProfileReader>;

    /// Profile of a user; `None` when the row was never created.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Profile>, DomainError>;
}

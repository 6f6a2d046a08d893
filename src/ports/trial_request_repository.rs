//! TrialRequestRepository port for the `trial_requests` table.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::foundation::{Caller, DomainError, TrialRequestId, UserId};
use crate::domain::trial::{NewTrialRequest, TrialRequest, TrialRequestUpdate, TrialStatus};

/// Persistence operations for trial requests.
///
/// Listings are ordered newest first.
#[async_trait]
pub trait TrialRequestRepository: Send + Sync {
    /// This repository acting for `caller`, so row-level policies apply to them.
    fn for_caller(self: Arc<Self>, caller: &Caller) -> Arc<dyn TrialRequestRepository>;

    /// All requests, optionally restricted to one status.
    async fn list(&self, status: Option<TrialStatus>) -> Result<Vec<TrialRequest>, DomainError>;

    /// Requests submitted by one user.
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<TrialRequest>, DomainError>;

    async fn create(&self, request: &NewTrialRequest) -> Result<TrialRequest, DomainError>;

    /// Apply an update; `None` if no row has this id.
    async fn update(
        &self,
        id: &TrialRequestId,
        update: &TrialRequestUpdate,
    ) -> Result<Option<TrialRequest>, DomainError>;

    /// Delete a request. Deleting a missing id succeeds.
    async fn delete(&self, id: &TrialRequestId) -> Result<(), DomainError>;
}

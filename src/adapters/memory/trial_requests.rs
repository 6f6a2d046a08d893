//! In-memory trial request repository.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use super::lock_poisoned;
use crate::domain::foundation::{Caller, DomainError, Timestamp, TrialRequestId, UserId};
use crate::domain::trial::{NewTrialRequest, TrialRequest, TrialRequestUpdate, TrialStatus};
use crate::ports::TrialRequestRepository;

/// In-memory `trial_requests` table.
#[derive(Debug, Default)]
pub struct InMemoryTrialRequestRepository {
    requests: RwLock<Vec<TrialRequest>>,
    force_error: RwLock<Option<DomainError>>,
}

impl InMemoryTrialRequestRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a row.
    pub fn with_request(self, request: TrialRequest) -> Self {
        if let Ok(mut requests) = self.requests.write() {
            requests.push(request);
        }
        self
    }

    /// Forces all calls to return the specified error.
    pub fn with_error(self, error: DomainError) -> Self {
        if let Ok(mut forced) = self.force_error.write() {
            *forced = Some(error);
        }
        self
    }

    /// Returns the number of stored requests.
    pub fn request_count(&self) -> usize {
        self.requests.read().map(|r| r.len()).unwrap_or(0)
    }

    fn check(&self) -> Result<(), DomainError> {
        match self.force_error.read().map_err(|_| lock_poisoned())?.clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn select(
        &self,
        filter: impl Fn(&TrialRequest) -> bool,
    ) -> Result<Vec<TrialRequest>, DomainError> {
        let mut rows: Vec<TrialRequest> = self
            .requests
            .read()
            .map_err(|_| lock_poisoned())?
            .iter()
            .filter(|r| filter(r))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }
}

#[async_trait]
impl TrialRequestRepository for InMemoryTrialRequestRepository {
    fn for_caller(self: Arc<Self>, _caller: &Caller) -> Arc<dyn TrialRequestRepository> {
        self
    }

    async fn list(&self, status: Option<TrialStatus>) -> Result<Vec<TrialRequest>, DomainError> {
        self.check()?;
        self.select(|r| status.map_or(true, |s| r.status == s))
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<TrialRequest>, DomainError> {
        self.check()?;
        self.select(|r| &r.user_id == user_id)
    }

    async fn create(&self, request: &NewTrialRequest) -> Result<TrialRequest, DomainError> {
        self.check()?;
        let row = TrialRequest {
            id: TrialRequestId::generate(),
            user_id: request.user_id.clone(),
            service_id: request.service_id.clone(),
            platform_id: request.platform_id.clone(),
            target_link: request.target_link.clone(),
            status: request.status,
            admin_notes: None,
            created_at: Timestamp::now(),
            updated_at: None,
        };
        self.requests
            .write()
            .map_err(|_| lock_poisoned())?
            .push(row.clone());
        Ok(row)
    }

    async fn update(
        &self,
        id: &TrialRequestId,
        update: &TrialRequestUpdate,
    ) -> Result<Option<TrialRequest>, DomainError> {
        self.check()?;
        let mut requests = self.requests.write().map_err(|_| lock_poisoned())?;
        Ok(requests.iter_mut().find(|r| &r.id == id).map(|request| {
            update.apply_to(request);
            request.clone()
        }))
    }

    async fn delete(&self, id: &TrialRequestId) -> Result<(), DomainError> {
        self.check()?;
        self.requests
            .write()
            .map_err(|_| lock_poisoned())?
            .retain(|r| &r.id != id);
        Ok(())
    }
}

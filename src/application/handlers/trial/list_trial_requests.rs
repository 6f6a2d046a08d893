//! ListTrialRequestsHandler - Admin query behind `GET /admin/trial-requests`.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::trial::{TrialRequest, TrialStatus};
use crate::ports::TrialRequestRepository;

/// Query for trial requests, newest first, optionally filtered by status.
#[derive(Debug, Clone, Default)]
pub struct ListTrialRequestsQuery {
    pub status: Option<TrialStatus>,
}

pub struct ListTrialRequestsHandler {
    requests: Arc<dyn TrialRequestRepository>,
}

impl ListTrialRequestsHandler {
    pub fn new(requests: Arc<dyn TrialRequestRepository>) -> Self {
        Self { requests }
    }

    pub async fn handle(
        &self,
        query: ListTrialRequestsQuery,
    ) -> Result<Vec<TrialRequest>, DomainError> {
        self.requests.list(query.status).await
    }
}

//! DeleteTrialRequestHandler - Admin command behind
//! `DELETE /admin/trial-requests/{id}`.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, TrialRequestId};
use crate::ports::TrialRequestRepository;

#[derive(Debug, Clone)]
pub struct DeleteTrialRequestCommand {
    pub trial_request_id: TrialRequestId,
}

pub struct DeleteTrialRequestHandler {
    requests: Arc<dyn TrialRequestRepository>,
}

impl DeleteTrialRequestHandler {
    pub fn new(requests: Arc<dyn TrialRequestRepository>) -> Self {
        Self { requests }
    }

    pub async fn handle(&self, cmd: DeleteTrialRequestCommand) -> Result<(), DomainError> {
        self.requests.delete(&cmd.trial_request_id).await?;
        tracing::info!(trial_request_id = %cmd.trial_request_id, "Trial request deleted");
        Ok(())
    }
}

//! SubmitTrialRequestHandler - Command handler for a customer asking for a
//! free trial of a service.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, PlatformId, ServiceId, UserId};
use crate::domain::trial::{NewTrialRequest, TrialRequest};
use crate::ports::TrialRequestRepository;

/// Command to submit a trial request on behalf of a signed-in user.
#[derive(Debug, Clone)]
pub struct SubmitTrialRequestCommand {
    pub user_id: UserId,
    pub service_id: ServiceId,
    pub platform_id: PlatformId,
    pub target_link: String,
}

pub struct SubmitTrialRequestHandler {
    requests: Arc<dyn TrialRequestRepository>,
}

impl SubmitTrialRequestHandler {
    pub fn new(requests: Arc<dyn TrialRequestRepository>) -> Self {
        Self { requests }
    }

    /// Inserts the request as `pending`.
    pub async fn handle(&self, cmd: SubmitTrialRequestCommand) -> Result<TrialRequest, DomainError> {
        let new_request = NewTrialRequest::new(
            cmd.user_id,
            cmd.service_id,
            cmd.platform_id,
            cmd.target_link,
        );
        let created = self.requests.create(&new_request).await?;
        tracing::info!(
            trial_request_id = %created.id,
            user_id = %created.user_id,
            "Trial request submitted"
        );
        Ok(created)
    }
}

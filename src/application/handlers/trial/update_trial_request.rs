//! UpdateTrialRequestHandler - Admin command behind
//! `PATCH /admin/trial-requests/{id}`.
//!
//! Status transitions are not enforced: an admin may move a request to any
//! status. `updated_at` is always stamped here, whatever the body said.

use std::sync::Arc;

use crate::domain::constants::messages;
use crate::domain::foundation::{DomainError, Timestamp, TrialRequestId};
use crate::domain::trial::{TrialRequest, TrialRequestUpdate};
use crate::ports::TrialRequestRepository;

#[derive(Debug, Clone)]
pub struct UpdateTrialRequestCommand {
    pub trial_request_id: TrialRequestId,
    pub update: TrialRequestUpdate,
}

pub struct UpdateTrialRequestHandler {
    requests: Arc<dyn TrialRequestRepository>,
}

impl UpdateTrialRequestHandler {
    pub fn new(requests: Arc<dyn TrialRequestRepository>) -> Self {
        Self { requests }
    }

    pub async fn handle(&self, cmd: UpdateTrialRequestCommand) -> Result<TrialRequest, DomainError> {
        let update = TrialRequestUpdate {
            updated_at: Some(Timestamp::now()),
            ..cmd.update
        };

        let updated = self
            .requests
            .update(&cmd.trial_request_id, &update)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(messages::TRIAL_REQUEST_NOT_FOUND)
                    .with_detail("trial_request_id", cmd.trial_request_id.to_string())
            })?;

        tracing::info!(
            trial_request_id = %updated.id,
            status = %updated.status,
            "Trial request updated"
        );
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryTrialRequestRepository;
    use crate::application::handlers::fixtures::trial_request;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::trial::TrialStatus;

    fn command(id: &str, update: TrialRequestUpdate) -> UpdateTrialRequestCommand {
        UpdateTrialRequestCommand {
            trial_request_id: TrialRequestId::new(id).unwrap(),
            update,
        }
    }

    #[tokio::test]
    async fn sets_status_notes_and_stamps_updated_at() {
        let repo = InMemoryTrialRequestRepository::new()
            .with_request(trial_request("t-1", "u-1", TrialStatus::Pending));
        let handler = UpdateTrialRequestHandler::new(Arc::new(repo));

        let updated = handler
            .handle(command(
                "t-1",
                TrialRequestUpdate {
                    status: Some(TrialStatus::Approved),
                    admin_notes: Some("OK".to_string()),
                    updated_at: None,
                },
            ))
            .await
            .unwrap();

        assert_eq!(updated.status, TrialStatus::Approved);
        assert_eq!(updated.admin_notes.as_deref(), Some("OK"));
        assert!(updated.updated_at.is_some());
    }

    #[tokio::test]
    async fn transitions_are_not_enforced() {
        let repo = InMemoryTrialRequestRepository::new()
            .with_request(trial_request("t-1", "u-1", TrialStatus::Delivered));
        let handler = UpdateTrialRequestHandler::new(Arc::new(repo));

        let updated = handler
            .handle(command(
                "t-1",
                TrialRequestUpdate {
                    status: Some(TrialStatus::Pending),
                    ..Default::default()
                },
            ))
            .await
            .unwrap();

        assert_eq!(updated.status, TrialStatus::Pending);
    }

    #[tokio::test]
    async fn missing_request_is_not_found() {
        let handler =
            UpdateTrialRequestHandler::new(Arc::new(InMemoryTrialRequestRepository::new()));

        let err = handler
            .handle(command("ghost", TrialRequestUpdate::default()))
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::NotFound);
    }
}

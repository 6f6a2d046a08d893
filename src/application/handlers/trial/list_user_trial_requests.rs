//! ListUserTrialRequestsHandler - the caller's own trial requests.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::trial::TrialRequest;
use crate::ports::TrialRequestRepository;

#[derive(Debug, Clone)]
pub struct ListUserTrialRequestsQuery {
    pub user_id: UserId,
}

pub struct ListUserTrialRequestsHandler {
    requests: Arc<dyn TrialRequestRepository>,
}

impl ListUserTrialRequestsHandler {
    pub fn new(requests: Arc<dyn TrialRequestRepository>) -> Self {
        Self { requests }
    }

    pub async fn handle(
        &self,
        query: ListUserTrialRequestsQuery,
    ) -> Result<Vec<TrialRequest>, DomainError> {
        self.requests.list_for_user(&query.user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryTrialRequestRepository;
    use crate::application::handlers::fixtures::trial_request;
    use crate::domain::trial::TrialStatus;

    #[tokio::test]
    async fn only_returns_callers_requests() {
        let repo = InMemoryTrialRequestRepository::new()
            .with_request(trial_request("t-1", "u-1", TrialStatus::Pending))
            .with_request(trial_request("t-2", "u-2", TrialStatus::Pending));
        let handler = ListUserTrialRequestsHandler::new(Arc::new(repo));

        let mine = handler
            .handle(ListUserTrialRequestsQuery {
                user_id: UserId::new("u-1").unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].id.as_str(), "t-1");
    }
}

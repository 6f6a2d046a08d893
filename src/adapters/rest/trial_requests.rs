//! `TrialRequestRepository` over the hosted `trial_requests` table.

use std::sync::Arc;

use async_trait::async_trait;

use super::client::{Order, RestClient};
use crate::domain::foundation::{Caller, DomainError, TrialRequestId, UserId};
use crate::domain::trial::{NewTrialRequest, TrialRequest, TrialRequestUpdate, TrialStatus};
use crate::ports::TrialRequestRepository;

const TRIAL_REQUESTS: &str = "trial_requests";

#[derive(Debug, Clone)]
pub struct RestTrialRequestRepository {
    client: RestClient,
}

impl RestTrialRequestRepository {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TrialRequestRepository for RestTrialRequestRepository {
    fn for_caller(self: Arc<Self>, caller: &Caller) -> Arc<dyn TrialRequestRepository> {
        Arc::new(Self::new(self.client.with_access_token(&caller.access_token)))
    }

    async fn list(&self, status: Option<TrialStatus>) -> Result<Vec<TrialRequest>, DomainError> {
        let mut query = self.client.table(TRIAL_REQUESTS);
        if let Some(status) = status {
            query = query.eq("status", status.as_str());
        }
        query.order("created_at", Order::Desc).select().await
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<TrialRequest>, DomainError> {
        self.client
            .table(TRIAL_REQUESTS)
            .eq("user_id", user_id)
            .order("created_at", Order::Desc)
            .select()
            .await
    }

    async fn create(&self, request: &NewTrialRequest) -> Result<TrialRequest, DomainError> {
        self.client.table(TRIAL_REQUESTS).insert(request).await
    }

    async fn update(
        &self,
        id: &TrialRequestId,
        update: &TrialRequestUpdate,
    ) -> Result<Option<TrialRequest>, DomainError> {
        let rows: Vec<TrialRequest> = self
            .client
            .table(TRIAL_REQUESTS)
            .eq("id", id)
            .update(update)
            .await?;
        Ok(rows.into_iter().next())
    }

    async fn delete(&self, id: &TrialRequestId) -> Result<(), DomainError> {
        self.client.table(TRIAL_REQUESTS).eq("id", id).delete().await
    }
}

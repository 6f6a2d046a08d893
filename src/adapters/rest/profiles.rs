//! `ProfileReader` over the hosted `profiles` table.

use std::sync::Arc;

use async_trait::async_trait;

use super::client::RestClient;
use crate::domain::foundation::{Caller, DomainError, UserId};
use crate::domain::user::Profile;
use crate::ports::ProfileReader;

#[derive(Debug, Clone)]
pub struct RestProfileReader {
    client: RestClient,
}

impl RestProfileReader {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProfileReader for RestProfileReader {
    fn for_caller(self: Arc<Self>, caller: &Caller) -> Arc<dyn ProfileReader> {
        Arc::new(Self::new(self.client.with_access_token(&caller.access_token)))
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Profile>, DomainError> {
        self.client
            .table("profiles")
            .eq("id", user_id)
            .select_one()
            .await
    }
}

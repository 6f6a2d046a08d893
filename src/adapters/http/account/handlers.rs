//! HTTP handlers for the signed-in customer's endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::{ListUserTrialRequestsHandler, ListUserTrialRequestsQuery};
use crate::domain::constants::messages;
use crate::ports::TrialRequestRepository;

#[derive(Clone)]
pub struct AccountHandlers {
    trial_requests: Arc<dyn TrialRequestRepository>,
}

impl AccountHandlers {
    pub fn new(trial_requests: Arc<dyn TrialRequestRepository>) -> Self {
        Self { trial_requests }
    }
}

/// GET /user/trial-requests - The caller's trial requests
pub async fn list_my_trial_requests(
    State(handlers): State<AccountHandlers>,
    RequireAuth(caller): RequireAuth,
) -> Response {
    let handler = ListUserTrialRequestsHandler::new(handlers.trial_requests.for_caller(&caller));
    let query = ListUserTrialRequestsQuery {
        user_id: caller.user.id,
    };

    match handler.handle(query).await {
        Ok(requests) => Json(requests).into_response(),
        Err(e) => ApiError::from_domain(e, messages::FETCH_TRIAL_REQUESTS_FAILED).into_response(),
    }
}

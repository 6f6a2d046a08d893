//! HTTP handlers for admin endpoints.
//!
//! The admin gate has already checked the caller's role; each handler runs
//! its operation against repositories scoped to the caller's token.

use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::dto::SuccessResponse;
use crate::adapters::http::error::ApiError;
use crate::adapters::http::extract::{ApiJson, ApiPath, ApiQuery};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::{
    DeleteServiceCommand, DeleteServiceHandler, DeleteTrialRequestCommand,
    DeleteTrialRequestHandler, ListTrialRequestsHandler, ListTrialRequestsQuery,
    UpdateServiceCommand, UpdateServiceHandler, UpdateTrialRequestCommand,
    UpdateTrialRequestHandler,
};
use crate::domain::catalog::ServiceUpdate;
use crate::domain::constants::messages;
use crate::domain::foundation::{ServiceId, TrialRequestId};
use crate::domain::trial::TrialRequestUpdate;
use crate::ports::{CatalogRepository, TrialRequestRepository};

use super::dto::TrialRequestsQuery;

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AdminHandlers {
    catalog: Arc<dyn CatalogRepository>,
    trial_requests: Arc<dyn TrialRequestRepository>,
}

impl AdminHandlers {
    pub fn new(
        catalog: Arc<dyn CatalogRepository>,
        trial_requests: Arc<dyn TrialRequestRepository>,
    ) -> Self {
        Self {
            catalog,
            trial_requests,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// PATCH /admin/services/:id - Partial update of a service
pub async fn update_service(
    State(handlers): State<AdminHandlers>,
    RequireAuth(caller): RequireAuth,
    ApiPath(service_id): ApiPath<ServiceId>,
    ApiJson(update): ApiJson<ServiceUpdate>,
) -> Response {
    let handler = UpdateServiceHandler::new(handlers.catalog.for_caller(&caller));
    let cmd = UpdateServiceCommand { service_id, update };

    match handler.handle(cmd).await {
        Ok(service) => Json(SuccessResponse::with_data(service)).into_response(),
        Err(e) => ApiError::from_domain(e, messages::UPDATE_SERVICE_FAILED).into_response(),
    }
}

/// DELETE /admin/services/:id - Delete a service
pub async fn delete_service(
    State(handlers): State<AdminHandlers>,
    RequireAuth(caller): RequireAuth,
    ApiPath(service_id): ApiPath<ServiceId>,
) -> Response {
    let handler = DeleteServiceHandler::new(handlers.catalog.for_caller(&caller));

    match handler.handle(DeleteServiceCommand { service_id }).await {
        Ok(()) => Json(SuccessResponse::empty()).into_response(),
        Err(e) => ApiError::from_domain(e, messages::DELETE_SERVICE_FAILED).into_response(),
    }
}

/// GET /admin/trial-requests?status= - All trial requests, newest first
pub async fn list_trial_requests(
    State(handlers): State<AdminHandlers>,
    RequireAuth(caller): RequireAuth,
    ApiQuery(params): ApiQuery<TrialRequestsQuery>,
) -> Response {
    let handler = ListTrialRequestsHandler::new(handlers.trial_requests.for_caller(&caller));
    let query = ListTrialRequestsQuery {
        status: params.status,
    };

    match handler.handle(query).await {
        Ok(requests) => Json(requests).into_response(),
        Err(e) => ApiError::from_domain(e, messages::FETCH_TRIAL_REQUESTS_FAILED).into_response(),
    }
}

/// PATCH /admin/trial-requests/:id - Set status and/or admin notes
pub async fn update_trial_request(
    State(handlers): State<AdminHandlers>,
    RequireAuth(caller): RequireAuth,
    ApiPath(trial_request_id): ApiPath<TrialRequestId>,
    ApiJson(update): ApiJson<TrialRequestUpdate>,
) -> Response {
    let handler = UpdateTrialRequestHandler::new(handlers.trial_requests.for_caller(&caller));
    let cmd = UpdateTrialRequestCommand {
        trial_request_id,
        update,
    };

    match handler.handle(cmd).await {
        Ok(request) => Json(SuccessResponse::with_data(request)).into_response(),
        Err(e) => ApiError::from_domain(e, messages::UPDATE_TRIAL_REQUEST_FAILED).into_response(),
    }
}

/// DELETE /admin/trial-requests/:id - Delete a trial request
pub async fn delete_trial_request(
    State(handlers): State<AdminHandlers>,
    RequireAuth(caller): RequireAuth,
    ApiPath(trial_request_id): ApiPath<TrialRequestId>,
) -> Response {
    let handler = DeleteTrialRequestHandler::new(handlers.trial_requests.for_caller(&caller));

    match handler
        .handle(DeleteTrialRequestCommand { trial_request_id })
        .await
    {
        Ok(()) => Json(SuccessResponse::empty()).into_response(),
        Err(e) => ApiError::from_domain(e, messages::DELETE_TRIAL_REQUEST_FAILED).into_response(),
    }
}

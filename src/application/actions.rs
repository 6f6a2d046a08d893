//! Server actions - the storefront operations as plain async functions for
//! UI forms.
//!
//! Every action returns an [`ActionResult`] envelope instead of an error:
//! failures are logged and turned into a French message for the form.

use std::sync::Arc;

use serde::Serialize;

use super::handlers::{
    CreateServiceCommand, CreateServiceHandler, DeleteServiceCommand, DeleteServiceHandler,
    DeleteTrialRequestCommand, DeleteTrialRequestHandler, GetProfileHandler, GetProfileQuery,
    GetServicesByPlatformHandler, GetServicesByPlatformQuery, ListPlatformsHandler,
    ListPlatformsQuery, ListTrialRequestsHandler, ListTrialRequestsQuery,
    ListUserTrialRequestsHandler, ListUserTrialRequestsQuery, RequireAdminHandler,
    RequireAdminQuery, SubmitTrialRequestCommand, SubmitTrialRequestHandler,
    UpdateServiceCommand, UpdateServiceHandler, UpdateTrialRequestCommand,
    UpdateTrialRequestHandler,
};
use crate::domain::catalog::{NewService, Platform, Service, ServiceUpdate};
use crate::domain::constants::messages;
use crate::domain::foundation::{
    Caller, DomainError, ErrorCode, PlatformId, ServiceId, TrialRequestId,
};
use crate::domain::trial::{TrialRequest, TrialRequestUpdate, TrialStatus};
use crate::domain::user::Profile;
use crate::ports::{CatalogRepository, ProfileReader, TrialRequestRepository};

/// `{ success, data, error }` envelope returned to forms.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionResult<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ActionResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }

    /// Build from a handler result. `fallback` replaces upstream diagnostics.
    fn from_result(result: Result<T, DomainError>, fallback: &str) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(e) => Self::failed(user_message(&e, fallback)),
        }
    }
}

/// Message shown to the user for a failed operation.
///
/// Not-found, unauthenticated and forbidden errors already carry a French
/// message; everything else is logged and replaced by `fallback`.
pub fn user_message(error: &DomainError, fallback: &str) -> String {
    match error.code() {
        ErrorCode::NotFound | ErrorCode::Unauthenticated | ErrorCode::Forbidden => {
            error.message().to_string()
        }
        _ => {
            tracing::error!(details = ?error.details, "{}: {}", fallback, error);
            fallback.to_string()
        }
    }
}

/// Fields of the trial request form. The caller comes from the session.
#[derive(Debug, Clone)]
pub struct TrialRequestForm {
    pub service_id: ServiceId,
    pub platform_id: PlatformId,
    pub target_link: String,
}

/// Facade over the handlers for UI forms.
///
/// Catalog reads are public. Everything else runs as the caller, and the
/// back-office actions also need an admin profile.
#[derive(Clone)]
pub struct StorefrontActions {
    catalog: Arc<dyn CatalogRepository>,
    trial_requests: Arc<dyn TrialRequestRepository>,
    profiles: Arc<dyn ProfileReader>,
}

impl StorefrontActions {
    pub fn new(
        catalog: Arc<dyn CatalogRepository>,
        trial_requests: Arc<dyn TrialRequestRepository>,
        profiles: Arc<dyn ProfileReader>,
    ) -> Self {
        Self {
            catalog,
            trial_requests,
            profiles,
        }
    }

    fn signed_in(caller: Option<&Caller>) -> Result<&Caller, DomainError> {
        caller.ok_or_else(|| DomainError::unauthenticated(messages::UNAUTHORIZED))
    }

    async fn admin<'a>(&self, caller: Option<&'a Caller>) -> Result<&'a Caller, DomainError> {
        let caller = Self::signed_in(caller)?;
        RequireAdminHandler::new(self.profiles.clone().for_caller(caller))
            .handle(RequireAdminQuery {
                user_id: caller.id().clone(),
            })
            .await?;
        Ok(caller)
    }

    pub async fn get_platforms(&self) -> ActionResult<Vec<Platform>> {
        let result = ListPlatformsHandler::new(self.catalog.clone())
            .handle(ListPlatformsQuery)
            .await;
        ActionResult::from_result(result, messages::FETCH_PLATFORMS_FAILED)
    }

    pub async fn get_services_by_platform(&self, platform_slug: &str) -> ActionResult<Vec<Service>> {
        let result = GetServicesByPlatformHandler::new(self.catalog.clone())
            .handle(GetServicesByPlatformQuery {
                platform_slug: platform_slug.to_string(),
            })
            .await;
        ActionResult::from_result(result, messages::FETCH_SERVICES_FAILED)
    }

    /// Admin only.
    pub async fn create_service(
        &self,
        caller: Option<&Caller>,
        service: NewService,
    ) -> ActionResult<Service> {
        let result = async {
            let caller = self.admin(caller).await?;
            CreateServiceHandler::new(self.catalog.clone().for_caller(caller))
                .handle(CreateServiceCommand { service })
                .await
        }
        .await;
        ActionResult::from_result(result, messages::CREATE_SERVICE_FAILED)
    }

    /// Admin only.
    pub async fn update_service(
        &self,
        caller: Option<&Caller>,
        service_id: ServiceId,
        update: ServiceUpdate,
    ) -> ActionResult<Service> {
        let result = async {
            let caller = self.admin(caller).await?;
            UpdateServiceHandler::new(self.catalog.clone().for_caller(caller))
                .handle(UpdateServiceCommand { service_id, update })
                .await
        }
        .await;
        ActionResult::from_result(result, messages::UPDATE_SERVICE_FAILED)
    }

    /// Admin only.
    pub async fn delete_service(
        &self,
        caller: Option<&Caller>,
        service_id: ServiceId,
    ) -> ActionResult<()> {
        let result = async {
            let caller = self.admin(caller).await?;
            DeleteServiceHandler::new(self.catalog.clone().for_caller(caller))
                .handle(DeleteServiceCommand { service_id })
                .await
        }
        .await;
        ActionResult::from_result(result, messages::DELETE_SERVICE_FAILED)
    }

    /// Requires a signed-in caller.
    pub async fn submit_trial_request(
        &self,
        caller: Option<&Caller>,
        form: TrialRequestForm,
    ) -> ActionResult<TrialRequest> {
        let result = async {
            let caller = Self::signed_in(caller)?;
            SubmitTrialRequestHandler::new(self.trial_requests.clone().for_caller(caller))
                .handle(SubmitTrialRequestCommand {
                    user_id: caller.id().clone(),
                    service_id: form.service_id,
                    platform_id: form.platform_id,
                    target_link: form.target_link,
                })
                .await
        }
        .await;
        ActionResult::from_result(result, messages::CREATE_TRIAL_REQUEST_FAILED)
    }

    /// Requires a signed-in caller.
    pub async fn get_user_trial_requests(
        &self,
        caller: Option<&Caller>,
    ) -> ActionResult<Vec<TrialRequest>> {
        let result = async {
            let caller = Self::signed_in(caller)?;
            ListUserTrialRequestsHandler::new(self.trial_requests.clone().for_caller(caller))
                .handle(ListUserTrialRequestsQuery {
                    user_id: caller.id().clone(),
                })
                .await
        }
        .await;
        ActionResult::from_result(result, messages::FETCH_TRIAL_REQUESTS_FAILED)
    }

    /// Admin only.
    pub async fn get_trial_requests(
        &self,
        caller: Option<&Caller>,
        status: Option<TrialStatus>,
    ) -> ActionResult<Vec<TrialRequest>> {
        let result = async {
            let caller = self.admin(caller).await?;
            ListTrialRequestsHandler::new(self.trial_requests.clone().for_caller(caller))
                .handle(ListTrialRequestsQuery { status })
                .await
        }
        .await;
        ActionResult::from_result(result, messages::FETCH_TRIAL_REQUESTS_FAILED)
    }

    /// Admin only.
    pub async fn update_trial_request(
        &self,
        caller: Option<&Caller>,
        trial_request_id: TrialRequestId,
        update: TrialRequestUpdate,
    ) -> ActionResult<TrialRequest> {
        let result = async {
            let caller = self.admin(caller).await?;
            UpdateTrialRequestHandler::new(self.trial_requests.clone().for_caller(caller))
                .handle(UpdateTrialRequestCommand {
                    trial_request_id,
                    update,
                })
                .await
        }
        .await;
        ActionResult::from_result(result, messages::UPDATE_TRIAL_REQUEST_FAILED)
    }

    /// Admin only.
    pub async fn delete_trial_request(
        &self,
        caller: Option<&Caller>,
        trial_request_id: TrialRequestId,
    ) -> ActionResult<()> {
        let result = async {
            let caller = self.admin(caller).await?;
            DeleteTrialRequestHandler::new(self.trial_requests.clone().for_caller(caller))
                .handle(DeleteTrialRequestCommand { trial_request_id })
                .await
        }
        .await;
        ActionResult::from_result(result, messages::DELETE_TRIAL_REQUEST_FAILED)
    }

    /// Profile of the signed-in caller, if any.
    pub async fn get_current_profile(&self, caller: Option<&Caller>) -> ActionResult<Profile> {
        let result = async {
            let caller = Self::signed_in(caller)?;
            GetProfileHandler::new(self.profiles.clone().for_caller(caller))
                .handle(GetProfileQuery {
                    user_id: caller.id().clone(),
                })
                .await
        }
        .await;
        ActionResult::from_result(result, messages::FETCH_PROFILE_FAILED)
    }
}

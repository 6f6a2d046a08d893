//! Shared state the routers are built from.

use std::sync::Arc;

use crate::application::handlers::{CompleteSignInHandler, GetServicesByPlatformHandler};
use crate::config::AuthConfig;
use crate::ports::{
    AuthCodeExchanger, CatalogRepository, ProfileReader, SessionValidator, TrialRequestRepository,
};

use super::account::AccountHandlers;
use super::admin::AdminHandlers;
use super::auth::AuthCallbackHandlers;
use super::catalog::CatalogHandlers;
use super::middleware::{AdminGate, AuthState};

/// Ports and settings wired once at startup.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogRepository>,
    pub trial_requests: Arc<dyn TrialRequestRepository>,
    pub profiles: Arc<dyn ProfileReader>,
    pub session_validator: Arc<dyn SessionValidator>,
    pub auth_exchanger: Arc<dyn AuthCodeExchanger>,
    pub auth: AuthConfig,
}

impl AppState {
    pub fn admin_handlers(&self) -> AdminHandlers {
        AdminHandlers::new(self.catalog.clone(), self.trial_requests.clone())
    }

    pub fn admin_gate(&self) -> AdminGate {
        AdminGate::new(self.profiles.clone())
    }

    pub fn catalog_handlers(&self) -> CatalogHandlers {
        CatalogHandlers::new(Arc::new(GetServicesByPlatformHandler::new(
            self.catalog.clone(),
        )))
    }

    pub fn account_handlers(&self) -> AccountHandlers {
        AccountHandlers::new(self.trial_requests.clone())
    }

    pub fn auth_callback_handlers(&self) -> AuthCallbackHandlers {
        let sign_in = CompleteSignInHandler::new(
            self.auth_exchanger.clone(),
            self.auth.error_path.clone(),
        );
        AuthCallbackHandlers::new(
            Arc::new(sign_in),
            self.auth.origin(),
            self.auth.session_cookie.clone(),
            self.auth.error_path.clone(),
        )
    }

    pub fn auth_state(&self) -> AuthState {
        AuthState::new(
            self.session_validator.clone(),
            self.auth.session_cookie.clone(),
        )
    }
}

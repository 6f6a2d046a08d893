//! Application handlers.
//!
//! Command and query handlers, one operation each, over the ports.

pub mod auth;
pub mod catalog;
pub mod trial;
pub mod user;

#[cfg(test)]
pub(crate) mod fixtures;

pub use auth::{
    safe_redirect_path, CompleteSignInCommand, CompleteSignInHandler, SignInOutcome,
};
pub use catalog::{
    CreateServiceCommand, CreateServiceHandler, DeleteServiceCommand, DeleteServiceHandler,
    GetServicesByPlatformHandler, GetServicesByPlatformQuery, ListPlatformsHandler,
    ListPlatformsQuery, UpdateServiceCommand, UpdateServiceHandler,
};
pub use trial::{
    DeleteTrialRequestCommand, DeleteTrialRequestHandler, ListTrialRequestsHandler,
    ListTrialRequestsQuery, ListUserTrialRequestsHandler, ListUserTrialRequestsQuery,
    SubmitTrialRequestCommand, SubmitTrialRequestHandler, UpdateTrialRequestCommand,
    UpdateTrialRequestHandler,
};
pub use user::{GetProfileHandler, GetProfileQuery, RequireAdminHandler, RequireAdminQuery};

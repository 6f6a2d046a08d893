//! Trial request command and query handlers.

mod delete_trial_request;
mod list_trial_requests;
mod list_user_trial_requests;
mod submit_trial_request;
mod update_trial_request;

pub use delete_trial_request::{DeleteTrialRequestCommand, DeleteTrialRequestHandler};
pub use list_trial_requests::{ListTrialRequestsHandler, ListTrialRequestsQuery};
pub use list_user_trial_requests::{ListUserTrialRequestsHandler, ListUserTrialRequestsQuery};
pub use submit_trial_request::{SubmitTrialRequestCommand, SubmitTrialRequestHandler};
pub use update_trial_request::{UpdateTrialRequestCommand, UpdateTrialRequestHandler};

//! Trial module - free trial requests and their status lifecycle.

mod status;
mod trial_request;

pub use status::TrialStatus;
pub use trial_request::{NewTrialRequest, TrialRequest, TrialRequestUpdate};

//! HTTP DTOs for admin endpoints.
//!
//! Request bodies are the domain update types (`ServiceUpdate`,
//! `TrialRequestUpdate`) and pass through unvalidated.

use serde::Deserialize;

use crate::domain::trial::TrialStatus;

/// Query parameters for `GET /admin/trial-requests`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrialRequestsQuery {
    #[serde(default)]
    pub status: Option<TrialStatus>,
}

//! Trial request rows.

use serde::{Deserialize, Serialize};

use super::TrialStatus;
use crate::domain::foundation::{PlatformId, ServiceId, Timestamp, TrialRequestId, UserId};

/// A user's request for a free trial delivery of a service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialRequest {
    pub id: TrialRequestId,
    pub user_id: UserId,
    pub service_id: ServiceId,
    pub platform_id: PlatformId,
    /// Link to the account or post to boost.
    pub target_link: String,
    #[serde(default)]
    pub status: TrialStatus,
    #[serde(default)]
    pub admin_notes: Option<String>,
    pub created_at: Timestamp,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

/// Insert shape for a trial request. Always starts `pending`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTrialRequest {
    pub user_id: UserId,
    pub service_id: ServiceId,
    pub platform_id: PlatformId,
    pub target_link: String,
    pub status: TrialStatus,
}

impl NewTrialRequest {
    pub fn new(
        user_id: UserId,
        service_id: ServiceId,
        platform_id: PlatformId,
        target_link: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            service_id,
            platform_id,
            target_link: target_link.into(),
            status: TrialStatus::Pending,
        }
    }
}

/// Admin update of a trial request. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrialRequestUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TrialStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,
    /// Stamped by the update handler, never taken from the request body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl TrialRequestUpdate {
    /// Applies the present fields to a row.
    pub fn apply_to(&self, request: &mut TrialRequest) {
        if let Some(status) = self.status {
            request.status = status;
        }
        if let Some(notes) = &self.admin_notes {
            request.admin_notes = Some(notes.clone());
        }
        if let Some(updated_at) = self.updated_at {
            request.updated_at = Some(updated_at);
        }
    }
}

//! TrialStatus enum tracking the lifecycle of a trial request.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Lifecycle status of a trial request.
///
/// Expected flow: `Pending -> Approved | Rejected`, then `Approved -> Delivered`.
/// Admin updates are not checked against this flow; `can_transition_to` is
/// informational (used to pick the actions offered to admins).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TrialStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Delivered,
}

impl TrialStatus {
    pub const ALL: [TrialStatus; 4] = [
        TrialStatus::Pending,
        TrialStatus::Approved,
        TrialStatus::Rejected,
        TrialStatus::Delivered,
    ];

    /// Wire value, as stored in the `status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrialStatus::Pending => "pending",
            TrialStatus::Approved => "approved",
            TrialStatus::Rejected => "rejected",
            TrialStatus::Delivered => "delivered",
        }
    }

    /// French label shown to customers and admins.
    pub fn label(&self) -> &'static str {
        match self {
            TrialStatus::Pending => "En attente",
            TrialStatus::Approved => "Approuvé",
            TrialStatus::Rejected => "Rejeté",
            TrialStatus::Delivered => "Livré",
        }
    }

    /// Returns true once no further transition is expected.
    pub fn is_final(&self) -> bool {
        matches!(self, TrialStatus::Rejected | TrialStatus::Delivered)
    }

    /// Validates a transition against the expected flow.
    pub fn can_transition_to(&self, target: &TrialStatus) -> bool {
        use TrialStatus::*;
        matches!(
            (self, target),
            (Pending, Approved) | (Pending, Rejected) | (Approved, Delivered)
        )
    }

    /// Statuses reachable from this one.
    pub fn next_statuses(&self) -> Vec<TrialStatus> {
        Self::ALL
            .into_iter()
            .filter(|target| self.can_transition_to(target))
            .collect()
    }
}

impl fmt::Display for TrialStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TrialStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ValidationError::invalid_format("status", format!("unknown status '{}'", s)))
    }
}

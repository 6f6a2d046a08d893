//! Platform rows: the social networks services are grouped under.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PlatformId, Timestamp};

/// A top-level category (e.g. TikTok, Instagram) under which services are listed.
///
/// Routes address platforms by `slug`; services reference them by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub id: PlatformId,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub created_at: Timestamp,
}

fn default_active() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_row_with_optional_columns_missing() {
        let platform: Platform = serde_json::from_value(serde_json::json!({
            "id": "p-1",
            "name": "TikTok",
            "slug": "tiktok",
            "created_at": "2024-01-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(platform.slug, "tiktok");
        assert!(platform.is_active);
        assert!(platform.icon.is_none());
    }
}

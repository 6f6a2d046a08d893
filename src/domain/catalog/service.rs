//! Boost services sold in the storefront.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PlatformId, ServiceId, Timestamp};

/// A purchasable boost (e.g. "1000 TikTok followers") priced in USD and CDF.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    pub platform_id: PlatformId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Units delivered per purchase (followers, likes, views...).
    pub quantity: i64,
    pub price_usd: Decimal,
    pub price_cdf: Decimal,
    pub is_active: bool,
    pub created_at: Timestamp,
}

/// Insert shape for a new service. Id and `created_at` are assigned upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewService {
    pub platform_id: PlatformId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    pub quantity: i64,
    pub price_usd: Decimal,
    pub price_cdf: Decimal,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

/// Partial update of a service. Absent fields are left untouched upstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_id: Option<PlatformId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_usd: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_cdf: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl ServiceUpdate {
    /// Applies the present fields to a service row.
    pub fn apply_to(&self, service: &mut Service) {
        if let Some(platform_id) = &self.platform_id {
            service.platform_id = platform_id.clone();
        }
        if let Some(name) = &self.name {
            service.name = name.clone();
        }
        if let Some(description) = &self.description {
            service.description = Some(description.clone());
        }
        if let Some(category) = &self.category {
            service.category = Some(category.clone());
        }
        if let Some(quantity) = self.quantity {
            service.quantity = quantity;
        }
        if let Some(price_usd) = self.price_usd {
            service.price_usd = price_usd;
        }
        if let Some(price_cdf) = self.price_cdf {
            service.price_cdf = price_cdf;
        }
        if let Some(is_active) = self.is_active {
            service.is_active = is_active;
        }
    }
}

fn default_active() -> bool {
    true
}

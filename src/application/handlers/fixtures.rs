//! Row builders shared by handler tests.

use rust_decimal::Decimal;

use crate::domain::catalog::{Platform, Service};
use crate::domain::foundation::{PlatformId, ServiceId, Timestamp, TrialRequestId, UserId};
use crate::domain::trial::{TrialRequest, TrialStatus};

pub fn platform(id: &str, slug: &str, name: &str) -> Platform {
    Platform {
        id: PlatformId::new(id).unwrap(),
        name: name.to_string(),
        slug: slug.to_string(),
        icon: None,
        color: None,
        is_active: true,
        created_at: Timestamp::now(),
    }
}

pub fn service(id: &str, platform_id: &str, price_usd: Decimal, price_cdf: Decimal) -> Service {
    Service {
        id: ServiceId::new(id).unwrap(),
        platform_id: PlatformId::new(platform_id).unwrap(),
        name: format!("Service {}", id),
        description: None,
        category: None,
        quantity: 1000,
        price_usd,
        price_cdf,
        is_active: true,
        created_at: Timestamp::now(),
    }
}

pub fn trial_request(id: &str, user_id: &str, status: TrialStatus) -> TrialRequest {
    TrialRequest {
        id: TrialRequestId::new(id).unwrap(),
        user_id: UserId::new(user_id).unwrap(),
        service_id: ServiceId::new("s-1").unwrap(),
        platform_id: PlatformId::new("p-1").unwrap(),
        target_link: "https://tiktok.com/@someone".to_string(),
        status,
        admin_notes: None,
        created_at: Timestamp::now(),
        updated_at: None,
    }
}

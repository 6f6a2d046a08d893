//! Cart line item.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::catalog::Service;
use crate::domain::foundation::ServiceId;

/// One service entry in the cart, keyed by its service id.
///
/// Unit prices are fixed when the item is built. Totals are derived from
/// `quantity` and are recomputed whenever the cart changes the quantity.
///
/// Amounts are stored as decimal strings so a snapshot reloads exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    service_id: ServiceId,
    quantity: i64,
    #[serde(with = "rust_decimal::serde::str")]
    price_usd: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    price_cdf: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    total_usd: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    total_cdf: Decimal,
}

impl LineItem {
    /// Builds an item with totals derived from the unit prices.
    ///
    /// `quantity` is not validated; zero or negative counts are kept as given.
    /// A total too large for `Decimal` is clamped to its bound.
    pub fn new(service_id: ServiceId, quantity: i64, price_usd: Decimal, price_cdf: Decimal) -> Self {
        let units = Decimal::from(quantity);
        Self {
            service_id,
            quantity,
            price_usd,
            price_cdf,
            total_usd: price_usd.saturating_mul(units),
            total_cdf: price_cdf.saturating_mul(units),
        }
    }

    /// Builds an item for `quantity` units of a catalog service at its current prices.
    pub fn from_service(service: &Service, quantity: i64) -> Self {
        Self::new(service.id.clone(), quantity, service.price_usd, service.price_cdf)
    }

    pub fn service_id(&self) -> &ServiceId {
        &self.service_id
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn price_usd(&self) -> Decimal {
        self.price_usd
    }

    pub fn price_cdf(&self) -> Decimal {
        self.price_cdf
    }

    pub fn total_usd(&self) -> Decimal {
        self.total_usd
    }

    pub fn total_cdf(&self) -> Decimal {
        self.total_cdf
    }

    /// Sets the quantity and re-derives both totals from the stored unit prices.
    ///
    /// Returns false and leaves the item untouched if a total would overflow.
    pub(crate) fn set_quantity(&mut self, quantity: i64) -> bool {
        let units = Decimal::from(quantity);
        let (Some(total_usd), Some(total_cdf)) = (
            self.price_usd.checked_mul(units),
            self.price_cdf.checked_mul(units),
        ) else {
            return false;
        };
        self.quantity = quantity;
        self.total_usd = total_usd;
        self.total_cdf = total_cdf;
        true
    }

    /// Takes quantity and totals from `incoming`, keeping this item's prices.
    ///
    /// If `incoming` was priced differently, totals no longer equal
    /// `quantity * price` on this item. Callers are expected to pass
    /// consistent prices.
    pub(crate) fn merge_from(&mut self, incoming: &LineItem) {
        self.quantity = incoming.quantity;
        self.total_usd = incoming.total_usd;
        self.total_cdf = incoming.total_cdf;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{PlatformId, Timestamp};
    use rust_decimal_macros::dec;

    fn id(s: &str) -> ServiceId {
        ServiceId::new(s).unwrap()
    }

    #[test]
    fn new_derives_totals() {
        let item = LineItem::new(id("a"), 2, dec!(5), dec!(12500));
        assert_eq!(item.total_usd(), dec!(10));
        assert_eq!(item.total_cdf(), dec!(25000));
    }

    #[test]
    fn set_quantity_recomputes_totals() {
        let mut item = LineItem::new(id("a"), 1, dec!(2.50), dec!(6250));
        assert!(item.set_quantity(4));
        assert_eq!(item.quantity(), 4);
        assert_eq!(item.total_usd(), dec!(10));
        assert_eq!(item.total_cdf(), dec!(25000));
    }

    #[test]
    fn negative_quantity_propagates_into_totals() {
        let mut item = LineItem::new(id("a"), 1, dec!(5), dec!(12500));
        assert!(item.set_quantity(-2));
        assert_eq!(item.total_usd(), dec!(-10));
        assert_eq!(item.total_cdf(), dec!(-25000));
    }

    #[test]
    fn overflowing_quantity_is_refused() {
        let mut item = LineItem::new(id("a"), 1, dec!(5), dec!(10000000000));

        assert!(!item.set_quantity(i64::MAX));
        assert_eq!(item.quantity(), 1);
        assert_eq!(item.total_cdf(), dec!(10000000000));
    }

    #[test]
    fn overflowing_total_is_clamped_on_build() {
        let item = LineItem::new(id("a"), i64::MAX, dec!(5), Decimal::MAX);

        assert_eq!(item.total_cdf(), Decimal::MAX);
        assert_eq!(item.total_usd(), dec!(5) * Decimal::from(i64::MAX));
    }

    #[test]
    fn merge_keeps_original_prices() {
        let mut existing = LineItem::new(id("a"), 1, dec!(5), dec!(12500));
        let incoming = LineItem::new(id("a"), 3, dec!(6), dec!(15000));

        existing.merge_from(&incoming);

        assert_eq!(existing.quantity(), 3);
        assert_eq!(existing.price_usd(), dec!(5));
        assert_eq!(existing.total_usd(), dec!(18));
        assert_eq!(existing.total_cdf(), dec!(45000));
    }

    #[test]
    fn from_service_uses_catalog_prices() {
        let service = Service {
            id: id("svc"),
            platform_id: PlatformId::new("p").unwrap(),
            name: "Vues YouTube".to_string(),
            description: None,
            category: None,
            quantity: 1000,
            price_usd: dec!(3),
            price_cdf: dec!(7500),
            is_active: true,
            created_at: Timestamp::now(),
        };

        let item = LineItem::from_service(&service, 2);
        assert_eq!(item.service_id(), &id("svc"));
        assert_eq!(item.total_usd(), dec!(6));
        assert_eq!(item.total_cdf(), dec!(15000));
    }

    #[test]
    fn serializes_with_snake_case_fields() {
        let item = LineItem::new(id("a"), 2, dec!(5), dec!(12500));
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["service_id"], "a");
        assert_eq!(json["quantity"], 2);
        assert_eq!(json["total_usd"], serde_json::json!(10.0));
    }
}

//! Cart aggregate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::LineItem;
use crate::domain::foundation::ServiceId;

/// Ordered collection of line items, unique by service id.
///
/// Serializes as `{"items": [...]}`, which is also the persisted snapshot
/// format. Every operation is total: unknown ids are no-ops.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an item, or merges it into the existing entry with the same id.
    ///
    /// A merge overwrites quantity and totals only; the stored unit prices
    /// are kept. New ids are appended, so insertion order is preserved.
    pub fn add_item(&mut self, item: LineItem) {
        match self.position(item.service_id()) {
            Some(index) => self.items[index].merge_from(&item),
            None => self.items.push(item),
        }
    }

    /// Removes the entry for `service_id`, if any.
    pub fn remove_item(&mut self, service_id: &ServiceId) {
        self.items.retain(|item| item.service_id() != service_id);
    }

    /// Sets the quantity of an existing entry and re-derives its totals.
    ///
    /// A quantity whose totals would overflow `Decimal` leaves the entry as it was.
    pub fn update_quantity(&mut self, service_id: &ServiceId, quantity: i64) {
        if let Some(index) = self.position(service_id) {
            if !self.items[index].set_quantity(quantity) {
                tracing::warn!(%service_id, quantity, "Ignoring cart quantity that overflows totals");
            }
        }
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of `total_usd` over all items; zero when empty. Clamped at the
    /// `Decimal` bounds.
    pub fn total_usd(&self) -> Decimal {
        self.items
            .iter()
            .fold(Decimal::ZERO, |sum, item| sum.saturating_add(item.total_usd()))
    }

    /// Sum of `total_cdf` over all items; zero when empty. Clamped at the
    /// `Decimal` bounds.
    pub fn total_cdf(&self) -> Decimal {
        self.items
            .iter()
            .fold(Decimal::ZERO, |sum, item| sum.saturating_add(item.total_cdf()))
    }

    /// Both totals, or `None` if either sum overflows `Decimal`.
    pub fn checked_totals(&self) -> Option<(Decimal, Decimal)> {
        self.items
            .iter()
            .try_fold((Decimal::ZERO, Decimal::ZERO), |(usd, cdf), item| {
                Some((
                    usd.checked_add(item.total_usd())?,
                    cdf.checked_add(item.total_cdf())?,
                ))
            })
    }

    /// Sum of quantities, for the cart badge.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(LineItem::quantity).sum()
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn get(&self, service_id: &ServiceId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.service_id() == service_id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, service_id: &ServiceId) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.service_id() == service_id)
    }
}

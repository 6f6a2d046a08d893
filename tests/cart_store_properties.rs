//! Property tests for the persisted cart store.
//!
//! Drives `CartStore` over `InMemoryCartStorage` with generated line items
//! and checks ordering, merge, totals and snapshot rehydration.

use std::sync::Arc;

use proptest::prelude::*;
use rust_decimal::Decimal;

use okit_boost::adapters::storage::{FileCartStorage, InMemoryCartStorage};
use okit_boost::application::CartStore;
use okit_boost::domain::cart::LineItem;
use okit_boost::domain::foundation::ServiceId;

// =============================================================================
// Strategies
// =============================================================================

fn service_id(n: usize) -> ServiceId {
    ServiceId::new(format!("svc-{}", n)).unwrap()
}

/// Up to fifteen significant digits at any scale from 0 to 18.
fn price() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000_000_000, 0u32..=18)
        .prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

fn line_item(n: usize) -> impl Strategy<Value = LineItem> {
    (1i64..1000, price(), price())
        .prop_map(move |(qty, usd, cdf)| LineItem::new(service_id(n), qty, usd, cdf))
}

/// Between one and eight items with distinct service ids, in insertion order.
fn distinct_items() -> impl Strategy<Value = Vec<LineItem>> {
    (1usize..8).prop_flat_map(|count| (0..count).map(line_item).collect::<Vec<_>>())
}

fn store_with(items: &[LineItem]) -> (CartStore, InMemoryCartStorage) {
    let storage = InMemoryCartStorage::new();
    let mut store = CartStore::load(Arc::new(storage.clone()));
    for item in items {
        store.add_item(item.clone());
    }
    (store, storage)
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn distinct_adds_keep_insertion_order(items in distinct_items()) {
        let (store, _) = store_with(&items);

        prop_assert_eq!(store.items().len(), items.len());
        let ids: Vec<&ServiceId> = store.items().iter().map(LineItem::service_id).collect();
        let expected: Vec<&ServiceId> = items.iter().map(LineItem::service_id).collect();
        prop_assert_eq!(ids, expected);
    }

    #[test]
    fn re_adding_an_id_takes_the_second_quantity(
        first in line_item(0),
        qty in 1i64..1000,
    ) {
        let (mut store, _) = store_with(std::slice::from_ref(&first));
        let second = LineItem::new(service_id(0), qty, first.price_usd(), first.price_cdf());

        store.add_item(second.clone());

        prop_assert_eq!(store.items().len(), 1);
        prop_assert_eq!(store.items()[0].quantity(), qty);
        prop_assert_eq!(store.items()[0].total_usd(), second.total_usd());
        prop_assert_eq!(store.items()[0].total_cdf(), second.total_cdf());
    }

    #[test]
    fn totals_follow_quantity_updates(
        items in distinct_items(),
        pick in any::<prop::sample::Index>(),
        qty in 0i64..1000,
    ) {
        let (mut store, _) = store_with(&items);
        let target = items[pick.index(items.len())].service_id().clone();

        store.update_quantity(&target, qty);

        for item in store.items() {
            prop_assert_eq!(item.total_usd(), item.price_usd() * Decimal::from(item.quantity()));
            prop_assert_eq!(item.total_cdf(), item.price_cdf() * Decimal::from(item.quantity()));
        }
        let sum_usd: Decimal = store.items().iter().map(LineItem::total_usd).sum();
        let sum_cdf: Decimal = store.items().iter().map(LineItem::total_cdf).sum();
        prop_assert_eq!(store.total_usd(), sum_usd);
        prop_assert_eq!(store.total_cdf(), sum_cdf);
        prop_assert_eq!(store.cart().get(&target).map(LineItem::quantity), Some(qty));
    }

    #[test]
    fn unknown_ids_leave_the_cart_unchanged(items in distinct_items(), qty in 0i64..1000) {
        let (mut store, _) = store_with(&items);
        let before = store.cart().clone();
        let missing = ServiceId::new("not-in-cart").unwrap();

        store.update_quantity(&missing, qty);
        store.remove_item(&missing);

        prop_assert_eq!(store.cart(), &before);
    }

    #[test]
    fn removed_id_is_gone(items in distinct_items(), pick in any::<prop::sample::Index>()) {
        let (mut store, _) = store_with(&items);
        let target = items[pick.index(items.len())].service_id().clone();

        store.remove_item(&target);

        prop_assert_eq!(store.items().len(), items.len() - 1);
        prop_assert!(store.items().iter().all(|item| item.service_id() != &target));
    }

    #[test]
    fn clear_empties_everything(items in distinct_items()) {
        let (mut store, _) = store_with(&items);

        store.clear_cart();

        prop_assert!(store.items().is_empty());
        prop_assert_eq!(store.total_usd(), Decimal::ZERO);
        prop_assert_eq!(store.total_cdf(), Decimal::ZERO);
    }

    #[test]
    fn snapshot_rehydrates_equal_cart(items in distinct_items()) {
        let (store, storage) = store_with(&items);

        let reloaded = CartStore::load(Arc::new(storage));

        prop_assert_eq!(reloaded.cart(), store.cart());
        for item in reloaded.items() {
            prop_assert_eq!(item.total_usd(), item.price_usd() * Decimal::from(item.quantity()));
            prop_assert_eq!(item.total_cdf(), item.price_cdf() * Decimal::from(item.quantity()));
        }
        prop_assert_eq!(reloaded.total_usd(), store.total_usd());
        prop_assert_eq!(reloaded.total_cdf(), store.total_cdf());
    }
}

// =============================================================================
// File-backed session
// =============================================================================

#[test]
fn file_backed_cart_survives_restart() {
    let dir = tempfile::TempDir::new().unwrap();
    let item = LineItem::new(service_id(1), 2, Decimal::new(500, 2), Decimal::new(1_250_000, 2));

    {
        let mut store = CartStore::load(Arc::new(FileCartStorage::new(dir.path())));
        store.add_item(item.clone());
        store.update_quantity(item.service_id(), 3);
    }

    let store = CartStore::load(Arc::new(FileCartStorage::new(dir.path())));
    assert_eq!(store.items().len(), 1);
    assert_eq!(store.items()[0].quantity(), 3);
    assert_eq!(store.total_usd(), Decimal::new(1500, 2));
    assert_eq!(store.total_cdf(), Decimal::new(3_750_000, 2));
}

//! CartStore - persisted, observable container for the client's cart.
//!
//! The store owns the `Cart` aggregate, writes a full JSON snapshot to the
//! `CartStorage` slot after every mutation, then notifies subscribers.
//!
//! ```text
//! add_item / remove_item / update_quantity / clear_cart
//!        │
//!        ▼
//!   Cart transition ──► snapshot write ("okit-boost-cart") ──► listeners
//! ```
//!
//! Storage is best-effort: read failures and corrupt snapshots load an empty
//! cart, write failures are logged and the in-memory state stays authoritative.

use std::fmt;
use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::cart::{Cart, LineItem};
use crate::domain::constants::CART_STORAGE_KEY;
use crate::domain::foundation::ServiceId;
use crate::ports::CartStorage;

/// Callback invoked with the cart after each mutation.
pub type CartListener = Box<dyn Fn(&Cart) + Send + Sync>;

/// Handle returned by [`CartStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// The cart state container owned by the application root.
///
/// Single-threaded by contract: mutations take `&mut self` and run to
/// completion, so no locking happens here. Share it behind whatever the host
/// uses for UI state (a `RefCell`, a `Mutex`, an actor).
pub struct CartStore {
    cart: Cart,
    storage: Arc<dyn CartStorage>,
    listeners: Vec<(SubscriptionId, CartListener)>,
    next_subscription: u64,
}

impl CartStore {
    /// Create the store, rehydrating from the storage slot.
    ///
    /// Never fails: a missing, unreadable or malformed snapshot yields an
    /// empty cart.
    pub fn load(storage: Arc<dyn CartStorage>) -> Self {
        let cart = rehydrate(storage.as_ref());
        Self {
            cart,
            storage,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current cart state.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    /// Add an item, merging into an existing entry with the same service id.
    pub fn add_item(&mut self, item: LineItem) {
        self.mutate(|cart| cart.add_item(item));
    }

    /// Remove the entry for `service_id`; no-op if absent.
    pub fn remove_item(&mut self, service_id: &ServiceId) {
        self.mutate(|cart| cart.remove_item(service_id));
    }

    /// Set an entry's quantity and re-derive its totals; no-op if absent.
    pub fn update_quantity(&mut self, service_id: &ServiceId, quantity: i64) {
        self.mutate(|cart| cart.update_quantity(service_id, quantity));
    }

    /// Empty the cart (e.g. after checkout).
    pub fn clear_cart(&mut self) {
        self.mutate(Cart::clear);
    }

    pub fn total_usd(&self) -> Decimal {
        self.cart.total_usd()
    }

    pub fn total_cdf(&self) -> Decimal {
        self.cart.total_cdf()
    }

    /// Register a listener called after every mutation.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&Cart) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    fn mutate(&mut self, transition: impl FnOnce(&mut Cart)) {
        transition(&mut self.cart);
        self.persist();
        for (_, listener) in &self.listeners {
            listener(&self.cart);
        }
    }

    fn persist(&self) {
        let snapshot = match serde_json::to_string(&self.cart) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!("Failed to serialize cart snapshot: {}", e);
                return;
            }
        };

        if let Err(e) = self.storage.write(CART_STORAGE_KEY, &snapshot) {
            tracing::warn!("Failed to persist cart under '{}': {}", CART_STORAGE_KEY, e);
        }
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

fn rehydrate(storage: &dyn CartStorage) -> Cart {
    match storage.read(CART_STORAGE_KEY) {
        Ok(Some(snapshot)) => match serde_json::from_str::<Cart>(&snapshot) {
            Ok(cart) if cart.checked_totals().is_none() => {
                tracing::warn!("Discarding cart snapshot whose totals overflow");
                Cart::new()
            }
            Ok(cart) => {
                tracing::debug!("Rehydrated cart with {} items", cart.len());
                cart
            }
            Err(e) => {
                tracing::warn!("Discarding malformed cart snapshot: {}", e);
                Cart::new()
            }
        },
        Ok(None) => Cart::new(),
        Err(e) => {
            tracing::warn!("Failed to read cart snapshot: {}", e);
            Cart::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryCartStorage;
    use crate::ports::CartStorageError;
    use rust_decimal_macros::dec;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Storage whose reads and writes always fail
    struct BrokenStorage;

    impl CartStorage for BrokenStorage {
        fn read(&self, _key: &str) -> Result<Option<String>, CartStorageError> {
            Err(CartStorageError::Unavailable("disk gone".to_string()))
        }

        fn write(&self, _key: &str, _value: &str) -> Result<(), CartStorageError> {
            Err(CartStorageError::Unavailable("disk gone".to_string()))
        }
    }

    fn id(s: &str) -> ServiceId {
        ServiceId::new(s).unwrap()
    }

    fn item(s: &str, quantity: i64) -> LineItem {
        LineItem::new(id(s), quantity, dec!(5), dec!(12500))
    }

    fn store_with(storage: &InMemoryCartStorage) -> CartStore {
        CartStore::load(Arc::new(storage.clone()))
    }

    #[test]
    fn load_from_empty_storage_is_empty() {
        let store = store_with(&InMemoryCartStorage::new());
        assert!(store.items().is_empty());
        assert_eq!(store.total_usd(), Decimal::ZERO);
    }

    #[test]
    fn add_item_totals_scenario() {
        let mut store = store_with(&InMemoryCartStorage::new());
        store.add_item(item("a", 2));

        assert_eq!(store.total_usd(), dec!(10));
        assert_eq!(store.total_cdf(), dec!(25000));
    }

    #[test]
    fn re_adding_same_service_overwrites_quantity() {
        let mut store = store_with(&InMemoryCartStorage::new());
        store.add_item(item("a", 1));
        store.add_item(item("a", 3));

        assert_eq!(store.items().len(), 1);
        assert_eq!(store.items()[0].quantity(), 3);
        assert_eq!(store.total_usd(), dec!(15));
        assert_eq!(store.total_cdf(), dec!(37500));
    }

    #[test]
    fn every_mutation_writes_snapshot() {
        let storage = InMemoryCartStorage::new();
        let mut store = store_with(&storage);

        store.add_item(item("a", 2));
        let snapshot = storage.read(CART_STORAGE_KEY).unwrap().unwrap();
        let persisted: Cart = serde_json::from_str(&snapshot).unwrap();
        assert_eq!(&persisted, store.cart());

        store.update_quantity(&id("a"), 5);
        let persisted: Cart =
            serde_json::from_str(&storage.read(CART_STORAGE_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(persisted.get(&id("a")).unwrap().quantity(), 5);

        store.clear_cart();
        let persisted: Cart =
            serde_json::from_str(&storage.read(CART_STORAGE_KEY).unwrap().unwrap()).unwrap();
        assert!(persisted.is_empty());
    }

    #[test]
    fn rehydrates_previous_session() {
        let storage = InMemoryCartStorage::new();
        {
            let mut store = store_with(&storage);
            store.add_item(item("a", 2));
            store.add_item(LineItem::new(id("b"), 1, dec!(3), dec!(7500)));
        }

        let store = store_with(&storage);
        assert_eq!(store.items().len(), 2);
        assert_eq!(store.items()[0].service_id(), &id("a"));
        assert_eq!(store.total_usd(), dec!(13));
    }

    #[test]
    fn corrupt_snapshot_loads_empty_cart() {
        let storage = InMemoryCartStorage::with_value(CART_STORAGE_KEY, "{not json");
        let store = store_with(&storage);
        assert!(store.items().is_empty());
    }

    #[test]
    fn wrong_shape_snapshot_loads_empty_cart() {
        let storage = InMemoryCartStorage::with_value(CART_STORAGE_KEY, "{\"items\": 42}");
        let store = store_with(&storage);
        assert!(store.items().is_empty());
    }

    #[test]
    fn snapshot_with_overflowing_totals_loads_empty_cart() {
        let big = "50000000000000000000000000000";
        let line = |sid: &str| {
            format!(
                r#"{{"service_id":"{sid}","quantity":1,"price_usd":"{big}","price_cdf":"1","total_usd":"{big}","total_cdf":"1"}}"#
            )
        };
        let snapshot = format!(r#"{{"items":[{},{}]}}"#, line("a"), line("b"));
        let storage = InMemoryCartStorage::with_value(CART_STORAGE_KEY, snapshot);

        let store = store_with(&storage);

        assert!(store.items().is_empty());
        assert_eq!(store.total_usd(), Decimal::ZERO);
    }

    #[test]
    fn broken_storage_never_surfaces_errors() {
        let mut store = CartStore::load(Arc::new(BrokenStorage));
        assert!(store.items().is_empty());

        store.add_item(item("a", 2));
        store.update_quantity(&id("a"), 4);

        assert_eq!(store.total_usd(), dec!(20));
    }

    #[test]
    fn subscribers_are_notified_once_per_mutation() {
        let mut store = store_with(&InMemoryCartStorage::new());
        let calls = Arc::new(AtomicUsize::new(0));
        let seen_totals = Arc::new(Mutex::new(Vec::new()));

        let counter = calls.clone();
        let totals = seen_totals.clone();
        store.subscribe(move |cart| {
            counter.fetch_add(1, Ordering::SeqCst);
            totals.lock().unwrap().push(cart.total_usd());
        });

        store.add_item(item("a", 1));
        store.update_quantity(&id("a"), 2);
        store.remove_item(&id("a"));

        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(
            *seen_totals.lock().unwrap(),
            vec![dec!(5), dec!(10), Decimal::ZERO]
        );
    }

    #[test]
    fn unsubscribed_listener_is_not_called() {
        let mut store = store_with(&InMemoryCartStorage::new());
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = calls.clone();
        let subscription = store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store.add_item(item("a", 1));
        assert!(store.unsubscribe(subscription));
        assert!(!store.unsubscribe(subscription));
        store.clear_cart();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn listener_sees_persisted_state() {
        let storage = InMemoryCartStorage::new();
        let mut store = store_with(&storage);
        let observed = Arc::new(Mutex::new(None));

        let handle = storage.clone();
        let slot = observed.clone();
        store.subscribe(move |_| {
            *slot.lock().unwrap() = handle.read(CART_STORAGE_KEY).unwrap();
        });

        store.add_item(item("a", 1));

        assert!(observed.lock().unwrap().as_deref().unwrap().contains("\"a\""));
    }
}

//! Session State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store owns
//! the cart and favorites mirrors for the whole session; components read
//! membership from here instead of keeping their own flags.

use leptos::prelude::*;
use log::debug;
use reactive_stores::Store;
use shop_sync::{CartCollection, CartEntry, CatalogItem, FavoriteCollection, FavoriteEntry, ItemId, Order};

/// Session state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ShopState {
    /// Catalog as last loaded, in server order
    pub catalog: Vec<CatalogItem>,
    /// Catalog request in flight
    pub loading: bool,
    /// Banner text after a failed catalog load
    pub load_error: Option<String>,
    pub cart: CartCollection,
    pub favorites: FavoriteCollection,
    pub orders: Vec<Order>,
    /// Live search text
    pub search: String,
    /// Mirrors whether a bearer token is stored
    pub authenticated: bool,
}

impl ShopState {
    pub fn new(authenticated: bool) -> Self {
        Self {
            loading: true,
            authenticated,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type ShopStore = Store<ShopState>;

/// Get the shop store from context
pub fn use_shop_store() -> ShopStore {
    expect_context::<ShopStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the catalog wholesale
pub fn store_set_catalog(store: &ShopStore, items: Vec<CatalogItem>) {
    store.catalog().set(items);
}

/// Cart membership for a catalog id (tracked)
pub fn store_in_cart(store: &ShopStore, id: &ItemId) -> bool {
    store.cart().read().contains(id)
}

/// Favorite membership for a catalog id (tracked)
pub fn store_is_favorite(store: &ShopStore, id: &ItemId) -> bool {
    store.favorites().read().contains(id)
}

/// Adopt the backend's copy of a cart line still present locally
pub fn store_reconcile_cart(store: &ShopStore, confirmed: CartEntry) {
    let parent = confirmed.parent().clone();
    if !store.cart().write().reconcile(confirmed) {
        debug!("[cart] Line for {} confirmed after it was removed; ignoring", parent);
    }
}

/// Show a favorite once the backend has confirmed it
pub fn store_confirm_favorite(store: &ShopStore, entry: FavoriteEntry) {
    let id = entry.id.clone();
    if !store.favorites().write().confirm(entry) {
        debug!("[favorites] {} already present; ignoring duplicate confirmation", id);
    }
}

/// Newest order first
pub fn store_add_order(store: &ShopStore, order: Order) {
    store.orders().write().insert(0, order);
}

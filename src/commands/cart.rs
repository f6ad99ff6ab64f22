//! Cart Commands
//!
//! Local change first, then the remote call. Failed calls alert the user
//! and leave the local cart as it is.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::error;
use shop_sync::{ApiClient, CartChange, CatalogItem, ItemId};

use super::alert;
use crate::store::{store_reconcile_cart, ShopStateStoreFields, ShopStore};

fn push_cart_change(store: ShopStore, api: ApiClient, change: CartChange) {
    spawn_local(async move {
        let entry_id = change.entry().id.clone();
        match change.push(&api).await {
            Ok(Some(confirmed)) => store_reconcile_cart(&store, confirmed),
            Ok(None) => {}
            Err(e) => {
                error!("[cart] Sync of {} failed: {}", entry_id, e);
                alert("Could not update the cart");
            }
        }
    });
}

/// Add the item to the cart, or remove it if already there
pub fn toggle_cart(store: ShopStore, api: ApiClient, item: CatalogItem) {
    let change = store.cart().write().toggle(&item);
    push_cart_change(store, api, change);
}

/// Remove the cart line for a catalog item (cart drawer)
pub fn remove_cart_line(store: ShopStore, api: ApiClient, catalog_id: ItemId) {
    let change = store.cart().write().remove(&catalog_id);
    if let Some(change) = change {
        push_cart_change(store, api, change);
    }
}

//! Favorites Commands

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::error;
use shop_sync::{ApiClient, CatalogItem};

use super::alert;
use crate::store::{store_confirm_favorite, ShopStateStoreFields, ShopStore};

/// Unfavorite immediately, or favorite once the backend confirms
pub fn toggle_favorite(store: ShopStore, api: ApiClient, item: CatalogItem) {
    let change = store.favorites().write().toggle(&item);
    spawn_local(async move {
        match change.push(&api).await {
            Ok(Some(record)) => store_confirm_favorite(&store, record),
            Ok(None) => {}
            Err(e) => {
                error!("[favorites] Sync of {} failed: {}", item.id, e);
                alert("Could not update favorites");
            }
        }
    });
}

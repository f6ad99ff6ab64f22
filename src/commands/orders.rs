//! Order Commands

use leptos::prelude::*;
use log::{error, info};
use shop_sync::{clear_ordered_lines, submit_order, ApiClient, Order, Resource};

use crate::store::{store_add_order, ShopStateStoreFields, ShopStore};

pub async fn load_orders(store: ShopStore, api: &ApiClient) -> Result<(), String> {
    let orders: Vec<Order> = api
        .fetch_collection(Resource::Orders)
        .await
        .map_err(|e| e.to_string())?;
    store.orders().set(orders);
    Ok(())
}

/// Order everything in the cart.
///
/// Ordered lines leave the local cart once the order exists, before the
/// remote cart is cleared; lines added meanwhile stay.
pub async fn checkout(store: ShopStore, api: &ApiClient) -> Result<Order, String> {
    let entries = store.cart().read_untracked().entries().to_vec();
    if entries.is_empty() {
        return Err("The cart is empty".to_string());
    }

    let order = submit_order(api, entries.clone()).await.map_err(|e| {
        error!("[orders] Checkout failed: {}", e);
        e.to_string()
    })?;
    info!("[orders] Placed order {}", order.id);

    let ordered = store.cart().write().remove_ordered(&entries);
    store_add_order(&store, order.clone());
    clear_ordered_lines(api, &order, &ordered).await;
    Ok(order)
}

//! Auth Commands
//!
//! Logging in or out switches the cart and favorites endpoints, so both
//! mirrors are reloaded afterwards.

use leptos::prelude::*;
use log::warn;
use shop_sync::{ApiClient, Credentials, Registration};

use super::load_collections;
use crate::store::{ShopStateStoreFields, ShopStore};

pub async fn login(store: ShopStore, api: &ApiClient, credentials: Credentials) -> Result<(), String> {
    api.login(&credentials).await.map_err(|e| e.to_string())?;
    store.authenticated().set(true);
    load_collections(store, api).await;
    Ok(())
}

/// Always ends logged out locally, even if the backend call fails
pub async fn logout(store: ShopStore, api: &ApiClient) {
    if let Err(e) = api.logout().await {
        warn!("[auth] Logout request failed: {}", e);
    }
    store.authenticated().set(api.is_authenticated());
    store.orders().set(Vec::new());
    load_collections(store, api).await;
}

/// Create the account, then log straight in with it
pub async fn register(store: ShopStore, api: &ApiClient, registration: Registration) -> Result<(), String> {
    let credentials = Credentials {
        username: registration.username.clone(),
        password: registration.password.clone(),
    };
    api.register(&registration).await.map_err(|e| e.to_string())?;
    login(store, api, credentials).await
}

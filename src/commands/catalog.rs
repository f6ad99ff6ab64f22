//! Catalog Commands
//!
//! Initial loads of the catalog and the user's collections.

use leptos::prelude::*;
use log::{error, info, warn};
use shop_sync::{ApiClient, ApiError, CartCollection, CatalogItem, FavoriteCollection, Resource};

use crate::store::{store_set_catalog, ShopStateStoreFields, ShopStore};

fn load_error_message(err: &ApiError) -> String {
    if err.is_format() {
        "Could not load sneakers: unexpected data format".to_string()
    } else {
        format!("Could not load sneakers: {}", err)
    }
}

/// Load the catalog; failures show a banner and leave the catalog empty
pub async fn load_catalog(store: ShopStore, api: &ApiClient) {
    store.loading().set(true);
    store.load_error().set(None);

    match api.fetch_collection::<CatalogItem>(Resource::Catalog).await {
        Ok(items) => {
            info!("[catalog] Loaded {} sneakers", items.len());
            store_set_catalog(&store, items);
        }
        Err(e) => {
            error!("[catalog] Failed to load: {}", e);
            store_set_catalog(&store, Vec::new());
            store.load_error().set(Some(load_error_message(&e)));
        }
    }

    store.loading().set(false);
}

/// Replace the cart and favorites mirrors from the backend
pub async fn load_collections(store: ShopStore, api: &ApiClient) {
    match api.fetch_collection(Resource::Cart).await {
        Ok(entries) => store.cart().set(CartCollection::from_entries(entries)),
        Err(e) => warn!("[cart] Failed to load: {}", e),
    }
    match api.fetch_collection(Resource::Favorites).await {
        Ok(entries) => store.favorites().set(FavoriteCollection::from_entries(entries)),
        Err(e) => warn!("[favorites] Failed to load: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use leptos::prelude::*;
    use leptos::reactive::owner::Owner;
    use reactive_stores::Store;
    use serde_json::{json, Value};
    use shop_sync::{ApiResult, MemoryTokenStore, Transport};

    use super::load_catalog;
    use crate::store::{ShopState, ShopStateStoreFields};
    use shop_sync::{ApiClient, CatalogItem};

    /// Serves the same body for every GET
    struct FixedBody(Value);

    #[async_trait(?Send)]
    impl Transport for FixedBody {
        async fn get(&self, _path: &str, _token: Option<&str>) -> ApiResult<Value> {
            Ok(self.0.clone())
        }

        async fn post(&self, _path: &str, _token: Option<&str>, body: &Value) -> ApiResult<Value> {
            Ok(body.clone())
        }

        async fn delete(&self, _path: &str, _token: Option<&str>) -> ApiResult<()> {
            Ok(())
        }
    }

    fn client(body: Value) -> ApiClient {
        ApiClient::new(Arc::new(FixedBody(body)), Arc::new(MemoryTokenStore::new()))
    }

    #[tokio::test]
    async fn test_unrecognized_catalog_empties_and_shows_banner() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(ShopState::new(false));
        store.catalog().set(vec![CatalogItem::new(1, "Stale", 10.0)]);

        load_catalog(store, &client(json!({"data": [{"id": 1}]}))).await;

        assert!(store.catalog().get_untracked().is_empty());
        let banner = store.load_error().get_untracked().unwrap();
        assert!(banner.contains("unexpected data format"));
        assert!(!store.loading().get_untracked());
    }

    #[tokio::test]
    async fn test_catalog_load_keeps_server_order() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(ShopState::new(false));
        store.load_error().set(Some("old error".to_string()));

        load_catalog(store, &client(json!([{"id": 2, "title": "B"}, {"id": 1, "title": null}]))).await;

        let titles: Vec<String> = store
            .catalog()
            .get_untracked()
            .iter()
            .map(|item| item.display_title().to_string())
            .collect();
        assert_eq!(titles, vec!["B".to_string(), "Sneakers".to_string()]);
        assert!(store.load_error().get_untracked().is_none());
        assert!(!store.loading().get_untracked());
    }
}

//! Remote Resource Client
//!
//! Stateless request/response boundary for catalog, cart, favorites and
//! orders. Nothing is retried; callers decide whether to surface or swallow
//! a failure.

use std::sync::Arc;

use log::{debug, warn};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::auth::TokenStore;
use crate::config::ShopConfig;
use crate::error::ApiResult;
use crate::id::ItemId;
use crate::models::{AuthToken, Credentials, Registration, UserProfile};
use crate::response::{ListResponse, ResponseShape};
use crate::transport::{HttpTransport, Transport};

const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Remote collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Catalog,
    Cart,
    Favorites,
    Orders,
}

impl Resource {
    /// Collection path; cart and favorites live under `anonymous/` without a token
    pub fn path(self, authenticated: bool) -> &'static str {
        match (self, authenticated) {
            (Resource::Catalog, _) => "sneakers/",
            (Resource::Orders, _) => "orders/",
            (Resource::Cart, true) => "cart/",
            (Resource::Cart, false) => "anonymous/cart/",
            (Resource::Favorites, true) => "favorites/",
            (Resource::Favorites, false) => "anonymous/favorites/",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Resource::Catalog => "catalog",
            Resource::Cart => "cart",
            Resource::Favorites => "favorites",
            Resource::Orders => "orders",
        }
    }
}

#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>, tokens: Arc<dyn TokenStore>) -> Self {
        Self { transport, tokens }
    }

    /// Client over HTTP against the configured base URL
    pub fn http(config: ShopConfig, tokens: Arc<dyn TokenStore>) -> Self {
        Self::new(Arc::new(HttpTransport::new(config)), tokens)
    }

    pub fn is_authenticated(&self) -> bool {
        self.tokens.load().is_some()
    }

    fn collection_path(&self, resource: Resource) -> &'static str {
        resource.path(self.is_authenticated())
    }

    fn item_path(&self, resource: Resource, id: &ItemId) -> String {
        format!(
            "{}{}/",
            self.collection_path(resource),
            utf8_percent_encode(id.as_str(), PATH_SEGMENT)
        )
    }

    async fn get(&self, path: &str) -> ApiResult<Value> {
        let token = self.tokens.load();
        self.transport.get(path, token.as_deref()).await
    }

    async fn post(&self, path: &str, body: &Value) -> ApiResult<Value> {
        let token = self.tokens.load();
        self.transport.post(path, token.as_deref(), body).await
    }

    // ========================
    // Collections
    // ========================

    /// Items of a collection in server order, from either listing shape
    pub async fn fetch_collection<T: DeserializeOwned>(&self, resource: Resource) -> ApiResult<Vec<T>> {
        let body = self.get(self.collection_path(resource)).await?;
        let decoded = ListResponse::<T>::decode(body);
        if let ListResponse::Unrecognized(reason) = &decoded {
            warn!("Unexpected {} listing format: {}", resource.name(), reason);
        }
        let items = decoded.into_items()?;
        debug!("Fetched {} {} records", items.len(), resource.name());
        Ok(items)
    }

    /// Shape of a listing without keeping the items
    pub async fn probe(&self, resource: Resource) -> ApiResult<ResponseShape> {
        let body = self.get(self.collection_path(resource)).await?;
        Ok(ListResponse::<Value>::decode(body).shape())
    }

    pub async fn fetch_one<T: DeserializeOwned>(&self, resource: Resource, id: &ItemId) -> ApiResult<T> {
        let body = self.get(&self.item_path(resource, id)).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Create a record and return the server's canonical copy
    pub async fn create<P, T>(&self, resource: Resource, payload: &P) -> ApiResult<T>
    where
        P: Serialize,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(payload)?;
        let created = self.post(self.collection_path(resource), &body).await?;
        Ok(serde_json::from_value(created)?)
    }

    pub async fn delete(&self, resource: Resource, id: &ItemId) -> ApiResult<()> {
        let token = self.tokens.load();
        self.transport
            .delete(&self.item_path(resource, id), token.as_deref())
            .await
    }

    // ========================
    // Authentication
    // ========================

    /// Exchange credentials for a token and persist it
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<()> {
        let body = serde_json::to_value(credentials)?;
        let response = self.transport.post("auth/token/login/", None, &body).await?;
        let AuthToken { auth_token } = serde_json::from_value(response)?;
        self.tokens.save(&auth_token);
        debug!("Logged in as {}", credentials.username);
        Ok(())
    }

    /// Revoke the token remotely; the local token is dropped even if that fails
    pub async fn logout(&self) -> ApiResult<()> {
        let result = self.post("auth/token/logout/", &Value::Null).await;
        self.tokens.clear();
        result.map(|_| ())
    }

    pub async fn register(&self, registration: &Registration) -> ApiResult<UserProfile> {
        let body = serde_json::to_value(registration)?;
        let response = self.transport.post("auth/users/", None, &body).await?;
        Ok(serde_json::from_value(response)?)
    }

    pub async fn profile(&self) -> ApiResult<UserProfile> {
        let body = self.get("auth/users/me/").await?;
        Ok(serde_json::from_value(body)?)
    }
}

//! Shop Sync Core
//!
//! Platform-neutral half of the storefront:
//! - models: catalog, cart, favorites and order records
//! - client: remote resource client over a pluggable transport
//! - collections: local cart/favorites mirrors with optimistic toggles
//! - search: catalog title filter

mod id;
mod models;
mod error;
mod response;
mod config;
mod auth;
mod transport;
mod client;
mod collections;
mod orders;
mod search;

#[cfg(test)]
mod testing;

pub use id::ItemId;
pub use models::*;
pub use error::{ApiError, ApiResult};
pub use response::{ListResponse, ResponseShape};
pub use config::ShopConfig;
pub use auth::{MemoryTokenStore, TokenStore};
pub use transport::{HttpTransport, Transport};
pub use client::{ApiClient, Resource};
pub use collections::{CartChange, CartCollection, FavoriteChange, FavoriteCollection};
pub use orders::{clear_ordered_lines, submit_order};
pub use search::{filter_catalog, SearchQuery};

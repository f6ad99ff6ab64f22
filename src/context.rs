//! Application Context
//!
//! Session services provided via Leptos Context API next to the store.

use leptos::prelude::*;
use shop_sync::{ApiClient, ShopConfig};

/// App-wide services and UI signals provided via context
#[derive(Clone)]
pub struct ShopContext {
    /// Remote resource client
    pub api: ApiClient,
    pub config: ShopConfig,
    /// Cart drawer visibility
    pub cart_open: RwSignal<bool>,
    /// Transient message shown in the notice banner
    pub notice: RwSignal<Option<String>>,
}

impl ShopContext {
    pub fn new(api: ApiClient, config: ShopConfig) -> Self {
        Self {
            api,
            config,
            cart_open: RwSignal::new(false),
            notice: RwSignal::new(None),
        }
    }

    /// Show a non-blocking notice
    pub fn notify(&self, message: impl Into<String>) {
        self.notice.set(Some(message.into()));
    }

    pub fn set_cart_open(&self, open: bool) {
        self.cart_open.set(open);
    }
}

/// Get the shop context
pub fn use_shop_context() -> ShopContext {
    expect_context::<ShopContext>()
}

//! Sneaker Shop Frontend App
//!
//! Root component: builds the session store and client, provides them via
//! context, and switches pages on the hash route.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use shop_sync::{ApiClient, ShopConfig};

use crate::commands;
use crate::components::{Drawer, Header, LoadErrorBanner, NoticeBanner};
use crate::context::ShopContext;
use crate::pages::{Diagnostics, Favorites, Home, Orders};
use crate::routes::{use_route, Route};
use crate::storage::LocalStorageTokens;
use crate::store::ShopState;

#[component]
pub fn App() -> impl IntoView {
    let config = ShopConfig::from_build_env();
    let tokens = Arc::new(LocalStorageTokens::new(config.token_key.clone()));
    let api = ApiClient::http(config.clone(), tokens);
    log::info!("[APP] Using API at {}", config.api_url);

    // State
    let store = Store::new(ShopState::new(api.is_authenticated()));
    let ctx = ShopContext::new(api.clone(), config);
    let cart_open = ctx.cart_open;

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Load catalog and the user's collections on mount
    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            commands::load_catalog(store, &api).await;
            commands::load_collections(store, &api).await;
        });
    });

    let route = use_route();

    view! {
        <div class="wrapper clear">
            <Show when=move || cart_open.get()>
                <Drawer />
            </Show>

            <Header />
            <LoadErrorBanner />
            <NoticeBanner />

            {move || match route.get() {
                Route::Catalog => view! { <Home /> }.into_any(),
                Route::Favorites => view! { <Favorites /> }.into_any(),
                Route::Orders => view! { <Orders /> }.into_any(),
                Route::Debug => view! { <Diagnostics /> }.into_any(),
            }}
        </div>
    }
}

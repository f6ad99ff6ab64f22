//! Hash Routes
//!
//! Client-side navigation keyed by `location.hash`; no server round-trip.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Catalog,
    Favorites,
    Orders,
    Debug,
}

impl Route {
    /// Unknown paths fall back to the catalog
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_matches('/').to_lowercase();
        match path.as_str() {
            "favorites" => Route::Favorites,
            "orders" => Route::Orders,
            "debug" => Route::Debug,
            _ => Route::Catalog,
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            Route::Catalog => "#/",
            Route::Favorites => "#/favorites",
            Route::Orders => "#/orders",
            Route::Debug => "#/debug",
        }
    }

    fn current() -> Self {
        web_sys::window()
            .and_then(|window| window.location().hash().ok())
            .map(|hash| Self::from_hash(&hash))
            .unwrap_or(Route::Catalog)
    }
}

/// Current route, updated on every `hashchange`
pub fn use_route() -> ReadSignal<Route> {
    let (route, set_route) = signal(Route::current());
    let _ = window_event_listener(leptos::ev::hashchange, move |_| {
        set_route.set(Route::current());
    });
    route
}

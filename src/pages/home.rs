//! Home Page
//!
//! Catalog grid with live search.

use leptos::prelude::*;
use shop_sync::{filter_catalog, CatalogItem};

use crate::commands;
use crate::components::{Card, CardSkeleton};
use crate::context::use_shop_context;
use crate::store::{use_shop_store, ShopStateStoreFields};

#[component]
pub fn Home() -> impl IntoView {
    let store = use_shop_store();
    let ctx = use_shop_context();
    let skeleton_count = ctx.config.skeleton_count;

    // Re-derived whenever the query or the catalog changes
    let visible = Memo::new(move |_| {
        let query = store.search().get();
        filter_catalog(&store.catalog().read(), &query)
            .into_iter()
            .cloned()
            .collect::<Vec<CatalogItem>>()
    });

    let cart_api = ctx.api.clone();
    let on_add = Callback::new(move |item: CatalogItem| {
        commands::toggle_cart(store, cart_api.clone(), item)
    });
    let favorite_api = ctx.api.clone();
    let on_favorite = Callback::new(move |item: CatalogItem| {
        commands::toggle_favorite(store, favorite_api.clone(), item)
    });

    let heading = move || {
        let query = store.search().get();
        if query.is_empty() {
            "All sneakers".to_string()
        } else {
            format!("Search: \"{}\"", query)
        }
    };

    view! {
        <div class="content p-40">
            <div class="d-flex align-center justify-between mb-40">
                <h1>{heading}</h1>
                <div class="search-block d-flex align-center">
                    <img
                        src="img/search.svg"
                        alt="Clear search"
                        on:click=move |_| store.search().set(String::new())
                    />
                    <input
                        placeholder="Search..."
                        prop:value=move || store.search().get()
                        on:input=move |ev| store.search().set(event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="sneakers d-flex justify-center">
                <Show
                    when=move || !store.loading().get()
                    fallback=move || (0..skeleton_count).map(|_| view! { <CardSkeleton /> }).collect_view()
                >
                    <For
                        each=move || visible.get()
                        key=|item| item.id.clone()
                        children=move |item| view! {
                            <Card item=item on_add=on_add on_favorite=on_favorite />
                        }
                    />
                </Show>
            </div>
        </div>
    }
}

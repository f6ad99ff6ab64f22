//! Favorites Page

use leptos::prelude::*;
use shop_sync::CatalogItem;

use crate::commands;
use crate::components::Card;
use crate::context::use_shop_context;
use crate::store::{use_shop_store, ShopStateStoreFields};

#[component]
pub fn Favorites() -> impl IntoView {
    let store = use_shop_store();
    let ctx = use_shop_context();

    let items = move || {
        store
            .favorites()
            .read()
            .entries()
            .iter()
            .map(|entry| entry.to_catalog_item())
            .collect::<Vec<CatalogItem>>()
    };

    let cart_api = ctx.api.clone();
    let on_add = Callback::new(move |item: CatalogItem| {
        commands::toggle_cart(store, cart_api.clone(), item)
    });
    let favorite_api = ctx.api.clone();
    let on_favorite = Callback::new(move |item: CatalogItem| {
        commands::toggle_favorite(store, favorite_api.clone(), item)
    });

    view! {
        <div class="content p-40">
            <div class="d-flex align-center justify-between mb-40">
                <h1>"My favorites"</h1>
            </div>
            <Show
                when=move || !store.favorites().read().is_empty()
                fallback=|| view! { <p class="opacity-6">"No favorites yet."</p> }
            >
                <div class="sneakers d-flex justify-center">
                    <For
                        each=items
                        key=|item| item.id.clone()
                        children=move |item| view! {
                            <Card item=item on_add=on_add on_favorite=on_favorite />
                        }
                    />
                </div>
            </Show>
        </div>
    }
}

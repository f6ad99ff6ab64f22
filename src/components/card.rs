//! Card Component
//!
//! Catalog item card plus the skeleton shown while the catalog loads.

use leptos::prelude::*;
use shop_sync::{CatalogItem, PLACEHOLDER_IMAGE};
use wasm_bindgen::JsCast;

use super::format_price;
use crate::store::{store_in_cart, store_is_favorite, use_shop_store};

/// Swap a broken image for the placeholder, once
fn fallback_to_placeholder(ev: web_sys::ErrorEvent) {
    let Some(img) = ev
        .target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlImageElement>().ok())
    else {
        return;
    };
    if !img.src().ends_with(PLACEHOLDER_IMAGE) {
        img.set_src(PLACEHOLDER_IMAGE);
    }
}

/// Catalog item card
///
/// Heart and plus icons are derived from store membership on every render.
///
/// # Arguments
/// * `item` - Catalog item to show
/// * `on_favorite` - Favorite toggle; the heart is hidden without it
/// * `on_add` - Cart toggle; the plus button is hidden without it
#[component]
pub fn Card(
    item: CatalogItem,
    #[prop(optional)] on_favorite: Option<Callback<CatalogItem>>,
    #[prop(optional)] on_add: Option<Callback<CatalogItem>>,
) -> impl IntoView {
    let store = use_shop_store();

    let title = item.display_title().to_string();
    let image = item.image_src().to_string();
    let price = format_price(item.price);

    let favorite_id = item.id.clone();
    let cart_id = item.id.clone();
    let favorited = move || store_is_favorite(&store, &favorite_id);
    let in_cart = move || store_in_cart(&store, &cart_id);

    let favorite_button = on_favorite.map(|on_favorite| {
        let item = item.clone();
        view! {
            <div class="favorite" on:click=move |_| on_favorite.run(item.clone())>
                <img
                    src=move || if favorited() { "img/heart-liked.svg" } else { "img/heart-unliked.svg" }
                    alt="Favorite"
                />
            </div>
        }
    });

    let add_button = on_add.map(|on_add| {
        let item = item.clone();
        view! {
            <img
                class="plus"
                src=move || if in_cart() { "img/btn-checked.svg" } else { "img/btn-plus.svg" }
                alt="Add to cart"
                on:click=move |_| on_add.run(item.clone())
            />
        }
    });

    view! {
        <div class="card">
            {favorite_button}
            <img width="100%" height="160" src=image alt="Sneakers" on:error=fallback_to_placeholder />
            <h5>{title}</h5>
            <div class="d-flex justify-between align-center">
                <div class="d-flex flex-column">
                    <span>"Price:"</span>
                    <b>{price}</b>
                </div>
                {add_button}
            </div>
        </div>
    }
}

/// Loading placeholder with the card's footprint
#[component]
pub fn CardSkeleton() -> impl IntoView {
    view! {
        <div class="card card-skeleton">
            <div class="skeleton-block skeleton-image"></div>
            <div class="skeleton-block skeleton-line"></div>
            <div class="skeleton-block skeleton-line short"></div>
            <div class="d-flex justify-between">
                <div class="skeleton-block skeleton-price"></div>
                <div class="skeleton-block skeleton-button"></div>
            </div>
        </div>
    }
}

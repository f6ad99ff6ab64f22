//! Header Component
//!
//! Logo, navigation, cart total and the auth panel.

use leptos::prelude::*;

use super::{format_price, AuthPanel};
use crate::context::use_shop_context;
use crate::routes::Route;
use crate::store::{use_shop_store, ShopStateStoreFields};

#[component]
pub fn Header() -> impl IntoView {
    let store = use_shop_store();
    let cart_open = use_shop_context().cart_open;

    let cart_total = move || format_price(store.cart().read().total_price());

    view! {
        <header class="d-flex justify-between align-center p-40">
            <a href=Route::Catalog.href()>
                <div class="d-flex align-center">
                    <img width="40" height="40" src="img/logo.png" alt="Logo" />
                    <div>
                        <h3 class="text-uppercase">"Sneaker Shop"</h3>
                        <p class="opacity-5">"The best sneakers in town"</p>
                    </div>
                </div>
            </a>
            <ul class="d-flex align-center">
                <li class="mr-30 cu-p" on:click=move |_| cart_open.set(true)>
                    <img width="18" height="18" src="img/cart.svg" alt="Cart" />
                    <span>{cart_total}</span>
                </li>
                <li class="mr-20 cu-p">
                    <a href=Route::Favorites.href()>
                        <img width="18" height="18" src="img/heart.svg" alt="Favorites" />
                    </a>
                </li>
                <li class="mr-20 cu-p">
                    <a href=Route::Orders.href()>
                        <img width="18" height="18" src="img/user.svg" alt="Orders" />
                    </a>
                </li>
                <li>
                    <AuthPanel />
                </li>
            </ul>
        </header>
    }
}

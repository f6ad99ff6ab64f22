//! Cart Drawer Component
//!
//! Side panel listing cart lines, with remove buttons and checkout.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::format_price;
use crate::commands;
use crate::context::use_shop_context;
use crate::store::{use_shop_store, ShopStateStoreFields};

#[component]
pub fn Drawer() -> impl IntoView {
    let store = use_shop_store();
    let ctx = use_shop_context();
    let cart_open = ctx.cart_open;

    let (placing, set_placing) = signal(false);
    let (status, set_status) = signal::<Option<String>>(None);

    let remove_api = ctx.api.clone();
    let checkout_ctx = ctx.clone();
    let on_checkout = move |_: web_sys::MouseEvent| {
        if placing.get_untracked() {
            return;
        }
        set_placing.set(true);
        let ctx = checkout_ctx.clone();
        spawn_local(async move {
            match commands::checkout(store, &ctx.api).await {
                Ok(order) => {
                    set_status.set(Some(format!("Order #{} is placed", order.id)));
                    ctx.notify(format!("Order #{} is placed", order.id));
                }
                Err(e) => set_status.set(Some(e)),
            }
            set_placing.set(false);
        });
    };

    view! {
        <div class="overlay">
            <div class="drawer">
                <h2 class="d-flex justify-between mb-30">
                    "Cart"
                    <img
                        class="remove-btn cu-p"
                        src="img/btn-remove.svg"
                        alt="Close"
                        on:click=move |_| cart_open.set(false)
                    />
                </h2>

                <Show
                    when=move || !store.cart().read().is_empty()
                    fallback=move || view! {
                        <div class="cart-empty d-flex align-center justify-center flex-column flex">
                            <h2>{move || status.get().unwrap_or_else(|| "Cart is empty".to_string())}</h2>
                            <p class="opacity-6">"Add at least one pair of sneakers to place an order."</p>
                        </div>
                    }
                >
                    <div class="items flex">
                        <For
                            each=move || store.cart().read().entries().to_vec()
                            key=|entry| entry.parent().clone()
                            children={
                                let remove_api = remove_api.clone();
                                move |entry| {
                                    let api = remove_api.clone();
                                    let catalog_id = entry.parent().clone();
                                    let image = entry.to_catalog_item().image_src().to_string();
                                    view! {
                                        <div class="cart-item d-flex align-center mb-20">
                                            <div
                                                class="cart-item-img"
                                                style=format!("background-image: url({});", image)
                                            ></div>
                                            <div class="mr-20 flex">
                                                <p class="mb-5">{entry.title.clone()}</p>
                                                <b>{format_price(entry.price)}</b>
                                            </div>
                                            <img
                                                class="remove-btn cu-p"
                                                src="img/btn-remove.svg"
                                                alt="Remove"
                                                on:click=move |_| commands::remove_cart_line(store, api.clone(), catalog_id.clone())
                                            />
                                        </div>
                                    }
                                }
                            }
                        />
                    </div>
                    <div class="cart-total-block">
                        <ul>
                            <li>
                                <span>"Total:"</span>
                                <div></div>
                                <b>{move || format_price(store.cart().read().total_price())}</b>
                            </li>
                        </ul>
                        <button
                            class="green-button"
                            disabled=move || placing.get()
                            on:click=on_checkout.clone()
                        >
                            "Place order"
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}

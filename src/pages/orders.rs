//! Orders Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use shop_sync::Order;

use crate::commands;
use crate::components::format_price;
use crate::context::use_shop_context;
use crate::store::{use_shop_store, ShopStateStoreFields};

fn order_summary(order: &Order) -> String {
    let date = order
        .created_at
        .map(|at| at.format("%d.%m.%Y").to_string())
        .unwrap_or_else(|| "-".to_string());
    let status = order.status.clone().unwrap_or_else(|| "pending".to_string());
    format!("Order #{} from {} ({})", order.id, date, status)
}

#[component]
pub fn Orders() -> impl IntoView {
    let store = use_shop_store();
    let ctx = use_shop_context();

    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    let api = ctx.api.clone();
    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            if let Err(e) = commands::load_orders(store, &api).await {
                log::error!("[orders] Failed to load: {}", e);
                set_error.set(Some(e));
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="content p-40">
            <h1 class="mb-40">"My orders"</h1>
            <Show when=move || loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>
            {move || error.get().map(|e| view! { <div class="error-banner">{e}</div> })}
            <Show when=move || !loading.get() && store.orders().read().is_empty()>
                <p class="opacity-6">"No orders yet."</p>
            </Show>
            <For
                each=move || store.orders().get()
                key=|order| order.id.clone()
                children=move |order| {
                    let summary = order_summary(&order);
                    let total = format_price(order.total());
                    view! {
                        <div class="order mb-30">
                            <h3>{summary}</h3>
                            <ul>
                                {order
                                    .items
                                    .into_iter()
                                    .map(|line| view! {
                                        <li>{line.title} " - " {format_price(line.price)}</li>
                                    })
                                    .collect_view()}
                            </ul>
                            <b>"Total: " {total}</b>
                        </div>
                    }
                }
            />
        </div>
    }
}

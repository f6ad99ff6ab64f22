//! Diagnostics Page
//!
//! Backend reachability, listing shape and resolved image sources.

use leptos::prelude::*;
use leptos::task::spawn_local;
use shop_sync::{Resource, ResponseShape};

use crate::context::use_shop_context;
use crate::store::{use_shop_store, ShopStateStoreFields};

fn describe_shape(shape: ResponseShape) -> String {
    match shape {
        ResponseShape::Array { len } => format!("bare array, {} items", len),
        ResponseShape::Envelope { len, count } => match count {
            Some(count) => format!("paginated envelope, {} of {} items", len, count),
            None => format!("paginated envelope, {} items", len),
        },
        ResponseShape::Unrecognized => "unrecognized format".to_string(),
    }
}

#[component]
pub fn Diagnostics() -> impl IntoView {
    let store = use_shop_store();
    let ctx = use_shop_context();

    let (probe, set_probe) = signal::<Option<String>>(None);

    let api = ctx.api.clone();
    let run_probe = move || {
        let api = api.clone();
        set_probe.set(Some("Checking...".to_string()));
        spawn_local(async move {
            let started = js_sys::Date::now();
            let result = api.probe(Resource::Catalog).await;
            let elapsed = js_sys::Date::now() - started;
            let text = match result {
                Ok(shape) => format!("Reachable in {:.0} ms: {}", elapsed, describe_shape(shape)),
                Err(e) => format!("Unavailable: {}", e),
            };
            log::info!("[debug] Catalog probe: {}", text);
            set_probe.set(Some(text));
        });
    };

    // Probe once on mount
    let initial_probe = run_probe.clone();
    Effect::new(move |_| initial_probe());

    let api_url = ctx.config.api_url.clone();
    let endpoint = ctx.config.endpoint(Resource::Catalog.path(false));

    view! {
        <div class="content p-40">
            <h1 class="mb-40">"Diagnostics"</h1>
            <ul class="debug-facts">
                <li>"API base URL: " {api_url}</li>
                <li>"Catalog endpoint: " {endpoint}</li>
                <li>"Backend: " {move || probe.get().unwrap_or_default()}</li>
                <li>"Authenticated: " {move || if store.authenticated().get() { "yes" } else { "no" }}</li>
                <li>"Catalog items: " {move || store.catalog().read().len()}</li>
                <li>"Cart lines: " {move || store.cart().read().len()}</li>
                <li>"Favorites: " {move || store.favorites().read().len()}</li>
                <li>"Load error: " {move || store.load_error().get().unwrap_or_else(|| "none".to_string())}</li>
            </ul>
            <button on:click=move |_| run_probe()>"Check again"</button>

            <h2 class="mt-40 mb-20">"Image sources"</h2>
            <table class="debug-images">
                <tr>
                    <th>"ID"</th>
                    <th>"Title"</th>
                    <th>"Resolved image"</th>
                </tr>
                <For
                    each=move || store.catalog().get()
                    key=|item| item.id.clone()
                    children=|item| {
                        let src = item.image_src().to_string();
                        view! {
                            <tr>
                                <td>{item.id.to_string()}</td>
                                <td>{item.display_title().to_string()}</td>
                                <td>
                                    <img width="40" height="40" src=src.clone() alt="" />
                                    " "
                                    {src}
                                </td>
                            </tr>
                        }
                    }
                />
            </table>
        </div>
    }
}

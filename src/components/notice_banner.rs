//! Banners
//!
//! Persistent catalog load error, and a transient notice that clears itself.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_shop_context;
use crate::store::{use_shop_store, ShopStateStoreFields};

const NOTICE_MS: u32 = 5_000;

#[component]
pub fn LoadErrorBanner() -> impl IntoView {
    let store = use_shop_store();

    view! {
        <Show when=move || store.load_error().read().is_some()>
            <div class="error-banner">{move || store.load_error().get().unwrap_or_default()}</div>
        </Show>
    }
}

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let notice = use_shop_context().notice;

    Effect::new(move |_| {
        if let Some(message) = notice.get() {
            spawn_local(async move {
                TimeoutFuture::new(NOTICE_MS).await;
                // A newer notice keeps its own timer
                if notice.get_untracked().as_deref() == Some(message.as_str()) {
                    notice.set(None);
                }
            });
        }
    });

    view! {
        <Show when=move || notice.read().is_some()>
            <div class="notice-banner" on:click=move |_| notice.set(None)>
                {move || notice.get().unwrap_or_default()}
            </div>
        </Show>
    }
}

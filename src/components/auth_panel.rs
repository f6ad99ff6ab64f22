//! Auth Panel Component
//!
//! Inline login/register form in the header, or a logout button.

use leptos::prelude::*;
use leptos::task::spawn_local;
use shop_sync::{Credentials, Registration};

use crate::commands;
use crate::context::use_shop_context;
use crate::store::{use_shop_store, ShopStateStoreFields};

#[component]
pub fn AuthPanel() -> impl IntoView {
    let store = use_shop_store();
    let ctx = use_shop_context();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let submit_ctx = ctx.clone();
    let on_login = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let credentials = Credentials {
            username: username.get(),
            password: password.get(),
        };
        if credentials.username.is_empty() || credentials.password.is_empty() {
            set_error.set(Some("Enter username and password".to_string()));
            return;
        }
        let ctx = submit_ctx.clone();
        spawn_local(async move {
            match commands::login(store, &ctx.api, credentials).await {
                Ok(()) => {
                    set_error.set(None);
                    password.set(String::new());
                    ctx.notify("Logged in");
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let register_ctx = ctx.clone();
    let on_register = move |_: web_sys::MouseEvent| {
        let registration = Registration {
            username: username.get(),
            password: password.get(),
            email: None,
        };
        if registration.username.is_empty() || registration.password.is_empty() {
            set_error.set(Some("Enter username and password".to_string()));
            return;
        }
        let ctx = register_ctx.clone();
        spawn_local(async move {
            match commands::register(store, &ctx.api, registration).await {
                Ok(()) => {
                    set_error.set(None);
                    password.set(String::new());
                    ctx.notify("Account created");
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let logout_ctx = ctx.clone();
    let on_logout = move |_: web_sys::MouseEvent| {
        let ctx = logout_ctx.clone();
        spawn_local(async move {
            commands::logout(store, &ctx.api).await;
            ctx.notify("Logged out");
        });
    };

    view! {
        <Show
            when=move || store.authenticated().get()
            fallback=move || view! {
                <form class="auth-form d-flex align-center" on:submit=on_login.clone()>
                    <input
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button type="submit">"Log in"</button>
                    <button type="button" on:click=on_register.clone()>"Register"</button>
                    {move || error.get().map(|e| view! { <span class="auth-error">{e}</span> })}
                </form>
            }
        >
            <button class="logout-btn" on:click=on_logout.clone()>"Log out"</button>
        </Show>
    }
}

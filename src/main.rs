#![allow(warnings)]
//! Sneaker Shop Frontend Entry Point

mod storage;
mod store;
mod context;
mod commands;
mod routes;
mod components;
mod pages;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    mount_to_body(App);
}

//! Food Dashboard Frontend Entry Point

mod app;
mod components;
mod controller;
mod form;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("[APP] Starting food dashboard");
    mount_to_body(App);
}

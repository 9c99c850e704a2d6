//! EventDesk Frontend Entry Point

mod api;
mod app;
mod components;
mod models;
mod notify;
mod pages;
mod preview;
mod remote;
mod session;
mod validate;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

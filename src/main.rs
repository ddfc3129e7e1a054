#![allow(warnings)]
//! Task Board Frontend Entry Point

mod api;
mod app;
mod board;
mod cache;
mod components;
mod dnd;
mod models;
mod notify;
mod session;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

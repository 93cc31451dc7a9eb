//! IceBrew Greeting Page Entry Point

mod api;
mod app;
mod components;
mod config;
mod models;
mod mount;
mod status;
mod timestamp;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(err) = console_log::init_with_level(level) {
        // A logger is already installed; it receives this line instead
        log::warn!("[PAGE] Console logger not installed: {}", err);
    }
    mount_to_body(App);
}

//! Review Queue Frontend Entry Point

mod models;
mod error;
mod config;
mod logger;
mod api;
mod actions;
mod card;
mod notice;
mod context;
mod store;
mod markdown;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(AppConfig::log_level());
    mount_to_body(App);
}

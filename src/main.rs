//! Todo Bridge Frontend Entry Point

mod models;
mod error;
mod commands;
mod backend;
mod view_model;
mod context;
mod components;
mod logger;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);
    mount_to_body(App);
}

#![allow(warnings)]
//! Doc-Tags Frontend Entry Point

mod config;
mod error;
mod api;
mod state;
mod tag_box;
mod components;
mod app;
mod logging;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Debug);
    mount_to_body(App);
}

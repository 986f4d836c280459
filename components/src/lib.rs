//! Rivet UI components for Leptos, plus the demo app that documents them.

pub mod api;
pub mod app;
pub mod components;
pub mod i18n;
pub mod pages;
pub mod style;
pub mod utils;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(app::App);
}

//! # client
//!
//! Leptos frontend for the Bar One site, rendered on the server and hydrated
//! in the browser.
//!
//! This crate contains the page shell, route-level pages, reusable
//! components and per-page view state. Record types and browse logic come
//! from `catalog`; the seating map engine comes from `floorplan`. Browser
//! APIs are only touched under the `hydrate` feature so everything else can
//! be tested natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}

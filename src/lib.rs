//! # shopfront
//!
//! Client-side behaviour for the barbershop site, compiled to WASM and
//! attached to server-rendered markup: theme switching, the mobile menu,
//! scroll-driven header state, smooth in-page scrolling, deferred images
//! and the live open/closed badge.
//!
//! Decision logic lives in [`state`] and builds natively for tests. The
//! `hydrate` feature adds the web-sys `bindings` and the WASM entry point.

pub mod config;
pub mod error;
pub mod state;

#[cfg(feature = "hydrate")]
pub mod bindings;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        log::debug!("shopfront: keeping existing logger: {err}");
    }

    let document = match bindings::dom::document() {
        Ok(document) => document,
        Err(err) => {
            log::warn!("shopfront: {err}");
            return;
        }
    };

    if document.ready_state() == "loading" {
        bindings::dom::listen(&document, "DOMContentLoaded", |_| mount_logged());
    } else {
        mount_logged();
    }
}

#[cfg(feature = "hydrate")]
fn mount_logged() {
    if let Err(err) = bindings::mount() {
        log::warn!("shopfront: not mounted: {err}");
    }
}

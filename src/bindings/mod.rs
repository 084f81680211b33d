//! Browser event wiring (hydrate builds only).
//!
//! ARCHITECTURE
//! ============
//! Each submodule samples the DOM or clock, calls into `crate::state`, and
//! writes classes/text back. Shared mutable state lives in `Rc<RefCell<_>>`
//! captured by listener closures, which are leaked for the page lifetime.
//! Any missing element or browser feature disables only that feature.

pub mod analytics;
pub mod dom;
pub mod lazy_images;
pub mod nav;
pub mod schedule;
pub mod scroll;
pub mod theme;

use std::rc::Rc;

use web_sys::Document;

use crate::config::{CONFIG_ELEMENT_ID, SiteConfig};
use crate::error::SiteError;

/// Read the optional inline JSON config block, falling back to defaults.
pub fn load_config(document: &Document) -> SiteConfig {
    let Some(el) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return SiteConfig::default();
    };
    let raw = el.text_content().unwrap_or_default();
    match SiteConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("config: {err}; using defaults");
            SiteConfig::default()
        }
    }
}

/// Attach every feature to the current document.
pub fn mount() -> Result<(), SiteError> {
    let window = dom::window()?;
    let document = dom::document()?;
    let config = Rc::new(load_config(&document));

    theme::bind(&window, &document, &config);
    let nav = nav::bind(&document, &config);
    scroll::bind(&window, &document, &config, nav);
    schedule::bind(&document, &config);
    lazy_images::bind(&window, &document, &config);
    analytics::bind(&document, &config);

    log::info!("shopfront mounted");
    Ok(())
}

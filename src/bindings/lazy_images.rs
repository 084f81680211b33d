//! Deferred image loading via `IntersectionObserver`, eager when unsupported.

use std::rc::Rc;

use js_sys::{Array, Reflect};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

use super::dom;
use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::state::lazy_images::{LoadStrategy, deferred_source};

const DEFERRED_ATTR: &str = "data-src";

fn load(img: &Element, loaded_class: &str) {
    let Some(src) = deferred_source(img.get_attribute(DEFERRED_ATTR)) else {
        return;
    };
    if let Err(err) = img.set_attribute("src", &src) {
        log::debug!("images: failed to set src {src:?}: {}", SiteError::from(err));
        return;
    }
    if let Err(err) = img.remove_attribute(DEFERRED_ATTR) {
        log::debug!("images: failed to clear {DEFERRED_ATTR}: {}", SiteError::from(err));
    }
    dom::set_class(img, loaded_class, true);
}

fn observer_supported(window: &Window) -> bool {
    Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

fn observe(images: &[Element], config: &SiteConfig) -> Result<(), SiteError> {
    let loaded_class = config.classes.image_loaded.clone();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                load(&target, &loaded_class);
                observer.unobserve(&target);
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_root_margin(&config.lazy_root_margin);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();

    for img in images {
        observer.observe(img);
    }
    Ok(())
}

pub fn bind(window: &Window, document: &Document, config: &Rc<SiteConfig>) {
    let images = dom::query_all(document, &config.selectors.deferred_images);
    if images.is_empty() {
        return;
    }

    let loaded_class = &config.classes.image_loaded;
    match LoadStrategy::for_support(observer_supported(window)) {
        LoadStrategy::Observe => {
            if let Err(err) = observe(&images, config) {
                log::warn!("images: observer setup failed, loading eagerly: {err}");
                images.iter().for_each(|img| load(img, loaded_class));
            }
        }
        LoadStrategy::Eager => images.iter().for_each(|img| load(img, loaded_class)),
    }
}

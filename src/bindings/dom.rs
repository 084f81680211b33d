//! Thin web-sys helpers shared by the bindings.
//!
//! Lookups return `Option`/empty collections and log at debug so a page
//! missing some markup simply loses that feature.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, Window};

use crate::error::SiteError;

pub fn window() -> Result<Window, SiteError> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

pub fn document() -> Result<Document, SiteError> {
    window()?.document().ok_or(SiteError::NoDocument)
}

pub fn by_id(document: &Document, id: &str) -> Option<Element> {
    let found = document.get_element_by_id(id);
    if found.is_none() {
        log::debug!("dom: #{id} not found");
    }
    found
}

pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            log::warn!("dom: selector {selector:?} rejected: {}", SiteError::from(err));
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    let classes = el.class_list();
    let result = if on { classes.add_1(class) } else { classes.remove_1(class) };
    if let Err(err) = result {
        log::debug!("dom: class {class:?} update failed: {}", SiteError::from(err));
    }
}

pub fn set_attr(el: &Element, name: &str, value: &str) {
    if let Err(err) = el.set_attribute(name, value) {
        log::debug!("dom: attribute {name:?} update failed: {}", SiteError::from(err));
    }
}

/// Register `handler` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    match target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
        Ok(()) => callback.forget(),
        Err(err) => log::warn!("dom: failed to listen for {event:?}: {}", SiteError::from(err)),
    }
}

pub fn scroll_y(window: &Window) -> f64 {
    match window.scroll_y() {
        Ok(y) => y,
        Err(err) => {
            log::debug!("dom: scroll position unavailable: {}", SiteError::from(err));
            0.0
        }
    }
}

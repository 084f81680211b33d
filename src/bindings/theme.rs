//! Theme toggle wiring.
//!
//! Backs [`PreferenceStore`] with `localStorage`, the
//! `(prefers-color-scheme: light)` media query and a class on `<html>`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MediaQueryList, MediaQueryListEvent, Storage, Window};

use super::dom;
use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::state::analytics::{self, AnalyticsEvent};
use crate::state::theme::{PreferenceStore, ThemeHost};

const LIGHT_SCHEME_QUERY: &str = "(prefers-color-scheme: light)";

pub struct DomThemeHost {
    root: Option<Element>,
    storage: Option<Storage>,
    media: Option<MediaQueryList>,
    light_class: String,
}

impl DomThemeHost {
    pub fn new(window: &Window, document: &Document, light_class: &str) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::debug!("theme: localStorage unavailable: {}", SiteError::from(err));
                None
            }
        };
        Self {
            root: document.document_element(),
            storage,
            media: system_scheme_query(window),
            light_class: light_class.to_owned(),
        }
    }
}

impl ThemeHost for DomThemeHost {
    fn get_item(&self, key: &str) -> Option<String> {
        match self.storage.as_ref()?.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::debug!("theme: read of {key:?} failed: {}", SiteError::from(err));
                None
            }
        }
    }

    fn set_item(&mut self, key: &str, value: &str) {
        let Some(storage) = &self.storage else {
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            log::debug!("theme: write of {key:?} failed: {}", SiteError::from(err));
        }
    }

    fn system_prefers_light(&self) -> Option<bool> {
        self.media.as_ref().map(MediaQueryList::matches)
    }

    fn light_flag(&self) -> bool {
        self.root
            .as_ref()
            .is_some_and(|root| root.class_list().contains(&self.light_class))
    }

    fn set_light_flag(&mut self, on: bool) {
        if let Some(root) = &self.root {
            dom::set_class(root, &self.light_class, on);
        }
    }
}

fn system_scheme_query(window: &Window) -> Option<MediaQueryList> {
    match window.match_media(LIGHT_SCHEME_QUERY) {
        Ok(query) => query,
        Err(err) => {
            log::debug!("theme: matchMedia unsupported: {}", SiteError::from(err));
            None
        }
    }
}

pub fn bind(window: &Window, document: &Document, config: &SiteConfig) {
    let host = DomThemeHost::new(window, document, &config.classes.light_mode);
    let media = host.media.clone();
    let store = Rc::new(RefCell::new(PreferenceStore::new(host, config.storage_key.clone())));

    let applied = store.borrow_mut().init();
    log::debug!("theme: applied {applied}");

    if let Some(button) = dom::by_id(document, &config.ids.theme_toggle) {
        let store = Rc::clone(&store);
        dom::listen(&button, "click", move |_| {
            let next = store.borrow_mut().toggle();
            analytics::track(&AnalyticsEvent::theme_toggled(next));
        });
    }

    if let Some(media) = media {
        let store = Rc::clone(&store);
        dom::listen(&media, "change", move |event| {
            let Some(change) = event.dyn_ref::<MediaQueryListEvent>() else {
                return;
            };
            if let Some(pref) = store.borrow_mut().on_system_change(change.matches()) {
                log::debug!("theme: following system scheme, now {pref}");
            }
        });
    }
}

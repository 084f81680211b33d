//! Mobile menu wiring.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent};

use super::dom;
use crate::config::SiteConfig;
use crate::state::analytics::{self, AnalyticsEvent};
use crate::state::nav::{NavEvent, NavMenu};

/// Shared handle so other bindings (anchor scrolling) can close the menu.
#[derive(Clone)]
pub struct NavHandle {
    state: Rc<RefCell<NavMenu>>,
    menu: Element,
    toggle: Option<Element>,
    body: Option<HtmlElement>,
    config: Rc<SiteConfig>,
}

impl NavHandle {
    pub fn dispatch(&self, event: NavEvent) {
        let (changed, open) = {
            let mut state = self.state.borrow_mut();
            let changed = state.apply(event);
            (changed, state.open)
        };
        if !changed {
            return;
        }

        let classes = &self.config.classes;
        dom::set_class(&self.menu, &classes.menu_open, open);
        if let Some(body) = &self.body {
            dom::set_class(body, &classes.scroll_lock, open);
        }
        if let Some(toggle) = &self.toggle {
            dom::set_attr(toggle, "aria-expanded", if open { "true" } else { "false" });
        }
        if open {
            analytics::track(&AnalyticsEvent::MenuOpened);
        }
    }
}

pub fn bind(document: &Document, config: &Rc<SiteConfig>) -> Option<NavHandle> {
    let menu = dom::by_id(document, &config.ids.nav_menu)?;
    let handle = NavHandle {
        state: Rc::new(RefCell::new(NavMenu::default())),
        menu,
        toggle: dom::by_id(document, &config.ids.nav_toggle),
        body: document.body(),
        config: Rc::clone(config),
    };

    if let Some(toggle) = &handle.toggle {
        let handle = handle.clone();
        dom::listen(toggle, "click", move |_| handle.dispatch(NavEvent::Toggle));
    }

    if let Some(close) = dom::by_id(document, &config.ids.nav_close) {
        let handle = handle.clone();
        dom::listen(&close, "click", move |_| handle.dispatch(NavEvent::Close));
    }

    for link in dom::query_all(document, &config.selectors.nav_links) {
        let handle = handle.clone();
        dom::listen(&link, "click", move |_| handle.dispatch(NavEvent::LinkFollowed));
    }

    {
        let handle = handle.clone();
        dom::listen(document, "keydown", move |event| {
            if event.dyn_ref::<KeyboardEvent>().is_some_and(|key| key.key() == "Escape") {
                handle.dispatch(NavEvent::Escape);
            }
        });
    }

    Some(handle)
}

//! Header state, active nav link and smooth in-page scrolling.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Document, Element, ScrollBehavior, ScrollToOptions, Window};

use super::dom;
use super::nav::NavHandle;
use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::state::analytics::{self, AnalyticsEvent};
use crate::state::nav::NavEvent;
use crate::state::scroll::{ScrollContext, ScrollUpdate, SectionBounds, anchor_id, anchor_target};

struct ScrollBinding {
    window: Window,
    header: Option<Element>,
    nav_links: Vec<Element>,
    sections: Vec<Element>,
    config: Rc<SiteConfig>,
    ctx: RefCell<ScrollContext>,
}

impl ScrollBinding {
    fn request_frame(self: &Rc<Self>) {
        if !self.ctx.borrow_mut().request_frame() {
            return;
        }

        let this = Rc::clone(self);
        let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let holder_for_cb = Rc::clone(&holder);
        let cb = Closure::wrap(Box::new(move |_ts: f64| {
            this.paint();
            holder_for_cb.borrow_mut().take();
        }) as Box<dyn FnMut(f64)>);

        match self.window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(_) => *holder.borrow_mut() = Some(cb),
            Err(err) => {
                log::debug!("scroll: requestAnimationFrame failed: {}", SiteError::from(err));
                // Let the next scroll event try again.
                self.ctx.borrow_mut().cancel_frame();
            }
        }
    }

    fn paint(&self) {
        let y = dom::scroll_y(&self.window);
        let bounds = self.section_bounds(y);
        let (previous, update) = {
            let mut ctx = self.ctx.borrow_mut();
            let previous = ctx.last_update().active_section.clone();
            (previous, ctx.on_frame(y, &bounds, &self.config.scroll))
        };

        if let Some(header) = &self.header {
            dom::set_class(header, &self.config.classes.header_scrolled, update.header_scrolled);
            dom::set_class(header, &self.config.classes.header_hidden, update.header_hidden);
        }

        if previous != update.active_section {
            self.mark_active_link(&update);
            if let Some(section) = &update.active_section {
                analytics::track(&AnalyticsEvent::SectionViewed { section: section.clone() });
            }
        }
    }

    fn section_bounds(&self, scroll_y: f64) -> Vec<SectionBounds> {
        self.sections
            .iter()
            .map(|el| SectionBounds { id: el.id(), top: el.get_bounding_client_rect().top() + scroll_y })
            .collect()
    }

    fn mark_active_link(&self, update: &ScrollUpdate) {
        for link in &self.nav_links {
            let href = link.get_attribute("href");
            let active = update
                .active_section
                .as_deref()
                .is_some_and(|id| href.as_deref().and_then(anchor_id) == Some(id));
            dom::set_class(link, &self.config.classes.active_link, active);
        }
    }
}

pub fn bind(window: &Window, document: &Document, config: &Rc<SiteConfig>, nav: Option<NavHandle>) {
    let binding = Rc::new(ScrollBinding {
        window: window.clone(),
        header: dom::by_id(document, &config.ids.header),
        nav_links: dom::query_all(document, &config.selectors.nav_links),
        sections: dom::query_all(document, &config.selectors.sections),
        config: Rc::clone(config),
        ctx: RefCell::new(ScrollContext::default()),
    });

    // Pages can load already scrolled (reload, back navigation).
    binding.paint();

    let on_scroll = Rc::clone(&binding);
    dom::listen(window, "scroll", move |_| on_scroll.request_frame());

    bind_anchors(window, document, config, nav);
}

fn bind_anchors(window: &Window, document: &Document, config: &Rc<SiteConfig>, nav: Option<NavHandle>) {
    let header_offset = config.scroll.header_offset;
    for link in dom::query_all(document, &config.selectors.anchors) {
        let window = window.clone();
        let document = document.clone();
        let nav = nav.clone();
        let anchor = link.clone();
        dom::listen(&link, "click", move |event| {
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            let Some(id) = anchor_id(&href) else {
                return;
            };
            let Some(target) = document.get_element_by_id(id) else {
                log::debug!("scroll: anchor #{id} has no target");
                return;
            };
            event.prevent_default();

            let top = anchor_target(target.get_bounding_client_rect().top(), dom::scroll_y(&window), header_offset);
            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);

            if let Some(nav) = &nav {
                nav.dispatch(NavEvent::LinkFollowed);
            }
        });
    }
}

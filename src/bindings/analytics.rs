use web_sys::Document;

use super::dom;
use crate::config::SiteConfig;
use crate::state::analytics::{self, AnalyticsEvent};

/// Track taps on phone links.
pub fn bind(document: &Document, config: &SiteConfig) {
    for link in dom::query_all(document, &config.selectors.call_links) {
        let anchor = link.clone();
        dom::listen(&link, "click", move |_| {
            let href = anchor.get_attribute("href").unwrap_or_default();
            analytics::track(&AnalyticsEvent::CallClicked { href });
        });
    }
}

//! Page wiring configuration.
//!
//! Defaults match the site's markup. A page can override any subset by
//! embedding `<script type="application/json" id="site-config">` with the
//! same field names; missing fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::SiteError;

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_SCHEDULE_REFRESH_SECS: u32 = 60;
pub const DEFAULT_LAZY_ROOT_MARGIN: &str = "50px";
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub storage_key: String,
    pub schedule_refresh_secs: u32,
    pub lazy_root_margin: String,
    pub ids: ElementIds,
    pub selectors: Selectors,
    pub classes: Classes,
    pub scroll: ScrollConfig,
    pub labels: StatusLabels,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            schedule_refresh_secs: DEFAULT_SCHEDULE_REFRESH_SECS,
            lazy_root_margin: DEFAULT_LAZY_ROOT_MARGIN.to_owned(),
            ids: ElementIds::default(),
            selectors: Selectors::default(),
            classes: Classes::default(),
            scroll: ScrollConfig::default(),
            labels: StatusLabels::default(),
        }
    }
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON override and validate it.
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SiteError> {
        if self.storage_key.trim().is_empty() {
            return Err(SiteError::InvalidConfig("storage_key must not be empty"));
        }
        if self.schedule_refresh_secs == 0 {
            return Err(SiteError::InvalidConfig("schedule_refresh_secs must be positive"));
        }
        if self.scroll.header_offset < 0.0 {
            return Err(SiteError::InvalidConfig("scroll.header_offset must not be negative"));
        }
        Ok(())
    }

    pub fn schedule_refresh_ms(&self) -> u32 {
        self.schedule_refresh_secs.saturating_mul(1000)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub header: String,
    pub nav_menu: String,
    pub nav_toggle: String,
    pub nav_close: String,
    pub theme_toggle: String,
    pub status: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            header: "header".to_owned(),
            nav_menu: "nav-menu".to_owned(),
            nav_toggle: "nav-toggle".to_owned(),
            nav_close: "nav-close".to_owned(),
            theme_toggle: "theme-toggle".to_owned(),
            status: "shop-status".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub nav_links: String,
    pub sections: String,
    pub hours_rows: String,
    pub anchors: String,
    pub deferred_images: String,
    pub call_links: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            nav_links: ".nav__link".to_owned(),
            sections: "section[id]".to_owned(),
            hours_rows: ".hours__row".to_owned(),
            anchors: "a[href^='#']".to_owned(),
            deferred_images: "img[data-src]".to_owned(),
            call_links: "a[href^='tel:']".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Classes {
    pub light_mode: String,
    pub menu_open: String,
    pub scroll_lock: String,
    pub header_scrolled: String,
    pub header_hidden: String,
    pub active_link: String,
    pub status_open: String,
    pub status_closed: String,
    pub today: String,
    pub image_loaded: String,
}

impl Default for Classes {
    fn default() -> Self {
        Self {
            light_mode: "light-mode".to_owned(),
            menu_open: "show-menu".to_owned(),
            scroll_lock: "no-scroll".to_owned(),
            header_scrolled: "scrolled".to_owned(),
            header_hidden: "header--hidden".to_owned(),
            active_link: "active-link".to_owned(),
            status_open: "status--open".to_owned(),
            status_closed: "status--closed".to_owned(),
            today: "today".to_owned(),
            image_loaded: "loaded".to_owned(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Header gets the scrolled class beyond this offset.
    pub scrolled_threshold: f64,
    /// Header may hide on downward scroll beyond this offset.
    pub hide_threshold: f64,
    /// Fixed header height reserved when probing sections and scrolling to anchors.
    pub header_offset: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self { scrolled_threshold: 50.0, hide_threshold: 200.0, header_offset: 80.0 }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StatusLabels {
    pub open: String,
    pub closed: String,
    pub closes: String,
    pub opens: String,
}

impl Default for StatusLabels {
    fn default() -> Self {
        Self {
            open: "Open now".to_owned(),
            closed: "Closed".to_owned(),
            closes: "closes".to_owned(),
            opens: "opens".to_owned(),
        }
    }
}

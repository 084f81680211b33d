//! Analytics stub.
//!
//! Events are typed and serialized so a real sink can be dropped in later;
//! today they only go to the log.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use serde::Serialize;

use super::theme::Preference;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AnalyticsEvent {
    ThemeToggled { theme: String },
    MenuOpened,
    SectionViewed { section: String },
    CallClicked { href: String },
}

impl AnalyticsEvent {
    pub fn theme_toggled(pref: Preference) -> Self {
        Self::ThemeToggled { theme: pref.as_str().to_owned() }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

pub fn track(event: &AnalyticsEvent) {
    match event.to_json() {
        Ok(payload) => log::info!("analytics: {payload}"),
        Err(err) => log::warn!("analytics: failed to encode {event:?}: {err}"),
    }
}

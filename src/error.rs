//! Crate-wide error type.
//!
//! Pure state modules return these for invalid input; browser bindings log
//! them and skip the affected feature instead of propagating to the page.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("weekday out of range: {0} (expected 0-6, Sunday = 0)")]
    InvalidWeekday(u8),
    #[error("minute of day out of range: {0} (expected 0-1439)")]
    InvalidMinute(u16),
    #[error("time of day out of range: {hour}:{minute:02} (expected 00:00-23:59)")]
    InvalidTime { hour: u16, minute: u16 },
    #[error("unknown theme preference: {0:?}")]
    InvalidPreference(String),
    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    #[error("browser window unavailable")]
    NoWindow,
    #[error("document unavailable")]
    NoDocument,
    #[error("javascript error: {0}")]
    Js(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

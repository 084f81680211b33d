//! Theme preference store.
//!
//! Reads the user's stored choice, falls back to the OS color-scheme signal,
//! and applies the result as a single "light mode" flag. Dark is the absence
//! of that flag.
//!
//! TRADE-OFFS
//! ==========
//! The store is generic over [`ThemeHost`] so persistence and the visual flag
//! can be swapped for an in-memory host in tests. Storage is best-effort: a
//! host without storage reads as "unset" and drops writes.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use crate::error::SiteError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Preference {
    Light,
    #[default]
    Dark,
}

impl Preference {
    pub fn as_str(self) -> &'static str {
        match self {
            Preference::Light => "light",
            Preference::Dark => "dark",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Preference::Light => Preference::Dark,
            Preference::Dark => Preference::Light,
        }
    }

    pub fn from_prefers_light(prefers_light: bool) -> Self {
        if prefers_light { Preference::Light } else { Preference::Dark }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preference {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Preference::Light),
            "dark" => Ok(Preference::Dark),
            other => Err(SiteError::InvalidPreference(other.to_owned())),
        }
    }
}

/// Environment the store reads from and writes to.
pub trait ThemeHost {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str);
    /// OS-level signal; `None` when the host cannot tell.
    fn system_prefers_light(&self) -> Option<bool>;
    /// Whether the light-mode flag is currently applied.
    fn light_flag(&self) -> bool;
    fn set_light_flag(&mut self, on: bool);
}

pub struct PreferenceStore<H: ThemeHost> {
    host: H,
    key: String,
}

impl<H: ThemeHost> PreferenceStore<H> {
    pub fn new(host: H, key: impl Into<String>) -> Self {
        Self { host, key: key.into() }
    }

    /// The persisted preference, ignoring unreadable values.
    pub fn stored(&self) -> Option<Preference> {
        let raw = self.host.get_item(&self.key)?;
        match raw.parse() {
            Ok(pref) => Some(pref),
            Err(err) => {
                log::debug!("theme: ignoring stored value: {err}");
                None
            }
        }
    }

    /// Whether anything was ever written under the key.
    pub fn has_explicit_choice(&self) -> bool {
        self.host.get_item(&self.key).is_some()
    }

    /// Stored value, else OS signal, else dark.
    pub fn read(&self) -> Preference {
        self.stored()
            .or_else(|| self.host.system_prefers_light().map(Preference::from_prefers_light))
            .unwrap_or_default()
    }

    /// Preference currently reflected in the visual state.
    pub fn applied(&self) -> Preference {
        Preference::from_prefers_light(self.host.light_flag())
    }

    pub fn apply(&mut self, pref: Preference) {
        self.host.set_light_flag(pref == Preference::Light);
    }

    pub fn write(&mut self, pref: Preference) {
        self.host.set_item(&self.key, pref.as_str());
        self.apply(pref);
    }

    /// Apply the resolved preference at load.
    pub fn init(&mut self) -> Preference {
        let pref = self.read();
        self.apply(pref);
        pref
    }

    /// Flip the applied preference and persist it.
    pub fn toggle(&mut self) -> Preference {
        let next = self.applied().flipped();
        self.write(next);
        next
    }

    /// Follow an OS scheme change unless the user has chosen explicitly.
    pub fn on_system_change(&mut self, prefers_light: bool) -> Option<Preference> {
        if self.has_explicit_choice() {
            return None;
        }
        let pref = Preference::from_prefers_light(prefers_light);
        self.apply(pref);
        Some(pref)
    }
}

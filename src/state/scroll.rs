//! Scroll-driven header and navigation state.
//!
//! DESIGN
//! ======
//! Scroll events arrive far more often than frames. [`ScrollContext`] owns the
//! pending-frame flag and last position so the bindings schedule at most one
//! animation-frame callback per burst, then derive header classes and the
//! active section from a single position sample.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::config::ScrollConfig;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollDirection {
    #[default]
    Idle,
    Up,
    Down,
}

/// A page section with its absolute top offset in CSS pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollUpdate {
    pub direction: ScrollDirection,
    pub header_scrolled: bool,
    pub header_hidden: bool,
    pub active_section: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct ScrollContext {
    frame_pending: bool,
    last_y: f64,
    last: ScrollUpdate,
}

impl ScrollContext {
    pub fn frame_pending(&self) -> bool {
        self.frame_pending
    }

    pub fn last_y(&self) -> f64 {
        self.last_y
    }

    pub fn last_update(&self) -> &ScrollUpdate {
        &self.last
    }

    /// Returns `true` when the caller should schedule a frame callback.
    pub fn request_frame(&mut self) -> bool {
        if self.frame_pending {
            return false;
        }
        self.frame_pending = true;
        true
    }

    /// Release the pending flag when no frame could be scheduled.
    pub fn cancel_frame(&mut self) {
        self.frame_pending = false;
    }

    pub fn on_frame(&mut self, y: f64, sections: &[SectionBounds], config: &ScrollConfig) -> ScrollUpdate {
        self.frame_pending = false;
        let y = y.max(0.0);

        let direction = if y > self.last_y {
            ScrollDirection::Down
        } else if y < self.last_y {
            ScrollDirection::Up
        } else {
            self.last.direction
        };
        self.last_y = y;

        let update = ScrollUpdate {
            direction,
            header_scrolled: y > config.scrolled_threshold,
            header_hidden: direction == ScrollDirection::Down && y > config.hide_threshold,
            active_section: active_section(sections, y + config.header_offset).map(str::to_owned),
        };
        self.last = update.clone();
        update
    }
}

/// Id of the last section whose top is at or above `probe_y`.
pub fn active_section(sections: &[SectionBounds], probe_y: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|section| section.top <= probe_y)
        .max_by(|a, b| a.top.total_cmp(&b.top))
        .map(|section| section.id.as_str())
}

/// Absolute scroll target for an anchor whose element sits at
/// `top_in_viewport`, leaving room for the fixed header.
pub fn anchor_target(top_in_viewport: f64, scroll_y: f64, header_offset: f64) -> f64 {
    (top_in_viewport + scroll_y - header_offset).max(0.0)
}

/// Section id referenced by an in-page link, if it names one.
pub fn anchor_id(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() { None } else { Some(id) }
}

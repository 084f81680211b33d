//! Open/closed badge and "today" row in the hours table.

use std::rc::Rc;

use gloo_timers::callback::Interval;
use js_sys::Date;
use web_sys::{Document, Element};

use super::dom;
use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::state::schedule::{ClockReading, SHOP_HOURS, today_marks};

struct SchedulePainter {
    status: Option<Element>,
    rows: Vec<Element>,
    config: Rc<SiteConfig>,
}

impl SchedulePainter {
    fn refresh(&self) {
        let reading = match clock_now() {
            Ok(reading) => reading,
            Err(err) => {
                log::warn!("schedule: bad clock reading: {err}");
                return;
            }
        };
        let status = SHOP_HOURS.evaluate(reading);
        let classes = &self.config.classes;

        if let Some(el) = &self.status {
            dom::set_class(el, &classes.status_open, status.is_open);
            dom::set_class(el, &classes.status_closed, !status.is_open);
            el.set_text_content(Some(&status.label(&self.config.labels)));
        }

        for (row, is_today) in self.rows.iter().zip(today_marks(self.rows.len(), status.today_row)) {
            dom::set_class(row, &classes.today, is_today);
        }
    }
}

/// Local wall-clock time from the browser.
fn clock_now() -> Result<ClockReading, SiteError> {
    let now = Date::new_0();
    let weekday = u8::try_from(now.get_day()).unwrap_or(u8::MAX);
    let hour = u16::try_from(now.get_hours()).unwrap_or(u16::MAX);
    let minute = u16::try_from(now.get_minutes()).unwrap_or(u16::MAX);
    ClockReading::from_hm(weekday, hour, minute)
}

pub fn bind(document: &Document, config: &Rc<SiteConfig>) {
    let status = dom::by_id(document, &config.ids.status);
    let rows = dom::query_all(document, &config.selectors.hours_rows);
    if status.is_none() && rows.is_empty() {
        log::debug!("schedule: no status badge or hours rows");
        return;
    }

    let painter = SchedulePainter { status, rows, config: Rc::clone(config) };
    painter.refresh();
    Interval::new(config.schedule_refresh_ms(), move || painter.refresh()).forget();
}

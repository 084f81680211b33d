//! Opening-hours evaluation for the status badge and hours table.
//!
//! DESIGN
//! ======
//! Everything here is a pure function of (weekday, minute-of-day) and the
//! constant shop table, so the bindings only read the clock and paint the
//! result. Weekdays follow the browser clock (Sunday = 0); the rendered
//! hours table is Monday-first.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use crate::config::StatusLabels;
use crate::error::SiteError;

pub const MINUTES_PER_DAY: u16 = 24 * 60;
pub const DAYS_PER_WEEK: usize = 7;

/// Minutes since midnight for `hour:minute`.
pub const fn hm(hour: u16, minute: u16) -> u16 {
    hour * 60 + minute
}

/// Format minutes since midnight as `HH:MM`.
pub fn format_minutes(minutes: u16) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Day of week in host clock order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub const ALL: [Weekday; DAYS_PER_WEEK] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Parse a host clock index (0-6, Sunday = 0).
    pub fn from_index(index: u8) -> Result<Self, SiteError> {
        Self::ALL
            .get(usize::from(index))
            .copied()
            .ok_or(SiteError::InvalidWeekday(index))
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Row in the Monday-first hours table.
    pub fn display_index(self) -> usize {
        display_index(self.index())
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % DAYS_PER_WEEK]
    }

    pub fn short_name(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sun",
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
            Weekday::Saturday => "Sat",
        }
    }
}

/// Map a Sunday-first weekday index to the Monday-first display row.
pub fn display_index(weekday: usize) -> usize {
    (weekday + DAYS_PER_WEEK - 1) % DAYS_PER_WEEK
}

/// "Today" flag for each of `rows` hours-table rows: exactly the row at
/// `today_row` is set, every other row is cleared. A table with no row at
/// `today_row` gets no mark.
pub fn today_marks(rows: usize, today_row: usize) -> impl Iterator<Item = bool> {
    (0..rows).map(move |row| row == today_row)
}

/// Opening interval in minutes since midnight: `open` inclusive, `close` exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interval {
    pub open: u16,
    pub close: u16,
}

impl Interval {
    pub const fn new(open: u16, close: u16) -> Self {
        Self { open, close }
    }

    pub fn contains(self, minute: u16) -> bool {
        self.open <= minute && minute < self.close
    }
}

/// A validated wall-clock sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClockReading {
    pub weekday: Weekday,
    pub minute: u16,
}

impl ClockReading {
    pub fn new(weekday: u8, minute: u16) -> Result<Self, SiteError> {
        let weekday = Weekday::from_index(weekday)?;
        if minute >= MINUTES_PER_DAY {
            return Err(SiteError::InvalidMinute(minute));
        }
        Ok(Self { weekday, minute })
    }

    pub fn from_hm(weekday: u8, hour: u16, minute: u16) -> Result<Self, SiteError> {
        if hour >= 24 || minute >= 60 {
            return Err(SiteError::InvalidTime { hour, minute });
        }
        Self::new(weekday, hm(hour, minute))
    }
}

/// Result of one evaluation, consumed by the status bindings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduleStatus {
    pub is_open: bool,
    pub today_row: usize,
    /// Closing minute of today's interval while open.
    pub closes_at: Option<u16>,
    /// Next opening boundary while closed.
    pub next_opening: Option<(Weekday, u16)>,
}

impl ScheduleStatus {
    /// Human-readable badge text.
    pub fn label(&self, labels: &StatusLabels) -> String {
        if self.is_open {
            match self.closes_at {
                Some(close) => format!("{} · {} {}", labels.open, labels.closes, format_minutes(close)),
                None => labels.open.clone(),
            }
        } else {
            match self.next_opening {
                Some((day, open)) => format!(
                    "{} · {} {} {}",
                    labels.closed,
                    labels.opens,
                    day.short_name(),
                    format_minutes(open)
                ),
                None => labels.closed.clone(),
            }
        }
    }
}

/// Seven optional intervals indexed by [`Weekday::index`]; `None` is closed all day.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeeklySchedule {
    days: [Option<Interval>; DAYS_PER_WEEK],
}

/// The shop's fixed hours.
pub const SHOP_HOURS: WeeklySchedule = WeeklySchedule::new([
    None,
    None,
    Some(Interval::new(hm(9, 0), hm(19, 0))),
    Some(Interval::new(hm(9, 0), hm(19, 0))),
    Some(Interval::new(hm(9, 0), hm(17, 0))),
    Some(Interval::new(hm(9, 0), hm(19, 0))),
    Some(Interval::new(hm(9, 0), hm(17, 0))),
]);

impl WeeklySchedule {
    pub const fn new(days: [Option<Interval>; DAYS_PER_WEEK]) -> Self {
        Self { days }
    }

    pub fn interval(&self, weekday: Weekday) -> Option<Interval> {
        self.days[weekday.index()]
    }

    pub fn is_open(&self, reading: ClockReading) -> bool {
        self.interval(reading.weekday)
            .is_some_and(|interval| interval.contains(reading.minute))
    }

    pub fn evaluate(&self, reading: ClockReading) -> ScheduleStatus {
        let today = self.interval(reading.weekday);
        let is_open = today.is_some_and(|interval| interval.contains(reading.minute));
        ScheduleStatus {
            is_open,
            today_row: reading.weekday.display_index(),
            closes_at: if is_open { today.map(|interval| interval.close) } else { None },
            next_opening: if is_open { None } else { self.next_opening(reading) },
        }
    }

    /// First open boundary strictly after `reading`, scanning at most one week ahead.
    pub fn next_opening(&self, reading: ClockReading) -> Option<(Weekday, u16)> {
        if let Some(interval) = self.interval(reading.weekday) {
            if reading.minute < interval.open {
                return Some((reading.weekday, interval.open));
            }
        }
        let mut day = reading.weekday;
        for _ in 0..DAYS_PER_WEEK {
            day = day.next();
            if let Some(interval) = self.interval(day) {
                return Some((day, interval.open));
            }
        }
        None
    }
}

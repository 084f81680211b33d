use super::*;

fn at(weekday: u8, hour: u16, minute: u16) -> ClockReading {
    ClockReading::from_hm(weekday, hour, minute).unwrap()
}

fn labels() -> StatusLabels {
    StatusLabels::default()
}

// =============================================================
// Open / closed
// =============================================================

#[test]
fn sunday_and_monday_are_always_closed() {
    for weekday in [0, 1] {
        for minute in 0..MINUTES_PER_DAY {
            let reading = ClockReading::new(weekday, minute).unwrap();
            assert!(!SHOP_HOURS.is_open(reading), "weekday {weekday} minute {minute}");
        }
    }
}

#[test]
fn thursday_closes_at_five() {
    assert!(SHOP_HOURS.is_open(at(4, 16, 59)));
    assert!(!SHOP_HOURS.is_open(at(4, 17, 0)));
}

#[test]
fn tuesday_boundaries() {
    assert!(!SHOP_HOURS.is_open(at(2, 8, 59)));
    assert!(SHOP_HOURS.is_open(at(2, 9, 0)));
    assert!(SHOP_HOURS.is_open(at(2, 18, 59)));
    assert!(!SHOP_HOURS.is_open(at(2, 19, 0)));
}

#[test]
fn saturday_closes_at_five() {
    assert!(SHOP_HOURS.is_open(at(6, 9, 0)));
    assert!(SHOP_HOURS.is_open(at(6, 16, 59)));
    assert!(!SHOP_HOURS.is_open(at(6, 17, 0)));
}

#[test]
fn midnight_is_closed_every_day() {
    for weekday in 0..7 {
        assert!(!SHOP_HOURS.is_open(at(weekday, 0, 0)));
        assert!(!SHOP_HOURS.is_open(at(weekday, 23, 59)));
    }
}

// =============================================================
// Display index
// =============================================================

#[test]
fn display_index_is_monday_first() {
    assert_eq!(display_index(1), 0);
    assert_eq!(display_index(0), 6);
    assert_eq!(Weekday::Saturday.display_index(), 5);
}

#[test]
fn display_index_is_a_bijection() {
    let mut seen = [false; DAYS_PER_WEEK];
    for weekday in 0..DAYS_PER_WEEK {
        let row = display_index(weekday);
        assert!(row < DAYS_PER_WEEK);
        assert!(!seen[row], "row {row} hit twice");
        seen[row] = true;
    }
    assert!(seen.iter().all(|hit| *hit));
}

#[test]
fn evaluate_reports_today_row() {
    let status = SHOP_HOURS.evaluate(at(0, 12, 0));
    assert_eq!(status.today_row, 6);
    assert!(!status.is_open);

    let status = SHOP_HOURS.evaluate(at(3, 12, 0));
    assert_eq!(status.today_row, 2);
    assert!(status.is_open);
}

#[test]
fn today_marks_sets_exactly_one_row_in_a_full_table() {
    for weekday in Weekday::ALL {
        let marks: Vec<bool> = today_marks(DAYS_PER_WEEK, weekday.display_index()).collect();
        assert_eq!(marks.len(), DAYS_PER_WEEK);
        assert_eq!(marks.iter().filter(|m| **m).count(), 1, "{weekday:?}");
        assert!(marks[weekday.display_index()]);
    }
}

#[test]
fn today_marks_clears_a_short_table_when_today_is_out_of_range() {
    let sunday = Weekday::Sunday.display_index();
    let marks: Vec<bool> = today_marks(5, sunday).collect();
    assert_eq!(marks, vec![false; 5]);

    let marks: Vec<bool> = today_marks(5, Weekday::Tuesday.display_index()).collect();
    assert_eq!(marks, vec![false, true, false, false, false]);
}

#[test]
fn today_marks_on_empty_table_is_empty() {
    assert_eq!(today_marks(0, 3).count(), 0);
}

// =============================================================
// Validation
// =============================================================

#[test]
fn rejects_out_of_range_weekday() {
    assert!(matches!(ClockReading::new(7, 0), Err(SiteError::InvalidWeekday(7))));
}

#[test]
fn rejects_out_of_range_minute() {
    assert!(matches!(ClockReading::new(2, MINUTES_PER_DAY), Err(SiteError::InvalidMinute(1440))));
    assert!(ClockReading::new(2, MINUTES_PER_DAY - 1).is_ok());
}

#[test]
fn from_hm_reports_the_rejected_hour_and_minute() {
    assert!(matches!(
        ClockReading::from_hm(2, 10, 60),
        Err(SiteError::InvalidTime { hour: 10, minute: 60 })
    ));
    assert!(matches!(ClockReading::from_hm(2, 24, 0), Err(SiteError::InvalidTime { hour: 24, minute: 0 })));
    assert!(matches!(
        ClockReading::from_hm(2, u16::MAX, 0),
        Err(SiteError::InvalidTime { hour: u16::MAX, minute: 0 })
    ));
    assert_eq!(ClockReading::from_hm(2, 23, 59).unwrap().minute, MINUTES_PER_DAY - 1);
}

// =============================================================
// Next opening and labels
// =============================================================

#[test]
fn next_opening_skips_closed_days() {
    assert_eq!(SHOP_HOURS.next_opening(at(6, 18, 0)), Some((Weekday::Tuesday, hm(9, 0))));
    assert_eq!(SHOP_HOURS.next_opening(at(0, 10, 0)), Some((Weekday::Tuesday, hm(9, 0))));
}

#[test]
fn next_opening_can_be_later_today() {
    assert_eq!(SHOP_HOURS.next_opening(at(2, 8, 0)), Some((Weekday::Tuesday, hm(9, 0))));
}

#[test]
fn next_opening_while_open_is_tomorrow() {
    assert_eq!(SHOP_HOURS.next_opening(at(2, 10, 0)), Some((Weekday::Wednesday, hm(9, 0))));
}

#[test]
fn next_opening_on_single_day_schedule_wraps_a_week() {
    let mut days = [None; DAYS_PER_WEEK];
    days[Weekday::Wednesday.index()] = Some(Interval::new(hm(10, 0), hm(12, 0)));
    let schedule = WeeklySchedule::new(days);
    assert_eq!(schedule.next_opening(at(3, 13, 0)), Some((Weekday::Wednesday, hm(10, 0))));
}

#[test]
fn next_opening_is_none_when_never_open() {
    let schedule = WeeklySchedule::new([None; DAYS_PER_WEEK]);
    assert_eq!(schedule.next_opening(at(3, 13, 0)), None);
    assert_eq!(schedule.evaluate(at(3, 13, 0)).label(&labels()), "Closed");
}

#[test]
fn open_label_shows_closing_time() {
    let status = SHOP_HOURS.evaluate(at(4, 12, 30));
    assert_eq!(status.closes_at, Some(hm(17, 0)));
    assert_eq!(status.label(&labels()), "Open now · closes 17:00");
}

#[test]
fn closed_label_shows_next_opening() {
    let status = SHOP_HOURS.evaluate(at(1, 12, 0));
    assert_eq!(status.label(&labels()), "Closed · opens Tue 09:00");
}

#[test]
fn format_minutes_pads() {
    assert_eq!(format_minutes(hm(9, 5)), "09:05");
    assert_eq!(format_minutes(0), "00:00");
    assert_eq!(format_minutes(MINUTES_PER_DAY - 1), "23:59");
}

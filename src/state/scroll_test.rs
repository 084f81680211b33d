use super::*;

fn sections() -> Vec<SectionBounds> {
    vec![
        SectionBounds { id: "home".into(), top: 0.0 },
        SectionBounds { id: "services".into(), top: 800.0 },
        SectionBounds { id: "hours".into(), top: 1600.0 },
        SectionBounds { id: "contact".into(), top: 2400.0 },
    ]
}

// =============================================================
// Frame coalescing
// =============================================================

#[test]
fn only_first_request_schedules_a_frame() {
    let mut ctx = ScrollContext::default();
    assert!(ctx.request_frame());
    assert!(!ctx.request_frame());
    assert!(ctx.frame_pending());

    ctx.on_frame(10.0, &[], &ScrollConfig::default());
    assert!(!ctx.frame_pending());
    assert!(ctx.request_frame());
}

#[test]
fn cancel_frame_releases_pending_flag() {
    let mut ctx = ScrollContext::default();
    assert!(ctx.request_frame());
    ctx.cancel_frame();
    assert!(ctx.request_frame());
}

// =============================================================
// Header state
// =============================================================

#[test]
fn header_marked_scrolled_past_threshold() {
    let config = ScrollConfig::default();
    let mut ctx = ScrollContext::default();
    assert!(!ctx.on_frame(config.scrolled_threshold, &[], &config).header_scrolled);
    assert!(ctx.on_frame(config.scrolled_threshold + 1.0, &[], &config).header_scrolled);
}

#[test]
fn header_hides_only_when_scrolling_down_far_enough() {
    let config = ScrollConfig::default();
    let mut ctx = ScrollContext::default();

    let down = ctx.on_frame(config.hide_threshold + 100.0, &[], &config);
    assert_eq!(down.direction, ScrollDirection::Down);
    assert!(down.header_hidden);

    let up = ctx.on_frame(config.hide_threshold + 50.0, &[], &config);
    assert_eq!(up.direction, ScrollDirection::Up);
    assert!(!up.header_hidden);
}

#[test]
fn unchanged_position_keeps_previous_direction() {
    let config = ScrollConfig::default();
    let mut ctx = ScrollContext::default();
    ctx.on_frame(500.0, &[], &config);
    let same = ctx.on_frame(500.0, &[], &config);
    assert_eq!(same.direction, ScrollDirection::Down);
    assert_eq!(ctx.last_y(), 500.0);
}

#[test]
fn negative_overscroll_clamps_to_zero() {
    let mut ctx = ScrollContext::default();
    let update = ctx.on_frame(-40.0, &[], &ScrollConfig::default());
    assert_eq!(ctx.last_y(), 0.0);
    assert!(!update.header_scrolled);
}

// =============================================================
// Active section
// =============================================================

#[test]
fn active_section_uses_header_offset() {
    let config = ScrollConfig::default();
    let mut ctx = ScrollContext::default();
    let probe_just_short = 800.0 - config.header_offset - 1.0;
    assert_eq!(ctx.on_frame(probe_just_short, &sections(), &config).active_section.as_deref(), Some("home"));
    assert_eq!(
        ctx.on_frame(800.0 - config.header_offset, &sections(), &config).active_section.as_deref(),
        Some("services")
    );
}

#[test]
fn active_section_is_none_above_first_section() {
    let list = vec![SectionBounds { id: "services".into(), top: 600.0 }];
    assert_eq!(active_section(&list, 100.0), None);
    assert_eq!(active_section(&list, 600.0), Some("services"));
}

#[test]
fn active_section_handles_unsorted_input() {
    let mut list = sections();
    list.reverse();
    assert_eq!(active_section(&list, 1700.0), Some("hours"));
}

// =============================================================
// Anchors
// =============================================================

#[test]
fn anchor_target_subtracts_header_and_clamps() {
    assert_eq!(anchor_target(300.0, 1000.0, 80.0), 1220.0);
    assert_eq!(anchor_target(10.0, 0.0, 80.0), 0.0);
}

#[test]
fn anchor_id_requires_a_name() {
    assert_eq!(anchor_id("#hours"), Some("hours"));
    assert_eq!(anchor_id("#"), None);
    assert_eq!(anchor_id("/about"), None);
}

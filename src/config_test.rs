use super::*;

#[test]
fn defaults_are_valid() {
    let config = SiteConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    assert_eq!(config.schedule_refresh_ms(), 60_000);
    assert_eq!(config.classes.light_mode, "light-mode");
}

#[test]
fn empty_object_yields_defaults() {
    assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = SiteConfig::from_json(
        r#"{"storage_key":"barber-theme","ids":{"status":"open-badge"},"scroll":{"header_offset":64}}"#,
    )
    .unwrap();
    assert_eq!(config.storage_key, "barber-theme");
    assert_eq!(config.ids.status, "open-badge");
    assert_eq!(config.ids.header, "header");
    assert_eq!(config.scroll.header_offset, 64.0);
    assert_eq!(config.scroll.scrolled_threshold, 50.0);
}

#[test]
fn zero_refresh_is_rejected() {
    let err = SiteConfig::from_json(r#"{"schedule_refresh_secs":0}"#).unwrap_err();
    assert!(matches!(err, SiteError::InvalidConfig(_)));
}

#[test]
fn blank_storage_key_is_rejected() {
    assert!(SiteConfig::from_json(r#"{"storage_key":"  "}"#).is_err());
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = SiteConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, SiteError::Config(_)));
}

#[test]
fn labels_can_be_localised() {
    let config = SiteConfig::from_json(r#"{"labels":{"open":"Geöffnet","closed":"Geschlossen"}}"#).unwrap();
    assert_eq!(config.labels.open, "Geöffnet");
    assert_eq!(config.labels.opens, "opens");
}

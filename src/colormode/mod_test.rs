use super::*;

#[test]
fn parse_accepts_exact_wire_forms() {
    assert_eq!(ColorMode::parse("dark"), Some(ColorMode::Dark));
    assert_eq!(ColorMode::parse("light"), Some(ColorMode::Light));
}

#[test]
fn parse_rejects_case_variants_and_noise() {
    for raw in ["Dark", "DARK", "Light", "", " dark", "purple"] {
        assert_eq!(ColorMode::parse(raw), None, "expected rejection for {raw:?}");
    }
}

#[test]
fn display_matches_cookie_wire_form() {
    assert_eq!(ColorMode::Dark.to_string(), "dark");
    assert_eq!(ColorMode::Light.to_string(), "light");
}

#[test]
fn serde_uses_lowercase_wire_form() {
    assert_eq!(serde_json::to_value(ColorMode::Dark).unwrap(), serde_json::json!("dark"));
    let parsed: ColorMode = serde_json::from_value(serde_json::json!("light")).unwrap();
    assert_eq!(parsed, ColorMode::Light);
}

#[test]
fn serde_rejects_unknown_mode() {
    assert!(serde_json::from_value::<ColorMode>(serde_json::json!("purple")).is_err());
}

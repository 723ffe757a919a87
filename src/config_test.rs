use super::*;

// =============================================================================
// parse_default_mode — tested directly to avoid races on shared env vars.
// =============================================================================

#[test]
fn default_mode_unset_means_none() {
    assert_eq!(parse_default_mode(None), Ok(None));
}

#[test]
fn default_mode_empty_means_none() {
    assert_eq!(parse_default_mode(Some("")).unwrap(), None);
    assert_eq!(parse_default_mode(Some("   ")).unwrap(), None);
}

#[test]
fn default_mode_dark_and_light() {
    assert_eq!(parse_default_mode(Some("dark")).unwrap(), Some(ColorMode::Dark));
    assert_eq!(parse_default_mode(Some("light")).unwrap(), Some(ColorMode::Light));
}

#[test]
fn default_mode_is_trimmed() {
    assert_eq!(parse_default_mode(Some("  dark  ")).unwrap(), Some(ColorMode::Dark));
}

#[test]
fn default_mode_unknown_is_an_error() {
    let err = parse_default_mode(Some("purple")).unwrap_err();
    assert!(err.to_string().contains("purple"));
}

// =============================================================================
// env_bool — unique env var names to avoid races with parallel tests.
// =============================================================================

#[test]
fn env_bool_true_variants() {
    for (i, val) in ["1", "true", "yes", "on"].iter().enumerate() {
        let key = format!("__DUSK_TEST_EB_TRUE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(true), "expected true for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_false_variants() {
    for (i, val) in ["0", "false", "no", "off"].iter().enumerate() {
        let key = format!("__DUSK_TEST_EB_FALSE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(false), "expected false for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_invalid_returns_none() {
    let key = "__DUSK_TEST_EB_INVALID__";
    unsafe { std::env::set_var(key, "maybe") };
    assert_eq!(env_bool(key), None);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_bool_unset_returns_none() {
    assert_eq!(env_bool("__DUSK_TEST_EB_SURELY_UNSET__"), None);
}

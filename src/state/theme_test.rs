use super::*;

// =============================================================
// Parsing
// =============================================================

#[test]
fn parse_dark() {
    assert_eq!(Theme::parse("dark"), Theme::Dark);
}

#[test]
fn parse_light() {
    assert_eq!(Theme::parse("light"), Theme::Light);
}

#[test]
fn parse_unrecognized_is_light() {
    assert_eq!(Theme::parse(""), Theme::Light);
    assert_eq!(Theme::parse("solarized"), Theme::Light);
    assert_eq!(Theme::parse("DARK"), Theme::Light);
}

// =============================================================
// Toggle
// =============================================================

#[test]
fn toggle_flips() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn toggle_is_an_involution() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(theme.toggled().toggled(), theme);
    }
}

#[test]
fn unrecognized_value_toggles_to_dark() {
    assert_eq!(Theme::parse("whatever").toggled(), Theme::Dark);
}

// =============================================================
// Representation
// =============================================================

#[test]
fn as_str_round_trips() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::parse(theme.as_str()), theme);
    }
}

#[test]
fn icon_reflects_target_action() {
    // Light shows a moon (switch to dark), dark shows a sun.
    assert_eq!(Theme::Light.icon_class(), "fas fa-moon");
    assert_eq!(Theme::Dark.icon_class(), "fas fa-sun");
}

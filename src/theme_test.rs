use super::*;

fn theme_after(actions: &[Action]) -> Option<Theme> {
    actions.iter().find_map(|action| match action {
        Action::SetThemeAttribute(theme) => Some(*theme),
        _ => None,
    })
}

// --- Theme ---

#[test]
fn theme_names_round_trip_through_parse() {
    assert_eq!(Theme::parse(Theme::Light.as_str()), Some(Theme::Light));
    assert_eq!(Theme::parse(Theme::Dark.as_str()), Some(Theme::Dark));
}

#[test]
fn theme_parse_is_case_sensitive() {
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse(" light"), None);
}

#[test]
fn theme_toggled_is_an_involution() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_ne!(theme.toggled(), theme);
        assert_eq!(theme.toggled().toggled(), theme);
    }
}

#[test]
fn theme_default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn theme_display_uses_attribute_name() {
    assert_eq!(Theme::Dark.to_string(), "dark");
}

// --- Stored preference ---

#[test]
fn resolve_stored_defaults_to_light_when_absent() {
    assert_eq!(ThemeController::resolve_stored(None), Theme::Light);
    assert_eq!(ThemeController::resolve_stored(Some("")), Theme::Light);
}

#[test]
fn resolve_stored_honours_dark() {
    assert_eq!(ThemeController::resolve_stored(Some("dark")), Theme::Dark);
}

#[test]
fn resolve_stored_falls_back_on_garbage() {
    assert_eq!(ThemeController::resolve_stored(Some("sepia")), Theme::Light);
}

// --- Apply ---

#[test]
fn apply_sets_attribute_persists_and_updates_icon_in_order() {
    let controller = ThemeController::default();
    assert_eq!(
        controller.apply(Theme::Dark),
        vec![
            Action::SetThemeAttribute(Theme::Dark),
            Action::PersistTheme(Theme::Dark),
            Action::SetToggleIcon { class: "ph-sun".into() },
        ]
    );
}

#[test]
fn light_theme_shows_moon_icon() {
    let controller = ThemeController::default();
    assert_eq!(controller.icon_for(Theme::Light), "ph-moon");
    assert_eq!(controller.icon_for(Theme::Dark), "ph-sun");
}

#[test]
fn icons_come_from_config() {
    let config = PageConfig {
        light_icon_class: "icon-night".into(),
        dark_icon_class: "icon-day".into(),
        ..PageConfig::default()
    };
    let controller = ThemeController::new(&config);
    assert_eq!(controller.icon_for(Theme::Light), "icon-night");
    assert_eq!(controller.icon_for(Theme::Dark), "icon-day");
}

// --- Init ---

#[test]
fn init_without_stored_value_applies_light() {
    let controller = ThemeController::default();
    let actions = controller.init(None);
    assert_eq!(theme_after(&actions), Some(Theme::Light));
    assert!(actions.contains(&Action::PersistTheme(Theme::Light)));
    assert!(actions.contains(&Action::SetToggleIcon { class: "ph-moon".into() }));
}

#[test]
fn init_with_stored_dark_applies_dark() {
    let controller = ThemeController::default();
    assert_eq!(theme_after(&controller.init(Some("dark"))), Some(Theme::Dark));
}

// --- Toggle ---

#[test]
fn next_theme_flips_known_values() {
    assert_eq!(ThemeController::next_theme(Some("light")), Theme::Dark);
    assert_eq!(ThemeController::next_theme(Some("dark")), Theme::Light);
}

#[test]
fn next_theme_without_attribute_is_light() {
    assert_eq!(ThemeController::next_theme(None), Theme::Light);
    assert_eq!(ThemeController::next_theme(Some("neon")), Theme::Light);
}

#[test]
fn toggle_twice_returns_to_start() {
    let controller = ThemeController::default();
    for start in [Theme::Light, Theme::Dark] {
        let once = theme_after(&controller.toggle(Some(start.as_str())));
        let Some(once) = once else {
            panic!("toggle must set the attribute");
        };
        let twice = theme_after(&controller.toggle(Some(once.as_str())));
        assert_eq!(twice, Some(start));
    }
}

#[test]
fn toggle_from_dark_persists_light_with_moon_icon() {
    let controller = ThemeController::default();
    assert_eq!(
        controller.toggle(Some("dark")),
        vec![
            Action::SetThemeAttribute(Theme::Light),
            Action::PersistTheme(Theme::Light),
            Action::SetToggleIcon { class: "ph-moon".into() },
        ]
    );
}

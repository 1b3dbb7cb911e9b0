//! Light/dark theme state and the toggle controller.
//!
//! The controller is a two-state flip. It reads the stored preference once at
//! load, and on every toggle derives the next theme from what the document
//! root currently shows, so the attribute stays the single source of truth.

use std::fmt;

use crate::action::Action;
use crate::config::PageConfig;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// The active colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Name written to the presentation attribute and to storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse an exact theme name.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decides which theme to apply and which effects applying it requires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeController {
    light_icon: String,
    dark_icon: String,
}

impl Default for ThemeController {
    fn default() -> Self {
        Self::new(&PageConfig::default())
    }
}

impl ThemeController {
    #[must_use]
    pub fn new(config: &PageConfig) -> Self {
        Self { light_icon: config.light_icon_class.clone(), dark_icon: config.dark_icon_class.clone() }
    }

    /// Theme to start with given the raw stored preference.
    ///
    /// Missing or empty values yield [`Theme::Light`]. Unrecognised values are
    /// logged and also yield [`Theme::Light`].
    #[must_use]
    pub fn resolve_stored(stored: Option<&str>) -> Theme {
        match stored {
            None | Some("") => Theme::Light,
            Some(raw) => Theme::parse(raw).unwrap_or_else(|| {
                log::warn!("ignoring unrecognised stored theme {raw:?}");
                Theme::Light
            }),
        }
    }

    /// Icon class shown on the toggle while `theme` is active.
    ///
    /// The icon advertises the theme a click switches to: a moon while light,
    /// a sun while dark.
    #[must_use]
    pub fn icon_for(&self, theme: Theme) -> &str {
        match theme {
            Theme::Light => &self.light_icon,
            Theme::Dark => &self.dark_icon,
        }
    }

    /// Effects that make `theme` active.
    #[must_use]
    pub fn apply(&self, theme: Theme) -> Vec<Action> {
        vec![
            Action::SetThemeAttribute(theme),
            Action::PersistTheme(theme),
            Action::SetToggleIcon { class: self.icon_for(theme).to_owned() },
        ]
    }

    /// Page-load initialisation from the stored preference.
    #[must_use]
    pub fn init(&self, stored: Option<&str>) -> Vec<Action> {
        let theme = Self::resolve_stored(stored);
        log::info!("initial theme: {theme}");
        self.apply(theme)
    }

    /// Next theme given the attribute value currently on the document root.
    ///
    /// Only an exact `"light"` flips to dark; anything else, including a
    /// missing attribute, flips to light.
    #[must_use]
    pub fn next_theme(current: Option<&str>) -> Theme {
        match current.and_then(Theme::parse) {
            Some(theme) => theme.toggled(),
            None => Theme::Light,
        }
    }

    /// Effects for one activation of the toggle control.
    #[must_use]
    pub fn toggle(&self, current: Option<&str>) -> Vec<Action> {
        let next = Self::next_theme(current);
        log::debug!("theme toggled to {next}");
        self.apply(next)
    }
}

//! Page configuration: the ids, classes and constants of the markup contract.
//!
//! Every field has a default from [`crate::consts`]. A page may override any
//! subset by embedding a JSON block:
//!
//! ```html
//! <script type="application/json" id="pagefx-config">
//!   { "scroll_threshold": 450, "log_level": "debug" }
//! </script>
//! ```

use serde::Deserialize;

use crate::consts;
use crate::error::PageError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Console log verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    #[must_use]
    pub fn as_level(self) -> log::Level {
        match self {
            Self::Error => log::Level::Error,
            Self::Warn => log::Level::Warn,
            Self::Info => log::Level::Info,
            Self::Debug => log::Level::Debug,
            Self::Trace => log::Level::Trace,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    pub storage_key: String,
    pub theme_attribute: String,
    pub theme_toggle_id: String,
    pub light_icon_class: String,
    pub dark_icon_class: String,
    pub scroll_button_id: String,
    pub scroll_threshold: f64,
    pub scroll_button_display: String,
    pub fade_in_class: String,
    pub appear_class: String,
    pub reveal_bottom_margin: f64,
    pub reveal_threshold: f64,
    pub log_level: LogLevel,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            storage_key: consts::THEME_STORAGE_KEY.to_owned(),
            theme_attribute: consts::THEME_ATTRIBUTE.to_owned(),
            theme_toggle_id: consts::THEME_TOGGLE_ID.to_owned(),
            light_icon_class: consts::MOON_ICON_CLASS.to_owned(),
            dark_icon_class: consts::SUN_ICON_CLASS.to_owned(),
            scroll_button_id: consts::SCROLL_BUTTON_ID.to_owned(),
            scroll_threshold: consts::SCROLL_THRESHOLD_PX,
            scroll_button_display: consts::SCROLL_BUTTON_DISPLAY.to_owned(),
            fade_in_class: consts::FADE_IN_CLASS.to_owned(),
            appear_class: consts::APPEAR_CLASS.to_owned(),
            reveal_bottom_margin: consts::REVEAL_BOTTOM_MARGIN_PX,
            reveal_threshold: consts::REVEAL_THRESHOLD,
            log_level: LogLevel::default(),
        }
    }
}

impl PageConfig {
    /// Parse a JSON override block. Absent fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Config`] for malformed JSON, unknown fields, or
    /// values rejected by [`PageConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the controllers cannot honor.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Config`] naming the first offending field.
    pub fn validate(&self) -> Result<(), PageError> {
        let identifiers = [
            ("storage_key", &self.storage_key),
            ("theme_attribute", &self.theme_attribute),
            ("theme_toggle_id", &self.theme_toggle_id),
            ("light_icon_class", &self.light_icon_class),
            ("dark_icon_class", &self.dark_icon_class),
            ("scroll_button_id", &self.scroll_button_id),
            ("scroll_button_display", &self.scroll_button_display),
            ("fade_in_class", &self.fade_in_class),
            ("appear_class", &self.appear_class),
        ];
        for (field, value) in identifiers {
            if value.trim().is_empty() {
                return Err(PageError::Config(format!("{field} must not be empty")));
            }
        }
        if !self.scroll_threshold.is_finite() || self.scroll_threshold < 0.0 {
            return Err(PageError::Config("scroll_threshold must be a non-negative number".into()));
        }
        if !self.reveal_bottom_margin.is_finite() || self.reveal_bottom_margin < 0.0 {
            return Err(PageError::Config("reveal_bottom_margin must be a non-negative number".into()));
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(PageError::Config("reveal_threshold must be within [0, 1]".into()));
        }
        Ok(())
    }

    /// CSS margin string for the reveal watcher: inward on the bottom edge only.
    #[must_use]
    pub fn root_margin(&self) -> String {
        if self.reveal_bottom_margin <= 0.0 {
            return "0px 0px 0px 0px".to_owned();
        }
        format!("0px 0px -{}px 0px", self.reveal_bottom_margin)
    }
}

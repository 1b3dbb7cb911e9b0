//! Scroll-to-top button visibility.
//!
//! Visibility is a pure function of the current vertical offset: shown iff the
//! offset is strictly greater than the threshold. There is no hysteresis band,
//! so oscillating across the threshold toggles on every crossing.

use crate::action::Action;
use crate::config::PageConfig;

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollButton {
    threshold: f64,
}

impl Default for ScrollButton {
    fn default() -> Self {
        Self::new(&PageConfig::default())
    }
}

impl ScrollButton {
    #[must_use]
    pub fn new(config: &PageConfig) -> Self {
        Self { threshold: config.scroll_threshold }
    }

    /// Whether the button is rendered at `offset`.
    #[must_use]
    pub fn is_visible(&self, offset: f64) -> bool {
        offset > self.threshold
    }

    /// Effect for one scroll event.
    #[must_use]
    pub fn on_scroll(&self, offset: f64) -> Action {
        let visible = self.is_visible(offset);
        log::trace!("scroll offset {offset}: button visible = {visible}");
        Action::SetScrollButtonVisible(visible)
    }

    /// Effect for one activation of the button.
    #[must_use]
    pub fn on_click(&self) -> Action {
        Action::ScrollToTop
    }
}

//! Effects requested by the controllers for the host to perform.

use crate::reveal::RevealId;
use crate::theme::Theme;

/// A single DOM or storage effect.
///
/// Controllers never touch the page directly; they return these in the order
/// they must be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Set the presentation attribute on the document root.
    SetThemeAttribute(Theme),
    /// Write the theme preference to local storage.
    PersistTheme(Theme),
    /// Replace the toggle control's icon with `<i class="{class}"></i>`.
    SetToggleIcon { class: String },
    /// Render (`true`) or remove from layout (`false`) the scroll-to-top control.
    SetScrollButtonVisible(bool),
    /// Smooth-scroll the window to the top of the page.
    ScrollToTop,
    /// Add the appear class to a revealable element.
    Reveal(RevealId),
    /// Stop watching a revealable element.
    Unobserve(RevealId),
}

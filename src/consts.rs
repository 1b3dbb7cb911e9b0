//! Default values for the page markup contract.

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Attribute on the document root that selects the active stylesheet rules.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Element id of the theme toggle control.
pub const THEME_TOGGLE_ID: &str = "theme-toggle";

/// Icon class shown while the light theme is active (offers "switch to dark").
pub const MOON_ICON_CLASS: &str = "ph-moon";

/// Icon class shown while the dark theme is active (offers "switch to light").
pub const SUN_ICON_CLASS: &str = "ph-sun";

// ── Scroll-to-top ───────────────────────────────────────────────

/// Element id of the scroll-to-top control.
pub const SCROLL_BUTTON_ID: &str = "scroll-to-top";

/// Vertical offset, in CSS pixels, past which the button is shown.
pub const SCROLL_THRESHOLD_PX: f64 = 300.0;

/// `display` value used while the button is visible.
pub const SCROLL_BUTTON_DISPLAY: &str = "flex";

// ── Reveal ──────────────────────────────────────────────────────

/// Marker class selecting elements that fade in on scroll.
pub const FADE_IN_CLASS: &str = "fade-in";

/// Class added once an element has entered the viewport.
pub const APPEAR_CLASS: &str = "appear";

/// Inward margin on the viewport's bottom edge, in CSS pixels.
pub const REVEAL_BOTTOM_MARGIN_PX: f64 = 100.0;

/// Intersection ratio that counts as "entering". Zero means any visible pixel.
pub const REVEAL_THRESHOLD: f64 = 0.0;

// ── Bootstrapping ───────────────────────────────────────────────

/// Element id of the optional JSON configuration block.
pub const CONFIG_ELEMENT_ID: &str = "pagefx-config";

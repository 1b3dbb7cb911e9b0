//! Page effects for a static site: a persisted light/dark theme toggle, a
//! scroll-to-top button, and a one-shot fade-in reveal of marked elements.
//!
//! This crate is compiled to WebAssembly and attaches itself to the page on
//! load. The three behaviors are independent; each is split into a
//! browser-independent controller that returns [`action::Action`]s and a thin
//! `web-sys` shell (the `hydrate` feature) that executes them.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Theme enum and the toggle controller |
//! | [`scroll`] | Scroll-to-top visibility rule |
//! | [`reveal`] | Per-element reveal state machine |
//! | [`boot`] | Startup ordering and mount result folding |
//! | [`action`] | Effects the controllers ask the host to perform |
//! | [`config`] | Markup contract, overridable from a JSON block |
//! | [`error`] | Mount failures |
//! | [`consts`] | Default ids, classes and thresholds |
//! | `dom` | Browser shell (`hydrate` only) |

pub mod action;
pub mod boot;
pub mod config;
pub mod consts;
pub mod error;
pub mod reveal;
pub mod scroll;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod dom;

/// WASM entry point: runs once when the module is instantiated.
///
/// # Errors
///
/// Surfaces the first mount failure to the browser console as a JS error.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
    console_error_panic_hook::set_once();
    dom::boot().map_err(Into::into)
}

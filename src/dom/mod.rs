//! Browser shell: resolves page elements, registers listeners, and executes
//! the [`Action`](crate::action::Action)s returned by the controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here needs a live `window`. The decision logic lives in the
//! browser-independent cores so it can be tested natively; this layer only
//! translates DOM events into core calls and core actions into DOM calls.
//!
//! Listeners live for the whole page lifetime, so their closures are leaked
//! with `Closure::forget` once registered.

mod reveal;
mod scroll;
mod theme;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::boot::{Mount, mount_all};
use crate::config::PageConfig;
use crate::consts::CONFIG_ELEMENT_ID;
use crate::error::PageError;

/// Owning context handed to each controller's mount routine.
pub struct Page {
    pub window: Window,
    pub document: Document,
    pub config: PageConfig,
}

impl Page {
    /// Bind to the global window and its document.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::NoWindow`] or [`PageError::NoDocument`] outside a
    /// browser main thread.
    pub fn from_global(config: PageConfig) -> Result<Self, PageError> {
        let window = web_sys::window().ok_or(PageError::NoWindow)?;
        let document = window.document().ok_or(PageError::NoDocument)?;
        Ok(Self { window, document, config })
    }

    /// Look up a required element by id.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::MissingElement`] when no element carries `id`.
    pub fn element_by_id(&self, id: &str) -> Result<Element, PageError> {
        self.document.get_element_by_id(id).ok_or_else(|| PageError::missing(id))
    }

    /// Look up a required HTML element by id.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::MissingElement`] when absent and [`PageError::Js`]
    /// when the element is not an HTML element (e.g. an SVG node).
    pub fn html_element_by_id(&self, id: &str) -> Result<HtmlElement, PageError> {
        self.element_by_id(id)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| PageError::Js(format!("#{id} is not an HTML element")))
    }
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<PageError> for JsValue {
    fn from(err: PageError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Attach a page-lifetime event listener.
pub(crate) fn listen(target: &EventTarget, event: &str, handler: Box<dyn FnMut(Event)>) -> Result<(), PageError> {
    let closure = Closure::wrap(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Read the optional JSON configuration block from the page.
///
/// # Errors
///
/// Returns [`PageError::Config`] when the block exists but does not parse.
pub fn load_config(document: &Document) -> Result<PageConfig, PageError> {
    match document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) {
        Some(raw) => PageConfig::from_json(&raw),
        None => Ok(PageConfig::default()),
    }
}

fn install_logger(config: Option<&PageConfig>) {
    let level = config.map_or(log::Level::Info, |c| c.log_level.as_level());
    if let Err(err) = console_log::init_with_level(level) {
        log::debug!("console logger already installed: {err}");
    }
}

/// Load configuration, install the console logger, and mount every controller.
///
/// Controllers are mounted independently: one failing does not stop the
/// others. Each failure is logged and the first one is returned.
///
/// # Errors
///
/// Returns the configuration error, or the first controller mount error.
pub fn boot() -> Result<(), PageError> {
    let mut page = Page::from_global(PageConfig::default())?;
    page.config = match load_config(&page.document) {
        Ok(config) => config,
        Err(err) => {
            install_logger(None);
            log::error!("page effects disabled: {err}");
            return Err(err);
        }
    };
    install_logger(Some(&page.config));

    let page = &page;
    let mounts: [Mount<'_>; 3] = [
        ("theme", Box::new(move || theme::mount(page))),
        ("scroll-to-top", Box::new(move || scroll::mount(page))),
        ("reveal", Box::new(move || reveal::mount(page))),
    ];
    mount_all(mounts)
}

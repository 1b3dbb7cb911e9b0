//! Theme toggle wiring: document root attribute, `localStorage`, toggle icon.
//!
//! The presentation attribute is set on `<html>`, not on `<body>`. Stylesheets
//! must select on `:root[data-theme=...]` (or `html[data-theme=...]`); rules
//! keyed on `body[data-theme=...]` never match.

use std::rc::Rc;

use web_sys::{Element, Event, Storage};

use super::{Page, listen};
use crate::action::Action;
use crate::boot::defer_until_loaded;
use crate::error::PageError;
use crate::theme::{Theme, ThemeController};

struct ThemeDom {
    root: Element,
    toggle: Element,
    storage: Storage,
    storage_key: String,
    attribute: String,
}

impl ThemeDom {
    fn stored(&self) -> Option<String> {
        match self.storage.get_item(&self.storage_key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("reading theme preference failed: {err:?}");
                None
            }
        }
    }

    fn current(&self) -> Option<String> {
        self.root.get_attribute(&self.attribute)
    }

    fn persist(&self, theme: Theme) -> Result<(), PageError> {
        self.storage.set_item(&self.storage_key, theme.as_str())?;
        Ok(())
    }

    fn execute(&self, action: &Action) -> Result<(), PageError> {
        match action {
            Action::SetThemeAttribute(theme) => self.root.set_attribute(&self.attribute, theme.as_str())?,
            Action::PersistTheme(theme) => self.persist(*theme)?,
            Action::SetToggleIcon { class } => self.toggle.set_inner_html(&format!(r#"<i class="{class}"></i>"#)),
            other => log::warn!("theme shell ignoring {other:?}"),
        }
        Ok(())
    }

    fn run(&self, actions: Vec<Action>) {
        for action in actions {
            if let Err(err) = self.execute(&action) {
                log::warn!("{action:?} failed: {err}");
            }
        }
    }
}

/// Resolve the toggle and storage, apply the initial theme, listen for clicks.
///
/// The initial theme is applied on `DOMContentLoaded` while the document is
/// still loading, and immediately otherwise.
pub(super) fn mount(page: &Page) -> Result<(), PageError> {
    let config = &page.config;
    let toggle = page.element_by_id(&config.theme_toggle_id)?;
    let root = page.document.document_element().ok_or(PageError::NoDocument)?;
    let Ok(Some(storage)) = page.window.local_storage() else {
        return Err(PageError::StorageUnavailable);
    };

    let dom = Rc::new(ThemeDom {
        root,
        toggle: toggle.clone(),
        storage,
        storage_key: config.storage_key.clone(),
        attribute: config.theme_attribute.clone(),
    });
    let controller = Rc::new(ThemeController::new(config));

    let init = {
        let dom = Rc::clone(&dom);
        let controller = Rc::clone(&controller);
        move || dom.run(controller.init(dom.stored().as_deref()))
    };
    if defer_until_loaded(&page.document.ready_state()) {
        listen(&page.document, "DOMContentLoaded", Box::new(move |_: Event| init()))?;
    } else {
        init();
    }

    listen(
        &toggle,
        "click",
        Box::new(move |_: Event| {
            let current = dom.current();
            dom.run(controller.toggle(current.as_deref()));
        }),
    )
}

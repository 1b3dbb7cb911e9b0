//! Scroll-to-top wiring: window scroll listener and button click.

use std::rc::Rc;

use web_sys::{Event, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use super::{Page, listen};
use crate::action::Action;
use crate::error::PageError;
use crate::scroll::ScrollButton;

struct ScrollDom {
    window: Window,
    button: HtmlElement,
    display: String,
}

impl ScrollDom {
    fn offset(&self) -> f64 {
        match self.window.scroll_y() {
            Ok(offset) => offset,
            Err(err) => {
                log::warn!("reading scroll offset failed: {err:?}");
                0.0
            }
        }
    }

    fn execute(&self, action: &Action) -> Result<(), PageError> {
        match action {
            Action::SetScrollButtonVisible(visible) => {
                let display = if *visible { self.display.as_str() } else { "none" };
                self.button.style().set_property("display", display)?;
            }
            Action::ScrollToTop => {
                let options = ScrollToOptions::new();
                options.set_top(0.0);
                options.set_behavior(ScrollBehavior::Smooth);
                self.window.scroll_to_with_scroll_to_options(&options);
            }
            other => log::warn!("scroll shell ignoring {other:?}"),
        }
        Ok(())
    }

    fn run(&self, action: Action) {
        if let Err(err) = self.execute(&action) {
            log::warn!("{action:?} failed: {err}");
        }
    }
}

/// Resolve the button, sync its visibility, and listen for scrolls and clicks.
pub(super) fn mount(page: &Page) -> Result<(), PageError> {
    let config = &page.config;
    let button = page.html_element_by_id(&config.scroll_button_id)?;
    let controller = ScrollButton::new(config);
    let dom = Rc::new(ScrollDom {
        window: page.window.clone(),
        button: button.clone(),
        display: config.scroll_button_display.clone(),
    });

    // The page may be restored mid-scroll, so sync before the first event.
    dom.run(controller.on_scroll(dom.offset()));

    {
        let dom = Rc::clone(&dom);
        listen(
            &page.window,
            "scroll",
            Box::new(move |_: Event| dom.run(controller.on_scroll(dom.offset()))),
        )?;
    }

    listen(&button, "click", Box::new(move |_: Event| dom.run(controller.on_click())))
}

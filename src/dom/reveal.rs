//! Reveal wiring: one shared `IntersectionObserver` over the `.fade-in` set.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Array, Map};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::Page;
use crate::action::Action;
use crate::error::PageError;
use crate::reveal::{IntersectionSample, RevealId, RevealTracker};

struct RevealDom {
    elements: Vec<Element>,
    /// Element -> index into `elements`, for O(1) lookup per entry.
    index: Map,
    appear_class: String,
}

impl RevealDom {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn id_of(&self, target: &Element) -> Option<RevealId> {
        self.index.get(target).as_f64().map(|raw| RevealId(raw as usize))
    }

    fn sample(&self, value: JsValue) -> Option<IntersectionSample> {
        let entry = match value.dyn_into::<IntersectionObserverEntry>() {
            Ok(entry) => entry,
            Err(other) => {
                log::warn!("unexpected intersection entry: {other:?}");
                return None;
            }
        };
        let id = self.id_of(&entry.target())?;
        Some(IntersectionSample::new(id, entry.is_intersecting()))
    }

    fn execute(&self, observer: &IntersectionObserver, action: &Action) -> Result<(), PageError> {
        match action {
            Action::Reveal(id) | Action::Unobserve(id) => {
                let element = self
                    .elements
                    .get(id.0)
                    .ok_or_else(|| PageError::Js(format!("reveal element {} out of range", id.0)))?;
                if matches!(action, Action::Reveal(_)) {
                    element.class_list().add_1(&self.appear_class)?;
                } else {
                    observer.unobserve(element);
                }
            }
            other => log::warn!("reveal shell ignoring {other:?}"),
        }
        Ok(())
    }
}

fn collect(page: &Page) -> Result<Vec<Element>, PageError> {
    let nodes = page.document.query_selector_all(&format!(".{}", page.config.fade_in_class))?;
    let mut elements = Vec::new();
    for i in 0..nodes.length() {
        if let Some(node) = nodes.item(i) {
            if let Ok(element) = node.dyn_into::<Element>() {
                elements.push(element);
            }
        }
    }
    Ok(elements)
}

/// Collect the reveal set once and observe every member with a shared watcher.
pub(super) fn mount(page: &Page) -> Result<(), PageError> {
    let config = &page.config;
    let elements = collect(page)?;
    if elements.is_empty() {
        log::info!("no .{} elements to reveal", config.fade_in_class);
        return Ok(());
    }

    let index = Map::new();
    for (i, element) in (0u32..).zip(&elements) {
        index.set(element, &JsValue::from(i));
    }

    let tracker = Rc::new(RefCell::new(RevealTracker::new(elements.len())));
    let dom = Rc::new(RevealDom { elements, index, appear_class: config.appear_class.clone() });

    let callback = {
        let dom = Rc::clone(&dom);
        Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let samples: Vec<IntersectionSample> = entries.iter().filter_map(|value| dom.sample(value)).collect();
            let actions = tracker.borrow_mut().on_intersections(&samples);
            for action in &actions {
                if let Err(err) = dom.execute(&observer, action) {
                    log::warn!("{action:?} failed: {err}");
                }
            }
            if tracker.borrow().is_complete() {
                log::debug!("every element revealed; disconnecting observer");
                observer.disconnect();
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>)
    };

    let options = IntersectionObserverInit::new();
    options.set_root_margin(&config.root_margin());
    options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for element in &dom.elements {
        observer.observe(element);
    }
    log::info!("observing {} element(s) for reveal", dom.elements.len());
    Ok(())
}

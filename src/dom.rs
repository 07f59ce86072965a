//! Thin wrappers over the browser APIs the controllers drive.

use std::cell::Cell;

use log::{debug, error, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Date};
use web_sys::{
    window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions,
};

use crate::gallery::ScrollLock;

pub fn now_ms() -> f64 {
    Date::now()
}

/// Current URL fragment without the leading `#`.
pub fn current_fragment() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .map(|hash| hash.trim_start_matches('#').to_string())
        .unwrap_or_default()
}

pub fn set_fragment(fragment: &str) {
    if let Some(window) = window() {
        if let Err(e) = window.location().set_hash(fragment) {
            error!("Failed to set fragment {:?}: {:?}", fragment, e);
        }
    }
}

/// Drops the fragment from the address bar without firing `hashchange`.
pub fn clear_fragment() {
    let Some(window) = window() else { return };
    let location = window.location();
    let path = format!(
        "{}{}",
        location.pathname().unwrap_or_default(),
        location.search().unwrap_or_default()
    );
    match window.history() {
        Ok(history) => {
            if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(&path)) {
                error!("Failed to clear fragment: {:?}", e);
            }
        }
        Err(e) => error!("History unavailable: {:?}", e),
    }
}

pub fn scroll_to_top() {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Smoothly brings the element with `id` to the top of the viewport.
pub fn scroll_into_view(id: &str) {
    let element = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => warn!("No element #{} to scroll to", id),
    }
}

thread_local! {
    static SCROLL_LOCKED: Cell<bool> = Cell::new(false);
}

/// Page scroll lock backed by `overflow: hidden` on `<body>`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BodyScrollLock;

pub struct BodyScrollGuard;

fn set_body_overflow(hidden: bool) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let style = body.style();
    let result = if hidden {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
    if let Err(e) = result {
        error!("Failed to update body overflow: {:?}", e);
    }
}

impl ScrollLock for BodyScrollLock {
    type Guard = BodyScrollGuard;

    fn acquire(&self) -> Option<BodyScrollGuard> {
        if SCROLL_LOCKED.with(|locked| locked.replace(true)) {
            return None;
        }
        set_body_overflow(true);
        debug!("Page scroll locked");
        Some(BodyScrollGuard)
    }
}

impl Drop for BodyScrollGuard {
    fn drop(&mut self) {
        set_body_overflow(false);
        SCROLL_LOCKED.with(|locked| locked.set(false));
        debug!("Page scroll released");
    }
}

/// Reports when an element enters or leaves the viewport.
///
/// Observation stops when this is dropped.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilityObserver {
    /// `threshold` is the visible fraction that counts as "in view".
    pub fn observe(
        element: &Element,
        threshold: f64,
        on_change: impl FnMut(bool) + 'static,
    ) -> Option<Self> {
        Self::attach(element, threshold, false, on_change)
    }

    /// Fires `on_visible` the first time the element is in view, then
    /// disconnects.
    pub fn observe_once(
        element: &Element,
        threshold: f64,
        on_visible: impl FnOnce() + 'static,
    ) -> Option<Self> {
        Self::attach(element, threshold, true, once_visible(on_visible))
    }

    fn attach(
        element: &Element,
        threshold: f64,
        once: bool,
        mut on_change: impl FnMut(bool) + 'static,
    ) -> Option<Self> {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    let visible =
                        in_view(entry.is_intersecting(), entry.intersection_ratio(), threshold);
                    on_change(visible);
                    if visible && once {
                        observer.disconnect();
                        return;
                    }
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                Ok(observer) => observer,
                Err(e) => {
                    error!("IntersectionObserver unavailable: {:?}", e);
                    return None;
                }
            };
        observer.observe(element);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

// `isIntersecting` stays true just below the threshold, so check the ratio too.
fn in_view(intersecting: bool, ratio: f64, threshold: f64) -> bool {
    intersecting && ratio >= threshold
}

fn once_visible(on_visible: impl FnOnce() + 'static) -> impl FnMut(bool) + 'static {
    let mut pending = Some(on_visible);
    move |visible| {
        if visible {
            if let Some(on_visible) = pending.take() {
                on_visible();
            }
        }
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn ratio_below_threshold_is_not_in_view() {
        assert!(in_view(true, 0.6, 0.6));
        assert!(!in_view(true, 0.59, 0.6));
        assert!(!in_view(false, 0.0, 0.0));
    }

    #[test]
    fn once_visible_fires_a_single_time() {
        let fired = Rc::new(Cell::new(0));
        let mut on_change = {
            let fired = Rc::clone(&fired);
            once_visible(move || fired.set(fired.get() + 1))
        };
        on_change(false);
        assert_eq!(fired.get(), 0);
        on_change(true);
        on_change(false);
        on_change(true);
        assert_eq!(fired.get(), 1);
    }
}

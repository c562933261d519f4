use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

// Browsers report ratios like 0.0999 for an element sitting exactly on the line.
const RATIO_TOLERANCE: f64 = 1e-3;

pub fn crossed(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    is_intersecting && ratio + RATIO_TOLERANCE >= threshold
}

/// Watches a single element until it first becomes visible enough.
/// Dropping the guard disconnects the underlying `IntersectionObserver`.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilityObserver {
    pub fn observe_once(
        target: &Element,
        threshold: f64,
        root_margin: Option<&str>,
        on_enter: impl FnOnce() + 'static,
    ) -> Result<Self, JsValue> {
        let mut on_enter = Some(on_enter);
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !crossed(entry.is_intersecting(), entry.intersection_ratio(), threshold) {
                    continue;
                }
                observer.unobserve(&entry.target());
                if let Some(on_enter) = on_enter.take() {
                    on_enter();
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        if let Some(margin) = root_margin {
            options.set_root_margin(margin);
        }

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(target);

        Ok(Self { observer, _callback: callback })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::crossed;

    #[test]
    fn needs_both_intersection_and_ratio() {
        assert!(crossed(true, 0.5, 0.5));
        assert!(crossed(true, 0.4995, 0.5));
        assert!(crossed(true, 1.0, 0.1));
        assert!(!crossed(true, 0.3, 0.5));
        assert!(!crossed(false, 1.0, 0.1));
    }
}

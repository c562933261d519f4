use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::config;

/// Element id an in-page link points at, `None` for anything but `#id`.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Document offset that leaves the target just below the fixed header.
pub fn anchor_offset(element_top: f64, page_y_offset: f64) -> f64 {
    element_top + page_y_offset - config::HEADER_OFFSET
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::SCROLLED_THRESHOLD
}

pub fn header_background(scrolled: bool) -> &'static str {
    if scrolled {
        config::HEADER_BG_SCROLLED
    } else {
        config::HEADER_BG_TOP
    }
}

/// Smoothly scrolls to the element with the given id. Returns whether a
/// target was found; a missing target leaves the page untouched.
pub fn scroll_to_section(id: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(target) = window.document().and_then(|doc| doc.get_element_by_id(id)) else {
        log::debug!("No scroll target #{}", id);
        return false;
    };

    let page_y = window.page_y_offset().unwrap_or(0.0);
    let top = anchor_offset(target.get_bounding_client_rect().top(), page_y);

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}

pub fn current_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Trailing-edge debounce: every call restarts the timer, `action` runs
/// once the calls stop for `wait_ms`.
#[derive(Clone)]
pub struct Debouncer {
    wait_ms: u32,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debouncer {
    pub fn new(wait_ms: u32) -> Self {
        Self {
            wait_ms,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    pub fn call(&self, action: impl FnOnce() + 'static) {
        let timeout = Timeout::new(self.wait_ms, action);
        // Replacing the handle drops, and so cancels, the previous timer.
        *self.pending.borrow_mut() = Some(timeout);
    }

    pub fn cancel(&self) {
        self.pending.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_ids_need_a_hash_and_a_name() {
        assert_eq!(fragment_id("#download"), Some("download"));
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id("download"), None);
        assert_eq!(fragment_id("https://example.com/#faq"), None);
    }

    #[test]
    fn anchor_offset_keeps_header_clear() {
        assert_eq!(anchor_offset(500.0, 0.0), 420.0);
        assert_eq!(anchor_offset(-200.0, 1000.0), 720.0);
    }

    #[test]
    fn header_background_has_two_states() {
        for y in [0.0, 50.0, 100.0, 100.5, 2000.0] {
            let bg = header_background(is_scrolled(y));
            let expected = if y > 100.0 {
                "rgba(31, 41, 55, 0.98)"
            } else {
                "rgba(31, 41, 55, 0.95)"
            };
            assert_eq!(bg, expected, "scroll_y = {}", y);
        }
    }
}

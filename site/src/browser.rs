//! Browser glue: section measurement, smooth scrolling and the scroll listener.
//!
//! Everything here touches `web_sys::window()`, so it only ever runs from
//! event handlers and effects, never during server-side rendering. A missing
//! `window` or section element turns every operation into a no-op.

use leptos::ev;
use leptos::prelude::*;
use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

use crate::scroll::{SectionBounds, locate_section};
use crate::state::UiState;
use crate::types::SectionId;

/// Measure every section present in the document, in document order.
pub fn measure_sections(document: &web_sys::Document) -> Vec<(SectionId, SectionBounds)> {
    SectionId::ALL
        .into_iter()
        .filter_map(|section| {
            let element = document
                .get_element_by_id(section.anchor())?
                .dyn_into::<HtmlElement>()
                .ok()?;
            let bounds = SectionBounds::new(
                f64::from(element.offset_top()),
                f64::from(element.offset_height()),
            );
            Some((section, bounds))
        })
        .collect()
}

/// Smooth-scroll the section into view. Its `scroll-margin-top` keeps the
/// heading clear of the fixed header.
pub fn scroll_to_section(section: SectionId) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(element) = document.get_element_by_id(section.anchor()) else {
        debug!(%section, "scroll target not in document");
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Recompute the active section from the live scroll offset.
///
/// Only writes the signal when the highlight actually changes, so repeated
/// scroll events at the same position are free.
pub fn sync_active_section(ui: RwSignal<UiState>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let scroll_y = window.scroll_y().unwrap_or_default();
    let located = locate_section(scroll_y, measure_sections(&document));

    let current = ui.get_untracked();
    let next = current.scrolled_to(located);
    if next != current {
        debug!(from = %current.active_section, to = %next.active_section, scroll_y, "active section changed");
        ui.set(next);
    }
}

/// Window scroll listener owned as a value.
///
/// Attaching registers the listener; dropping the tracker removes it.
/// Register the drop with `on_cleanup` to tie the listener to a component.
pub struct ScrollTracker {
    detach: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl ScrollTracker {
    pub fn attach(ui: RwSignal<UiState>) -> Self {
        let handle = window_event_listener(ev::scroll, move |_| sync_active_section(ui));
        debug!("scroll tracker attached");
        Self {
            detach: Some(Box::new(move || handle.remove())),
        }
    }

    /// Whether the listener is still registered.
    pub fn is_attached(&self) -> bool {
        self.detach.is_some()
    }
}

impl Drop for ScrollTracker {
    fn drop(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
            debug!("scroll tracker detached");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_tracker(calls: &Arc<AtomicUsize>) -> ScrollTracker {
        let calls = Arc::clone(calls);
        ScrollTracker {
            detach: Some(Box::new(move || {
                calls.fetch_add(1, Ordering::SeqCst);
            })),
        }
    }

    #[test]
    fn dropping_tracker_detaches_listener_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let tracker = counting_tracker(&calls);
        assert!(tracker.is_attached());
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        drop(tracker);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn each_tracker_releases_its_own_listener() {
        let calls = Arc::new(AtomicUsize::new(0));
        let first = counting_tracker(&calls);
        let second = counting_tracker(&calls);

        drop(first);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(second.is_attached());
        drop(second);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}

//! DOM scroll target for keyboard avoidance.

use capability_bridge::device::ScrollTarget;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Wraps the focused input element so the keyboard watcher can center
/// it once the soft keyboard has started animating in.
pub struct DomScrollTarget {
    element: Element,
}

impl DomScrollTarget {
    pub fn new(element: Element) -> Self {
        Self { element }
    }
}

impl ScrollTarget for DomScrollTarget {
    fn scroll_into_view_centered(&self) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Center);
        self.element
            .scroll_into_view_with_scroll_into_view_options(&options);
    }
}

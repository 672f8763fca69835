//! The floating "back to top" button.

use dashboard_web_ui_shared::constants::CLASS_SHOW;
use dashboard_web_ui_shared::utils::{query, set_class, window};
use gloo::events::{EventListener, EventListenerOptions};
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::constants::{CSS_SCROLL_TO_TOP, SCROLL_TO_TOP_THRESHOLD_PX};

pub fn should_show(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TO_TOP_THRESHOLD_PX
}

pub fn initialize() {
    let Some(button) = query(CSS_SCROLL_TO_TOP) else {
        return;
    };

    let target = button.clone();
    EventListener::new(&window(), "scroll", move |_| {
        let scroll_y = window().scroll_y().unwrap_or_default();
        set_class(&target, CLASS_SHOW, should_show(scroll_y));
    })
    .forget();

    EventListener::new_with_options(
        &button,
        "click",
        EventListenerOptions::enable_prevent_default(),
        |event| {
            event.prevent_default();
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window().scroll_to_with_scroll_to_options(&options);
        },
    )
    .forget();
}

#[cfg(test)]
mod tests {
    use super::should_show;

    #[test]
    fn shows_past_the_threshold() {
        assert!(!should_show(0.0));
        assert!(!should_show(100.0));
        assert!(should_show(100.5));
        assert!(should_show(4000.0));
    }
}

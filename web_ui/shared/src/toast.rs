//! Toast notifications.
//!
//! Server rendered toasts get shown on load by [initialize_existing], anything raised later
//! goes through [create]. JavaScript on the page can raise one with `showToast(message, type)`.

use enum_iterator::{all, Sequence};
use gloo::console;
use gloo::events::EventListener;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::prelude::*;

use crate::bootstrap;
use crate::constants::{
    ATTR_BS_DELAY, CSS_CLASSES_TOAST, CSS_TOAST, CSS_TOAST_CONTAINER, EVENT_TOAST_HIDDEN,
    TOAST_DEFAULT_DELAY_MS,
};
use crate::error::UiError;
use crate::utils::{self, add_class, query, query_all};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Sequence)]
pub enum ToastKind {
    Success,
    Error,
    Danger,
    Warning,
    #[default]
    Info,
}

impl ToastKind {
    pub fn tag(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Danger => "danger",
            ToastKind::Warning => "warning",
            ToastKind::Info => "info",
        }
    }

    /// Unknown tags fall back to [ToastKind::Info]
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim();
        all::<ToastKind>()
            .find(|kind| kind.tag().eq_ignore_ascii_case(tag))
            .unwrap_or_default()
    }

    pub fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "fa-check-circle",
            ToastKind::Error | ToastKind::Danger => "fa-exclamation-circle",
            ToastKind::Warning => "fa-exclamation-triangle",
            ToastKind::Info => "fa-info-circle",
        }
    }

    /// bootstrap has no `bg-error`, errors borrow the danger palette
    pub fn background_class(self) -> &'static str {
        match self {
            ToastKind::Success => "bg-success",
            ToastKind::Error | ToastKind::Danger => "bg-danger",
            ToastKind::Warning => "bg-warning",
            ToastKind::Info => "bg-info",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToastOptions {
    /// How long the toast stays up, in milliseconds
    pub delay: Option<u32>,
}

impl ToastOptions {
    pub fn delay_ms(self) -> u32 {
        match self.delay {
            Some(0) | None => TOAST_DEFAULT_DELAY_MS,
            Some(delay) => delay,
        }
    }
}

/// Reads a `data-bs-delay` attribute, anything that isn't a positive number means the default
pub fn parse_delay(value: Option<&str>) -> u32 {
    value
        .and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|delay| *delay > 0)
        .unwrap_or(TOAST_DEFAULT_DELAY_MS)
}

/// What gets handed to `new bootstrap.Toast(..)`
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct BootstrapToastConfig {
    pub autohide: bool,
    pub delay: u32,
}

#[derive(Properties, PartialEq, Clone)]
pub struct ToastBodyProps {
    pub message: AttrValue,
    pub kind: ToastKind,
}

#[function_component(ToastBody)]
pub fn toast_body(props: &ToastBodyProps) -> Html {
    html! {
        <div class="d-flex">
            <div class="toast-body d-flex align-items-center">
                <i class={classes!("fas", props.kind.icon(), "me-2")}></i>
                <span>{ props.message.clone() }</span>
            </div>
            <button type="button" class="btn-close btn-close-white me-3 m-auto"
                data-bs-dismiss="toast" aria-label="Close"></button>
        </div>
    }
}

fn build_host(kind: ToastKind, delay: u32) -> Result<Element, UiError> {
    let toast_el = utils::document().create_element("div")?;
    for class in CSS_CLASSES_TOAST.iter() {
        add_class(&toast_el, class);
    }
    add_class(&toast_el, kind.background_class());
    toast_el.set_attribute("role", "alert")?;
    toast_el.set_attribute("aria-live", "assertive")?;
    toast_el.set_attribute("aria-atomic", "true")?;
    toast_el.set_attribute(ATTR_BS_DELAY, &delay.to_string())?;
    Ok(toast_el)
}

/// Creates a toast, adds it to the page's toast container (or the body) and shows it.
pub fn create(message: &str, kind: ToastKind, options: ToastOptions) -> Result<(), UiError> {
    let delay = options.delay_ms();
    let toast_el = build_host(kind, delay)?;

    let container: Element = match query(CSS_TOAST_CONTAINER) {
        Some(container) => container,
        None => utils::body().ok_or(UiError::MissingGlobal("document.body"))?.into(),
    };
    container.append_child(&toast_el)?;

    let app = yew::Renderer::<ToastBody>::with_root_and_props(
        toast_el.clone(),
        ToastBodyProps {
            message: AttrValue::from(message.to_string()),
            kind,
        },
    )
    .render();

    // show() takes the host element off the page, this just unmounts what yew put in it
    EventListener::once(&toast_el, EVENT_TOAST_HIDDEN, move |_| app.destroy()).forget();

    show(&toast_el, delay)
}

/// Hands an existing toast element to bootstrap, which hides it after `delay`. The element is
/// dropped from the page once it's hidden.
pub fn show(toast_el: &Element, delay: u32) -> Result<(), UiError> {
    if !utils::has_global("bootstrap") {
        return Err(UiError::MissingGlobal("bootstrap"));
    }
    let config = serde_wasm_bindgen::to_value(&BootstrapToastConfig {
        autohide: true,
        delay,
    })?;
    let toast = bootstrap::Toast::new(toast_el, &config)?;
    toast.show()?;

    let host = toast_el.clone();
    EventListener::once(toast_el, EVENT_TOAST_HIDDEN, move |_| host.remove()).forget();
    Ok(())
}

/// Shows every toast the server rendered into the page.
pub fn initialize_existing() {
    for toast_el in query_all(CSS_TOAST) {
        let delay = parse_delay(toast_el.get_attribute(ATTR_BS_DELAY).as_deref());
        if let Err(e) = show(&toast_el, delay) {
            console::error!(format!("failed to show toast -> {}", e));
        }
    }
}

/// Raises a toast and logs instead of failing, for callers that can't do anything about it.
pub fn notify(message: &str, kind: ToastKind) {
    if let Err(e) = create(message, kind, ToastOptions::default()) {
        console::error!(format!("failed to create toast -> {}", e));
    }
}

/// `showToast("Saved", "success")` for scripts on the page
// wasm_bindgen hands us owned values
#[allow(clippy::needless_pass_by_value)]
#[wasm_bindgen(js_name = showToast)]
pub fn show_toast(message: &str, kind: Option<String>, delay: Option<u32>) {
    let kind = kind.as_deref().map(ToastKind::from_tag).unwrap_or_default();
    if let Err(e) = create(message, kind, ToastOptions { delay }) {
        console::error!(format!("showToast failed -> {}", e));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_parse_back() {
        for kind in all::<ToastKind>() {
            assert_eq!(ToastKind::from_tag(kind.tag()), kind);
        }
        assert_eq!(ToastKind::from_tag(" Warning "), ToastKind::Warning);
    }

    #[test]
    fn unknown_tag_is_info() {
        assert_eq!(ToastKind::from_tag("primary"), ToastKind::Info);
        assert_eq!(ToastKind::from_tag(""), ToastKind::Info);
    }

    #[test]
    fn error_and_danger_look_the_same() {
        assert_eq!(ToastKind::Error.icon(), ToastKind::Danger.icon());
        assert_eq!(ToastKind::Error.background_class(), "bg-danger");
        assert_eq!(ToastKind::Success.icon(), "fa-check-circle");
        assert_eq!(ToastKind::Warning.icon(), "fa-exclamation-triangle");
        assert_eq!(ToastKind::Info.background_class(), "bg-info");
    }

    #[test]
    fn delay_defaults() {
        assert_eq!(ToastOptions::default().delay_ms(), 5000);
        assert_eq!(ToastOptions { delay: Some(0) }.delay_ms(), 5000);
        assert_eq!(ToastOptions { delay: Some(1200) }.delay_ms(), 1200);

        assert_eq!(parse_delay(None), 5000);
        assert_eq!(parse_delay(Some("")), 5000);
        assert_eq!(parse_delay(Some("abc")), 5000);
        assert_eq!(parse_delay(Some("0")), 5000);
        assert_eq!(parse_delay(Some(" 3000 ")), 3000);
    }
}

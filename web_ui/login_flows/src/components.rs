//! Login form behaviour
//!
//! The form is rendered by the server and posted natively, this only checks the required
//! fields are filled in first and keeps the user informed while it goes.

use dashboard_web_ui_shared::bootstrap;
use dashboard_web_ui_shared::constants::{CLASS_IS_INVALID, CLASS_SHOW};
use dashboard_web_ui_shared::toast::{self, ToastKind};
use dashboard_web_ui_shared::utils::{
    add_class, flash_class, get_element_by_id, get_typed_by_id, query, query_all, query_all_in,
    query_in, remove_class,
};
use gloo::console;
use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement};

use crate::constants::{
    ALERT_CLOSE_MS, CLASS_ACTIVE, CLASS_FOCUSED, CLASS_HIDDEN, CLASS_WAS_VALIDATED,
    CSS_ALERT, CSS_ALERT_DANGER, CSS_FORM_CONTROL, CSS_NEEDS_VALIDATION, CSS_REQUIRED,
    CSS_SPINNER, CSS_SUBMIT_BUTTON, CSS_SUBMIT_TEXT, CSS_TOGGLE_PASSWORD, ICON_FLASH_MS,
    ICON_ID_SUFFIX, IDS_CREDENTIAL_FIELDS, ID_PASSWORD, MSG_REQUIRED_FIELDS, MSG_VERIFYING,
    SHAKE_ANIMATION, SHAKE_MS, SUBMIT_DELAY_MS, TOGGLE_FLASH_MS,
};

/// The input type the password field switches to when the eye is clicked
pub fn toggled_input_type(current: &str) -> &'static str {
    if current == "password" {
        "text"
    } else {
        "password"
    }
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Where a field's warning icon lives, `password` -> `password-icon`
pub fn icon_id_for(field_id: &str) -> String {
    format!("{}{}", field_id, ICON_ID_SUFFIX)
}

/// Reads `.value` off inputs, selects and textareas alike
fn field_value(field: &Element) -> String {
    js_sys::Reflect::get(field, &JsValue::from_str("value"))
        .ok()
        .and_then(|value| value.as_string())
        .unwrap_or_default()
}

fn shake(field: &Element) {
    let Some(field) = field.dyn_ref::<HtmlElement>() else {
        return;
    };
    if let Err(e) = field.style().set_property("animation", SHAKE_ANIMATION) {
        console::error!(format!("failed to start shake -> {:?}", e));
        return;
    }
    let field = field.clone();
    Timeout::new(SHAKE_MS, move || {
        if let Err(e) = field.style().remove_property("animation") {
            console::error!(format!("failed to stop shake -> {:?}", e));
        }
    })
    .forget();
}

fn setup_password_toggle() {
    let (Some(button), Some(password)) = (
        query(CSS_TOGGLE_PASSWORD),
        get_typed_by_id::<HtmlInputElement>(ID_PASSWORD),
    ) else {
        return;
    };

    let target = button.clone();
    EventListener::new_with_options(
        &button,
        "click",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            event.prevent_default();
            password.set_type(toggled_input_type(&password.type_()));
            flash_class(&target, CLASS_ACTIVE, TOGGLE_FLASH_MS);
        },
    )
    .forget();
}

/// Marks blank required fields, returning whether everything was filled in.
fn check_required(form: &HtmlFormElement) -> bool {
    let mut valid = true;
    for field in query_all_in(form, CSS_REQUIRED) {
        remove_class(&field, CLASS_IS_INVALID);
        if !is_blank(&field_value(&field)) {
            continue;
        }
        valid = false;
        add_class(&field, CLASS_IS_INVALID);
        if let Some(icon) = get_element_by_id(&icon_id_for(&field.id())) {
            flash_class(&icon, CLASS_SHOW, ICON_FLASH_MS);
        }
        shake(&field);
    }
    valid
}

/// Locks the submit button and swaps its label for the spinner.
fn set_submitting(form: &HtmlFormElement) {
    let Some(button) = query_in(form, CSS_SUBMIT_BUTTON) else {
        return;
    };
    if let Some(button) = button.dyn_ref::<HtmlButtonElement>() {
        button.set_disabled(true);
    }
    if let Some(spinner) = query_in(&button, CSS_SPINNER) {
        remove_class(&spinner, CLASS_HIDDEN);
    }
    if let Some(text) = query_in(&button, CSS_SUBMIT_TEXT) {
        text.set_text_content(Some(MSG_VERIFYING));
    }
}

fn on_submit(form: &HtmlFormElement) {
    if !check_required(form) {
        add_class(form, CLASS_WAS_VALIDATED);
        toast::notify(MSG_REQUIRED_FIELDS, ToastKind::Danger);
        return;
    }

    set_submitting(form);
    let form = form.clone();
    // long enough for the spinner to paint
    Timeout::new(SUBMIT_DELAY_MS, move || {
        if let Err(e) = form.submit() {
            console::error!(format!("failed to submit login form -> {:?}", e));
        }
    })
    .forget();
}

fn setup_form_validation() {
    let Some(form) = query(CSS_NEEDS_VALIDATION).and_then(|f| f.dyn_into::<HtmlFormElement>().ok())
    else {
        return;
    };

    let target = form.clone();
    EventListener::new_with_options(
        &form,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            event.prevent_default();
            on_submit(&target);
        },
    )
    .forget();

    for input in query_all_in(&form, "input") {
        let target = input.clone();
        EventListener::new(&input, "input", move |_| {
            remove_class(&target, CLASS_IS_INVALID)
        })
        .forget();
    }
}

/// The server rejected the credentials, so flag both fields until the user goes back to them.
fn setup_error_effects() {
    if query(CSS_ALERT_DANGER).is_none() {
        return;
    }
    for id in IDS_CREDENTIAL_FIELDS {
        let Some(field) = get_element_by_id(id) else {
            continue;
        };
        add_class(&field, CLASS_IS_INVALID);
        let target = field.clone();
        EventListener::once(&field, "focus", move |_| {
            remove_class(&target, CLASS_IS_INVALID)
        })
        .forget();
    }
}

fn auto_close_alerts() {
    for alert in query_all(CSS_ALERT) {
        Timeout::new(ALERT_CLOSE_MS, move || {
            let res = bootstrap::Alert::alert_get_or_create_instance(&alert).and_then(|a| a.close());
            if let Err(e) = res {
                console::warn!(format!("failed to close alert -> {:?}", e));
            }
        })
        .forget();
    }
}

fn setup_input_animations() {
    for input in query_all(CSS_FORM_CONTROL) {
        let Some(parent) = input.parent_element() else {
            continue;
        };
        let focused = parent.clone();
        EventListener::new(&input, "focus", move |_| add_class(&focused, CLASS_FOCUSED)).forget();
        EventListener::new(&input, "blur", move |_| remove_class(&parent, CLASS_FOCUSED)).forget();
    }
}

/// Wires up the login form. Anything missing from the page is skipped.
pub fn initialize() {
    #[cfg(debug_assertions)]
    console::debug!("login::initialize");
    setup_password_toggle();
    setup_form_validation();
    setup_error_effects();
    auto_close_alerts();
    setup_input_animations();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_visibility_flips() {
        assert_eq!(toggled_input_type("password"), "text");
        assert_eq!(toggled_input_type("text"), "password");
        // anything odd goes back to hidden
        assert_eq!(toggled_input_type(""), "password");
    }

    #[test]
    fn blank_means_whitespace_only() {
        assert!(is_blank(""));
        assert!(is_blank("   \t\n"));
        assert!(!is_blank(" admin "));
    }

    #[test]
    fn icons_are_named_after_fields() {
        assert_eq!(icon_id_for("username"), "username-icon");
        assert_eq!(icon_id_for("password"), "password-icon");
    }
}

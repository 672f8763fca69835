//! Bindings for the bits of Bootstrap's JavaScript API the dashboard drives.
//!
//! Everything is `catch`, so a page that didn't load bootstrap gets an `Err` rather than an
//! uncaught ReferenceError.

use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Toast;

    #[wasm_bindgen(catch, constructor, js_namespace = bootstrap, js_class = "Toast")]
    pub fn new(element: &Element, options: &JsValue) -> Result<Toast, JsValue>;

    #[wasm_bindgen(catch, method)]
    pub fn show(this: &Toast) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, method)]
    pub fn hide(this: &Toast) -> Result<(), JsValue>;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Alert;

    #[wasm_bindgen(catch, js_namespace = ["bootstrap", "Alert"], js_name = getOrCreateInstance)]
    pub fn alert_get_or_create_instance(element: &Element) -> Result<Alert, JsValue>;

    #[wasm_bindgen(catch, method)]
    pub fn close(this: &Alert) -> Result<(), JsValue>;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Dropdown;

    #[wasm_bindgen(catch, constructor, js_namespace = bootstrap, js_class = "Dropdown")]
    pub fn new(element: &Element) -> Result<Dropdown, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["bootstrap", "Dropdown"], js_name = getInstance)]
    pub fn dropdown_get_instance(element: &Element) -> Result<Option<Dropdown>, JsValue>;

    #[wasm_bindgen(catch, method)]
    pub fn dispose(this: &Dropdown) -> Result<(), JsValue>;
}

/// Throws away any dropdown bootstrap already attached to `toggle` and makes a fresh one, for
/// toggles whose markup was re-rendered by someone else.
pub fn recreate_dropdown(toggle: &Element) -> Result<(), JsValue> {
    if let Some(existing) = Dropdown::dropdown_get_instance(toggle)? {
        existing.dispose()?;
    }
    Dropdown::new(toggle).map(|_| ())
}

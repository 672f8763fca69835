use gloo::console;
use gloo::timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue, UnwrapThrowExt};
use web_sys::{Document, Element, HtmlElement, Window};

/// Gets the equivalent of `window()` in javascript
pub fn window() -> Window {
    web_sys::window().expect_throw("Unable to retrieve window")
}

/// Gets the equivalent of `window().document()` in javascript
pub fn document() -> Document {
    window()
        .document()
        .expect_throw("Unable to retrieve document")
}

/// Gets the equivalent of `document().body()`, pages without a body yet just get `None`
pub fn body() -> Option<HtmlElement> {
    document().body()
}

/// The first element matching `selector`, if there is one
pub fn query(selector: &str) -> Option<Element> {
    document().query_selector(selector).ok().flatten()
}

/// The first element under `parent` matching `selector`, if there is one
pub fn query_in(parent: &Element, selector: &str) -> Option<Element> {
    parent.query_selector(selector).ok().flatten()
}

/// Every element matching `selector`, in document order
pub fn query_all(selector: &str) -> Vec<Element> {
    match document().query_selector_all(selector) {
        Ok(list) => (0..list.length())
            .filter_map(|idx| list.get(idx))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect(),
        Err(e) => {
            console::error!(format!("invalid selector '{}' -> {:?}", selector, e));
            Vec::new()
        }
    }
}

/// Every element under `parent` matching `selector`
pub fn query_all_in(parent: &Element, selector: &str) -> Vec<Element> {
    match parent.query_selector_all(selector) {
        Ok(list) => (0..list.length())
            .filter_map(|idx| list.get(idx))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect(),
        Err(e) => {
            console::error!(format!("invalid selector '{}' -> {:?}", selector, e));
            Vec::new()
        }
    }
}

pub fn get_element_by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

/// Looks up an element by id and casts it, wrong element types count as missing
pub fn get_typed_by_id<T: JsCast>(id: &str) -> Option<T> {
    get_element_by_id(id).and_then(|element| element.dyn_into::<T>().ok())
}

pub fn add_class(element: &Element, class: &str) {
    if let Err(e) = element.class_list().add_1(class) {
        console::error!(format!("class_list add error -> {:?}", e));
    }
}

pub fn remove_class(element: &Element, class: &str) {
    if let Err(e) = element.class_list().remove_1(class) {
        console::error!(format!("class_list removal error -> {:?}", e));
    }
}

/// Adds `class` when `on` is set, removes it otherwise
pub fn set_class(element: &Element, class: &str, on: bool) {
    if on {
        add_class(element, class)
    } else {
        remove_class(element, class)
    }
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

/// Adds `class` to `element` and takes it off again after `millis`. Can't be cancelled.
pub fn flash_class(element: &Element, class: &'static str, millis: u32) {
    add_class(element, class);
    let element = element.clone();
    Timeout::new(millis, move || remove_class(&element, class)).forget();
}

/// The current viewport width in CSS pixels
pub fn viewport_width() -> Option<f64> {
    window().inner_width().ok().and_then(|w| w.as_f64())
}

/// Reads a CSS custom property off the document root's computed style, trimmed.
pub fn root_css_var(name: &str) -> Option<String> {
    let root = document().document_element()?;
    let style = window().get_computed_style(&root).ok().flatten()?;
    let value = style.get_property_value(name).ok()?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Whether a third party script has registered `name` on the global object
pub fn has_global(name: &str) -> bool {
    js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str(name)).unwrap_or(false)
}

/// Looks up `name` on the global object, `None` when it's missing or undefined
pub fn get_global(name: &str) -> Option<JsValue> {
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(name))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

//! Browser tests for the admin screen wiring.
//!
//! ```shell
//! wasm-pack test --headless --firefox web_ui/admin
//! ```
#![cfg(target_arch = "wasm32")]

use dashboard_web_ui_admin::fields::{clear_error, show_error, solo_texto};
use dashboard_web_ui_admin::tables::tabulator;
use dashboard_web_ui_shared::utils::{body, get_element_by_id, get_typed_by_id, has_class};
use wasm_bindgen_test::*;
use web_sys::HtmlInputElement;

wasm_bindgen_test_configure!(run_in_browser);

fn mount(markup: &str) {
    body().expect("page has a body").set_inner_html(markup);
}

#[wasm_bindgen_test]
fn error_feedback_is_added_once_and_cleared() {
    mount(r#"<div><input id="id_ci" class="form-control"></div>"#);
    let field = get_element_by_id("id_ci").expect("field is mounted");

    assert!(show_error(&field, "La cédula debe tener 8 dígitos").is_ok());
    assert!(show_error(&field, "La cédula debe tener 8 dígitos").is_ok());
    assert!(has_class(&field, "is-invalid"));

    let feedback = field.next_element_sibling().expect("feedback follows the field");
    assert!(has_class(&feedback, "invalid-feedback"));
    assert!(feedback.next_element_sibling().is_none());
    assert_eq!(
        feedback.text_content().as_deref(),
        Some(" La cédula debe tener 8 dígitos")
    );

    clear_error(&field);
    assert!(!has_class(&field, "is-invalid"));
    assert!(field.next_element_sibling().is_none());
    mount("");
}

#[wasm_bindgen_test]
fn solo_texto_filters_in_place() {
    mount(r#"<input id="nombre">"#);
    let input = get_typed_by_id::<HtmlInputElement>("nombre").expect("input is mounted");
    input.set_value("María 2da");
    solo_texto(&input);
    assert_eq!(input.value(), "María da");
    mount("");
}

#[wasm_bindgen_test]
fn tabulator_missing_is_skipped() {
    mount(r#"<div data-tabulator data-columns="[{"></div>"#);
    assert_eq!(tabulator::initialize(), 0);
    mount("");
}

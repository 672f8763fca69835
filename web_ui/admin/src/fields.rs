//! Input masking for the user forms.
//!
//! Numeric fields (identity card, phone) only take digits up to a fixed length and complain
//! inline until they're exactly that long. Name fields can opt into a letters-only filter
//! with `oninput="soloTexto(this)"`.

use dashboard_web_ui_shared::constants::CLASS_IS_INVALID;
use dashboard_web_ui_shared::error::UiError;
use dashboard_web_ui_shared::utils::{self, add_class, get_typed_by_id, has_class, remove_class};
use gloo::console;
use gloo::events::EventListener;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlInputElement};

use crate::constants::{
    CI_LENGTH, CLASS_INVALID_FEEDBACK, CSS_CLASSES_FEEDBACK_ICON, ID_FIELD_CI, ID_FIELD_TELEFONO,
    MSG_CI_LENGTH, MSG_TELEFONO_LENGTH, TELEFONO_LENGTH,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericField {
    pub id: &'static str,
    pub length: usize,
    pub message: &'static str,
}

pub const NUMERIC_FIELDS: &[NumericField] = &[
    NumericField {
        id: ID_FIELD_CI,
        length: CI_LENGTH,
        message: MSG_CI_LENGTH,
    },
    NumericField {
        id: ID_FIELD_TELEFONO,
        length: TELEFONO_LENGTH,
        message: MSG_TELEFONO_LENGTH,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldCheck {
    Empty,
    Complete,
    Incomplete,
}

impl NumericField {
    /// Drops anything that isn't a digit and cuts the rest down to length.
    pub fn mask(&self, value: &str) -> String {
        value
            .chars()
            .filter(char::is_ascii_digit)
            .take(self.length)
            .collect()
    }

    pub fn check(&self, masked: &str) -> FieldCheck {
        match masked.chars().count() {
            0 => FieldCheck::Empty,
            len if len == self.length => FieldCheck::Complete,
            _ => FieldCheck::Incomplete,
        }
    }
}

fn is_text_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c.is_whitespace() || "áéíóúÁÉÍÓÚñÑ'".contains(c)
}

/// Keeps letters (including Spanish accented ones), whitespace and apostrophes.
pub fn letters_only(value: &str) -> String {
    value.chars().filter(|c| is_text_char(*c)).collect()
}

/// The `.invalid-feedback` element directly after `field`, if there is one
fn feedback_for(field: &Element) -> Option<Element> {
    field
        .next_element_sibling()
        .filter(|sibling| has_class(sibling, CLASS_INVALID_FEEDBACK))
}

pub fn show_error(field: &Element, message: &str) -> Result<(), UiError> {
    let document = utils::document();
    let feedback = match feedback_for(field) {
        Some(feedback) => feedback,
        None => {
            let feedback = document.create_element("div")?;
            add_class(&feedback, CLASS_INVALID_FEEDBACK);
            field.after_with_node_1(&feedback)?;
            feedback
        }
    };
    add_class(field, CLASS_IS_INVALID);

    let icon = document.create_element("i")?;
    for class in CSS_CLASSES_FEEDBACK_ICON {
        add_class(&icon, class);
    }
    feedback.set_text_content(None);
    feedback.append_with_node_1(&icon)?;
    feedback.append_with_str_1(&format!(" {}", message))?;
    Ok(())
}

pub fn clear_error(field: &Element) {
    if let Some(feedback) = feedback_for(field) {
        remove_class(field, CLASS_IS_INVALID);
        feedback.remove();
    }
}

fn on_numeric_input(input: &HtmlInputElement, field: &NumericField) {
    let value = input.value();
    let masked = field.mask(&value);
    if masked != value {
        input.set_value(&masked);
    }
    match field.check(&masked) {
        FieldCheck::Incomplete => {
            if let Err(e) = show_error(input, field.message) {
                console::error!(format!("failed to show error on {} -> {}", field.id, e));
            }
        }
        FieldCheck::Empty | FieldCheck::Complete => clear_error(input),
    }
}

/// Hooks up every numeric field present on the page.
pub fn initialize() {
    for field in NUMERIC_FIELDS {
        let Some(input) = get_typed_by_id::<HtmlInputElement>(field.id) else {
            continue;
        };
        #[cfg(debug_assertions)]
        console::debug!(format!("fields::initialize -> {}", field.id));
        let target = input.clone();
        EventListener::new(&input, "input", move |_| on_numeric_input(&target, field)).forget();
    }
}

/// `oninput="soloTexto(this)"` for name fields
#[wasm_bindgen(js_name = soloTexto)]
pub fn solo_texto(input: &HtmlInputElement) {
    let value = input.value();
    let filtered = letters_only(&value);
    if filtered != value {
        input.set_value(&filtered);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CI: NumericField = NUMERIC_FIELDS[0];
    const TELEFONO: NumericField = NUMERIC_FIELDS[1];

    #[test]
    fn mask_strips_and_truncates() {
        assert_eq!(CI.mask("12.345.678"), "12345678");
        assert_eq!(CI.mask("V-1234567890"), "12345678");
        assert_eq!(CI.mask("abc"), "");
        assert_eq!(TELEFONO.mask("(0414) 555-12-34"), "0414555123");
        // non-ascii digits aren't accepted
        assert_eq!(CI.mask("١٢٣"), "");
    }

    #[test]
    fn check_lengths() {
        assert_eq!(CI.check(""), FieldCheck::Empty);
        assert_eq!(CI.check("1234"), FieldCheck::Incomplete);
        assert_eq!(CI.check("12345678"), FieldCheck::Complete);
        assert_eq!(TELEFONO.check("12345678"), FieldCheck::Incomplete);
        assert_eq!(TELEFONO.check("0414555123"), FieldCheck::Complete);
    }

    #[test]
    fn field_table() {
        assert_eq!(CI.id, "id_ci");
        assert_eq!(CI.length, 8);
        assert_eq!(TELEFONO.id, "id_telefono");
        assert_eq!(TELEFONO.length, 10);
    }

    #[test]
    fn letters_only_keeps_spanish_names() {
        assert_eq!(letters_only("José Núñez"), "José Núñez");
        assert_eq!(letters_only("O'Higgins"), "O'Higgins");
        assert_eq!(letters_only("Ana3 María!"), "Ana María");
        assert_eq!(letters_only("çà"), "");
        assert_eq!(letters_only("12-34"), "");
    }
}

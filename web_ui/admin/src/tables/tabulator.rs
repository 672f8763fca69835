//! Tabulator tables, declared in markup:
//!
//! ```html
//! <div data-tabulator data-url="/api/roles/" data-columns='[{"title": "Nombre", "field": "name"}]'></div>
//! ```

use dashboard_web_ui_shared::error::UiError;
use dashboard_web_ui_shared::utils::{has_global, query_all};
use gloo::console;
use serde::Serialize;
use serde_json::{Map, Value};
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::constants::{
    ATTR_DATA_COLUMNS, ATTR_DATA_PARAMS, ATTR_DATA_URL, CSS_TABULATOR_TABLES, GLOBAL_TABULATOR,
};

#[wasm_bindgen]
extern "C" {
    pub type Tabulator;

    #[wasm_bindgen(catch, constructor, js_class = "Tabulator")]
    pub fn new(element: &Element, options: &JsValue) -> Result<Tabulator, JsValue>;
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TabulatorOptions {
    pub layout: &'static str,
    pub responsive_layout: &'static str,
    pub pagination: bool,
    pub pagination_size: u32,
    pub pagination_size_selector: Vec<u32>,
    pub movable_columns: bool,
    pub resizable_rows: bool,
    #[serde(rename = "ajaxURL", skip_serializing_if = "Option::is_none")]
    pub ajax_url: Option<String>,
    pub ajax_params: Map<String, Value>,
    pub columns: Vec<Value>,
}

impl Default for TabulatorOptions {
    fn default() -> Self {
        TabulatorOptions {
            layout: "fitColumns",
            responsive_layout: "collapse",
            pagination: true,
            pagination_size: 10,
            pagination_size_selector: vec![5, 10, 20, 50],
            movable_columns: true,
            resizable_rows: true,
            ajax_url: None,
            ajax_params: Map::new(),
            columns: Vec::new(),
        }
    }
}

/// Empty attributes count as missing
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

impl TabulatorOptions {
    /// Builds the options from a table's `data-url`, `data-params` and `data-columns`.
    pub fn from_attributes(
        url: Option<&str>,
        params: Option<&str>,
        columns: Option<&str>,
    ) -> Result<Self, UiError> {
        let mut options = TabulatorOptions {
            ajax_url: non_empty(url).map(str::to_string),
            ..Default::default()
        };
        if let Some(params) = non_empty(params) {
            options.ajax_params = serde_json::from_str(params)?;
        }
        if let Some(columns) = non_empty(columns) {
            options.columns = serde_json::from_str(columns)?;
        }
        Ok(options)
    }

    pub fn to_js(&self) -> Result<JsValue, UiError> {
        // json_compatible so the maps arrive as plain objects rather than `Map`s
        Ok(self.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
    }
}

fn create_table(element: &Element) -> Result<Tabulator, UiError> {
    let options = TabulatorOptions::from_attributes(
        element.get_attribute(ATTR_DATA_URL).as_deref(),
        element.get_attribute(ATTR_DATA_PARAMS).as_deref(),
        element.get_attribute(ATTR_DATA_COLUMNS).as_deref(),
    )?;
    Ok(Tabulator::new(element, &options.to_js()?)?)
}

/// Turns every `[data-tabulator]` element into a table, returning how many worked. Pages that
/// don't load Tabulator are skipped.
pub fn initialize() -> usize {
    if !has_global(GLOBAL_TABULATOR) {
        return 0;
    }
    let created = query_all(CSS_TABULATOR_TABLES)
        .iter()
        .filter(|element| match create_table(element) {
            Ok(_) => true,
            Err(e) => {
                console::error!(format!("failed to create table '{}' -> {}", element.id(), e));
                false
            }
        })
        .count();
    #[cfg(debug_assertions)]
    console::debug!(format!("tabulator::initialize -> {} tables", created));
    created
}

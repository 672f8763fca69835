//! simple-datatables on the user listings.
//!
//! The listings live in tabs and modals, and the library can't lay out a hidden table, so only
//! the visible ones are set up and the rest wait for their tab to be shown.

use std::cell::RefCell;

use dashboard_web_ui_shared::bootstrap::recreate_dropdown;
use dashboard_web_ui_shared::constants::CLASS_SHOW;
use dashboard_web_ui_shared::error::UiError;
use dashboard_web_ui_shared::utils::{
    get_element_by_id, get_global, has_class, query_all, query_all_in,
};
use gloo::console;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::constants::{
    ATTR_DATA_INITIALIZED, CSS_DROPDOWN_TOGGLE, CSS_USER_TABLES, DATATABLE_PER_PAGE,
    EVENT_DATATABLE_RENDER, GLOBAL_SIMPLE_DATATABLES, LABEL_INFO, LABEL_NO_ROWS,
    LABEL_PER_PAGE, LABEL_PLACEHOLDER, TABLE_ID_PREFIX,
};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = simpleDatatables)]
    pub type DataTable;

    #[wasm_bindgen(catch, constructor, js_namespace = simpleDatatables, js_class = "DataTable")]
    pub fn new(table: &Element, options: &JsValue) -> Result<DataTable, JsValue>;

    #[wasm_bindgen(catch, method)]
    pub fn destroy(this: &DataTable) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, method)]
    pub fn on(this: &DataTable, event: &str, callback: &js_sys::Function) -> Result<(), JsValue>;
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DataTableLabels {
    pub placeholder: &'static str,
    pub per_page: &'static str,
    pub no_rows: &'static str,
    pub info: &'static str,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DataTableOptions {
    pub per_page: u32,
    pub labels: DataTableLabels,
}

impl Default for DataTableOptions {
    fn default() -> Self {
        DataTableOptions {
            per_page: DATATABLE_PER_PAGE,
            labels: DataTableLabels {
                placeholder: LABEL_PLACEHOLDER,
                per_page: LABEL_PER_PAGE,
                no_rows: LABEL_NO_ROWS,
                info: LABEL_INFO,
            },
        }
    }
}

/// `tablaUsuarios-activos` -> `activos`
pub fn table_key(id: &str) -> Option<&str> {
    id.strip_prefix(TABLE_ID_PREFIX)
}

/// A live table, plus the render callback the library holds on to.
struct Instance {
    element: Element,
    datatable: DataTable,
    _on_render: Closure<dyn FnMut()>,
}

impl Instance {
    fn destroy(self) {
        if let Err(e) = self.datatable.destroy() {
            console::warn!(format!(
                "failed to destroy datatable '{}' -> {:?}",
                self.element.id(),
                e
            ));
        }
        // so the next pass sets it up again
        if let Err(e) = self.element.remove_attribute(ATTR_DATA_INITIALIZED) {
            console::error!(format!("failed to clear {} -> {:?}", ATTR_DATA_INITIALIZED, e));
        }
    }
}

thread_local! {
    static INSTANCES: RefCell<Vec<Instance>> = const { RefCell::new(Vec::new()) };
}

/// Stops the library from grabbing every table on the page by itself.
pub fn disable_auto_init() {
    let Some(namespace) = get_global(GLOBAL_SIMPLE_DATATABLES) else {
        return;
    };
    let Ok(class) = js_sys::Reflect::get(&namespace, &JsValue::from_str("DataTable")) else {
        return;
    };
    if class.is_function() {
        let res = js_sys::Reflect::set(&class, &JsValue::from_str("autoInit"), &JsValue::FALSE);
        if let Err(e) = res {
            console::warn!(format!("failed to disable datatable auto init -> {:?}", e));
        }
    }
}

fn is_visible(table: &Element) -> bool {
    let within = |selector: &str, class: &str| {
        table
            .closest(selector)
            .ok()
            .flatten()
            .map(|ancestor| has_class(&ancestor, class))
            .unwrap_or(false)
    };
    within(".tab-pane", "active") || within(".modal", CLASS_SHOW)
}

/// Re-creates the bootstrap dropdowns inside `parent`, the library rebuilds the rows on every
/// render and the old instances point at nodes that are gone.
pub fn recreate_dropdowns_in(parent: &Element) {
    for toggle in query_all_in(parent, CSS_DROPDOWN_TOGGLE) {
        if let Err(e) = recreate_dropdown(&toggle) {
            console::error!(format!("failed to recreate dropdown -> {:?}", e));
        }
    }
}

fn recreate_dropdowns_for(key: &str) {
    let Some(table) = get_element_by_id(&format!("{}{}", TABLE_ID_PREFIX, key)) else {
        return;
    };
    recreate_dropdowns_in(&table);
    #[cfg(debug_assertions)]
    console::debug!(format!("datatables::recreate_dropdowns -> {}", key));
}

fn create_instance(table: &Element) -> Result<Instance, UiError> {
    let key = table_key(&table.id()).unwrap_or_default().to_string();
    let options = serde_wasm_bindgen::to_value(&DataTableOptions::default())?;
    let datatable = DataTable::new(table, &options)?;

    let render_key = key.clone();
    let on_render = Closure::<dyn FnMut()>::new(move || recreate_dropdowns_for(&render_key));
    datatable.on(EVENT_DATATABLE_RENDER, on_render.as_ref().unchecked_ref())?;
    table.set_attribute(ATTR_DATA_INITIALIZED, "true")?;

    #[cfg(debug_assertions)]
    console::debug!(format!("datatables::create_instance -> {}", key));
    Ok(Instance {
        element: table.clone(),
        datatable,
        _on_render: on_render,
    })
}

/// Tears down what the previous pass built, then sets up every visible user table.
pub fn initialize() {
    if get_global(GLOBAL_SIMPLE_DATATABLES).is_none() {
        console::warn!("simple-datatables is not available on this page");
        return;
    }

    let previous = INSTANCES.with(|instances| std::mem::take(&mut *instances.borrow_mut()));
    previous.into_iter().for_each(Instance::destroy);

    let mut created = Vec::new();
    for table in query_all(CSS_USER_TABLES) {
        if !is_visible(&table) || table.has_attribute(ATTR_DATA_INITIALIZED) {
            continue;
        }
        match create_instance(&table) {
            Ok(instance) => created.push(instance),
            Err(e) => console::error!(format!("failed to set up table '{}' -> {}", table.id(), e)),
        }
    }
    INSTANCES.with(|instances| instances.borrow_mut().extend(created));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_come_from_the_id() {
        assert_eq!(table_key("tablaUsuarios-activos"), Some("activos"));
        assert_eq!(table_key("tablaUsuarios-"), Some(""));
        assert_eq!(table_key("tablaRoles-1"), None);
    }

    #[test]
    fn options_use_library_names() {
        let json = serde_json::to_value(DataTableOptions::default()).expect("serialisable");
        assert_eq!(json["perPage"], 10);
        assert_eq!(json["labels"]["placeholder"], "Buscar...");
        assert_eq!(json["labels"]["perPage"], "Registros por página");
        assert_eq!(json["labels"]["noRows"], "No se encontraron registros");
        assert_eq!(
            json["labels"]["info"],
            "Mostrando {start} a {end} de {rows} registros"
        );
    }
}

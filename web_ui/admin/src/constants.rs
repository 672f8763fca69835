//! Constants for the admin screens

// numeric fields on the user forms
pub const ID_FIELD_CI: &str = "id_ci";
pub const ID_FIELD_TELEFONO: &str = "id_telefono";
pub const CI_LENGTH: usize = 8;
pub const TELEFONO_LENGTH: usize = 10;
pub const MSG_CI_LENGTH: &str = "La cédula debe tener 8 dígitos";
pub const MSG_TELEFONO_LENGTH: &str = "El teléfono debe tener 10 dígitos";

pub const CLASS_INVALID_FEEDBACK: &str = "invalid-feedback";
pub const CSS_CLASSES_FEEDBACK_ICON: &[&str] = &["fas", "fa-exclamation-circle", "me-1"];

// scroll to top
pub const CSS_SCROLL_TO_TOP: &str = ".scroll-to-top";
pub const SCROLL_TO_TOP_THRESHOLD_PX: f64 = 100.0;

// Tabulator
pub const GLOBAL_TABULATOR: &str = "Tabulator";
pub const CSS_TABULATOR_TABLES: &str = "[data-tabulator]";
pub const ATTR_DATA_URL: &str = "data-url";
pub const ATTR_DATA_PARAMS: &str = "data-params";
pub const ATTR_DATA_COLUMNS: &str = "data-columns";

// simple-datatables
pub const GLOBAL_SIMPLE_DATATABLES: &str = "simpleDatatables";
pub const TABLE_ID_PREFIX: &str = "tablaUsuarios-";
pub const CSS_USER_TABLES: &str = "table[id^='tablaUsuarios-']";
pub const ATTR_DATA_INITIALIZED: &str = "data-initialized";
pub const CSS_ACTIVE_TAB_PANE: &str = ".tab-pane.active";
pub const CSS_DROPDOWN_TOGGLE: &str = ".dropdown-toggle";
pub const EVENT_TAB_SHOWN: &str = "shown.bs.tab";
pub const EVENT_DATATABLE_RENDER: &str = "datatable.render";
pub const DATATABLE_PER_PAGE: u32 = 10;
pub const LABEL_PLACEHOLDER: &str = "Buscar...";
pub const LABEL_PER_PAGE: &str = "Registros por página";
pub const LABEL_NO_ROWS: &str = "No se encontraron registros";
pub const LABEL_INFO: &str = "Mostrando {start} a {end} de {rows} registros";

use std::error::Error;
use std::fmt;

use wasm_bindgen::JsValue;

/// Everything that can go wrong while wiring the UI. None of these reach the user, they are
/// logged to the console and the dependent step is skipped.
#[derive(Debug)]
pub enum UiError {
    /// A JavaScript call threw
    Js(JsValue),
    /// A `data-*` attribute didn't hold the JSON we expected
    Json(serde_json::Error),
    /// Couldn't turn an options struct into a JS object
    Serialise(serde_wasm_bindgen::Error),
    /// A third party global (bootstrap, Tabulator ...) isn't loaded on this page
    MissingGlobal(&'static str),
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UiError::Js(err) => fmt::Debug::fmt(err, f),
            UiError::Json(err) => write!(f, "invalid json -> {}", err),
            UiError::Serialise(err) => write!(f, "failed to serialise options -> {}", err),
            UiError::MissingGlobal(name) => write!(f, "'{}' is not available on this page", name),
        }
    }
}

impl Error for UiError {}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        Self::Js(value)
    }
}

impl From<serde_json::Error> for UiError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<serde_wasm_bindgen::Error> for UiError {
    fn from(value: serde_wasm_bindgen::Error) -> Self {
        Self::Serialise(value)
    }
}

impl UiError {
    pub fn as_string(&self) -> String {
        match self {
            UiError::Js(err) => err.as_string().unwrap_or_else(|| "null".to_string()),
            other => other.to_string(),
        }
    }
}

//! This handles the login screen, and is designed to be smol and snappy so it loads fast and
//! gets the user to where they need to go!

#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unreachable)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::trivially_copy_pass_by_ref)]

pub mod components;
pub mod constants;

use dashboard_web_ui_shared::toast;
#[allow(unused_imports)] // because it's needed to compile wasm things
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsValue;

/// This is the entry point of the login front end.
///
/// The page calls it once, after the form markup is in place.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub fn run_app() -> Result<(), JsValue> {
    components::initialize();
    toast::initialize_existing();
    Ok(())
}

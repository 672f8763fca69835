//! The admin screens: the side navigation, notifications, the masked form fields, the
//! back-to-top button and the table widgets.

#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unreachable)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::trivially_copy_pass_by_ref)]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod constants;
pub mod fields;
pub mod scroll;
pub mod tables;

use dashboard_web_ui_shared::{sidebar, toast};
#[cfg(debug_assertions)]
use gloo::console;
#[allow(unused_imports)] // because it's needed to compile wasm things
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsValue;

/// This is the entry point of the admin front end, the page calls it once its markup is in
/// place. Each part quietly skips itself when its markup isn't on the page.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub fn run_app() -> Result<(), JsValue> {
    #[cfg(debug_assertions)]
    console::debug!("admin::run_app");

    sidebar::dom::initialize();
    toast::initialize_existing();
    fields::initialize();
    scroll::initialize();
    tables::initialize();
    Ok(())
}

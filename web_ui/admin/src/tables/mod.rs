//! The two table widgets used across the admin screens.

pub mod datatables;
pub mod tabulator;

use dashboard_web_ui_shared::utils::{document, query};
use gloo::events::EventListener;

use crate::constants::{CSS_ACTIVE_TAB_PANE, EVENT_TAB_SHOWN};

pub fn initialize() {
    tabulator::initialize();

    datatables::disable_auto_init();
    datatables::initialize();

    // tables in a tab that just became visible can now be laid out
    EventListener::new(&document(), EVENT_TAB_SHOWN, |_| {
        datatables::initialize();
        if let Some(pane) = query(CSS_ACTIVE_TAB_PANE) {
            datatables::recreate_dropdowns_in(&pane);
        }
    })
    .forget();
}

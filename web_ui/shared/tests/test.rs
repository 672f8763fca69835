//! Browser tests for the DOM bindings.
//!
//! Run these in a headless browser with:
//!
//! ```shell
//! wasm-pack test --headless --firefox web_ui/shared
//! ```
#![cfg(target_arch = "wasm32")]

use dashboard_web_ui_shared::constants::{
    CLASS_BODY_COLLAPSED, CLASS_ICON_COLLAPSED, CLASS_ICON_EXPANDED, CLASS_SHOW,
    CLASS_SIDEBAR_ACTIVE, STORAGE_KEY_SIDEBAR_TOGGLE,
};
use dashboard_web_ui_shared::error::UiError;
use std::cell::Cell;
use std::rc::Rc;

use dashboard_web_ui_shared::sidebar::dom::DomSidebar;
use dashboard_web_ui_shared::sidebar::{
    IconState, Sidebar, SidebarController, SidebarView, SidebarWidth, ViewportMode,
};
use dashboard_web_ui_shared::storage::{BrowserStorage, KeyValueStore, MemoryStorage};
use dashboard_web_ui_shared::toast::{self, ToastKind, ToastOptions};
use dashboard_web_ui_shared::utils::{
    body, document, get_element_by_id, has_class, query, query_all,
};
use wasm_bindgen_test::*;
use web_sys::Element;

wasm_bindgen_test_configure!(run_in_browser);

const SIDEBAR_MARKUP: &str = r##"
<div id="fixture">
  <button id="sidebarToggle"><i class="fas"></i></button>
  <button id="toggleSidebar"><i class="fas"></i></button>
  <nav class="sidebar">
    <ul>
      <li class="nav-item"><a class="nav-link" href="#">Inicio</a></li>
      <li class="nav-item">
        <a class="nav-link" href="#">Usuarios</a>
        <div class="collapse"><a class="nav-link" href="#">Lista</a></div>
      </li>
    </ul>
  </nav>
</div>
"##;

fn mount(markup: &str) {
    body().expect("page has a body").set_inner_html(markup);
}

fn unmount() {
    if let Some(body) = body() {
        body.set_inner_html("");
        let _ = body.class_list().remove_1(CLASS_BODY_COLLAPSED);
    }
}

fn icon_states() -> Vec<(bool, bool)> {
    query_all("#sidebarToggle i, #toggleSidebar i")
        .iter()
        .map(|i| (has_class(i, CLASS_ICON_EXPANDED), has_class(i, CLASS_ICON_COLLAPSED)))
        .collect()
}

fn sidebar_element() -> Element {
    query(".sidebar").expect("sidebar is mounted")
}

fn body_collapsed() -> bool {
    has_class(&body().expect("page has a body"), CLASS_BODY_COLLAPSED)
}

/// The real DOM view, but with a viewport width the test controls.
struct SizedView {
    dom: DomSidebar,
    width: Rc<Cell<f64>>,
}

impl SidebarView for SizedView {
    fn viewport_width(&self) -> f64 {
        self.width.get()
    }

    fn set_collapsed_marker(&mut self, collapsed: bool) {
        self.dom.set_collapsed_marker(collapsed)
    }

    fn set_mobile_active(&mut self, active: bool) {
        self.dom.set_mobile_active(active)
    }

    fn set_width(&mut self, width: Option<SidebarWidth>) {
        self.dom.set_width(width)
    }

    fn set_icons(&mut self, state: IconState) {
        self.dom.set_icons(state)
    }

    fn set_submenu_shown(&mut self, index: usize, shown: bool) {
        self.dom.set_submenu_shown(index, shown)
    }

    fn close_all_submenus(&mut self) {
        self.dom.close_all_submenus()
    }
}

fn sized_controller(
    width: f64,
    store: MemoryStorage,
) -> (SidebarController<SizedView, MemoryStorage>, Rc<Cell<f64>>) {
    mount(SIDEBAR_MARKUP);
    let (dom, _targets) = DomSidebar::bind().expect("sidebar binds");
    let width = Rc::new(Cell::new(width));
    let view = SizedView {
        dom,
        width: width.clone(),
    };
    (SidebarController::new(view, store), width)
}

#[wasm_bindgen_test]
fn no_sidebar_means_inactive() {
    unmount();
    assert!(DomSidebar::bind().is_none());

    let mut sidebar: Sidebar<DomSidebar, MemoryStorage> =
        Sidebar::bind(None, MemoryStorage::default());
    sidebar.initialize();
    assert!(!sidebar.is_active());
}

#[wasm_bindgen_test]
fn only_submenu_links_fold_the_overlay() {
    mount(SIDEBAR_MARKUP);
    let (_view, targets) = DomSidebar::bind().expect("sidebar binds");
    let links: Vec<(usize, String)> = targets
        .nav_links()
        .map(|(index, link)| (index, link.text_content().unwrap_or_default()))
        .collect();
    // "Inicio" has no submenu and "Usuarios" is the parent of the open overlay
    assert_eq!(links, vec![(0, "Lista".to_string())]);
    unmount();
}

#[wasm_bindgen_test]
fn desktop_toggle_keeps_both_buttons_in_step() {
    let (mut controller, _width) = sized_controller(
        1280.0,
        MemoryStorage::with_value(STORAGE_KEY_SIDEBAR_TOGGLE, "false"),
    );
    controller.restore();

    let before = icon_states();
    assert_eq!(before, vec![(true, false), (true, false)]);
    assert!(!body_collapsed());

    controller.toggle();
    assert_eq!(icon_states(), vec![(false, true), (false, true)]);
    assert!(body_collapsed());
    assert_eq!(
        controller.store().get(STORAGE_KEY_SIDEBAR_TOGGLE).as_deref(),
        Some("true")
    );
    unmount();
}

#[wasm_bindgen_test]
fn mobile_toggle_shows_overlay_without_saving() {
    let (mut controller, _width) = sized_controller(500.0, MemoryStorage::default());
    controller.restore();

    controller.toggle();
    assert!(has_class(&sidebar_element(), CLASS_SIDEBAR_ACTIVE));
    assert!(!body_collapsed());
    assert_eq!(icon_states(), vec![(true, false), (true, false)]);
    assert_eq!(controller.store().writes(), 0);
    unmount();
}

#[wasm_bindgen_test]
fn viewport_change_to_mobile_closes_submenus() {
    let (mut controller, width) = sized_controller(
        1280.0,
        MemoryStorage::with_value(STORAGE_KEY_SIDEBAR_TOGGLE, "true"),
    );
    controller.restore();
    assert!(body_collapsed());

    controller.handle_submenu_enter(0);
    let submenus = query_all(".sidebar .collapse");
    assert_eq!(submenus.len(), 1);
    assert!(has_class(&submenus[0], CLASS_SHOW));

    width.set(500.0);
    controller.handle_viewport_change();
    assert_eq!(controller.mode(), ViewportMode::Mobile);
    assert_eq!(controller.hover_item(), None);
    assert!(submenus.iter().all(|s| !has_class(s, CLASS_SHOW)));
    assert!(!has_class(&sidebar_element(), CLASS_SIDEBAR_ACTIVE));
    assert!(!body_collapsed());
    assert!(!sidebar_element()
        .get_attribute("style")
        .unwrap_or_default()
        .contains("width"));

    // back on desktop the stored preference comes back
    width.set(1280.0);
    controller.handle_viewport_change();
    assert!(body_collapsed());
    assert_eq!(controller.store().writes(), 0);
    unmount();
}

#[wasm_bindgen_test]
fn toast_without_bootstrap_is_reported() {
    mount(r#"<div class="toast-container"></div>"#);
    let res = toast::create("Guardado", ToastKind::Error, ToastOptions { delay: Some(100) });
    assert!(matches!(res, Err(UiError::MissingGlobal("bootstrap"))));

    let toasts = query_all(".toast-container .toast");
    assert_eq!(toasts.len(), 1);
    assert!(has_class(&toasts[0], "bg-danger"));
    assert_eq!(
        toasts[0].get_attribute("data-bs-delay").as_deref(),
        Some("100")
    );
    unmount();
}

#[wasm_bindgen_test]
fn lookups_tolerate_missing_elements() {
    unmount();
    assert!(get_element_by_id("sidebarToggle").is_none());
    assert!(query_all(".sidebar .nav-item").is_empty());
    assert!(document().query_selector(".sidebar").ok().flatten().is_none());
}

#[wasm_bindgen_test]
fn browser_storage_round_trips_bare_strings() {
    let mut store = BrowserStorage::open();
    assert!(store.is_persistent());
    store.set("sb|test-key", "true");
    assert_eq!(store.get("sb|test-key").as_deref(), Some("true"));
}

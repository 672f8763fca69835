//! Constants
//!
//! Class names, element ids and timings shared by every screen of the dashboard.

// the local storage key holding the desktop collapsed preference
pub const STORAGE_KEY_SIDEBAR_TOGGLE: &str = "sb|sidebar-toggle";

/// Viewports narrower than this (in CSS pixels) are treated as mobile
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

// sidebar markup
pub const CSS_SIDEBAR: &str = ".sidebar";
pub const CSS_SIDEBAR_NAV_ITEMS: &str = ".sidebar .nav-item";
pub const CSS_NAV_LINK: &str = ".nav-link";
pub const CSS_SIDEBAR_SUBMENUS: &str = ".sidebar .collapse";
pub const CSS_SUBMENU: &str = ".collapse";
pub const ID_SIDEBAR_TOGGLE: &str = "sidebarToggle";
pub const ID_SIDEBAR_TOGGLE_BARS: &str = "toggleSidebar";
pub const IDS_SIDEBAR_TOGGLES: &[&str] = &[ID_SIDEBAR_TOGGLE, ID_SIDEBAR_TOGGLE_BARS];

// classes the sidebar controller writes
pub const CLASS_BODY_COLLAPSED: &str = "sb-sidenav-toggled";
pub const CLASS_SIDEBAR_ACTIVE: &str = "active";
pub const CLASS_SHOW: &str = "show";
pub const CLASS_ICON_EXPANDED: &str = "fa-angle-double-left";
pub const CLASS_ICON_COLLAPSED: &str = "fa-angle-double-right";

// CSS custom properties resolved from the document root
pub const CSS_VAR_SIDEBAR_WIDTH: &str = "--sidebar-width";
pub const CSS_VAR_SIDEBAR_COLLAPSED_WIDTH: &str = "--sidebar-collapsed-width";

// toasts
pub const CSS_TOAST: &str = ".toast";
pub const CSS_TOAST_CONTAINER: &str = ".toast-container";
pub const CSS_CLASSES_TOAST: &[&str] = &["toast", "align-items-center", "text-white", "border-0"];
pub const ATTR_BS_DELAY: &str = "data-bs-delay";
pub const EVENT_TOAST_HIDDEN: &str = "hidden.bs.toast";
pub const TOAST_DEFAULT_DELAY_MS: u32 = 5000;

// shared validation styling
pub const CLASS_IS_INVALID: &str = "is-invalid";

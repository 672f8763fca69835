//! The side navigation panel.
//!
//! On desktop-width viewports the panel is either expanded or collapsed, and the user's choice
//! is remembered in storage. On mobile-width viewports it's an overlay that's either shown or
//! hidden, and nothing is remembered. [SidebarController] holds that state and pushes it to a
//! [SidebarView]; the browser implementation of the view lives in [dom].
//!
//! While collapsed on desktop, hovering a navigation item opens its submenu as an overlay.

pub mod dom;

use crate::constants::{MOBILE_BREAKPOINT_PX, STORAGE_KEY_SIDEBAR_TOGGLE};
use crate::storage::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportMode {
    Mobile,
    Desktop,
}

impl ViewportMode {
    pub fn from_width(width: f64) -> Self {
        if width < MOBILE_BREAKPOINT_PX {
            ViewportMode::Mobile
        } else {
            ViewportMode::Desktop
        }
    }
}

/// Which of the two themed widths the panel should render at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarWidth {
    Expanded,
    Collapsed,
}

/// What the toggle button icons show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconState {
    Expanded,
    Collapsed,
}

/// Parses the persisted preference, only the exact string `"true"` means collapsed.
pub fn parse_preference(value: Option<&str>) -> bool {
    value == Some("true")
}

pub fn format_preference(collapsed: bool) -> &'static str {
    if collapsed {
        "true"
    } else {
        "false"
    }
}

/// The DOM side of the sidebar. Every method must quietly do nothing when the element it
/// needs isn't on the page.
pub trait SidebarView {
    fn viewport_width(&self) -> f64;
    /// The desktop collapsed marker on the body
    fn set_collapsed_marker(&mut self, collapsed: bool);
    /// The mobile visibility marker on the panel
    fn set_mobile_active(&mut self, active: bool);
    /// `None` drops the inline width and leaves it to the stylesheet
    fn set_width(&mut self, width: Option<SidebarWidth>);
    /// Applied to the icon of every toggle button
    fn set_icons(&mut self, state: IconState);
    /// Shows or hides the submenu of the hoverable navigation item at `index`
    fn set_submenu_shown(&mut self, index: usize, shown: bool);
    /// Hides every submenu in the panel, hoverable or not
    fn close_all_submenus(&mut self);
}

pub struct SidebarController<V, S> {
    view: V,
    store: S,
    collapsed: bool,
    mobile_active: bool,
    hover: Option<usize>,
}

impl<V: SidebarView, S: KeyValueStore> SidebarController<V, S> {
    pub fn new(view: V, store: S) -> Self {
        SidebarController {
            view,
            store,
            collapsed: false,
            mobile_active: false,
            hover: None,
        }
    }

    pub fn mode(&self) -> ViewportMode {
        ViewportMode::from_width(self.view.viewport_width())
    }

    /// The desktop preference, as last restored or toggled
    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn is_mobile_active(&self) -> bool {
        self.mobile_active
    }

    /// The navigation item whose submenu is open as a hover overlay
    pub fn hover_item(&self) -> Option<usize> {
        self.hover
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn desktop_collapsed(&self) -> bool {
        self.collapsed && self.mode() == ViewportMode::Desktop
    }

    pub fn toggle(&mut self) {
        match self.mode() {
            ViewportMode::Mobile => {
                self.mobile_active = !self.mobile_active;
                self.view.set_mobile_active(self.mobile_active);
            }
            ViewportMode::Desktop => {
                self.collapsed = !self.collapsed;
                self.persist();
                if !self.collapsed {
                    self.close_hover();
                }
                self.view.set_collapsed_marker(self.collapsed);
                self.view.set_width(Some(self.desktop_width()));
            }
        }
        self.sync_icons();
    }

    pub fn persist(&mut self) {
        self.store
            .set(STORAGE_KEY_SIDEBAR_TOGGLE, format_preference(self.collapsed));
    }

    /// Loads the stored preference and applies whatever the current viewport calls for.
    pub fn restore(&mut self) {
        self.collapsed = parse_preference(self.store.get(STORAGE_KEY_SIDEBAR_TOGGLE).as_deref());
        match self.mode() {
            ViewportMode::Desktop => {
                self.view.set_collapsed_marker(self.collapsed);
                self.view.set_width(Some(self.desktop_width()));
            }
            ViewportMode::Mobile => {
                self.view.set_collapsed_marker(false);
                self.view.set_width(None);
            }
        }
        self.sync_icons();
    }

    /// Called on every resize, so it has to be cheap and must not depend on the previous mode.
    pub fn handle_viewport_change(&mut self) {
        self.mobile_active = false;
        self.view.set_mobile_active(false);
        if self.mode() == ViewportMode::Mobile {
            self.hover = None;
            self.view.close_all_submenus();
        }
        self.restore();
    }

    pub fn handle_submenu_enter(&mut self, index: usize) {
        if !self.desktop_collapsed() {
            return;
        }
        if let Some(previous) = self.hover.filter(|previous| *previous != index) {
            self.view.set_submenu_shown(previous, false);
        }
        self.hover = Some(index);
        self.view.set_submenu_shown(index, true);
    }

    pub fn handle_submenu_leave(&mut self, index: usize) {
        if !self.desktop_collapsed() {
            return;
        }
        self.view.set_submenu_shown(index, false);
        if self.hover == Some(index) {
            self.hover = None;
        }
    }

    /// A link inside submenu `index` was followed. If that submenu is the open hover overlay,
    /// fold it away. The stored preference is left alone.
    pub fn handle_navigation_click(&mut self, index: usize) {
        if !self.desktop_collapsed() || self.hover != Some(index) {
            return;
        }
        self.close_hover();
        self.view.set_width(Some(SidebarWidth::Collapsed));
    }

    fn close_hover(&mut self) {
        if let Some(index) = self.hover.take() {
            self.view.set_submenu_shown(index, false);
        }
    }

    fn desktop_width(&self) -> SidebarWidth {
        if self.collapsed {
            SidebarWidth::Collapsed
        } else {
            SidebarWidth::Expanded
        }
    }

    fn sync_icons(&mut self) {
        let expanded = match self.mode() {
            ViewportMode::Desktop => !self.collapsed,
            ViewportMode::Mobile => self.mobile_active,
        };
        self.view.set_icons(if expanded {
            IconState::Expanded
        } else {
            IconState::Collapsed
        });
    }
}

/// A sidebar is only live on pages that actually have one.
pub enum Sidebar<V, S> {
    Active(SidebarController<V, S>),
    Inactive,
}

impl<V: SidebarView, S: KeyValueStore> Sidebar<V, S> {
    /// `view` is `None` when the page has no sidebar markup.
    pub fn bind(view: Option<V>, store: S) -> Self {
        match view {
            Some(view) => Sidebar::Active(SidebarController::new(view, store)),
            None => Sidebar::Inactive,
        }
    }

    /// Applies the initial state, before the user gets a chance to interact.
    pub fn initialize(&mut self) {
        if let Sidebar::Active(controller) = self {
            controller.restore();
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Sidebar::Active(_))
    }

    pub fn controller_mut(&mut self) -> Option<&mut SidebarController<V, S>> {
        match self {
            Sidebar::Active(controller) => Some(controller),
            Sidebar::Inactive => None,
        }
    }
}

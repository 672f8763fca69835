//! Binds the sidebar controller to the page.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::console;
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use super::{IconState, Sidebar, SidebarController, SidebarView, SidebarWidth};
use crate::constants::{
    CLASS_BODY_COLLAPSED, CLASS_ICON_COLLAPSED, CLASS_ICON_EXPANDED, CLASS_SHOW,
    CLASS_SIDEBAR_ACTIVE, CSS_NAV_LINK, CSS_SIDEBAR, CSS_SIDEBAR_NAV_ITEMS,
    CSS_SIDEBAR_SUBMENUS, CSS_SUBMENU, CSS_VAR_SIDEBAR_COLLAPSED_WIDTH, CSS_VAR_SIDEBAR_WIDTH,
    IDS_SIDEBAR_TOGGLES,
};
use crate::storage::BrowserStorage;
use crate::utils::{
    self, get_element_by_id, query, query_all, query_all_in, query_in, remove_class,
    root_css_var, set_class,
};

thread_local! {
    static INITIALISED: Cell<bool> = const { Cell::new(false) };
}

/// Element references resolved once, when the page is bound.
pub struct DomSidebar {
    sidebar: HtmlElement,
    body: Option<HtmlElement>,
    icons: Vec<Element>,
    hover_submenus: Vec<Element>,
    submenus: Vec<Element>,
}

/// The elements that get listeners, kept apart from [DomSidebar] because the view itself moves
/// into the controller.
pub struct ListenerTargets {
    toggles: Vec<Element>,
    hover_items: Vec<Element>,
    /// links inside each hover submenu, tagged with the submenu's index
    nav_links: Vec<(usize, Element)>,
}

impl ListenerTargets {
    /// Links that fold the hover overlay, with the index of the submenu holding them
    pub fn nav_links(&self) -> impl Iterator<Item = (usize, &Element)> {
        self.nav_links.iter().map(|(index, link)| (*index, link))
    }
}

impl DomSidebar {
    /// Returns `None` if the page has no sidebar.
    pub fn bind() -> Option<(Self, ListenerTargets)> {
        let sidebar = query(CSS_SIDEBAR)?.dyn_into::<HtmlElement>().ok()?;

        let toggles: Vec<Element> = IDS_SIDEBAR_TOGGLES
            .iter()
            .filter_map(|id| get_element_by_id(id))
            .collect();
        let icons = toggles
            .iter()
            .filter_map(|button| query_in(button, "i"))
            .collect();

        let (hover_items, hover_submenus): (Vec<_>, Vec<_>) = query_all(CSS_SIDEBAR_NAV_ITEMS)
            .into_iter()
            .filter_map(|item| query_in(&item, CSS_SUBMENU).map(|submenu| (item, submenu)))
            .unzip();

        #[cfg(debug_assertions)]
        console::debug!(format!(
            "sidebar::bind -> toggles={} hover_items={}",
            toggles.len(),
            hover_items.len()
        ));

        let nav_links = hover_submenus
            .iter()
            .enumerate()
            .flat_map(|(index, submenu)| {
                query_all_in(submenu, CSS_NAV_LINK)
                    .into_iter()
                    .map(move |link| (index, link))
            })
            .collect();

        let view = DomSidebar {
            sidebar,
            body: utils::body(),
            icons,
            hover_submenus,
            submenus: query_all(CSS_SIDEBAR_SUBMENUS),
        };
        let targets = ListenerTargets {
            toggles,
            hover_items,
            nav_links,
        };
        Some((view, targets))
    }
}

impl SidebarView for DomSidebar {
    fn viewport_width(&self) -> f64 {
        // can't measure, so assume the roomier layout
        utils::viewport_width().unwrap_or(f64::MAX)
    }

    fn set_collapsed_marker(&mut self, collapsed: bool) {
        if let Some(body) = self.body.as_ref() {
            set_class(body, CLASS_BODY_COLLAPSED, collapsed);
        }
    }

    fn set_mobile_active(&mut self, active: bool) {
        set_class(&self.sidebar, CLASS_SIDEBAR_ACTIVE, active);
    }

    fn set_width(&mut self, width: Option<SidebarWidth>) {
        let style = self.sidebar.style();
        let value = width.and_then(|width| {
            root_css_var(match width {
                SidebarWidth::Expanded => CSS_VAR_SIDEBAR_WIDTH,
                SidebarWidth::Collapsed => CSS_VAR_SIDEBAR_COLLAPSED_WIDTH,
            })
        });
        let res = match value {
            Some(value) => style.set_property("width", &value),
            None => style.remove_property("width").map(|_| ()),
        };
        if let Err(e) = res {
            console::error!(format!("failed to set sidebar width -> {:?}", e));
        }
    }

    fn set_icons(&mut self, state: IconState) {
        let expanded = state == IconState::Expanded;
        for icon in self.icons.iter() {
            set_class(icon, CLASS_ICON_EXPANDED, expanded);
            set_class(icon, CLASS_ICON_COLLAPSED, !expanded);
        }
    }

    fn set_submenu_shown(&mut self, index: usize, shown: bool) {
        if let Some(submenu) = self.hover_submenus.get(index) {
            set_class(submenu, CLASS_SHOW, shown);
        }
    }

    fn close_all_submenus(&mut self) {
        for submenu in self.submenus.iter() {
            remove_class(submenu, CLASS_SHOW);
        }
    }
}

type SharedController = Rc<RefCell<SidebarController<DomSidebar, BrowserStorage>>>;

/// Runs `f` against the controller, unless a handler further up the stack already holds it.
fn with_controller(
    controller: &SharedController,
    f: impl FnOnce(&mut SidebarController<DomSidebar, BrowserStorage>),
) {
    match controller.try_borrow_mut() {
        Ok(mut controller) => f(&mut controller),
        Err(_) => console::warn!("sidebar event arrived while another was being handled"),
    }
}

fn listen(
    target: &Element,
    event: &'static str,
    controller: &SharedController,
    f: impl Fn(&mut SidebarController<DomSidebar, BrowserStorage>) + 'static,
) {
    let controller = controller.clone();
    EventListener::new(target, event, move |_| with_controller(&controller, &f)).forget();
}

/// Sets up the sidebar on the current page. Pages without a sidebar are left alone, and only
/// the first call per page does anything.
pub fn initialize() {
    if INITIALISED.with(|flag| flag.replace(true)) {
        console::warn!("sidebar::initialize called more than once, ignoring");
        return;
    }

    let (view, targets) = DomSidebar::bind().unzip();
    let mut sidebar = Sidebar::bind(view, BrowserStorage::open());
    sidebar.initialize();

    let (Sidebar::Active(controller), Some(targets)) = (sidebar, targets) else {
        #[cfg(debug_assertions)]
        console::debug!("sidebar::initialize -> no sidebar on this page");
        return;
    };
    let controller: SharedController = Rc::new(RefCell::new(controller));

    for button in targets.toggles.iter() {
        let controller = controller.clone();
        EventListener::new_with_options(
            button,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                with_controller(&controller, |c| c.toggle());
            },
        )
        .forget();
    }

    {
        let controller = controller.clone();
        EventListener::new(&utils::window(), "resize", move |_| {
            with_controller(&controller, |c| c.handle_viewport_change())
        })
        .forget();
    }

    for (index, item) in targets.hover_items.iter().enumerate() {
        listen(item, "mouseenter", &controller, move |c| {
            c.handle_submenu_enter(index)
        });
        listen(item, "mouseleave", &controller, move |c| {
            c.handle_submenu_leave(index)
        });
    }

    for (index, link) in targets.nav_links.iter() {
        let index = *index;
        listen(link, "click", &controller, move |c| {
            c.handle_navigation_click(index)
        });
    }
}

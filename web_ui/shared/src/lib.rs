//! Behaviour shared by every screen of the dashboard: the side navigation panel, toast
//! notifications, and the DOM/storage plumbing underneath them.
//!
//! The state logic (see [sidebar::SidebarController]) is kept free of browser calls so it can
//! be exercised on any host, the browser bindings sit next to it.

#![recursion_limit = "256"]
#![warn(unused_extern_crates)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unreachable)]
#![deny(clippy::await_holding_lock)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::trivially_copy_pass_by_ref)]

pub mod bootstrap;
pub mod constants;
pub mod error;
pub mod sidebar;
pub mod storage;
pub mod toast;
pub mod utils;

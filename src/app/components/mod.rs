//! Shared UI components for the Dioxus web UI.

pub mod dropdown;
pub mod layout;
pub mod navbar;
pub mod navbar_items;

pub use dropdown::DropdownButton;
pub use layout::{Layout, STYLESHEET_PATH};
pub use navbar::Navbar;
pub use navbar_items::{MenuMode, NavbarItems};

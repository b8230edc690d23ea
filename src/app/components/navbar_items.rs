//! Navigation bar items for both mobile and desktop layouts.
//!
//! Everything the items depend on arrives as props: the auth flag, the
//! current path, the configured links and the three effect handlers. The
//! component never looks up router or auth state on its own, so it renders
//! the same way in the browser and in server-side rendering.

use dioxus::prelude::*;

use super::dropdown::DropdownButton;
use crate::nav::{
    dispatch, nav_entries, MenuOption, NavAction, NavEntry, NavEntryKind, NavHandlers, NavLinks,
    NavTarget,
};

const ITEM_CLASS: &str = "p-4 hover:bg-blue-900 md:hover:bg-brand";
const LINK_CLASS: &str = "uppercase font-medium text-slate-100 hover-underline-animation";
const ACTIVE_CLASS: &str = "active-link";
const TRIGGER_CLASS: &str = "dropdown-trigger uppercase font-medium text-slate-100 p-4";
const OPTION_CLASS: &str = "block w-full text-left px-4 py-2 text-slate-700 hover:bg-slate-100";

/// How the account menu reacts to the user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuMode {
    /// Click handlers drive the dropdown
    #[default]
    Interactive,
    /// Plain HTML for pages without client code: a `<details>` menu with a
    /// profile anchor and a logout form
    Static,
}

#[derive(Props, Clone, PartialEq)]
pub struct NavbarItemsProps {
    pub is_authenticated: bool,
    /// Path of the current location, compared exactly against each entry
    pub current_path: String,
    pub links: NavLinks,
    /// Fired once for every selection, e.g. to collapse the mobile menu
    pub on_menu_close: EventHandler<()>,
    /// Fired with an internal path to route to
    pub on_navigate: EventHandler<String>,
    pub on_logout: EventHandler<()>,
    #[props(default)]
    pub menu_mode: MenuMode,
}

#[derive(Clone, Copy)]
struct ItemHandlers {
    on_menu_close: EventHandler<()>,
    on_navigate: EventHandler<String>,
    on_logout: EventHandler<()>,
}

impl NavHandlers for ItemHandlers {
    fn menu_closed(&self) {
        self.on_menu_close.call(());
    }

    fn navigate(&self, path: &str) {
        self.on_navigate.call(path.to_string());
    }

    fn logout(&self) {
        self.on_logout.call(());
    }
}

/// Click on a link entry.
fn follow_link<H: NavHandlers + ?Sized>(entry: &NavEntry, handlers: &H) {
    if let Some(action) = entry.action() {
        dispatch(&action, handlers);
    }
}

/// Selection of the dropdown option at `index`, as reported by the dropdown.
fn select_option<H: NavHandlers + ?Sized>(options: &[MenuOption], index: usize, handlers: &H) {
    match options.get(index) {
        Some(option) => dispatch(&option.action, handlers),
        None => tracing::warn!("No account menu option at index {}", index),
    }
}

/// Dropdown labels, index-aligned with `options`
fn option_labels(options: &[MenuOption]) -> Vec<String> {
    options.iter().map(|o| o.label.to_string()).collect()
}

fn link_class(active: bool) -> String {
    if active {
        format!("{} {}", LINK_CLASS, ACTIVE_CLASS)
    } else {
        LINK_CLASS.to_string()
    }
}

fn render_static_option(option: &MenuOption, logout_endpoint: &str) -> Element {
    let label = option.label;
    match &option.action {
        NavAction::Navigate(href) | NavAction::OpenExternal(href) => rsx! {
            li { key: "{label}",
                a { href: "{href}", role: "menuitem", class: OPTION_CLASS, "{label}" }
            }
        },
        NavAction::Logout => rsx! {
            li { key: "{label}",
                form { method: "post", action: "{logout_endpoint}",
                    button { r#type: "submit", role: "menuitem", class: OPTION_CLASS, "{label}" }
                }
            }
        },
    }
}

fn render_entry(
    entry: NavEntry,
    current_path: &str,
    handlers: ItemHandlers,
    menu_mode: MenuMode,
    logout_endpoint: &str,
) -> Element {
    let active = entry.is_active(current_path);
    let label = entry.label;
    let clicked = entry.clone();

    match entry.kind {
        NavEntryKind::Link(NavTarget::Internal(path)) => rsx! {
            li { key: "{label}", class: ITEM_CLASS,
                a {
                    href: "{path}",
                    class: link_class(active),
                    "aria-current": active.then_some("page"),
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        follow_link(&clicked, &handlers);
                    },
                    "{label}"
                }
            }
        },
        NavEntryKind::Link(NavTarget::External { url, new_tab }) => rsx! {
            li { key: "{label}", class: ITEM_CLASS,
                a {
                    href: "{url}",
                    class: link_class(active),
                    "aria-current": active.then_some("page"),
                    target: new_tab.then_some("_blank"),
                    rel: new_tab.then_some("noopener noreferrer"),
                    onclick: move |_| follow_link(&clicked, &handlers),
                    "{label}"
                }
            }
        },
        NavEntryKind::AccountMenu(options) => match menu_mode {
            MenuMode::Interactive => {
                let labels = option_labels(&options);
                rsx! {
                    li { key: "{label}",
                        DropdownButton {
                            label: label.to_string(),
                            options: labels,
                            on_select: move |index: usize| select_option(&options, index, &handlers),
                        }
                    }
                }
            }
            MenuMode::Static => rsx! {
                li { key: "{label}",
                    details { class: "dropdown relative",
                        summary { class: TRIGGER_CLASS, "{label}" }
                        ul { class: "dropdown-menu absolute right-0 bg-white shadow-lg rounded", role: "menu",
                            for option in options.iter() {
                                {render_static_option(option, logout_endpoint)}
                            }
                        }
                    }
                }
            },
        },
    }
}

/// Renders the list items of the navigation bar.
#[component]
pub fn NavbarItems(props: NavbarItemsProps) -> Element {
    let handlers = ItemHandlers {
        on_menu_close: props.on_menu_close,
        on_navigate: props.on_navigate,
        on_logout: props.on_logout,
    };
    let entries = nav_entries(&props.links, props.is_authenticated);

    rsx! {
        for entry in entries {
            {render_entry(entry, &props.current_path, handlers, props.menu_mode, &props.links.logout_endpoint)}
        }
    }
}

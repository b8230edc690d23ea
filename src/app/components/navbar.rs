//! Top navigation bar wired to the router and auth context.

use dioxus::prelude::*;

use super::navbar_items::NavbarItems;
use crate::app::api::BrowserClient;
use crate::app::auth_context::use_auth;
use crate::app::router::use_router_navigation;
use crate::app::Route;
use crate::nav::{logout, NavLinks, Navigation, SessionState};

/// Navigation bar with a collapsible mobile menu.
///
/// The logout task is spawned here rather than in the items so collapsing the
/// menu cannot cancel it.
#[component]
pub fn Navbar() -> Element {
    let auth = use_auth();
    let links = use_context::<NavLinks>();
    let navigation = use_router_navigation();
    let mut menu_open = use_signal(|| false);

    let current_path = navigation.current_path();
    let click_navigation = navigation.clone();
    let logout_endpoint = links.logout_endpoint.clone();

    rsx! {
        nav { class: "navbar flex flex-wrap items-center justify-between bg-brand px-4",
            div { class: "flex items-center justify-between w-full md:w-auto",
                Link { to: Route::Home {}, class: "text-xl font-bold text-slate-100", "StayBooker" }
                button {
                    r#type: "button",
                    class: "md:hidden text-slate-100 p-2",
                    "aria-label": "Toggle navigation menu",
                    "aria-expanded": if menu_open() { "true" } else { "false" },
                    onclick: move |_| menu_open.set(!menu_open()),
                    "☰"
                }
            }
            ul {
                class: if menu_open() { "nav-items flex flex-col md:flex-row" } else { "nav-items hidden md:flex md:flex-row" },
                NavbarItems {
                    is_authenticated: auth.is_authenticated(),
                    current_path,
                    links,
                    on_menu_close: move |_| menu_open.set(false),
                    on_navigate: move |path: String| click_navigation.navigate(&path),
                    on_logout: move |_| {
                        let navigation = navigation.clone();
                        let endpoint = logout_endpoint.clone();
                        spawn(async move {
                            logout(&BrowserClient, &auth, &navigation, &endpoint).await;
                        });
                    },
                }
            }
        }
    }
}

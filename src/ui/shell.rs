//! Server-rendered page shell.
//!
//! Same navigation items as the client app, rendered without a router: links
//! are plain anchors and the account menu is a `<details>` element whose
//! logout option posts a form.

use dioxus::prelude::*;

use crate::app::components::{MenuMode, NavbarItems, STYLESHEET_PATH};
use crate::nav::NavLinks;

#[derive(Props, Clone, PartialEq)]
pub struct StaticShellProps {
    pub title: String,
    pub heading: String,
    pub current_path: String,
    pub is_authenticated: bool,
    pub links: NavLinks,
}

#[component]
pub fn StaticShell(props: StaticShellProps) -> Element {
    let version = env!("STAYBOOKER_VERSION");
    let git_sha = env!("STAYBOOKER_GIT_SHA");

    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{props.title} - StayBooker" }
            link { rel: "stylesheet", href: STYLESHEET_PATH }
        }
        body {
            header { class: "sticky top-0 z-10",
                nav { class: "navbar flex flex-wrap items-center justify-between bg-brand px-4",
                    a { href: "/", class: "text-xl font-bold text-slate-100", "StayBooker" }
                    ul { class: "nav-items flex flex-col md:flex-row",
                        NavbarItems {
                            is_authenticated: props.is_authenticated,
                            current_path: props.current_path.clone(),
                            links: props.links.clone(),
                            // Without client code the anchors and the logout form act on their own
                            on_menu_close: move |_| {},
                            on_navigate: move |_| {},
                            on_logout: move |_| {},
                            menu_mode: MenuMode::Static,
                        }
                    }
                }
            }
            main { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 mt-4",
                h1 { class: "text-2xl font-bold", "{props.heading}" }
            }
            footer { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center py-3",
                small { class: "text-muted", "StayBooker v{version} ({git_sha})" }
            }
        }
    }
}

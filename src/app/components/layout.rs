//! Layout component wrapping all client-side pages.

use dioxus::prelude::*;

use super::navbar::Navbar;

/// Stylesheet served by the page server
pub const STYLESHEET_PATH: &str = "/assets/staybooker.css";

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Page content
    pub children: Element,
}

/// Main layout component wrapping all pages.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let version = env!("STAYBOOKER_VERSION");
    let full_title = format!("{} - StayBooker", props.title);

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{full_title}" }
        document::Link { rel: "stylesheet", href: STYLESHEET_PATH }

        header { class: "sticky top-0 z-10",
            Navbar {}
        }
        main { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 mt-4",
            {props.children}
        }
        footer { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center py-3",
            small { class: "text-muted", "StayBooker v{version}" }
        }
    }
}

//! Hotel search page.

use dioxus::prelude::*;

use crate::app::components::Layout;

#[component]
pub fn Hotels() -> Element {
    rsx! {
        Layout { title: "Hotels",
            h1 { class: "text-2xl font-bold", "Hotels" }
            p { class: "mt-2 text-slate-600", "Search results appear here." }
        }
    }
}

use dioxus::prelude::*;

use crate::app::components::Layout;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        Layout { title: "Not found",
            h1 { class: "text-2xl font-bold", "Page not found" }
            p { class: "mt-2 text-slate-600", "Nothing lives at {path}." }
        }
    }
}

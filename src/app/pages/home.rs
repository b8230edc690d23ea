//! Landing page.

use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::app::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        Layout { title: "Home",
            section { class: "text-center py-12",
                h1 { class: "text-3xl font-bold", "Find your next stay" }
                p { class: "mt-2 text-slate-600", "Browse hotels, then book in a few clicks." }
                Link { to: Route::Hotels {}, class: "inline-block mt-6 px-6 py-3 bg-brand text-white rounded",
                    "Browse hotels"
                }
            }
        }
    }
}

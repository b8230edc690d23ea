//! Signed-in user's profile page.

use dioxus::prelude::*;

use crate::app::auth_context::use_auth;
use crate::app::components::Layout;
use crate::app::Route;
use crate::nav::SessionState;

#[component]
pub fn UserProfile() -> Element {
    let auth = use_auth();

    rsx! {
        Layout { title: "Profile",
            h1 { class: "text-2xl font-bold", "Your profile" }
            if auth.is_authenticated() {
                p { class: "mt-2 text-slate-600", "Bookings and payment details appear here." }
            } else {
                p { class: "mt-2 text-slate-600",
                    "Please "
                    Link { to: Route::Login {}, class: "underline", "sign in" }
                    " to view your profile."
                }
            }
        }
    }
}

//! Login / registration page.

use dioxus::prelude::*;

use crate::app::auth_context::use_auth;
use crate::app::components::Layout;
use crate::nav::SessionState;

#[component]
pub fn Login() -> Element {
    let auth = use_auth();

    rsx! {
        Layout { title: "Login",
            h1 { class: "text-2xl font-bold", "Login or register" }
            if auth.is_authenticated() {
                p { class: "mt-2 text-slate-600", "You are already signed in." }
            } else {
                p { class: "mt-2 text-slate-600", "Sign in to manage your bookings." }
            }
        }
    }
}

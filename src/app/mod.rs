//! Dioxus web application entry point.
//!
//! This module provides the root App component, the route table and the
//! contexts the navigation bar reads.

use dioxus::prelude::*;

pub mod api;
pub mod auth_context;
pub mod components;
pub mod pages;
pub mod router;

use crate::nav::NavLinks;
use auth_context::use_auth_provider;
use pages::{Home, Hotels, Login, NotFound, UserProfile};

/// Root app component with routing
#[component]
pub fn App() -> Element {
    // Navigation targets shared by every page's navbar
    let links = use_context_provider(NavLinks::default);

    // Signed out until the first auth check answers
    use_auth_provider(false, links.auth_check_endpoint.clone());

    rsx! {
        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/hotels")]
    Hotels {},
    #[route("/login")]
    Login {},
    #[route("/user-profile")]
    UserProfile {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

//! Router adapter implementing [`Navigation`] over the Dioxus router.

use dioxus::prelude::*;
use dioxus::router::Navigator;

use super::Route;
use crate::nav::{is_internal_path, Navigation};

/// Current route plus the router's navigator.
#[derive(Clone)]
pub struct RouterNavigation {
    navigator: Navigator,
    route: Route,
}

impl RouterNavigation {
    pub fn new(navigator: Navigator, route: Route) -> Self {
        Self { navigator, route }
    }
}

/// Internal paths go through the route table, anything else leaves the app.
fn navigation_target(path: &str) -> NavigationTarget<Route> {
    if is_internal_path(path) {
        match path.parse::<Route>() {
            Ok(route) => return NavigationTarget::Internal(route),
            Err(_) => tracing::warn!("Unroutable path {}", path),
        }
    }
    NavigationTarget::<Route>::External(path.to_string())
}

impl Navigation for RouterNavigation {
    fn current_path(&self) -> String {
        self.route.to_string()
    }

    fn navigate(&self, path: &str) {
        if let Some(failure) = self.navigator.push(navigation_target(path)) {
            tracing::warn!("Navigation to {} failed: {:?}", path, failure);
        }
    }
}

/// Navigation for the current route - call inside the router
pub fn use_router_navigation() -> RouterNavigation {
    RouterNavigation::new(use_navigator(), use_route::<Route>())
}

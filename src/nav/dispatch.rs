//! Single entry point for every click in the navigation bar.

use super::entry::NavAction;

/// Effects a click can have. Implemented by the rendered component over its
/// event handlers, and by recording fakes in tests.
pub trait NavHandlers {
    /// Collapse the (mobile) menu
    fn menu_closed(&self);
    fn navigate(&self, path: &str);
    fn logout(&self);
}

/// Close the menu once, then carry out `action`.
///
/// External anchors are followed by the browser, so only the menu closes.
pub fn dispatch<H: NavHandlers + ?Sized>(action: &NavAction, handlers: &H) {
    handlers.menu_closed();

    match action {
        NavAction::Navigate(path) => {
            tracing::debug!("Navigating to {}", path);
            handlers.navigate(path);
        }
        NavAction::OpenExternal(url) => {
            tracing::debug!("Opening external link {}", url);
        }
        NavAction::Logout => handlers.logout(),
    }
}

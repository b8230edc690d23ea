//! Renderer-free navigation core.
//!
//! Builds the ordered navigation entries, decides which one is active, and
//! routes clicks and the logout flow through explicit collaborators.

mod dispatch;
mod entry;
mod error;
mod links;
mod session;

pub use dispatch::{dispatch, NavHandlers};
pub use entry::{
    account_menu_options, is_internal_path, nav_entries, MenuOption, NavAction, NavEntry, NavEntryId, NavEntryKind,
    NavTarget, HOME_PATH, HOTELS_PATH, LOGIN_PATH, PROFILE_PATH,
};
pub use error::{ClientError, ConfigError};
pub use links::NavLinks;
pub use session::{logout, LogoutClient, Navigation, SessionState};

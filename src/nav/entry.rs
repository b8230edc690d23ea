//! Navigation entries and the active-path rule.

use super::links::NavLinks;

pub const HOME_PATH: &str = "/";
pub const HOTELS_PATH: &str = "/hotels";
pub const LOGIN_PATH: &str = "/login";
pub const PROFILE_PATH: &str = "/user-profile";

/// Stable identity of each slot in the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavEntryId {
    Home,
    Hotels,
    Flight,
    Health,
    Weather,
    Account,
}

/// True for a path inside this application: a leading `/` that is not the
/// `//host` form of a protocol-relative URL.
pub fn is_internal_path(link: &str) -> bool {
    link.starts_with('/') && !link.starts_with("//")
}

/// Where a link entry points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavTarget {
    /// Route inside this application
    Internal(String),
    /// Anchor to another site; `new_tab` opens a new browsing context
    External { url: String, new_tab: bool },
}

impl NavTarget {
    /// Build a target from a configured link: internal paths stay inside the
    /// app, anything else is a same-tab external anchor.
    pub fn from_link(link: &str) -> Self {
        if is_internal_path(link) {
            NavTarget::Internal(link.to_string())
        } else {
            NavTarget::External {
                url: link.to_string(),
                new_tab: false,
            }
        }
    }

    pub fn href(&self) -> &str {
        match self {
            NavTarget::Internal(path) => path,
            NavTarget::External { url, .. } => url,
        }
    }

    pub fn opens_new_tab(&self) -> bool {
        matches!(self, NavTarget::External { new_tab: true, .. })
    }
}

/// What selecting an entry or menu option does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavAction {
    Navigate(String),
    /// The browser follows the anchor itself
    OpenExternal(String),
    Logout,
}

/// Secondary action in the account dropdown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuOption {
    pub label: &'static str,
    pub action: NavAction,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavEntryKind {
    Link(NavTarget),
    AccountMenu(Vec<MenuOption>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub id: NavEntryId,
    pub label: &'static str,
    pub kind: NavEntryKind,
}

impl NavEntry {
    fn link(id: NavEntryId, label: &'static str, target: NavTarget) -> Self {
        Self {
            id,
            label,
            kind: NavEntryKind::Link(target),
        }
    }

    /// Target of a link entry, `None` for the account dropdown.
    pub fn target(&self) -> Option<&NavTarget> {
        match &self.kind {
            NavEntryKind::Link(target) => Some(target),
            NavEntryKind::AccountMenu(_) => None,
        }
    }

    /// True when this entry's own target equals `current_path` exactly.
    ///
    /// New-tab anchors and the dropdown trigger are never active.
    pub fn is_active(&self, current_path: &str) -> bool {
        match self.target() {
            Some(target) if !target.opens_new_tab() => target.href() == current_path,
            _ => false,
        }
    }

    /// Action performed when a link entry is clicked.
    pub fn action(&self) -> Option<NavAction> {
        match self.target()? {
            NavTarget::Internal(path) => Some(NavAction::Navigate(path.clone())),
            NavTarget::External { url, .. } => Some(NavAction::OpenExternal(url.clone())),
        }
    }

    pub fn menu_options(&self) -> &[MenuOption] {
        match &self.kind {
            NavEntryKind::AccountMenu(options) => options,
            NavEntryKind::Link(_) => &[],
        }
    }
}

/// Options shown in the account dropdown for a signed-in user.
pub fn account_menu_options() -> Vec<MenuOption> {
    vec![
        MenuOption {
            label: "Profile",
            action: NavAction::Navigate(PROFILE_PATH.to_string()),
        },
        MenuOption {
            label: "Logout",
            action: NavAction::Logout,
        },
    ]
}

/// Ordered entries of the navigation bar for the given auth state.
pub fn nav_entries(links: &NavLinks, is_authenticated: bool) -> Vec<NavEntry> {
    let account = if is_authenticated {
        NavEntry {
            id: NavEntryId::Account,
            label: "Account",
            kind: NavEntryKind::AccountMenu(account_menu_options()),
        }
    } else {
        NavEntry::link(
            NavEntryId::Account,
            "Login/Register",
            NavTarget::Internal(LOGIN_PATH.to_string()),
        )
    };

    vec![
        NavEntry::link(
            NavEntryId::Home,
            "Home",
            NavTarget::Internal(HOME_PATH.to_string()),
        ),
        NavEntry::link(
            NavEntryId::Hotels,
            "Hotels",
            NavTarget::Internal(HOTELS_PATH.to_string()),
        ),
        NavEntry::link(
            NavEntryId::Flight,
            "Flight",
            NavTarget::External {
                url: links.flight_url.clone(),
                new_tab: true,
            },
        ),
        NavEntry::link(
            NavEntryId::Health,
            "Health",
            NavTarget::from_link(&links.health_url),
        ),
        NavEntry::link(
            NavEntryId::Weather,
            "Weather",
            NavTarget::from_link(&links.weather_url),
        ),
        account,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn internal_links() -> NavLinks {
        NavLinks {
            health_url: "/health".to_string(),
            weather_url: "/weather".to_string(),
            ..NavLinks::default()
        }
    }

    fn entry(entries: &[NavEntry], id: NavEntryId) -> &NavEntry {
        entries
            .iter()
            .find(|e| e.id == id)
            .expect("entry should be present")
    }

    #[test]
    fn entries_follow_fixed_table() {
        let links = NavLinks::default();
        let entries = nav_entries(&links, false);

        let table: Vec<(&str, &str)> = entries
            .iter()
            .map(|e| (e.label, e.target().map(NavTarget::href).unwrap_or("")))
            .collect();

        assert_eq!(
            table,
            vec![
                ("Home", "/"),
                ("Hotels", "/hotels"),
                ("Flight", links.flight_url.as_str()),
                ("Health", links.health_url.as_str()),
                ("Weather", links.weather_url.as_str()),
                ("Login/Register", "/login"),
            ]
        );
    }

    #[test]
    fn signed_out_shows_login_link_only() {
        let entries = nav_entries(&NavLinks::default(), false);
        let account = entry(&entries, NavEntryId::Account);

        assert_eq!(account.label, "Login/Register");
        assert_eq!(account.action(), Some(NavAction::Navigate("/login".into())));
        assert!(account.menu_options().is_empty());
    }

    #[test]
    fn signed_in_shows_profile_and_logout() {
        let entries = nav_entries(&NavLinks::default(), true);
        let account = entry(&entries, NavEntryId::Account);

        assert!(account.target().is_none());
        assert!(entries.iter().all(|e| e.label != "Login/Register"));
        assert_eq!(
            account.menu_options(),
            &[
                MenuOption {
                    label: "Profile",
                    action: NavAction::Navigate("/user-profile".into()),
                },
                MenuOption {
                    label: "Logout",
                    action: NavAction::Logout,
                },
            ]
        );
    }

    #[test]
    fn each_entry_is_active_only_on_its_own_path() {
        let entries = nav_entries(&internal_links(), false);
        let paths = ["/", "/hotels", "/health", "/weather", "/login"];

        for path in paths {
            let active: Vec<NavEntryId> = entries
                .iter()
                .filter(|e| e.is_active(path))
                .map(|e| e.id)
                .collect();
            assert_eq!(active.len(), 1, "exactly one entry active for {}", path);
            assert_eq!(entry(&entries, active[0]).target().unwrap().href(), path);
        }
    }

    #[test]
    fn weather_does_not_light_up_on_health_path() {
        let entries = nav_entries(&internal_links(), false);
        assert!(entry(&entries, NavEntryId::Health).is_active("/health"));
        assert!(!entry(&entries, NavEntryId::Weather).is_active("/health"));
    }

    #[test]
    fn active_match_is_exact_and_case_sensitive() {
        let entries = nav_entries(&NavLinks::default(), false);
        let hotels = entry(&entries, NavEntryId::Hotels);

        assert!(hotels.is_active("/hotels"));
        assert!(!hotels.is_active("/Hotels"));
        assert!(!hotels.is_active("/hotels/"));
        assert!(!hotels.is_active("/hotels/42"));
        assert!(!entry(&entries, NavEntryId::Home).is_active("/hotels"));
    }

    #[test]
    fn flight_opens_new_tab_and_is_never_active() {
        let links = NavLinks::default();
        let entries = nav_entries(&links, true);
        let flight = entry(&entries, NavEntryId::Flight);

        assert!(flight.target().unwrap().opens_new_tab());
        for path in ["/", "/hotels", links.flight_url.as_str(), ""] {
            assert!(!flight.is_active(path));
        }
        assert_eq!(
            flight.action(),
            Some(NavAction::OpenExternal(links.flight_url.clone()))
        );
    }

    #[test]
    fn dropdown_entry_is_never_active() {
        let entries = nav_entries(&NavLinks::default(), true);
        let account = entry(&entries, NavEntryId::Account);
        assert!(!account.is_active("/user-profile"));
        assert!(!account.is_active("/login"));
    }

    #[test]
    fn configured_link_kind_follows_leading_slash() {
        assert_eq!(
            NavTarget::from_link("/health"),
            NavTarget::Internal("/health".into())
        );
        assert_eq!(
            NavTarget::from_link("https://example.com/"),
            NavTarget::External {
                url: "https://example.com/".into(),
                new_tab: false,
            }
        );
    }

    #[test]
    fn protocol_relative_link_is_external() {
        assert!(!is_internal_path("//health.example.com/"));
        assert_eq!(
            NavTarget::from_link("//health.example.com/"),
            NavTarget::External {
                url: "//health.example.com/".into(),
                new_tab: false,
            }
        );
    }
}

//! Collaborators the navigation bar talks to, and the logout flow.
//!
//! Router, auth state and HTTP client are passed in explicitly so the flow
//! can run against recording fakes in tests.

use async_trait::async_trait;

use super::entry::LOGIN_PATH;
use super::error::ClientError;

/// Router collaborator: current location plus a navigate primitive.
pub trait Navigation {
    fn current_path(&self) -> String;
    fn navigate(&self, path: &str);
}

/// Auth state collaborator. The navigation bar only reads it and asks for a
/// re-check; the owner applies the result.
pub trait SessionState {
    fn is_authenticated(&self) -> bool;
    fn trigger_auth_check(&self);
    /// Mark a logout as started. Returns false if one is already running.
    fn begin_logout(&self) -> bool;
    fn end_logout(&self);
}

/// Network collaborator used for the session-termination request.
#[async_trait(?Send)]
pub trait LogoutClient {
    async fn post(&self, path: &str) -> Result<(), ClientError>;
}

/// End the session: one POST to `endpoint`, then one auth re-check, then a
/// redirect to the login page.
///
/// The request outcome does not change what follows. A call made while an
/// earlier logout is still running does nothing.
pub async fn logout<C, S, N>(client: &C, session: &S, navigation: &N, endpoint: &str)
where
    C: LogoutClient + ?Sized,
    S: SessionState + ?Sized,
    N: Navigation + ?Sized,
{
    if !session.begin_logout() {
        tracing::debug!("Logout already in progress, ignoring");
        return;
    }

    match client.post(endpoint).await {
        Ok(()) => tracing::debug!("Logout request to {} completed", endpoint),
        Err(e) => tracing::warn!("Logout request to {} failed: {}", endpoint, e),
    }

    session.trigger_auth_check();
    navigation.navigate(LOGIN_PATH);
    session.end_logout();
}

//! Auth context for the signed-in state shown in the navigation bar.
//!
//! The context owns the signals; components only read the flag and ask for a
//! re-check through [`SessionState`].

use dioxus::prelude::*;

use crate::nav::SessionState;

/// Global auth state shared via context
#[derive(Clone, Copy)]
pub struct AuthContext {
    authenticated: Signal<bool>,
    /// Bumped on every re-check request; the provider refetches when it changes
    checks: Signal<u32>,
    logging_out: Signal<bool>,
}

impl AuthContext {
    /// Number of re-checks requested so far
    pub fn check_count(&self) -> u32 {
        (self.checks)()
    }

    /// Apply the result of an auth check
    pub fn set_authenticated(&self, value: bool) {
        let mut authenticated = self.authenticated;
        authenticated.set(value);
    }
}

impl SessionState for AuthContext {
    fn is_authenticated(&self) -> bool {
        (self.authenticated)()
    }

    fn trigger_auth_check(&self) {
        let mut checks = self.checks;
        *checks.write() += 1;
    }

    fn begin_logout(&self) -> bool {
        let mut logging_out = self.logging_out;
        if *logging_out.peek() {
            return false;
        }
        logging_out.set(true);
        true
    }

    fn end_logout(&self) {
        let mut logging_out = self.logging_out;
        logging_out.set(false);
    }
}

/// Initialize auth context provider - call once at app root
pub fn use_auth_provider(initial: bool, auth_check_endpoint: String) -> AuthContext {
    let authenticated = use_signal(|| initial);
    let checks = use_signal(|| 0u32);
    let logging_out = use_signal(|| false);

    let ctx = AuthContext {
        authenticated,
        checks,
        logging_out,
    };

    use_context_provider(|| ctx);

    // Fetch auth state on mount and after every trigger_auth_check()
    #[cfg(target_arch = "wasm32")]
    {
        use_effect(move || {
            let generation = ctx.check_count();
            let endpoint = auth_check_endpoint.clone();
            spawn(async move {
                match crate::app::api::fetch_json::<crate::app::api::AuthCheckResponse>(&endpoint)
                    .await
                {
                    Ok(status) => {
                        tracing::debug!(
                            "Auth check #{} -> authenticated={}",
                            generation,
                            status.is_authenticated
                        );
                        ctx.set_authenticated(status.is_authenticated);
                    }
                    Err(e) => {
                        tracing::warn!("Auth check #{} failed: {}", generation, e);
                        ctx.set_authenticated(false);
                    }
                }
            });
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = auth_check_endpoint;

    ctx
}

/// Get auth context - use in any component
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}

//! Client-side HTTP helpers for the navigation bar.
//!
//! Request and response bodies are unused by the logout call; the auth
//! check reads a single flag.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::nav::{ClientError, LogoutClient};

/// Response of the auth-check endpoint.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct AuthCheckResponse {
    #[serde(rename = "isAuthenticated", alias = "is_authenticated", default)]
    pub is_authenticated: bool,
}

/// `fetch`-backed client used in the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClient;

#[async_trait(?Send)]
impl LogoutClient for BrowserClient {
    async fn post(&self, path: &str) -> Result<(), ClientError> {
        post_no_body(path).await
    }
}

/// POST with no body; any 2xx response counts as success (client-side only)
#[cfg(target_arch = "wasm32")]
pub async fn post_no_body(url: &str) -> Result<(), ClientError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestCredentials, RequestInit, Response};

    let window = web_sys::window().ok_or(ClientError::Unavailable)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_credentials(RequestCredentials::Include);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| ClientError::Network(format!("{:?}", e)))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ClientError::Network(format!("{:?}", e)))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| ClientError::Decode("Not a Response".to_string()))?;

    if resp.ok() {
        Ok(())
    } else {
        Err(ClientError::Status(resp.status()))
    }
}

/// SSR stub - returns error (should not be called during SSR)
#[cfg(not(target_arch = "wasm32"))]
pub async fn post_no_body(_url: &str) -> Result<(), ClientError> {
    Err(ClientError::Unavailable)
}

/// Fetch JSON from a URL, sending cookies (client-side only)
#[cfg(target_arch = "wasm32")]
pub async fn fetch_json<T: for<'de> Deserialize<'de>>(url: &str) -> Result<T, ClientError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestCredentials, RequestInit, Response};

    let window = web_sys::window().ok_or(ClientError::Unavailable)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_credentials(RequestCredentials::Include);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| ClientError::Network(format!("{:?}", e)))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ClientError::Network(format!("{:?}", e)))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| ClientError::Decode("Not a Response".to_string()))?;

    if !resp.ok() {
        return Err(ClientError::Status(resp.status()));
    }

    let json = JsFuture::from(
        resp.json()
            .map_err(|e| ClientError::Decode(format!("{:?}", e)))?,
    )
    .await
    .map_err(|e| ClientError::Decode(format!("{:?}", e)))?;

    serde_wasm_bindgen::from_value(json).map_err(|e| ClientError::Decode(e.to_string()))
}

/// SSR stub - returns error (should not be called during SSR)
#[cfg(not(target_arch = "wasm32"))]
pub async fn fetch_json<T: for<'de> Deserialize<'de>>(_url: &str) -> Result<T, ClientError> {
    Err(ClientError::Unavailable)
}

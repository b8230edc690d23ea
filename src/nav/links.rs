//! Configurable navigation targets.
//!
//! The flight search, health and weather links point at deployment-specific
//! hosts, so they live here as configuration with overridable defaults.

use serde::{Deserialize, Serialize};

use super::entry::is_internal_path;
use super::error::ConfigError;

const DEFAULT_FLIGHT_URL: &str = "https://www.skyscanner.co.in/";
const DEFAULT_HEALTH_URL: &str = "https://ea06-35-243-144-52.ngrok-free.app/";
const DEFAULT_WEATHER_URL: &str = "https://kaushalsahu07.github.io/weather/index.html";
const DEFAULT_LOGOUT_ENDPOINT: &str = "/api/users/logout";
const DEFAULT_AUTH_CHECK_ENDPOINT: &str = "/api/users/auth-user";

/// Navigation targets that vary per deployment.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavLinks {
    #[serde(default = "default_flight_url")]
    pub flight_url: String,
    /// Absolute URL, or an internal path starting with `/`
    #[serde(default = "default_health_url")]
    pub health_url: String,
    /// Absolute URL, or an internal path starting with `/`
    #[serde(default = "default_weather_url")]
    pub weather_url: String,
    #[serde(default = "default_logout_endpoint")]
    pub logout_endpoint: String,
    #[serde(default = "default_auth_check_endpoint")]
    pub auth_check_endpoint: String,
}

fn default_flight_url() -> String {
    DEFAULT_FLIGHT_URL.to_string()
}

fn default_health_url() -> String {
    DEFAULT_HEALTH_URL.to_string()
}

fn default_weather_url() -> String {
    DEFAULT_WEATHER_URL.to_string()
}

fn default_logout_endpoint() -> String {
    DEFAULT_LOGOUT_ENDPOINT.to_string()
}

fn default_auth_check_endpoint() -> String {
    DEFAULT_AUTH_CHECK_ENDPOINT.to_string()
}

impl Default for NavLinks {
    fn default() -> Self {
        Self {
            flight_url: default_flight_url(),
            health_url: default_health_url(),
            weather_url: default_weather_url(),
            logout_endpoint: default_logout_endpoint(),
            auth_check_endpoint: default_auth_check_endpoint(),
        }
    }
}

impl NavLinks {
    /// Reject values the navigation bar cannot render as links.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_absolute_url("nav.flight_url", &self.flight_url)?;
        check_link("nav.health_url", &self.health_url)?;
        check_link("nav.weather_url", &self.weather_url)?;
        check_endpoint("nav.logout_endpoint", &self.logout_endpoint)?;
        check_endpoint("nav.auth_check_endpoint", &self.auth_check_endpoint)?;
        Ok(())
    }
}

fn check_absolute_url(field: &'static str, value: &str) -> Result<(), ConfigError> {
    let parsed = url::Url::parse(value).map_err(|e| ConfigError::Invalid {
        field,
        reason: e.to_string(),
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::Invalid {
            field,
            reason: format!("unsupported scheme '{}'", other),
        }),
    }
}

fn check_link(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if is_internal_path(value) {
        return Ok(());
    }
    check_absolute_url(field, value)
}

fn check_endpoint(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if is_internal_path(value) {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: "must be a path starting with a single '/'".to_string(),
        })
    }
}

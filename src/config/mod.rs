//! Configuration management

use anyhow::Result;
use serde::Deserialize;

use crate::nav::NavLinks;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    /// Cookie whose presence marks a request as signed in for server-side rendering
    #[serde(default = "default_session_cookie")]
    pub session_cookie: String,

    #[serde(default)]
    pub nav: NavLinks,
}

fn default_port() -> u16 {
    8080
}

fn default_session_cookie() -> String {
    "session".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            session_cookie: default_session_cookie(),
            nav: NavLinks::default(),
        }
    }
}

/// Get config directory (XDG_CONFIG_HOME or platform default)
pub fn get_config_dir() -> std::path::PathBuf {
    if let Ok(dir) = std::env::var("STAYBOOKER_CONFIG_DIR") {
        return std::path::PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home).join("Library/Application Support/staybooker");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return std::path::PathBuf::from(xdg).join("staybooker");
        }
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home).join(".config/staybooker");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return std::path::PathBuf::from(appdata).join("staybooker");
        }
    }

    // Fallback to current directory
    std::path::PathBuf::from(".")
}

pub fn load_config() -> Result<Config> {
    let config_dir = get_config_dir();

    let mut builder = ::config::Config::builder()
        // Start with defaults
        .set_default("port", default_port() as i64)?
        // Load from config file if it exists (config.toml, config.json, ...)
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy()).required(false),
        )
        // Override with environment variables (STAYBOOKER_PORT, STAYBOOKER_NAV__HEALTH_URL, etc.)
        .add_source(
            ::config::Environment::with_prefix("STAYBOOKER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

    // Precedence: STAYBOOKER_PORT > PORT > config > default
    if let Ok(port) = std::env::var("STAYBOOKER_PORT") {
        if let Ok(port_num) = port.parse::<u16>() {
            builder = builder.set_override("port", port_num as i64)?;
        }
    } else if let Ok(port) = std::env::var("PORT") {
        // PORT is what most container platforms set
        if let Ok(port_num) = port.parse::<u16>() {
            builder = builder.set_override("port", port_num as i64)?;
        }
    }

    let config: Config = builder.build()?.try_deserialize()?;

    if let Err(e) = config.nav.validate() {
        tracing::warn!("Rejecting navigation config: {}", e);
        return Err(e.into());
    }

    Ok(config)
}

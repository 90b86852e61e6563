//! Runtime configuration for the sample app.

use once_cell::sync::Lazy;
use std::env;

/// Port used when `PORT` is unset or unusable.
pub const DEFAULT_PORT: u16 = 3001;
/// Listen on every interface unless `HOST` says otherwise.
pub const DEFAULT_HOST: &str = "0.0.0.0";

#[derive(Debug)]
pub struct Settings {
    /// Interface the HTTP server binds to.
    pub host: String,
    /// TCP port the HTTP server binds to.
    pub port: u16,
}

impl Settings {
    pub fn from_env() -> Self {
        let host = env::var("HOST").ok();
        let port = env::var("PORT").ok();
        Self::from_vars(host.as_deref(), port.as_deref())
    }

    /// Build settings from raw `HOST` / `PORT` values; blanks mean unset.
    pub fn from_vars(host: Option<&str>, port: Option<&str>) -> Self {
        let host = host
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_HOST)
            .to_owned();

        Settings {
            host,
            port: parse_port(port),
        }
    }

    /// Address pair accepted by `HttpServer::bind`.
    pub fn bind_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}

/// Parse a raw `PORT` value, falling back to [`DEFAULT_PORT`].
pub fn parse_port(raw: Option<&str>) -> u16 {
    match raw.map(str::trim) {
        None | Some("") => DEFAULT_PORT,
        Some(v) => v.parse::<u16>().unwrap_or_else(|_| {
            log::warn!("ignoring invalid PORT {v:?}, using {DEFAULT_PORT}");
            DEFAULT_PORT
        }),
    }
}

static SETTINGS: Lazy<Settings> = Lazy::new(Settings::from_env);

pub fn settings() -> &'static Settings {
    &SETTINGS
}

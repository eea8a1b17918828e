//! Server configuration parsed from environment variables.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid HOST '{value}': expected an IP address")]
    InvalidHost { value: String },
    #[error("invalid PORT '{value}': expected an integer in 1..=65535")]
    InvalidPort { value: String },
    #[error("invalid TYPING_DELAY_MS '{value}': expected a non-negative integer")]
    InvalidTypingDelay { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Delay advertised to API clients before they show a reply.
    pub typing_delay: Duration,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: bind address, default `0.0.0.0`
    /// - `PORT`: listen port, default 3000
    /// - `TYPING_DELAY_MS`: simulated typing delay advertised by the API, default 1500
    ///
    /// # Errors
    ///
    /// Returns an error if any variable is set but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] but reads from an arbitrary source.
    ///
    /// # Errors
    ///
    /// Returns an error if any variable is set but unparseable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = parse_host(lookup("HOST").as_deref())?;
        let port = parse_port(lookup("PORT").as_deref())?;
        let typing_delay = parse_typing_delay(lookup("TYPING_DELAY_MS").as_deref())?;
        Ok(Self { host, port, typing_delay })
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_host(raw: Option<&str>) -> Result<IpAddr, ConfigError> {
    let value = raw.map_or(DEFAULT_HOST, str::trim);
    value.parse().map_err(|_| ConfigError::InvalidHost { value: value.to_owned() })
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    let Some(value) = raw.map(str::trim) else {
        return Ok(DEFAULT_PORT);
    };
    match value.parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort { value: value.to_owned() }),
    }
}

fn parse_typing_delay(raw: Option<&str>) -> Result<Duration, ConfigError> {
    let Some(value) = raw.map(str::trim) else {
        return Ok(assistant::TYPING_DELAY);
    };
    value
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ConfigError::InvalidTypingDelay { value: value.to_owned() })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

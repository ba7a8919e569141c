//! Server configuration.
//!
//! Everything comes from the `[[workspace.metadata.leptos]]` table (or the
//! `LEPTOS_*` variables cargo-leptos exports). `PORT`, when set, replaces the
//! port of the configured site address so the binary can run behind a
//! platform that assigns one.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::SocketAddr;
use std::num::ParseIntError;

use leptos::prelude::*;

pub const PORT_VAR: &str = "PORT";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Load Leptos options and apply the `PORT` override.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded or `PORT`
/// is not a valid port number.
pub fn load() -> Result<LeptosOptions, ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let mut leptos_options = conf.leptos_options;
    let port = std::env::var(PORT_VAR).ok();
    leptos_options.site_addr = listen_addr(leptos_options.site_addr, port.as_deref())?;
    Ok(leptos_options)
}

/// `site_addr` with its port replaced by `port`, if given. Blank values are
/// treated as unset.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidPort`] when `port` is not a `u16`.
pub fn listen_addr(site_addr: SocketAddr, port: Option<&str>) -> Result<SocketAddr, ConfigError> {
    let Some(raw) = port.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(site_addr);
    };
    let port = raw.parse::<u16>().map_err(|source| ConfigError::InvalidPort {
        value: raw.to_owned(),
        source,
    })?;
    Ok(SocketAddr::new(site_addr.ip(), port))
}

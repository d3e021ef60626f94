//! Process configuration from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use crate::ndbc::NdbcConfig;

/// Default listen port.
const DEFAULT_PORT: u16 = 3000;

/// Default static asset directory.
const DEFAULT_STATIC_DIR: &str = "public";

/// Errors reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Directory served for non-API paths
    pub static_dir: PathBuf,
    /// Upstream provider settings
    pub ndbc: NdbcConfig,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through a variable lookup function.
    ///
    /// Unset and empty variables take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let port = parse_var("PORT", get("PORT"))?.unwrap_or(DEFAULT_PORT);
        let host = parse_var("HOST", get("HOST"))?.unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        let static_dir = get("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        let mut ndbc = NdbcConfig::default();
        if let Some(url) = get("NDBC_BASE_URL") {
            ndbc = ndbc.with_base_url(url);
        }
        if let Some(secs) = parse_var::<u64>("NDBC_TIMEOUT_SECS", get("NDBC_TIMEOUT_SECS"))? {
            if secs == 0 {
                return Err(ConfigError::Invalid {
                    var: "NDBC_TIMEOUT_SECS",
                    value: secs.to_string(),
                });
            }
            ndbc = ndbc.with_timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            host,
            port,
            static_dir,
            ndbc,
        })
    }

    /// Socket address to bind.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<T: std::str::FromStr>(
    var: &'static str,
    value: Option<String>,
) -> Result<Option<T>, ConfigError> {
    value
        .map(|v| {
            v.trim()
                .parse()
                .map_err(|_| ConfigError::Invalid { var, value: v.clone() })
        })
        .transpose()
}

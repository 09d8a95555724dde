use std::net::SocketAddr;

use ptsd_provider::source::ArtifactSource;

pub const MODEL_URL_VAR: &str = "PTSD_MODEL_URL";
pub const SCALER_URL_VAR: &str = "PTSD_SCALER_URL";
pub const BIND_ADDR_VAR: &str = "PTSD_BIND_ADDR";

const DEFAULT_MODEL_URL: &str = "model.json";
const DEFAULT_SCALER_URL: &str = "scaler.json";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Startup configuration, read once from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub model: ArtifactSource,
    pub scaler: ArtifactSource,
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unset or blank keys take their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let get = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let bind = get(BIND_ADDR_VAR, DEFAULT_BIND_ADDR);
        let bind_addr: SocketAddr = bind
            .trim()
            .parse()
            .map_err(|e| eyre::eyre!("invalid {BIND_ADDR_VAR} '{bind}': {e}"))?;

        Ok(Self {
            model: ArtifactSource::parse(&get(MODEL_URL_VAR, DEFAULT_MODEL_URL)),
            scaler: ArtifactSource::parse(&get(SCALER_URL_VAR, DEFAULT_SCALER_URL)),
            bind_addr,
        })
    }
}

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::ProviderError;

/// Artifacts larger than this are refused.
pub const MAX_ARTIFACT_BYTES: u64 = 64 * 1024 * 1024;

const FETCH_TIMEOUT: Duration = Duration::from_secs(60);

/// Where a serialized artifact lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactSource {
    Http(String),
    File(PathBuf),
}

impl ArtifactSource {
    /// `http://` and `https://` locations are fetched with GET; `file://`
    /// locations and bare paths are read from disk.
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        if location.starts_with("http://") || location.starts_with("https://") {
            ArtifactSource::Http(location.to_string())
        } else {
            let path = location.strip_prefix("file://").unwrap_or(location);
            ArtifactSource::File(PathBuf::from(path))
        }
    }

    /// Fetch the raw artifact bytes. Blocking.
    pub fn fetch(&self) -> Result<Vec<u8>, ProviderError> {
        let body = match self {
            ArtifactSource::Http(url) => http_get(url)?,
            ArtifactSource::File(path) => {
                std::fs::read(path).map_err(|source| ProviderError::Io {
                    path: path.display().to_string(),
                    source,
                })?
            }
        };
        tracing::info!(source = %self, bytes = body.len(), "fetched artifact");
        Ok(body)
    }
}

impl fmt::Display for ArtifactSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactSource::Http(url) => f.write_str(url),
            ArtifactSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn http_get(url: &str) -> Result<Vec<u8>, ProviderError> {
    let agent = ureq::Agent::new_with_config(
        ureq::Agent::config_builder()
            .timeout_global(Some(FETCH_TIMEOUT))
            .build(),
    );

    let mut response = agent.get(url).call().map_err(|e| match e {
        ureq::Error::StatusCode(status) => ProviderError::Status {
            url: url.to_string(),
            status,
        },
        other => ProviderError::Http {
            url: url.to_string(),
            message: other.to_string(),
        },
    })?;

    response
        .body_mut()
        .with_config()
        .limit(MAX_ARTIFACT_BYTES)
        .read_to_vec()
        .map_err(|e| ProviderError::Http {
            url: url.to_string(),
            message: e.to_string(),
        })
}

use std::sync::Arc;

use bollard::Docker;
use tracing::{debug, info};

use crate::core::{ConnectionInfo, DockerError, Result};

/// Seconds before a request to a remote daemon is abandoned
const REMOTE_TIMEOUT_SECS: u64 = 120;

/// How a configured host address is reached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transport {
    Unix,
    Http,
}

impl Transport {
    fn for_host(host: &str) -> Self {
        if host.starts_with("unix://") {
            Transport::Unix
        } else {
            Transport::Http
        }
    }
}

/// Docker client wrapper
#[derive(Clone)]
pub struct DockerClient {
    inner: Arc<Docker>,
    connection_info: ConnectionInfo,
}

impl DockerClient {
    /// Create a new client from environment (DOCKER_HOST, etc.)
    pub async fn from_env() -> Result<Self> {
        info!("Creating Docker client from environment");

        // Dispatches on the DOCKER_HOST scheme, local socket when unset
        let docker = Docker::connect_with_defaults()
            .map_err(|e| DockerError::Connection(e.to_string()))?;

        let host = std::env::var("DOCKER_HOST").unwrap_or_else(|_| "local".to_string());
        Self::new(docker, host).await
    }

    /// Create a new client with custom host
    pub async fn with_host(host: &str) -> Result<Self> {
        info!("Creating Docker client with host: {}", host);

        let docker = match Transport::for_host(host) {
            Transport::Unix => connect_unix(host)?,
            Transport::Http => {
                Docker::connect_with_http(host, REMOTE_TIMEOUT_SECS, bollard::API_DEFAULT_VERSION)
                    .map_err(|e| DockerError::Connection(e.to_string()))?
            }
        };

        Self::new(docker, host.to_string()).await
    }

    /// Internal constructor
    async fn new(docker: Docker, host: String) -> Result<Self> {
        debug!("Fetching Docker version information");

        let version = docker
            .version()
            .await
            .map_err(|e| DockerError::Connection(e.to_string()))?;

        let info = ConnectionInfo {
            host,
            version: version.version.unwrap_or_else(|| "unknown".to_string()),
            api_version: version.api_version.unwrap_or_else(|| "unknown".to_string()),
        };

        debug!("Docker client initialized at {}", info.host);

        Ok(Self {
            inner: Arc::new(docker),
            connection_info: info,
        })
    }

    /// Get connection information
    pub fn connection_info(&self) -> &ConnectionInfo {
        &self.connection_info
    }

    pub(crate) fn inner(&self) -> &Docker {
        &self.inner
    }
}

#[cfg(unix)]
fn connect_unix(host: &str) -> Result<Docker> {
    Docker::connect_with_unix(host, REMOTE_TIMEOUT_SECS, bollard::API_DEFAULT_VERSION)
        .map_err(|e| DockerError::Connection(e.to_string()).into())
}

#[cfg(not(unix))]
fn connect_unix(host: &str) -> Result<Docker> {
    Err(DockerError::Connection(format!("unix sockets are not supported here: {}", host)).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Note: These tests require Docker to be running
    // Mark them with #[ignore] for CI environments without Docker

    #[tokio::test]
    #[ignore = "requires Docker daemon"]
    async fn test_from_env() {
        let client = DockerClient::from_env().await;
        assert!(client.is_ok());

        let client = client.unwrap();
        assert!(!client.connection_info().version.is_empty());
    }

    #[test]
    fn test_transport_for_host() {
        assert_eq!(
            Transport::for_host("unix:///var/run/docker.sock"),
            Transport::Unix
        );
        assert_eq!(Transport::for_host("tcp://10.0.0.5:2375"), Transport::Http);
        assert_eq!(Transport::for_host("http://10.0.0.5:2375"), Transport::Http);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_with_missing_unix_socket() {
        let client = DockerClient::with_host("unix:///nonexistent/dtop/docker.sock").await;
        assert!(matches!(
            client,
            Err(crate::core::DtopError::Docker(DockerError::Connection(_)))
        ));
    }

    #[tokio::test]
    async fn test_with_invalid_host() {
        let client = DockerClient::with_host("tcp://127.0.0.1:1").await;
        assert!(client.is_err());
    }
}

pub mod errors;
pub mod types;

pub use errors::*;
pub use types::{Column, Effect, Row, TableData, ViewMode};

/// Docker connection information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionInfo {
    pub host: String,
    pub version: String,
    pub api_version: String,
}

impl std::fmt::Display for ConnectionInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Docker {} (API {}) at {}",
            self.version, self.api_version, self.host
        )
    }
}

/// Port exposed by a container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortMapping {
    pub private_port: u16,
    pub public_port: Option<u16>,
    pub protocol: String,
}

/// Container as returned by a list call, reduced to the fields the views read
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerRecord {
    pub id: String,
    pub names: Vec<String>,
    pub image: String,
    pub command: String,
    /// Creation time in epoch seconds
    pub created: i64,
    pub state: String,
    pub ports: Vec<PortMapping>,
}

/// Image as returned by a list call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageRecord {
    /// Content-addressed ID, usually `sha256:<hex>`
    pub id: String,
    pub repo_tags: Vec<String>,
    /// Creation time in epoch seconds
    pub created: i64,
    /// Size in bytes
    pub size: i64,
}

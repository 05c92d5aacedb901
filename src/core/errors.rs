use thiserror::Error;

/// Main error type for dtop
#[derive(Error, Debug)]
pub enum DtopError {
    /// Docker API errors
    #[error("Docker error: {0}")]
    Docker(#[from] DockerError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Interrupted before the first frame was drawn
    #[error("Interrupted while loading the snapshot")]
    Interrupted,
}

/// Docker-specific errors
#[derive(Error, Debug)]
pub enum DockerError {
    /// Connection errors
    #[error("Failed to connect to Docker: {0}")]
    Connection(String),

    /// Permission denied
    #[error("Permission denied accessing Docker")]
    PermissionDenied,

    /// Snapshot listing failed
    #[error("Failed to list {resource}: {message}")]
    Fetch { resource: String, message: String },
}

/// A single runtime record that cannot be turned into a row
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Repository tag without a `:` separator
    #[error("malformed repository tag '{tag}' on image {image}")]
    MalformedTag { image: String, tag: String },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Parse errors
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    /// Validation errors
    #[error("Configuration validation failed: {0}")]
    Validation(String),

    /// File not found
    #[error("Configuration file not found: {0}")]
    NotFound(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, DtopError>;

impl DtopError {
    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            DtopError::Docker(DockerError::Connection(_)) => {
                "Could not connect to Docker. Please ensure Docker is running.".to_string()
            }
            DtopError::Docker(DockerError::PermissionDenied) => {
                "Permission denied. Please check your Docker permissions.".to_string()
            }
            DtopError::Config(ConfigError::NotFound(path)) => {
                format!("Configuration file not found: {}", path)
            }
            _ => self.to_string(),
        }
    }
}

impl DockerError {
    /// Map a bollard failure for a list call, keeping permission problems distinct
    pub fn fetch(resource: &str, err: bollard::errors::Error) -> Self {
        let message = err.to_string();
        if message.to_lowercase().contains("permission denied") {
            return DockerError::PermissionDenied;
        }
        DockerError::Fetch {
            resource: resource.to_string(),
            message,
        }
    }
}

impl From<toml::de::Error> for DtopError {
    fn from(err: toml::de::Error) -> Self {
        DtopError::Config(ConfigError::Parse(err.to_string()))
    }
}

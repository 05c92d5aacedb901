//! Container listing

use bollard::container::ListContainersOptions;
use tracing::{debug, info};

use crate::core::{ContainerRecord, DockerError, PortMapping, Result};
use crate::docker::DockerClient;

impl DockerClient {
    /// List containers; stopped ones only when `all` is set
    pub async fn list_containers(&self, all: bool) -> Result<Vec<ContainerRecord>> {
        debug!("Listing containers (all={})", all);

        let options = ListContainersOptions::<String> {
            all,
            ..Default::default()
        };

        let containers = self
            .inner()
            .list_containers(Some(options))
            .await
            .map_err(|e| DockerError::fetch("containers", e))?;

        info!("Found {} containers", containers.len());

        Ok(containers.into_iter().map(ContainerRecord::from).collect())
    }
}

impl From<bollard::models::ContainerSummary> for ContainerRecord {
    fn from(c: bollard::models::ContainerSummary) -> Self {
        let ports = c
            .ports
            .unwrap_or_default()
            .into_iter()
            .map(|p| PortMapping {
                private_port: p.private_port,
                public_port: p.public_port,
                protocol: p
                    .typ
                    .map(|t| t.to_string())
                    .filter(|t| !t.is_empty())
                    .unwrap_or_else(|| "tcp".to_string()),
            })
            .collect();

        Self {
            id: c.id.unwrap_or_default(),
            names: c.names.unwrap_or_default(),
            image: c.image.unwrap_or_default(),
            command: c.command.unwrap_or_default(),
            created: c.created.unwrap_or(0),
            state: c.state.unwrap_or_default(),
            ports,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bollard::models::{Port, PortTypeEnum};

    #[test]
    fn test_from_bollard_summary() {
        let summary = bollard::models::ContainerSummary {
            id: Some("abc123456789def".to_string()),
            names: Some(vec!["/web".to_string()]),
            image: Some("nginx".to_string()),
            command: Some("nginx -g daemon".to_string()),
            created: Some(1_700_000_000),
            state: Some("running".to_string()),
            ports: Some(vec![Port {
                ip: None,
                private_port: 80,
                public_port: Some(8080),
                typ: Some(PortTypeEnum::TCP),
            }]),
            ..Default::default()
        };

        let record = ContainerRecord::from(summary);
        assert_eq!(record.names, vec!["/web"]);
        assert_eq!(record.created, 1_700_000_000);
        assert_eq!(record.ports[0].protocol, "tcp");
        assert_eq!(record.ports[0].public_port, Some(8080));
    }

    #[test]
    fn test_from_empty_summary() {
        let record = ContainerRecord::from(bollard::models::ContainerSummary::default());
        assert!(record.id.is_empty());
        assert!(record.names.is_empty());
        assert!(record.ports.is_empty());
    }

    #[tokio::test]
    #[ignore = "requires Docker daemon"]
    async fn test_list_containers() {
        let client = DockerClient::from_env().await.unwrap();
        let containers = client.list_containers(false).await;
        assert!(containers.is_ok());
    }
}

pub mod client;
pub mod containers;
pub mod images;

use async_trait::async_trait;

pub use client::DockerClient;

use crate::core::{ConnectionInfo, ContainerRecord, ImageRecord, Result};

/// Source of the one-shot runtime snapshot shown by the viewer
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SnapshotSource {
    /// Containers known to the runtime
    async fn list_containers(&self) -> Result<Vec<ContainerRecord>>;

    /// Images known to the runtime
    async fn list_images(&self) -> Result<Vec<ImageRecord>>;
}

/// [`DockerClient`] bound to the list options chosen at startup
pub struct DockerSource {
    client: DockerClient,
    all_containers: bool,
}

impl DockerSource {
    pub fn new(client: DockerClient, all_containers: bool) -> Self {
        Self {
            client,
            all_containers,
        }
    }

    /// Daemon the snapshot is read from
    pub fn connection_info(&self) -> &ConnectionInfo {
        self.client.connection_info()
    }
}

#[async_trait]
impl SnapshotSource for DockerSource {
    async fn list_containers(&self) -> Result<Vec<ContainerRecord>> {
        self.client.list_containers(self.all_containers).await
    }

    async fn list_images(&self) -> Result<Vec<ImageRecord>> {
        self.client.list_images().await
    }
}

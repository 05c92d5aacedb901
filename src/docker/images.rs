//! Image listing

use bollard::image::ListImagesOptions;
use tracing::{debug, info};

use crate::core::{DockerError, ImageRecord, Result};
use crate::docker::DockerClient;

impl DockerClient {
    /// List top-level images
    pub async fn list_images(&self) -> Result<Vec<ImageRecord>> {
        debug!("Listing images");

        let options = ListImagesOptions::<String> {
            all: false,
            ..Default::default()
        };

        let images = self
            .inner()
            .list_images(Some(options))
            .await
            .map_err(|e| DockerError::fetch("images", e))?;

        info!("Found {} images", images.len());

        Ok(images.into_iter().map(ImageRecord::from).collect())
    }
}

impl From<bollard::models::ImageSummary> for ImageRecord {
    fn from(i: bollard::models::ImageSummary) -> Self {
        Self {
            id: i.id,
            repo_tags: i.repo_tags,
            created: i.created,
            size: i.size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires Docker daemon"]
    async fn test_list_images() {
        let client = DockerClient::from_env().await.unwrap();
        let images = client.list_images().await;
        assert!(images.is_ok());
    }
}

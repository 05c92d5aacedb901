//! Integration tests for the Docker client

// These tests require Docker to be running
// Use `cargo test --test docker_client -- --ignored` to run them

use dtop::docker::{DockerClient, DockerSource, SnapshotSource};

#[tokio::test]
#[ignore = "requires Docker daemon"]
async fn test_docker_connection() {
    let client = DockerClient::from_env().await;
    assert!(client.is_ok());
}

#[tokio::test]
#[ignore = "requires Docker daemon"]
async fn test_list_running_containers() {
    let client = DockerClient::from_env().await.unwrap();
    let source = DockerSource::new(client, false);

    let containers = source.list_containers().await.unwrap();
    for container in &containers {
        assert!(!container.id.is_empty(), "Container ID should not be empty");
        assert_eq!(container.state, "running");
    }
}

#[tokio::test]
#[ignore = "requires Docker daemon"]
async fn test_list_images() {
    let client = DockerClient::from_env().await.unwrap();
    let source = DockerSource::new(client, false);

    let images = source.list_images().await.unwrap();
    for image in &images {
        assert!(!image.id.is_empty());
    }
}

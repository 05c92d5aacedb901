//! Snapshot formatting: runtime records into fixed-column tables.
//!
//! Everything here is a pure function of the records and the `now` passed in,
//! so a frozen clock gives stable output.

pub mod containers;
pub mod humanize;
pub mod images;

pub use containers::{format_containers, CONTAINER_COLUMNS};
pub use images::{format_images, IMAGE_COLUMNS};

/// Short ID convention used by the Docker CLI
pub const SHORT_ID_LEN: usize = 12;

/// First [`SHORT_ID_LEN`] characters of an identifier
pub fn short_id(id: &str) -> String {
    id.chars().take(SHORT_ID_LEN).collect()
}

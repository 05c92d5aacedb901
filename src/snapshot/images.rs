//! Image snapshot formatting

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::core::{Column, ImageRecord, RecordError, Row, TableData};
use crate::snapshot::{humanize, short_id};

/// Fixed columns of the image list
pub const IMAGE_COLUMNS: [Column; 5] = [
    Column::new("Image ID", 15),
    Column::new("Repository", 50),
    Column::new("Tag", 30),
    Column::new("Created", 15),
    Column::new("Size", 10),
];

/// Build the image table, one row per repository tag.
///
/// Untagged images produce no rows. A tag that cannot be parsed is logged
/// and left out; the other rows of the snapshot are kept.
pub fn format_images(records: &[ImageRecord], now: DateTime<Utc>) -> TableData {
    let mut rows: Vec<Row> = Vec::new();

    for record in records {
        for tag in &record.repo_tags {
            match format_image_tag(record, tag, now) {
                Ok(row) => rows.push(row),
                Err(e) => warn!("Skipping image row: {}", e),
            }
        }
    }

    debug!(
        "Formatted {} image rows from {} records",
        rows.len(),
        records.len()
    );

    TableData {
        columns: IMAGE_COLUMNS.to_vec(),
        rows,
    }
}

fn format_image_tag(
    record: &ImageRecord,
    tag: &str,
    now: DateTime<Utc>,
) -> Result<Row, RecordError> {
    let (repository, version) = split_repo_tag(tag).ok_or_else(|| RecordError::MalformedTag {
        image: image_short_id(&record.id),
        tag: tag.to_string(),
    })?;

    Ok(vec![
        image_short_id(&record.id),
        repository.to_string(),
        version.to_string(),
        humanize::relative_time(record.created, now),
        humanize::bytes(record.size),
    ])
}

/// Split `repo:tag` on the last colon so registry ports stay in the repository
pub fn split_repo_tag(tag: &str) -> Option<(&str, &str)> {
    tag.rsplit_once(':')
}

/// Drop the digest algorithm prefix (`sha256:`) and shorten
pub fn image_short_id(id: &str) -> String {
    let digest = id.split_once(':').map_or(id, |(_, rest)| rest);
    short_id(digest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    fn image(tags: &[&str]) -> ImageRecord {
        ImageRecord {
            id: "sha256:0123456789abcdef0123456789abcdef".to_string(),
            repo_tags: tags.iter().map(|t| t.to_string()).collect(),
            created: now().timestamp() - 2 * 86_400,
            size: 187_000_000,
        }
    }

    #[test]
    fn test_single_tag() {
        let table = format_images(&[image(&["nginx:latest"])], now());
        assert_eq!(table.rows.len(), 1);
        assert_eq!(
            table.rows[0],
            vec!["0123456789ab", "nginx", "latest", "2 days ago", "187 MB"]
        );
    }

    #[test]
    fn test_multiple_tags_fan_out() {
        let table = format_images(&[image(&["repo:v1", "repo:v2"])], now());
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0][2], "v1");
        assert_eq!(table.rows[1][2], "v2");
        assert_eq!(table.rows[0][..2], table.rows[1][..2]);
        assert_eq!(table.rows[0][3..], table.rows[1][3..]);
    }

    #[test]
    fn test_untagged_image_is_skipped() {
        let table = format_images(&[image(&[])], now());
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_malformed_tag_is_skipped() {
        let table = format_images(&[image(&["nginx", "nginx:1.25"])], now());
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0][2], "1.25");
    }

    #[test]
    fn test_split_on_last_colon() {
        assert_eq!(
            split_repo_tag("localhost:5000/app:v1"),
            Some(("localhost:5000/app", "v1"))
        );
        assert_eq!(split_repo_tag("<none>:<none>"), Some(("<none>", "<none>")));
        assert_eq!(split_repo_tag("app"), None);
    }

    #[test]
    fn test_image_short_id() {
        assert_eq!(
            image_short_id("sha256:0123456789abcdef0123"),
            "0123456789ab"
        );
        assert_eq!(image_short_id("0123456789abcdef"), "0123456789ab");
        assert_eq!(image_short_id("sha256:abc"), "abc");
    }
}

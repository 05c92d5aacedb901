//! Container snapshot formatting

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::core::{Column, ContainerRecord, PortMapping, Row, TableData};
use crate::snapshot::{humanize, short_id};

/// Fixed columns of the container list
pub const CONTAINER_COLUMNS: [Column; 7] = [
    Column::new("Container ID", 15),
    Column::new("Name", 30),
    Column::new("Image", 40),
    Column::new("Command", 30),
    Column::new("Created", 15),
    Column::new("State", 10),
    Column::new("Ports", 70),
];

/// Build the container table. Records without a name are skipped.
pub fn format_containers(records: &[ContainerRecord], now: DateTime<Utc>) -> TableData {
    let rows: Vec<Row> = records
        .iter()
        .filter_map(|record| format_container(record, now))
        .collect();

    debug!(
        "Formatted {} container rows from {} records",
        rows.len(),
        records.len()
    );

    TableData {
        columns: CONTAINER_COLUMNS.to_vec(),
        rows,
    }
}

fn format_container(record: &ContainerRecord, now: DateTime<Utc>) -> Option<Row> {
    let name = record.names.first()?;

    Some(vec![
        short_id(&record.id),
        display_name(name).to_string(),
        record.image.clone(),
        record.command.clone(),
        humanize::relative_time(record.created, now),
        record.state.clone(),
        format_ports(&record.ports),
    ])
}

/// The runtime prefixes container names with `/`
fn display_name(name: &str) -> &str {
    name.strip_prefix('/').unwrap_or(name)
}

/// `"<private>/<protocol> "` for every port, trailing space included
pub fn format_ports(ports: &[PortMapping]) -> String {
    ports
        .iter()
        .map(|p| format!("{}/{} ", p.private_port, p.protocol))
        .collect()
}

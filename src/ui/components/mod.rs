//! UI components

pub mod snapshot_table;

pub use snapshot_table::SnapshotTable;

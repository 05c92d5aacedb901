//! dtop - terminal viewer for a local Docker runtime
//!
//! Takes one snapshot of the containers or images at launch and shows it in a
//! navigable table.

pub mod app;
pub mod config;
pub mod core;
pub mod docker;
pub mod snapshot;
pub mod ui;

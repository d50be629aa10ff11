//! Реестр банкротов: a desktop viewer for a fixed registry of bankruptcy
//! case records.
//!
//! The crate is a library so the GUI binary and the `export_registry` tool
//! share one implementation: the data layer ([`data`]) holds the record
//! model, the filtering/aggregation pipeline and the CSV export, [`state`]
//! owns the per-window UI state, and [`ui`] renders it with egui.

pub mod app;
pub mod color;
pub mod data;
pub mod format;
pub mod state;
pub mod ui;

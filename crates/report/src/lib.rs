// Snapshot report for the snapshot diff core
// This crate loads stored snapshot comparisons and renders one row per package

mod report;
mod row;
mod store;

pub use report::{build_report, render_report, ReportOptions};
pub use row::ReportRow;
pub use store::{load_snapshot, parse_snapshot, save_snapshot, StoredList, StoredSnapshotItem};

use log::debug;
use rayon::prelude::*;
use snapshot_diff::{DiffOptions, RowStatus, SnapshotDiffItem};

use crate::row::ReportRow;

/// Report configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Options passed to every category comparison
    pub diff: DiffOptions,

    /// Drop updated packages that did not change at all
    pub changed_only: bool,
}

/// Compute one row per package, in input order.
///
/// Packages are independent, so the rows are computed in parallel.
pub fn build_report(items: &[SnapshotDiffItem], options: &ReportOptions) -> Vec<ReportRow> {
    let rows: Vec<ReportRow> = items
        .par_iter()
        .map(|item| ReportRow::from_item(item, &options.diff))
        .filter(|row| !options.changed_only || row.has_changes())
        .collect();
    debug!("Built {} rows from {} packages", rows.len(), items.len());
    rows
}

/// Render rows followed by a one-line tally
pub fn render_report(rows: &[ReportRow]) -> String {
    let mut out = String::new();
    for row in rows {
        out.push_str(&row.to_string());
        out.push_str("\n\n");
    }

    let count = |status: RowStatus| rows.iter().filter(|row| row.status == status).count();
    out.push_str(&format!(
        "{} packages: {} new, {} deleted, {} updated\n",
        rows.len(),
        count(RowStatus::NewlyInstalled),
        count(RowStatus::Deleted),
        count(RowStatus::Updated),
    ));
    out
}

use snapshot_diff::{CategoryDiff, DiffOptions, RowStatus, SnapshotDiffItem};
use std::fmt;

/// One package's line in the "what changed" summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub package_name: String,
    pub status: RowStatus,
    pub title: String,
    pub version: String,
    pub target_api: String,
    pub abi: String,
    /// Aggregate over all categories; empty for new and deleted packages
    pub changes: CategoryDiff,
    /// Whether any scalar attribute differs
    pub scalar_changes: bool,
}

impl ReportRow {
    /// Build the row for one package
    pub fn from_item(item: &SnapshotDiffItem, options: &DiffOptions) -> Self {
        Self {
            package_name: item.package_name.clone(),
            status: item.status(),
            title: item.title(),
            version: item.version_text(),
            target_api: item.target_api_text(),
            abi: item.abi_text(),
            changes: item.aggregate_with(options),
            scalar_changes: item.has_scalar_changes(),
        }
    }

    /// Whether the row says anything beyond "still installed, same as before"
    pub fn has_changes(&self) -> bool {
        self.status != RowStatus::Updated || self.scalar_changes || self.changes.has_changes()
    }

    fn marker(&self) -> char {
        match self.status {
            RowStatus::NewlyInstalled => '+',
            RowStatus::Deleted => '-',
            RowStatus::Updated => '~',
        }
    }
}

impl fmt::Display for ReportRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}] {} ({})", self.marker(), self.title, self.package_name)?;
        writeln!(f, "    version: {}", self.version)?;
        writeln!(f, "    target:  {}", self.target_api)?;
        write!(f, "    abi:     {}", self.abi)?;

        if self.status.suppresses_diff() {
            return Ok(());
        }

        let indicators = self.changes.indicators();
        if indicators.is_empty() {
            write!(f, "\n    changes: none")
        } else {
            let names: Vec<String> = indicators.iter().map(ToString::to_string).collect();
            write!(f, "\n    changes: {}", names.join(", "))
        }
    }
}

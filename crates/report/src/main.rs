use anyhow::Result;
use clap::Parser;
use log::info;
use snapshot_diff::{DiffOptions, DuplicateKeys, MoveMatching};
use snapshot_report::{build_report, load_snapshot, render_report, ReportOptions};
use std::path::PathBuf;

/// Summarize what changed between two snapshots of installed packages
#[derive(Debug, Parser)]
#[command(name = "snapshot-report", version)]
struct Args {
    /// Stored snapshot comparison (JSON array of package records)
    input: PathBuf,

    /// Pair moved components in sorted order instead of snapshot order
    #[arg(long)]
    lexicographic_moves: bool,

    /// Treat repeated names within one snapshot as a single entry
    #[arg(long)]
    dedup: bool,

    /// Only show packages that changed
    #[arg(long)]
    changed_only: bool,
}

impl Args {
    fn report_options(&self) -> ReportOptions {
        let move_matching = if self.lexicographic_moves {
            MoveMatching::Lexicographic
        } else {
            MoveMatching::FirstFound
        };
        let duplicates = if self.dedup {
            DuplicateKeys::Set
        } else {
            DuplicateKeys::Multiset
        };

        ReportOptions {
            diff: DiffOptions {
                move_matching,
                duplicates,
            },
            changed_only: self.changed_only,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let options = args.report_options();
    info!("Report options: {:?}", options);

    let items = load_snapshot(&args.input)?;
    let rows = build_report(&items, &options);
    print!("{}", render_report(&rows));

    Ok(())
}

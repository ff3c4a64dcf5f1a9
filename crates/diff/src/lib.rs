// Core snapshot diff library
// This crate compares two snapshots of an installed package's metadata and
// reduces the result to added / removed / changed / moved indicators

mod component_diff;
mod diff_node;
mod format;
mod matching;
mod native_diff;
mod options;
mod snapshot;

pub use component_diff::{
    compare_components, compare_components_with, match_components, simple_name,
    ComponentMatching, ComponentMove,
};
pub use diff_node::{CategoryDiff, DiffIndicator};
pub use format::{fill_template, format_diff, format_diff_pair, ARROW};
pub use native_diff::{
    compare_native_libs, compare_native_libs_with, match_native_libs, LibraryChange,
    LibraryMatching, NativeLib,
};
pub use options::{DiffOptions, DuplicateKeys, MoveMatching};
pub use snapshot::{
    aggregate, AbiDiff, Category, RowStatus, SnapshotDiffItem, VersionedList, VersionedValue,
};

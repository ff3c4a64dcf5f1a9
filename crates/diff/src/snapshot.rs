use derive_more::Display;
use log::{debug, trace};

use crate::component_diff::compare_components_with;
use crate::diff_node::CategoryDiff;
use crate::format::{format_diff, format_diff_pair, ARROW};
use crate::native_diff::{compare_native_libs_with, NativeLib};
use crate::options::DiffOptions;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One attribute as seen by the old and the new snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VersionedValue<T> {
    pub old: T,
    pub new: T,
}

impl<T> VersionedValue<T> {
    /// Create a new value pair
    pub fn new(old: T, new: T) -> Self {
        Self { old, new }
    }

    /// Apply `f` to both sides
    pub fn map<U, F>(&self, f: F) -> VersionedValue<U>
    where
        F: Fn(&T) -> U,
    {
        VersionedValue {
            old: f(&self.old),
            new: f(&self.new),
        }
    }
}

impl<T: Clone> VersionedValue<T> {
    /// A pair whose sides are equal
    pub fn same(value: T) -> Self {
        Self {
            old: value.clone(),
            new: value,
        }
    }
}

impl<T: PartialEq> VersionedValue<T> {
    /// Check if the two sides differ
    pub fn is_changed(&self) -> bool {
        self.old != self.new
    }
}

/// One category's items as seen by the old and the new snapshot.
///
/// `new` is `None` when the later snapshot could not report the category at
/// all, which is not the same thing as reporting an empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VersionedList<T> {
    pub old: Vec<T>,
    pub new: Option<Vec<T>>,
}

impl<T> VersionedList<T> {
    /// Create a new list pair
    pub fn new(old: Vec<T>, new: Option<Vec<T>>) -> Self {
        Self { old, new }
    }

    /// The new side as a slice, if it is available
    pub fn new_items(&self) -> Option<&[T]> {
        self.new.as_deref()
    }
}

impl<T: Clone> VersionedList<T> {
    /// A pair whose sides hold the same items
    pub fn same(items: Vec<T>) -> Self {
        Self {
            new: Some(items.clone()),
            old: items,
        }
    }
}

impl<T> Default for VersionedList<T> {
    fn default() -> Self {
        Self {
            old: Vec::new(),
            new: Some(Vec::new()),
        }
    }
}

/// ABI code of a package in both snapshots.
///
/// The new code may be missing when the later snapshot did not record it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AbiDiff {
    pub old: i16,
    pub new: Option<i16>,
}

impl AbiDiff {
    /// Create a new ABI pair
    pub fn new(old: i16, new: Option<i16>) -> Self {
        Self { old, new }
    }

    /// The ABI only counts as changed when a new code is known and differs
    pub fn is_changed(&self) -> bool {
        self.new.is_some_and(|new| new != self.old)
    }
}

/// The five compared data groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Category {
    #[display(fmt = "native libraries")]
    NativeLibs,

    #[display(fmt = "services")]
    Services,

    #[display(fmt = "activities")]
    Activities,

    #[display(fmt = "receivers")]
    Receivers,

    #[display(fmt = "providers")]
    Providers,
}

impl Category {
    /// Every category, in comparison order
    pub const ALL: [Category; 5] = [
        Category::NativeLibs,
        Category::Services,
        Category::Activities,
        Category::Receivers,
        Category::Providers,
    ];
}

/// How a package relates to the two snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RowStatus {
    /// Only the new snapshot knows the package
    #[display(fmt = "New")]
    NewlyInstalled,

    /// Only the old snapshot knows the package
    #[display(fmt = "Deleted")]
    Deleted,

    /// Both snapshots know the package
    #[display(fmt = "Updated")]
    Updated,
}

impl RowStatus {
    /// Whether per-attribute differences are meaningless for this status
    pub fn suppresses_diff(&self) -> bool {
        !matches!(self, RowStatus::Updated)
    }
}

/// Everything the two snapshots recorded about one package
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SnapshotDiffItem {
    pub package_name: String,
    pub deleted: bool,
    pub newly_installed: bool,
    pub label: VersionedValue<String>,
    pub version_name: VersionedValue<String>,
    pub version_code: VersionedValue<i64>,
    pub target_api: VersionedValue<i16>,
    pub abi: AbiDiff,
    pub native_libs: VersionedList<NativeLib>,
    pub services: VersionedList<String>,
    pub activities: VersionedList<String>,
    pub receivers: VersionedList<String>,
    pub providers: VersionedList<String>,
}

impl SnapshotDiffItem {
    /// Create an item with no recorded differences
    pub fn new(package_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            ..Self::default()
        }
    }

    /// Status derived from the two flags. A deleted package stays deleted
    /// even if it is also flagged as newly installed.
    pub fn status(&self) -> RowStatus {
        if self.deleted {
            RowStatus::Deleted
        } else if self.newly_installed {
            RowStatus::NewlyInstalled
        } else {
            RowStatus::Updated
        }
    }

    /// Compare one category with the given options
    pub fn category_diff(&self, category: Category, options: &DiffOptions) -> CategoryDiff {
        let diff = match category {
            Category::NativeLibs => compare_native_libs_with(
                &self.native_libs.old,
                self.native_libs.new_items(),
                options,
            ),
            Category::Services => components(&self.services, options),
            Category::Activities => components(&self.activities, options),
            Category::Receivers => components(&self.receivers, options),
            Category::Providers => components(&self.providers, options),
        };
        trace!("{} {}: {:?}", self.package_name, category, diff);
        diff
    }

    /// Per-category results, in [`Category::ALL`] order
    pub fn category_diffs(&self, options: &DiffOptions) -> Vec<(Category, CategoryDiff)> {
        Category::ALL
            .into_iter()
            .map(|category| (category, self.category_diff(category, options)))
            .collect()
    }

    /// Fold all categories into one result with the default options
    pub fn aggregate(&self) -> CategoryDiff {
        self.aggregate_with(&DiffOptions::default())
    }

    /// Fold all categories into one result.
    ///
    /// Newly installed and deleted packages have nothing to compare against,
    /// so their result is empty.
    pub fn aggregate_with(&self, options: &DiffOptions) -> CategoryDiff {
        let status = self.status();
        if status.suppresses_diff() {
            debug!("Skipping category diff for {} ({})", self.package_name, status);
            return CategoryDiff::default();
        }

        self.category_diffs(options)
            .into_iter()
            .fold(CategoryDiff::default(), |total, (_, diff)| total | diff)
    }

    /// Check if any scalar attribute differs between the snapshots
    pub fn has_scalar_changes(&self) -> bool {
        self.label.is_changed()
            || self.version_name.is_changed()
            || self.version_code.is_changed()
            || self.target_api.is_changed()
            || self.abi.is_changed()
    }

    /// Application label
    pub fn title(&self) -> String {
        format_diff(&self.label, self.status().suppresses_diff(), "%s")
    }

    /// Version name and code, e.g. `1.0 (1) → 1.1 (2)`
    pub fn version_text(&self) -> String {
        format_diff_pair(
            &self.version_name,
            &self.version_code,
            self.status().suppresses_diff(),
            "%s (%s)",
        )
    }

    /// Target API level, e.g. `API 33`
    pub fn target_api_text(&self) -> String {
        format_diff(&self.target_api, self.status().suppresses_diff(), "API %s")
    }

    /// Raw ABI code, with the new code appended when it changed
    pub fn abi_text(&self) -> String {
        match self.abi.new {
            Some(new) if self.abi.is_changed() => format!("{} {} {}", self.abi.old, ARROW, new),
            _ => self.abi.old.to_string(),
        }
    }
}

fn components(list: &VersionedList<String>, options: &DiffOptions) -> CategoryDiff {
    compare_components_with(&list.old, list.new_items(), options)
}

/// Fold all categories of `item` into one result with the default options
pub fn aggregate(item: &SnapshotDiffItem) -> CategoryDiff {
    item.aggregate()
}

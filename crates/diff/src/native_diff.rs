use log::{debug, trace};

use crate::diff_node::CategoryDiff;
use crate::matching::{first_per_key, KeyPool};
use crate::options::DiffOptions;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A native library shipped with a package
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NativeLib {
    /// File name of the library, its identity across snapshots
    pub name: String,

    /// Size of the library in bytes
    pub size: u64,
}

impl NativeLib {
    /// Create a new native library record
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// A library present in both snapshots with a different size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LibraryChange<'a> {
    pub old: &'a NativeLib,
    pub new: &'a NativeLib,
}

/// Item-level outcome of matching two library lists by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryMatching<'a> {
    /// Libraries present in both snapshots with the same size (new side)
    pub unchanged: Vec<&'a NativeLib>,

    /// Libraries present in both snapshots with a different size
    pub changed: Vec<LibraryChange<'a>>,

    /// Libraries only present in the new snapshot
    pub added: Vec<&'a NativeLib>,

    /// Libraries only present in the old snapshot
    pub removed: Vec<&'a NativeLib>,
}

impl LibraryMatching<'_> {
    /// Reduce the matching to its indicators. Libraries never move.
    pub fn summary(&self) -> CategoryDiff {
        CategoryDiff {
            added: !self.added.is_empty(),
            removed: !self.removed.is_empty(),
            changed: !self.changed.is_empty(),
            moved: false,
        }
    }
}

/// Match two library lists by name.
///
/// Every new library claims the earliest unclaimed old library with the same
/// name; a size mismatch on a claimed pair counts as a change.
pub fn match_native_libs<'a>(
    old: &'a [NativeLib],
    new: &'a [NativeLib],
    options: &DiffOptions,
) -> LibraryMatching<'a> {
    let (old, new): (Vec<&NativeLib>, Vec<&NativeLib>) = if options.collapse_duplicates() {
        (
            first_per_key(old, |lib| lib.name.as_str()),
            first_per_key(new, |lib| lib.name.as_str()),
        )
    } else {
        (old.iter().collect(), new.iter().collect())
    };

    let mut pool = KeyPool::new(old.iter().map(|lib| lib.name.as_str()));
    let mut claimed = vec![false; old.len()];
    let mut matching = LibraryMatching::default();

    for &lib in &new {
        match pool.take(&lib.name) {
            Some(index) => {
                claimed[index] = true;
                let previous = old[index];
                if previous.size == lib.size {
                    matching.unchanged.push(lib);
                } else {
                    trace!(
                        "Native library {} changed size: {} -> {}",
                        lib.name,
                        previous.size,
                        lib.size
                    );
                    matching.changed.push(LibraryChange {
                        old: previous,
                        new: lib,
                    });
                }
            }
            None => matching.added.push(lib),
        }
    }

    matching.removed = old
        .iter()
        .zip(&claimed)
        .filter(|(_, claimed)| !**claimed)
        .map(|(&lib, _)| lib)
        .collect();

    matching
}

/// Compare two library lists with the default options.
///
/// `new` is `None` when the later snapshot could not report its libraries;
/// that is reported as a removal without looking at `old`.
pub fn compare_native_libs(old: &[NativeLib], new: Option<&[NativeLib]>) -> CategoryDiff {
    compare_native_libs_with(old, new, &DiffOptions::default())
}

/// Compare two library lists with explicit options
pub fn compare_native_libs_with(
    old: &[NativeLib],
    new: Option<&[NativeLib]>,
    options: &DiffOptions,
) -> CategoryDiff {
    match new {
        Some(new) => match_native_libs(old, new, options).summary(),
        None => {
            debug!("New native library list unavailable, reporting removal");
            CategoryDiff::removed_only()
        }
    }
}

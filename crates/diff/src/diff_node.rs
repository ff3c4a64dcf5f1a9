use derive_more::Display;
use std::ops::{BitOr, BitOrAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One kind of difference a category can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DiffIndicator {
    /// Something exists only in the new snapshot
    #[display(fmt = "Added")]
    Added,

    /// Something exists only in the old snapshot
    #[display(fmt = "Removed")]
    Removed,

    /// Something exists in both snapshots with different attributes
    #[display(fmt = "Changed")]
    Changed,

    /// Something was relocated to another package under the same simple name
    #[display(fmt = "Moved")]
    Moved,
}

/// The result of comparing one category (or all of them folded together).
///
/// The four flags are independent: a category may report additions and
/// removals in the same comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CategoryDiff {
    /// At least one item exists only in the new snapshot
    pub added: bool,

    /// At least one item exists only in the old snapshot
    pub removed: bool,

    /// At least one matched item differs in its attributes
    pub changed: bool,

    /// At least one item was matched by simple name only
    pub moved: bool,
}

impl CategoryDiff {
    /// Result used when the new snapshot could not report the category at all
    pub fn removed_only() -> Self {
        Self {
            removed: true,
            ..Self::default()
        }
    }

    /// Check if any indicator is set
    pub fn has_changes(&self) -> bool {
        self.added || self.removed || self.changed || self.moved
    }

    /// Check if the given indicator is set
    pub fn contains(&self, indicator: DiffIndicator) -> bool {
        match indicator {
            DiffIndicator::Added => self.added,
            DiffIndicator::Removed => self.removed,
            DiffIndicator::Changed => self.changed,
            DiffIndicator::Moved => self.moved,
        }
    }

    /// The set indicators, always in the order added, removed, changed, moved
    pub fn indicators(&self) -> Vec<DiffIndicator> {
        [
            DiffIndicator::Added,
            DiffIndicator::Removed,
            DiffIndicator::Changed,
            DiffIndicator::Moved,
        ]
        .into_iter()
        .filter(|&indicator| self.contains(indicator))
        .collect()
    }
}

impl BitOr for CategoryDiff {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            added: self.added || rhs.added,
            removed: self.removed || rhs.removed,
            changed: self.changed || rhs.changed,
            moved: self.moved || rhs.moved,
        }
    }
}

impl BitOrAssign for CategoryDiff {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

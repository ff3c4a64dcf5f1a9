//! Knobs for the matchers.
//!
//! The defaults reproduce the behaviour of the snapshot list the indicators
//! were designed for. The alternatives make the result independent of the
//! order in which a snapshot happened to list its items.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How unmatched components are paired up by simple name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveMatching {
    /// Each new name takes the first remaining old name with the same simple
    /// name, scanning in the order the old snapshot listed them.
    #[default]
    FirstFound,

    /// New names are visited in sorted order and each takes the
    /// lexicographically smallest remaining candidate.
    Lexicographic,
}

/// How repeated identity keys inside one snapshot are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DuplicateKeys {
    /// Every occurrence is matched at most once, so an extra copy on one side
    /// shows up as added or removed.
    #[default]
    Multiset,

    /// Repeated keys collapse to their first occurrence before matching.
    Set,
}

/// Configuration shared by all matchers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiffOptions {
    /// Pairing strategy for the move pass
    pub move_matching: MoveMatching,

    /// Treatment of repeated names
    pub duplicates: DuplicateKeys,
}

impl DiffOptions {
    /// Options whose results do not depend on input order
    pub fn order_independent() -> Self {
        Self {
            move_matching: MoveMatching::Lexicographic,
            duplicates: DuplicateKeys::Set,
        }
    }

    pub(crate) fn collapse_duplicates(&self) -> bool {
        self.duplicates == DuplicateKeys::Set
    }
}

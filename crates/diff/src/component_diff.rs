use log::{debug, trace};

use crate::diff_node::CategoryDiff;
use crate::matching::{first_per_key, KeyPool};
use crate::options::{DiffOptions, MoveMatching};

/// Trailing segment of a fully-qualified component name.
///
/// Names without a `.` are their own simple name.
pub fn simple_name(name: &str) -> &str {
    name.rsplit_once('.').map_or(name, |(_, simple)| simple)
}

/// A component matched only by its simple name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentMove<'a> {
    pub old: &'a str,
    pub new: &'a str,
}

/// Item-level outcome of matching two component lists
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentMatching<'a> {
    /// Names present verbatim in both snapshots
    pub unchanged: Vec<&'a str>,

    /// Pairs matched by simple name after the exact pass
    pub moved: Vec<ComponentMove<'a>>,

    /// Names left over in the new snapshot
    pub added: Vec<&'a str>,

    /// Names left over in the old snapshot
    pub removed: Vec<&'a str>,
}

impl ComponentMatching<'_> {
    /// Reduce the matching to its indicators. Components have no attributes
    /// to compare, so they are never reported as changed.
    pub fn summary(&self) -> CategoryDiff {
        CategoryDiff {
            added: !self.added.is_empty(),
            removed: !self.removed.is_empty(),
            changed: false,
            moved: !self.moved.is_empty(),
        }
    }
}

fn name_list<'a, S: AsRef<str>>(names: &'a [S], options: &DiffOptions) -> Vec<&'a str> {
    let names = names.iter().map(|name| name.as_ref());
    if options.collapse_duplicates() {
        let names: Vec<&str> = names.collect();
        first_per_key(&names, |name| *name).into_iter().copied().collect()
    } else {
        names.collect()
    }
}

/// Match two component lists.
///
/// The first pass pairs identical names. The second pass pairs what is left
/// by simple name, each name taking part in at most one pair. Whatever
/// survives both passes is added or removed.
pub fn match_components<'a, S: AsRef<str>>(
    old: &'a [S],
    new: &'a [S],
    options: &DiffOptions,
) -> ComponentMatching<'a> {
    let old = name_list(old, options);
    let new = name_list(new, options);

    let mut pool = KeyPool::new(old.iter().copied());
    let mut claimed = vec![false; old.len()];
    let mut matching = ComponentMatching::default();
    let mut new_rest = Vec::new();

    for name in new {
        match pool.take(name) {
            Some(index) => {
                claimed[index] = true;
                matching.unchanged.push(name);
            }
            None => new_rest.push(name),
        }
    }

    let mut old_rest: Vec<&str> = old
        .into_iter()
        .zip(claimed)
        .filter_map(|(name, claimed)| (!claimed).then_some(name))
        .collect();

    if options.move_matching == MoveMatching::Lexicographic {
        old_rest.sort_unstable();
        new_rest.sort_unstable();
    }

    for name in new_rest {
        let simple = simple_name(name);
        match old_rest
            .iter()
            .position(|&candidate| simple_name(candidate) == simple)
        {
            Some(index) => {
                let previous = old_rest.remove(index);
                trace!("Component {} moved to {}", previous, name);
                matching.moved.push(ComponentMove {
                    old: previous,
                    new: name,
                });
            }
            None => matching.added.push(name),
        }
    }

    matching.removed = old_rest;
    matching
}

/// Compare two component lists with the default options.
///
/// `new` is `None` when the later snapshot could not report this category;
/// that is reported as a removal without looking at `old`.
pub fn compare_components<S: AsRef<str>>(old: &[S], new: Option<&[S]>) -> CategoryDiff {
    compare_components_with(old, new, &DiffOptions::default())
}

/// Compare two component lists with explicit options
pub fn compare_components_with<S: AsRef<str>>(
    old: &[S],
    new: Option<&[S]>,
    options: &DiffOptions,
) -> CategoryDiff {
    match new {
        Some(new) => match_components(old, new, options).summary(),
        None => {
            debug!("New component list unavailable, reporting removal");
            CategoryDiff::removed_only()
        }
    }
}

use std::collections::{HashMap, HashSet, VecDeque};

/// Keep only the first item for every key, preserving order
pub(crate) fn first_per_key<'a, T, F>(items: &'a [T], key: F) -> Vec<&'a T>
where
    F: Fn(&'a T) -> &'a str,
{
    let mut seen = HashSet::new();
    items.iter().filter(|&item| seen.insert(key(item))).collect()
}

/// Positions of the not-yet-matched old items, grouped by identity key.
///
/// Positions for one key are handed out in the order they were inserted, so
/// the earliest unmatched occurrence always wins.
pub(crate) struct KeyPool<'a> {
    slots: HashMap<&'a str, VecDeque<usize>>,
}

impl<'a> KeyPool<'a> {
    pub(crate) fn new(keys: impl IntoIterator<Item = &'a str>) -> Self {
        let mut slots: HashMap<&'a str, VecDeque<usize>> = HashMap::new();
        for (index, key) in keys.into_iter().enumerate() {
            slots.entry(key).or_default().push_back(index);
        }
        Self { slots }
    }

    /// Claim the earliest unmatched position for `key`
    pub(crate) fn take(&mut self, key: &str) -> Option<usize> {
        self.slots.get_mut(key).and_then(VecDeque::pop_front)
    }
}

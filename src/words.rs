//! Word grouping by length.

use indexmap::IndexMap;

/// Group words by character count.
///
/// Keys appear in first-seen order and each group preserves the
/// relative order of the input. Empty input yields an empty map.
pub fn group_by_length<S: AsRef<str>>(words: &[S]) -> IndexMap<usize, Vec<String>> {
    let mut groups: IndexMap<usize, Vec<String>> = IndexMap::new();

    for word in words {
        let word = word.as_ref();
        groups
            .entry(word.chars().count())
            .or_default()
            .push(word.to_string());
    }

    groups
}

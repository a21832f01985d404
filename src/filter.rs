//! Case-insensitive substring filtering over the ordered entry set.

use crate::entry::Entry;

/// Return the positions of the entries matching `filter`, in input order.
///
/// An entry matches when its id, label or detail contains the filter,
/// ignoring case. An empty filter matches everything.
#[must_use]
pub fn matching_indices(entries: &[Entry], filter: &str) -> Vec<usize> {
	if filter.is_empty() {
		return (0..entries.len()).collect();
	}

	let needle = filter.to_lowercase();
	entries
		.iter()
		.enumerate()
		.filter(|(_, entry)| matches(entry, &needle))
		.map(|(index, _)| index)
		.collect()
}

/// Return the entries matching `filter`, in input order.
#[must_use]
pub fn apply<'a>(entries: &'a [Entry], filter: &str) -> Vec<&'a Entry> {
	matching_indices(entries, filter)
		.into_iter()
		.map(|index| &entries[index])
		.collect()
}

fn matches(entry: &Entry, needle: &str) -> bool {
	[&entry.id, &entry.label, &entry.detail]
		.into_iter()
		.any(|field| field.to_lowercase().contains(needle))
}

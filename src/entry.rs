//! Candidate rows and their parsed representation.
//!
//! Rows arrive as tab-delimited text (`id`, `id<TAB>label` or
//! `id<TAB>label<TAB>detail`). Parsing is lenient: missing trailing fields are
//! filled with defaults and rows without an identifier are dropped.

use std::fmt;

/// Label used when a row carries no name column.
pub const NO_NAME_TAG: &str = "No Name Tag";

const FIELD_SEPARATOR: char = '\t';
const MAX_FIELDS: usize = 3;

/// One selectable candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
	pub id: String,
	pub label: String,
	pub detail: String,
}

impl Entry {
	#[must_use]
	pub fn new(id: impl Into<String>, label: impl Into<String>, detail: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			label: label.into(),
			detail: detail.into(),
		}
	}

	/// Parse a single tab-delimited row. Returns `None` when the row has no
	/// identifier.
	#[must_use]
	pub fn parse(row: &str) -> Option<Self> {
		let row = row.trim_end_matches(['\r', '\n', FIELD_SEPARATOR]);
		let mut fields = row.splitn(MAX_FIELDS, FIELD_SEPARATOR);

		let id = fields.next().map(str::trim).filter(|id| !id.is_empty())?;
		let label = fields.next().unwrap_or(NO_NAME_TAG);
		let detail = fields.next().unwrap_or_default();

		Some(Self::new(id, label, detail))
	}

	/// Text shown for the entry in the picker list.
	#[must_use]
	pub fn display_text(&self) -> String {
		let mut text = String::with_capacity(self.label.len() + self.id.len() + self.detail.len() + 4);
		text.push_str(&self.label);
		text.push_str("  ");
		text.push_str(&self.id);
		if !self.detail.is_empty() {
			text.push_str("  ");
			text.extend(
				self.detail
					.chars()
					.map(|ch| if ch == FIELD_SEPARATOR { ' ' } else { ch }),
			);
		}
		text
	}

	fn sort_key(&self) -> String {
		self.label.to_lowercase()
	}
}

impl fmt::Display for Entry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}\t{}", self.id, self.label)?;
		if !self.detail.is_empty() {
			write!(f, "\t{}", self.detail)?;
		}
		Ok(())
	}
}

/// Parse every row, silently skipping the ones without an identifier.
pub fn parse_rows<I, S>(rows: I) -> Vec<Entry>
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	rows.into_iter()
		.filter_map(|row| Entry::parse(row.as_ref()))
		.collect()
}

/// Order entries by lowercased label. The sort is stable, so entries sharing a
/// label keep their input order.
pub fn sort_entries(entries: &mut [Entry]) {
	entries.sort_by_cached_key(Entry::sort_key);
}

/// Parse and sort in one go; the result is the ordered entry set used by the
/// picker.
pub fn ordered_entries<I, S>(rows: I) -> Vec<Entry>
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	let mut entries = parse_rows(rows);
	sort_entries(&mut entries);
	entries
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_all_three_fields() {
		let entry = Entry::parse("i-0001\tweb-1\t10.0.0.1").unwrap();
		assert_eq!(entry, Entry::new("i-0001", "web-1", "10.0.0.1"));
	}

	#[test]
	fn extra_tabs_stay_in_detail() {
		let entry = Entry::parse("i-1\tdb\t10.0.0.2\t54.1.2.3").unwrap();
		assert_eq!(entry.detail, "10.0.0.2\t54.1.2.3");
		assert_eq!(entry.display_text(), "db  i-1  10.0.0.2 54.1.2.3");
	}

	#[test]
	fn missing_fields_fall_back_to_defaults() {
		let entry = Entry::parse("i-42").unwrap();
		assert_eq!(entry.label, NO_NAME_TAG);
		assert_eq!(entry.detail, "");

		let entry = Entry::parse("i-43\tcache").unwrap();
		assert_eq!(entry.label, "cache");
		assert_eq!(entry.detail, "");
	}

	#[test]
	fn empty_trailing_fields_are_dropped() {
		let fetched = Entry::parse("i-0ccc\tNo Name Tag\t10.0.0.3\t").unwrap();
		assert_eq!(fetched.display_text(), "No Name Tag  i-0ccc  10.0.0.3");
		assert_eq!(Entry::parse("i-0ccc\tNo Name Tag\t10.0.0.3"), Some(fetched));

		let bare = Entry::parse("i-9\t").unwrap();
		assert_eq!(bare.label, NO_NAME_TAG);
		assert_eq!(bare.display_text(), "No Name Tag  i-9");
	}

	#[test]
	fn rows_without_identifier_are_skipped() {
		let entries = parse_rows(["", "   ", "i-1\ta", "\r\n"]);
		assert_eq!(entries.len(), 1);
		assert_eq!(entries[0].id, "i-1");
	}

	#[test]
	fn sort_is_case_insensitive_and_stable() {
		let mut entries = parse_rows([
			"i-1\tbeta",
			"i-2\tAlpha",
			"i-3\tBETA",
			"i-4\talpha",
			"i-5\tbeta",
		]);
		sort_entries(&mut entries);

		let ids: Vec<&str> = entries.iter().map(|entry| entry.id.as_str()).collect();
		assert_eq!(ids, ["i-2", "i-4", "i-1", "i-3", "i-5"]);
	}

	#[test]
	fn display_round_trips_through_parse() {
		let entry = Entry::new("i-7", "bastion", "10.1.1.1");
		assert_eq!(Entry::parse(&entry.to_string()), Some(entry));
	}
}

use crate::entry::Entry;
use crate::filter;

use super::PickerKey;

/// Where the picker currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerStatus {
	Running,
	Selected(Entry),
	Cancelled,
}

/// Terminal value of an interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
	Selected(Entry),
	Cancelled,
}

impl SessionOutcome {
	/// Identifier of the chosen entry, if any.
	#[must_use]
	pub fn selected_id(&self) -> Option<&str> {
		match self {
			Self::Selected(entry) => Some(&entry.id),
			Self::Cancelled => None,
		}
	}
}

/// Selection state machine.
///
/// Owns the ordered entry set, the filter buffer, the filtered view (as
/// positions into the entry set) and the cursor. Transitions go through
/// [`Picker::step`], which consumes the current state and returns the next
/// one.
#[derive(Debug, Clone)]
pub struct Picker {
	entries: Vec<Entry>,
	filter: String,
	filtered: Vec<usize>,
	cursor: usize,
	status: PickerStatus,
}

impl Picker {
	/// Build a running picker over an already ordered entry set.
	#[must_use]
	pub fn new(entries: Vec<Entry>) -> Self {
		Self::with_filter(entries, "")
	}

	/// Build a running picker whose filter buffer is pre-populated.
	#[must_use]
	pub fn with_filter(entries: Vec<Entry>, seed: impl Into<String>) -> Self {
		let filter = seed.into();
		let filtered = filter::matching_indices(&entries, &filter);
		Self {
			entries,
			filter,
			filtered,
			cursor: 0,
			status: PickerStatus::Running,
		}
	}

	/// Apply one key. Keys arriving after a terminal state are ignored.
	#[must_use]
	pub fn step(mut self, key: PickerKey) -> Self {
		if self.is_terminal() {
			return self;
		}

		match key {
			PickerKey::Cancel => {
				self.cursor = 0;
				self.status = PickerStatus::Cancelled;
			}
			PickerKey::Up => self.move_up(),
			PickerKey::Down => self.move_down(),
			PickerKey::Enter => {
				if let Some(entry) = self.current() {
					self.status = PickerStatus::Selected(entry.clone());
				}
			}
			PickerKey::Backspace => {
				if self.filter.pop().is_some() {
					self.refilter();
				}
			}
			PickerKey::Character(ch) => {
				self.filter.push(ch);
				self.refilter();
			}
		}

		self
	}

	/// The outcome once the picker has reached a terminal state.
	#[must_use]
	pub fn outcome(&self) -> Option<SessionOutcome> {
		match &self.status {
			PickerStatus::Running => None,
			PickerStatus::Selected(entry) => Some(SessionOutcome::Selected(entry.clone())),
			PickerStatus::Cancelled => Some(SessionOutcome::Cancelled),
		}
	}

	#[must_use]
	pub fn status(&self) -> &PickerStatus {
		&self.status
	}

	#[must_use]
	pub fn is_terminal(&self) -> bool {
		!matches!(self.status, PickerStatus::Running)
	}

	/// Cursor position in the filtered view. `None` once cancelled.
	#[must_use]
	pub fn cursor(&self) -> Option<usize> {
		match self.status {
			PickerStatus::Cancelled => None,
			_ => Some(self.cursor),
		}
	}

	#[must_use]
	pub fn filter(&self) -> &str {
		&self.filter
	}

	/// Full ordered entry set.
	#[must_use]
	pub fn entries(&self) -> &[Entry] {
		&self.entries
	}

	/// Entries currently matching the filter, in display order.
	pub fn filtered(&self) -> impl ExactSizeIterator<Item = &Entry> + '_ {
		self.filtered.iter().map(|&index| &self.entries[index])
	}

	#[must_use]
	pub fn filtered_len(&self) -> usize {
		self.filtered.len()
	}

	/// Entry under the cursor, if the filtered view is non-empty.
	#[must_use]
	pub fn current(&self) -> Option<&Entry> {
		self.filtered
			.get(self.cursor)
			.map(|&index| &self.entries[index])
	}

	fn move_up(&mut self) {
		let len = self.filtered.len();
		if len == 0 {
			return;
		}
		self.cursor = if self.cursor == 0 { len - 1 } else { self.cursor - 1 };
	}

	fn move_down(&mut self) {
		let len = self.filtered.len();
		if len == 0 {
			return;
		}
		self.cursor = (self.cursor + 1) % len;
	}

	fn refilter(&mut self) {
		self.filtered = filter::matching_indices(&self.entries, &self.filter);
		if self.cursor >= self.filtered.len() {
			self.cursor = 0;
		}
	}
}

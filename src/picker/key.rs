use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Input understood by the picker, independent of the terminal encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerKey {
	Up,
	Down,
	Backspace,
	Enter,
	Cancel,
	Character(char),
}

impl PickerKey {
	/// Translate a crossterm key event. Key releases and unbound
	/// combinations map to `None`.
	#[must_use]
	pub fn from_key_event(key: KeyEvent) -> Option<Self> {
		if key.kind == KeyEventKind::Release {
			return None;
		}

		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		let alt = key.modifiers.contains(KeyModifiers::ALT);

		match key.code {
			KeyCode::Esc => Some(Self::Cancel),
			KeyCode::Enter => Some(Self::Enter),
			KeyCode::Backspace => Some(Self::Backspace),
			KeyCode::Up => Some(Self::Up),
			KeyCode::Down => Some(Self::Down),
			KeyCode::Char(ch) if ctrl => match ch {
				'c' => Some(Self::Cancel),
				'p' | 'k' => Some(Self::Up),
				'n' | 'j' => Some(Self::Down),
				'h' => Some(Self::Backspace),
				_ => None,
			},
			KeyCode::Char(ch) if !alt && !ch.is_control() => Some(Self::Character(ch)),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
		KeyEvent::new(code, modifiers)
	}

	#[test]
	fn interrupt_and_escape_cancel() {
		assert_eq!(
			PickerKey::from_key_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
			Some(PickerKey::Cancel)
		);
		assert_eq!(
			PickerKey::from_key_event(press(KeyCode::Esc, KeyModifiers::NONE)),
			Some(PickerKey::Cancel)
		);
	}

	#[test]
	fn navigation_has_emacs_and_vi_style_aliases() {
		for ch in ['p', 'k'] {
			assert_eq!(
				PickerKey::from_key_event(press(KeyCode::Char(ch), KeyModifiers::CONTROL)),
				Some(PickerKey::Up)
			);
		}
		for ch in ['n', 'j'] {
			assert_eq!(
				PickerKey::from_key_event(press(KeyCode::Char(ch), KeyModifiers::CONTROL)),
				Some(PickerKey::Down)
			);
		}
	}

	#[test]
	fn printable_characters_are_forwarded() {
		assert_eq!(
			PickerKey::from_key_event(press(KeyCode::Char('W'), KeyModifiers::SHIFT)),
			Some(PickerKey::Character('W'))
		);
		assert_eq!(
			PickerKey::from_key_event(press(KeyCode::Char('x'), KeyModifiers::ALT)),
			None
		);
	}

	#[test]
	fn releases_and_unbound_keys_are_ignored() {
		let mut release = press(KeyCode::Enter, KeyModifiers::NONE);
		release.kind = KeyEventKind::Release;
		assert_eq!(PickerKey::from_key_event(release), None);
		assert_eq!(
			PickerKey::from_key_event(press(KeyCode::F(5), KeyModifiers::NONE)),
			None
		);
	}
}

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use ratatui::crossterm::event::{self, Event};
use ratatui::{DefaultTerminal, Terminal, backend::Backend};
use tracing::debug;

use super::{Picker, PickerKey, RenderOptions, SessionOutcome, draw};

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Take over the terminal and run the picker until the operator selects an
/// entry or cancels.
pub fn run(picker: Picker, options: &RenderOptions) -> Result<SessionOutcome> {
	let mut terminal = ratatui::init();
	let result = run_on(&mut terminal, picker, options);
	ratatui::restore();
	result
}

fn run_on(
	terminal: &mut DefaultTerminal,
	picker: Picker,
	options: &RenderOptions,
) -> Result<SessionOutcome> {
	terminal.clear()?;

	let (event_tx, event_rx) = mpsc::channel();
	let input_running = Arc::new(AtomicBool::new(true));
	let input_flag = Arc::clone(&input_running);

	let input_thread = thread::spawn(move || -> Result<()> {
		while input_flag.load(Ordering::Relaxed) {
			if event::poll(INPUT_POLL_INTERVAL)? {
				let event = event::read()?;
				if event_tx.send(event).is_err() {
					break;
				}
			}
		}
		Ok(())
	});

	let result = drive(terminal, picker, options, event_rx.iter());

	input_running.store(false, Ordering::Relaxed);
	match input_thread.join() {
		Ok(join_result) => join_result?,
		Err(err) => std::panic::resume_unwind(err),
	}

	result
}

/// Feed events into the picker, redrawing after each transition.
///
/// Returns an error when the event source runs dry before the picker reaches
/// a terminal state.
pub fn drive<B, I>(
	terminal: &mut Terminal<B>,
	mut picker: Picker,
	options: &RenderOptions,
	events: I,
) -> Result<SessionOutcome>
where
	B: Backend,
	I: IntoIterator<Item = Event>,
{
	terminal.draw(|frame| draw(frame, &picker, options))?;

	for event in events {
		let key = match event {
			Event::Key(key) => PickerKey::from_key_event(key),
			Event::Resize(_, _) => {
				terminal.autoresize()?;
				None
			}
			_ => None,
		};

		if let Some(key) = key {
			picker = picker.step(key);
			debug!(?key, filter = picker.filter(), matches = picker.filtered_len(), "picker step");
		}

		if let Some(outcome) = picker.outcome() {
			return Ok(outcome);
		}

		terminal.draw(|frame| draw(frame, &picker, options))?;
	}

	Err(anyhow!("input event channel disconnected"))
}

#[cfg(test)]
mod tests {
	use ratatui::backend::TestBackend;
	use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

	use super::*;
	use crate::entry::ordered_entries;

	fn key(code: KeyCode) -> Event {
		Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
	}

	fn picker() -> Picker {
		Picker::new(ordered_entries([
			"i-1\talpha\t1.1.1.1",
			"i-2\tbeta\t2.2.2.2",
			"i-3\tgamma\t3.3.3.3",
		]))
	}

	#[test]
	fn typed_filter_then_enter_selects_entry() {
		let mut terminal = Terminal::new(TestBackend::new(40, 8)).unwrap();
		let events = [
			key(KeyCode::Char('g')),
			Event::Resize(40, 8),
			key(KeyCode::Enter),
		];

		let outcome = drive(&mut terminal, picker(), &RenderOptions::default(), events).unwrap();
		assert_eq!(outcome.selected_id(), Some("i-3"));
	}

	#[test]
	fn ctrl_c_cancels() {
		let mut terminal = Terminal::new(TestBackend::new(40, 8)).unwrap();
		let events = [
			key(KeyCode::Down),
			Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
		];

		let outcome = drive(&mut terminal, picker(), &RenderOptions::default(), events).unwrap();
		assert_eq!(outcome, SessionOutcome::Cancelled);
	}

	#[test]
	fn exhausted_input_is_an_error() {
		let mut terminal = Terminal::new(TestBackend::new(40, 8)).unwrap();
		let events = [key(KeyCode::Down)];

		let result = drive(&mut terminal, picker(), &RenderOptions::default(), events);
		assert!(result.is_err());
	}
}

//! Interactive, incrementally filtered selection list.
//!
//! [`Picker`] is a plain state machine: [`Picker::step`] consumes one
//! [`PickerKey`] and returns the next state. The [`render`](render::render)
//! pass turns a state into lines, and [`run`] owns the terminal loop that
//! ties the two together.

mod key;
pub mod render;
mod runtime;
mod state;

pub use key::PickerKey;
pub use render::{RenderOptions, RenderedFrame, draw};
pub use runtime::{drive, run};
pub use state::{Picker, PickerStatus, SessionOutcome};

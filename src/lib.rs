//! Instance selection for `aws ssm start-session`.
//!
//! The heart of the crate is the [`picker`]: a terminal list that narrows as
//! the operator types and resolves to one [`Entry`] or a cancellation. The
//! remaining modules supply its rows ([`inventory`], [`cache`], [`rows`]) and
//! act on the result ([`session`]).

pub mod app_dirs;
pub mod aws;
pub mod cache;
pub mod entry;
pub mod filter;
pub mod inventory;
pub mod logging;
pub mod picker;
pub mod rows;
pub mod session;
pub mod theme;

pub use aws::AwsTarget;
pub use cache::{CacheError, FileCache, RowCache};
pub use entry::{Entry, NO_NAME_TAG, ordered_entries, parse_rows, sort_entries};
pub use inventory::{AwsCliInventory, Inventory, InventoryError};
pub use picker::{Picker, PickerKey, PickerStatus, RenderOptions, SessionOutcome};
pub use rows::{ResolvedRows, RowOrigin, resolve_rows};
pub use session::{SessionError, SessionLauncher};
pub use theme::Theme;

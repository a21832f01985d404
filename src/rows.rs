//! Cache-or-fetch policy for the candidate rows.

use tracing::{debug, warn};

use crate::cache::{CacheError, RowCache};
use crate::inventory::{Inventory, InventoryError};

/// Where the rows handed to the picker came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOrigin {
	Cache,
	Inventory,
}

/// Rows ready for the picker, plus cache problems met on the way.
///
/// Cache problems never abort a run; callers decide how loudly to report them.
#[derive(Debug)]
pub struct ResolvedRows {
	pub rows: Vec<String>,
	pub origin: RowOrigin,
	pub cache_errors: Vec<CacheError>,
}

/// Fetch rows for `scope`, going through `cache` when one is available.
///
/// Cached rows are used only when present and non-empty; a missing and an
/// empty cache both lead to a fresh fetch. With `refresh` set the cache is
/// never read. Fetched rows are written back to the cache.
pub fn resolve_rows(
	scope: &str,
	inventory: &dyn Inventory,
	cache: Option<&dyn RowCache>,
	refresh: bool,
) -> Result<ResolvedRows, InventoryError> {
	let mut cache_errors = Vec::new();

	let Some(cache) = cache else {
		return Ok(ResolvedRows {
			rows: inventory.fetch_rows()?,
			origin: RowOrigin::Inventory,
			cache_errors,
		});
	};

	if !refresh {
		match cache.load(scope) {
			Ok(Some(rows)) if !rows.is_empty() => {
				debug!(scope, rows = rows.len(), "using cached rows");
				return Ok(ResolvedRows {
					rows,
					origin: RowOrigin::Cache,
					cache_errors,
				});
			}
			Ok(_) => debug!(scope, "cache empty, fetching"),
			Err(err) => {
				warn!(scope, error = %err, "cache read failed, fetching");
				cache_errors.push(err);
			}
		}
	}

	let rows = inventory.fetch_rows()?;
	if let Err(err) = cache.save(scope, &rows) {
		warn!(scope, error = %err, "cache write failed");
		cache_errors.push(err);
	}

	Ok(ResolvedRows {
		rows,
		origin: RowOrigin::Inventory,
		cache_errors,
	})
}

#[cfg(test)]
mod tests {
	use std::cell::Cell;
	use std::path::PathBuf;

	use tempfile::tempdir;

	use super::*;
	use crate::cache::FileCache;

	struct CountingInventory {
		rows: Vec<String>,
		calls: Cell<usize>,
	}

	impl CountingInventory {
		fn new(rows: &[&str]) -> Self {
			Self {
				rows: rows.iter().map(|row| row.to_string()).collect(),
				calls: Cell::new(0),
			}
		}
	}

	impl Inventory for CountingInventory {
		fn fetch_rows(&self) -> Result<Vec<String>, InventoryError> {
			self.calls.set(self.calls.get() + 1);
			Ok(self.rows.clone())
		}
	}

	struct BrokenCache;

	impl RowCache for BrokenCache {
		fn load(&self, _scope: &str) -> Result<Option<Vec<String>>, CacheError> {
			Err(CacheError::Location("no home".into()))
		}

		fn save(&self, _scope: &str, _rows: &[String]) -> Result<(), CacheError> {
			Err(CacheError::Write {
				path: PathBuf::from("/nowhere"),
				source: std::io::Error::other("read-only"),
			})
		}
	}

	#[test]
	fn missing_cache_fetches_and_stores() {
		let dir = tempdir().unwrap();
		let cache = FileCache::new(dir.path());
		let inventory = CountingInventory::new(&["i-1\tweb"]);

		let resolved = resolve_rows("us-east-1", &inventory, Some(&cache), false).unwrap();

		assert_eq!(resolved.origin, RowOrigin::Inventory);
		assert_eq!(resolved.rows, ["i-1\tweb"]);
		assert_eq!(inventory.calls.get(), 1);
		assert_eq!(cache.load("us-east-1").unwrap(), Some(resolved.rows));
	}

	#[test]
	fn cached_rows_skip_the_inventory() {
		let dir = tempdir().unwrap();
		let cache = FileCache::new(dir.path());
		cache.save("us-east-1", &["i-9\tcached".to_string()]).unwrap();
		let inventory = CountingInventory::new(&["i-1\tfresh"]);

		let resolved = resolve_rows("us-east-1", &inventory, Some(&cache), false).unwrap();

		assert_eq!(resolved.origin, RowOrigin::Cache);
		assert_eq!(resolved.rows, ["i-9\tcached"]);
		assert_eq!(inventory.calls.get(), 0);
	}

	#[test]
	fn empty_cache_is_treated_like_missing() {
		let dir = tempdir().unwrap();
		let cache = FileCache::new(dir.path());
		cache.save("us-east-1", &[]).unwrap();
		let inventory = CountingInventory::new(&["i-1\tfresh"]);

		let resolved = resolve_rows("us-east-1", &inventory, Some(&cache), false).unwrap();

		assert_eq!(resolved.origin, RowOrigin::Inventory);
		assert_eq!(inventory.calls.get(), 1);
	}

	#[test]
	fn refresh_ignores_and_replaces_cache() {
		let dir = tempdir().unwrap();
		let cache = FileCache::new(dir.path());
		cache.save("us-east-1", &["i-9\tstale".to_string()]).unwrap();
		let inventory = CountingInventory::new(&["i-1\tfresh"]);

		let resolved = resolve_rows("us-east-1", &inventory, Some(&cache), true).unwrap();

		assert_eq!(resolved.rows, ["i-1\tfresh"]);
		assert_eq!(
			cache.load("us-east-1").unwrap(),
			Some(vec!["i-1\tfresh".to_string()])
		);
	}

	#[test]
	fn cache_failures_are_collected_not_fatal() {
		let inventory = CountingInventory::new(&["i-1\tweb"]);

		let resolved = resolve_rows("default", &inventory, Some(&BrokenCache), false).unwrap();

		assert_eq!(resolved.rows, ["i-1\tweb"]);
		assert_eq!(resolved.cache_errors.len(), 2);
	}

	#[test]
	fn without_cache_rows_come_straight_from_inventory() {
		let inventory = CountingInventory::new(&["i-1\tweb"]);
		let resolved = resolve_rows("default", &inventory, None, false).unwrap();
		assert_eq!(resolved.origin, RowOrigin::Inventory);
		assert!(resolved.cache_errors.is_empty());
	}
}

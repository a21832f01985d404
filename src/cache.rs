//! Last-known instance rows, persisted per scope.
//!
//! Each scope (normally an AWS region) maps to one `<scope>_ec2list.tsv` file
//! holding one row per line. Saves replace the whole file and are serialized
//! per scope.

use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use thiserror::Error;
use tracing::debug;

use crate::app_dirs;

const CACHE_FILE_SUFFIX: &str = "ec2list.tsv";

#[derive(Debug, Error)]
pub enum CacheError {
	#[error("unable to resolve cache directory: {0}")]
	Location(String),
	#[error("failed to read cache file {}", path.display())]
	Read {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("failed to write cache file {}", path.display())]
	Write {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}

/// Storage for row lists keyed by scope.
///
/// Implementations must let at most one `save` run at a time for a given
/// scope.
pub trait RowCache {
	/// Rows stored for `scope`, or `None` when nothing has been stored.
	fn load(&self, scope: &str) -> Result<Option<Vec<String>>, CacheError>;

	/// Replace the rows stored for `scope`.
	fn save(&self, scope: &str, rows: &[String]) -> Result<(), CacheError>;
}

/// [`RowCache`] backed by TSV files in a directory.
#[derive(Debug)]
pub struct FileCache {
	dir: PathBuf,
	writers: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl FileCache {
	#[must_use]
	pub fn new(dir: impl Into<PathBuf>) -> Self {
		Self {
			dir: dir.into(),
			writers: Mutex::new(HashMap::new()),
		}
	}

	/// Cache rooted in the application cache directory.
	pub fn in_cache_dir() -> Result<Self, CacheError> {
		let dir = app_dirs::get_cache_dir()
			.map_err(|err| CacheError::Location(format!("{err:#}")))?;
		Ok(Self::new(dir))
	}

	#[must_use]
	pub fn dir(&self) -> &Path {
		&self.dir
	}

	/// File backing `scope`.
	#[must_use]
	pub fn path_for(&self, scope: &str) -> PathBuf {
		self.dir.join(file_name_for(scope))
	}

	/// Lock guarding the file behind `scope`. Scopes that sanitize to the same
	/// file name share one lock.
	fn writer_lock(&self, scope: &str) -> Arc<Mutex<()>> {
		let mut writers = self.writers.lock().unwrap_or_else(PoisonError::into_inner);
		Arc::clone(writers.entry(file_name_for(scope)).or_default())
	}
}

impl RowCache for FileCache {
	fn load(&self, scope: &str) -> Result<Option<Vec<String>>, CacheError> {
		let path = self.path_for(scope);
		let contents = match fs::read_to_string(&path) {
			Ok(contents) => contents,
			Err(err) if err.kind() == io::ErrorKind::NotFound => {
				debug!(path = %path.display(), "no cached rows");
				return Ok(None);
			}
			Err(source) => return Err(CacheError::Read { path, source }),
		};

		let rows: Vec<String> = contents
			.lines()
			.map(str::trim)
			.filter(|line| !line.is_empty())
			.map(str::to_string)
			.collect();
		debug!(path = %path.display(), rows = rows.len(), "loaded cached rows");
		Ok(Some(rows))
	}

	fn save(&self, scope: &str, rows: &[String]) -> Result<(), CacheError> {
		let lock = self.writer_lock(scope);
		let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

		let path = self.path_for(scope);
		fs::create_dir_all(&self.dir).map_err(|source| CacheError::Write {
			path: self.dir.clone(),
			source,
		})?;
		write_rows(&path, rows).map_err(|source| CacheError::Write {
			path: path.clone(),
			source,
		})?;
		debug!(path = %path.display(), rows = rows.len(), "stored rows");
		Ok(())
	}
}

fn file_name_for(scope: &str) -> String {
	let scope: String = scope
		.chars()
		.map(|ch| {
			if ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.') {
				ch
			} else {
				'_'
			}
		})
		.collect();
	format!("{scope}_{CACHE_FILE_SUFFIX}")
}

/// Write to a sibling temporary file, then rename it over the target.
fn write_rows(path: &Path, rows: &[String]) -> io::Result<()> {
	let tmp_path = path.with_extension("tmp");
	{
		let mut file = io::BufWriter::new(fs::File::create(&tmp_path)?);
		for row in rows {
			file.write_all(row.as_bytes())?;
			file.write_all(b"\n")?;
		}
		file.flush()?;
		file.get_ref().sync_all().ok();
	}
	fs::rename(&tmp_path, path)
}

#[cfg(test)]
mod tests {
	use std::thread;

	use tempfile::tempdir;

	use super::*;

	fn rows(values: &[&str]) -> Vec<String> {
		values.iter().map(|value| value.to_string()).collect()
	}

	#[test]
	fn missing_file_loads_as_none() {
		let dir = tempdir().unwrap();
		let cache = FileCache::new(dir.path());
		assert_eq!(cache.load("ap-northeast-1").unwrap(), None);
	}

	#[test]
	fn save_then_load_round_trips() {
		let dir = tempdir().unwrap();
		let cache = FileCache::new(dir.path().join("nested"));
		let stored = rows(&["i-1\tweb\t10.0.0.1\t", "i-2\tdb\t10.0.0.2\t54.0.0.2"]);

		cache.save("us-east-1", &stored).unwrap();

		assert!(cache.path_for("us-east-1").ends_with("us-east-1_ec2list.tsv"));
		let loaded = cache.load("us-east-1").unwrap().unwrap();
		assert_eq!(loaded, rows(&["i-1\tweb\t10.0.0.1", "i-2\tdb\t10.0.0.2\t54.0.0.2"]));
	}

	#[test]
	fn save_overwrites_previous_contents() {
		let dir = tempdir().unwrap();
		let cache = FileCache::new(dir.path());
		cache.save("default", &rows(&["i-1", "i-2", "i-3"])).unwrap();
		cache.save("default", &rows(&["i-9"])).unwrap();

		assert_eq!(cache.load("default").unwrap(), Some(rows(&["i-9"])));
		assert!(!cache.path_for("default").with_extension("tmp").exists());
	}

	#[test]
	fn blank_lines_are_dropped_on_load() {
		let dir = tempdir().unwrap();
		let cache = FileCache::new(dir.path());
		fs::write(cache.path_for("eu-west-1"), "\n  \ni-1\tweb\n\n").unwrap();

		assert_eq!(cache.load("eu-west-1").unwrap(), Some(rows(&["i-1\tweb"])));
	}

	#[test]
	fn empty_file_loads_as_empty_list() {
		let dir = tempdir().unwrap();
		let cache = FileCache::new(dir.path());
		cache.save("default", &[]).unwrap();

		assert_eq!(cache.load("default").unwrap(), Some(Vec::new()));
	}

	#[test]
	fn scope_is_sanitized_into_file_name() {
		assert_eq!(file_name_for("../x y"), ".._x_y_ec2list.tsv");
		assert_eq!(file_name_for(""), "_ec2list.tsv");
	}

	#[test]
	fn scopes_sharing_a_file_share_a_writer_lock() {
		let dir = tempdir().unwrap();
		let cache = FileCache::new(dir.path());

		assert_eq!(cache.path_for("a b"), cache.path_for("a_b"));
		assert!(Arc::ptr_eq(&cache.writer_lock("a b"), &cache.writer_lock("a_b")));
		assert!(!Arc::ptr_eq(&cache.writer_lock("a b"), &cache.writer_lock("a-b")));
	}

	#[test]
	fn concurrent_saves_leave_one_complete_list() {
		let dir = tempdir().unwrap();
		let cache = Arc::new(FileCache::new(dir.path()));

		let handles: Vec<_> = (0..8)
			.map(|n| {
				let cache = Arc::clone(&cache);
				thread::spawn(move || {
					let stored: Vec<String> = (0..50).map(|i| format!("i-{n}-{i}")).collect();
					cache.save("shared", &stored).unwrap();
				})
			})
			.collect();
		for handle in handles {
			handle.join().unwrap();
		}

		let loaded = cache.load("shared").unwrap().unwrap();
		assert_eq!(loaded.len(), 50);
		let prefix = loaded[0].rsplit_once('-').unwrap().0.to_string();
		assert!(loaded.iter().all(|row| row.starts_with(&prefix)));
	}
}

//! Key-value storage backed by a single JSON file.
//!
//! The file holds one JSON object mapping keys to string values, mirroring
//! what a browser keeps in `localStorage` for the site's origin:
//!
//! ```json
//! { "gallery-order": "[\"post-3\",\"post-1\"]", "pinned-cards": "[\"post-1\"]" }
//! ```
//!
//! The whole map is kept in memory and rewritten on every mutation.

use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::Persistence;
use crate::error::CoreError;

/// File-backed [`Persistence`] implementation.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStorage {
    /// Opens the storage file at `path`.
    ///
    /// A missing file yields an empty storage; the file is created on the
    /// first write. An unreadable or corrupt file is logged and also treated
    /// as empty, so a damaged file never blocks startup. It is overwritten by
    /// the next write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = Self::read_entries(&path).unwrap_or_default();
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(path: &Path) -> Option<BTreeMap<String, String>> {
        if !path.exists() {
            return None;
        }
        let file = match fs::File::open(path) {
            Ok(file) => file,
            Err(e) => {
                warn!(path = %path.display(), "failed to open storage file: {e}");
                return None;
            }
        };
        match serde_json::from_reader(BufReader::new(file)) {
            Ok(entries) => Some(entries),
            Err(e) => {
                warn!(path = %path.display(), "ignoring corrupt storage file: {e}");
                None
            }
        }
    }

    /// Writes `entries` to a sibling temp file, then renames it over the
    /// target so readers never observe a half-written file.
    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), CoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut tmp_name = self.path.file_name().unwrap_or_default().to_os_string();
        tmp_name.push(".tmp");
        let tmp_path = self.path.with_file_name(tmp_name);

        {
            let mut writer = BufWriter::new(fs::File::create(&tmp_path)?);
            serde_json::to_writer_pretty(&mut writer, entries)?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }
        fs::rename(&tmp_path, &self.path)?;
        debug!(path = %self.path.display(), entries = entries.len(), "flushed storage file");
        Ok(())
    }
}

impl Persistence for FileStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    // Mutations go to a copy; memory only changes once the file has.
    fn save(&mut self, key: &str, data: &str) -> Result<(), CoreError> {
        let mut next = self.entries.clone();
        next.insert(key.to_string(), data.to_string());
        self.flush(&next)?;
        self.entries = next;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), CoreError> {
        if !self.entries.contains_key(key) {
            return Ok(());
        }
        let mut next = self.entries.clone();
        next.remove(key);
        self.flush(&next)?;
        self.entries = next;
        Ok(())
    }
}

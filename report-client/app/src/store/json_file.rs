// Persist cache slots in a single JSON document:
//
//   { "en": { "report_text": "...", "sources": [...], "stored_date": "2025-07-26" }, ... }
//
// Every write rewrites the whole document through a temporary file followed
// by a rename, so a crash never leaves a half-written cache behind.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use tracing::{debug, warn};

use super::{CacheEntry, ReportStore};
use crate::error::StoreError;
use crate::language::Language;

type Slots = BTreeMap<String, CacheEntry>;

#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    // serializes read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing file means an empty cache. A corrupt file is reported and
    /// treated as empty; the next write replaces it.
    fn read_slots(&self) -> Result<Slots, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Slots::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        match serde_json::from_str(&raw) {
            Ok(slots) => Ok(slots),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "ignoring unreadable report cache");
                Ok(Slots::new())
            }
        }
    }

    fn write_slots(&self, slots: &Slots) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let json = serde_json::to_vec_pretty(slots)?;
        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, json).map_err(|source| StoreError::Io {
            path: tmp_path.clone(),
            source,
        })?;
        fs::rename(&tmp_path, &self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        debug!(path = %self.path.display(), slots = slots.len(), "report cache written");
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "report-cache.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn update<F>(&self, change: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut Slots),
    {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut slots = self.read_slots()?;
        change(&mut slots);
        self.write_slots(&slots)
    }
}

impl ReportStore for JsonFileStore {
    fn get(&self, language: Language) -> Result<Option<CacheEntry>, StoreError> {
        let mut slots = self.read_slots()?;
        Ok(slots.remove(language.code()))
    }

    fn set(&self, language: Language, entry: CacheEntry) -> Result<(), StoreError> {
        self.update(|slots| {
            slots.insert(language.code().to_string(), entry);
        })
    }

    fn delete(&self, language: Language) -> Result<(), StoreError> {
        self.update(|slots| {
            slots.remove(language.code());
        })
    }
}

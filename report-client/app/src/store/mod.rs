//! Local report cache.
//!
//! One slot per display language. A slot remembers the JST date it was
//! fetched for; a slot from an earlier day is never purged, it simply stops
//! matching the current date.

pub mod json_file;
pub mod memory;

use serde::{Deserialize, Serialize};

use crate::domain::Source;
use crate::error::StoreError;
use crate::language::Language;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Cached report for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub report_text: String,
    #[serde(default)]
    pub sources: Vec<Source>,
    pub stored_date: String,
}

impl CacheEntry {
    /// A slot serves `date_key` only if it was stored for that very date and
    /// actually holds a report.
    #[must_use]
    pub fn is_fresh_for(&self, date_key: &str) -> bool {
        !self.report_text.is_empty() && self.stored_date == date_key
    }
}

/// Key-value storage for cache slots, keyed by language.
pub trait ReportStore: Send + Sync {
    fn get(&self, language: Language) -> Result<Option<CacheEntry>, StoreError>;

    /// Overwrites any existing slot for `language`.
    fn set(&self, language: Language, entry: CacheEntry) -> Result<(), StoreError>;

    fn delete(&self, language: Language) -> Result<(), StoreError>;
}

impl<T: ReportStore + ?Sized> ReportStore for std::sync::Arc<T> {
    fn get(&self, language: Language) -> Result<Option<CacheEntry>, StoreError> {
        (**self).get(language)
    }

    fn set(&self, language: Language, entry: CacheEntry) -> Result<(), StoreError> {
        (**self).set(language, entry)
    }

    fn delete(&self, language: Language) -> Result<(), StoreError> {
        (**self).delete(language)
    }
}

impl<T: ReportStore + ?Sized> ReportStore for Box<T> {
    fn get(&self, language: Language) -> Result<Option<CacheEntry>, StoreError> {
        (**self).get(language)
    }

    fn set(&self, language: Language, entry: CacheEntry) -> Result<(), StoreError> {
        (**self).set(language, entry)
    }

    fn delete(&self, language: Language) -> Result<(), StoreError> {
        (**self).delete(language)
    }
}

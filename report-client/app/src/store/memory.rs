use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use super::{CacheEntry, ReportStore};
use crate::error::StoreError;
use crate::language::Language;

/// In-process store. Contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<Language, CacheEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ReportStore for MemoryStore {
    fn get(&self, language: Language) -> Result<Option<CacheEntry>, StoreError> {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(slots.get(&language).cloned())
    }

    fn set(&self, language: Language, entry: CacheEntry) -> Result<(), StoreError> {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.insert(language, entry);
        Ok(())
    }

    fn delete(&self, language: Language) -> Result<(), StoreError> {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.remove(&language);
        Ok(())
    }
}

use crate::domain::locode::{entity::Location, repository::LocodeRepository};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard};

/// In-process locode table behind a read/write lock.
#[derive(Debug, Default)]
pub struct MemoryLocodeRepository {
    entries: RwLock<HashMap<String, Location>>,
}

impl MemoryLocodeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Location>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LocodeRepository for MemoryLocodeRepository {
    fn set(&self, code: String, location: Location) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(code, location);
    }

    fn get(&self, code: &str) -> Option<Location> {
        self.read().get(code).cloned()
    }

    fn items(&self) -> HashMap<String, Location> {
        self.read().clone()
    }

    fn codes(&self) -> Vec<String> {
        self.read().keys().cloned().collect()
    }

    fn count(&self) -> usize {
        self.read().len()
    }
}

impl FromIterator<Location> for MemoryLocodeRepository {
    fn from_iter<I: IntoIterator<Item = Location>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|loc| (loc.locode.clone(), loc))
            .collect();
        Self {
            entries: RwLock::new(entries),
        }
    }
}

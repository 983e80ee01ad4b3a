use super::entity::Location;
use std::collections::HashMap;

/// Key/value access to loaded locations, keyed by locode.
///
/// Implementations must be safe to share between request handlers. Writes only
/// happen while loading, before the server accepts connections.
#[cfg_attr(test, mockall::automock)]
pub trait LocodeRepository: Send + Sync {
    /// Insert or replace the entry stored under `code`.
    fn set(&self, code: String, location: Location);

    fn get(&self, code: &str) -> Option<Location>;

    /// Snapshot of every entry.
    fn items(&self) -> HashMap<String, Location>;

    /// Snapshot of every key, in unspecified order.
    fn codes(&self) -> Vec<String>;

    fn count(&self) -> usize;
}

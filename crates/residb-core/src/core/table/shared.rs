use super::registry::DefinitionTable;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::info;

/// A definition table shared between concurrent readers, with whole-table hot swap.
///
/// Readers take cheap [`Arc`] snapshots and keep using them for as long as they like.
/// [`SharedTable::replace`] installs a new table atomically: a snapshot is always either the
/// old or the new complete table, never a mix of both.
#[derive(Debug, Clone, Default)]
pub struct SharedTable {
    current: Arc<RwLock<Arc<DefinitionTable>>>,
}

impl SharedTable {
    pub fn new(table: DefinitionTable) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(table))),
        }
    }

    /// Returns the table that is current at the time of the call.
    pub fn snapshot(&self) -> Arc<DefinitionTable> {
        // The lock only guards an Arc swap, so a poisoned lock still holds a complete table.
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Installs `table` and returns the table it replaced.
    pub fn replace(&self, table: DefinitionTable) -> Arc<DefinitionTable> {
        let next = Arc::new(table);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        info!("Swapping definition table ({} groups)", next.len());
        std::mem::replace(&mut *guard, next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::group::GroupDefinition;
    use std::thread;

    fn table_of(names: &[&str]) -> DefinitionTable {
        DefinitionTable::from_definitions(names.iter().map(|n| GroupDefinition::new(n))).unwrap()
    }

    #[test]
    fn snapshot_survives_replacement() {
        let shared = SharedTable::new(table_of(&["water"]));
        let before = shared.snapshot();

        let old = shared.replace(table_of(&["water", "methanol"]));
        assert_eq!(old.len(), 1);
        assert_eq!(before.len(), 1);
        assert_eq!(shared.snapshot().len(), 2);
    }

    #[test]
    fn concurrent_readers_see_complete_tables() {
        let shared = SharedTable::new(table_of(&["a"]));
        let readers: Vec<_> = (0..4)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for _ in 0..100 {
                        let snapshot = shared.snapshot();
                        let len = snapshot.len();
                        assert!(len == 1 || len == 3);
                        if len == 3 {
                            assert!(snapshot.contains("b") && snapshot.contains("c"));
                        }
                    }
                })
            })
            .collect();
        shared.replace(table_of(&["a", "b", "c"]));
        for reader in readers {
            reader.join().unwrap();
        }
        assert_eq!(shared.snapshot().len(), 3);
    }
}

use super::TaskStore;
use crate::core::{Result, TaskRecord};
use std::sync::Mutex;

/// In-memory store for tests and ephemeral sessions.
///
/// The lock exists only because `TaskStore` takes `&self` so backends can be
/// shared; a poisoned lock surfaces as `TableError::LockError`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<TaskRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with records
    pub fn with_records(records: Vec<TaskRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }
}

impl TaskStore for MemoryStore {
    fn load(&self) -> Result<Vec<TaskRecord>> {
        Ok(self.records.lock()?.clone())
    }

    fn save(&self, records: &[TaskRecord]) -> Result<()> {
        *self.records.lock()? = records.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Priority;

    #[test]
    fn test_empty_store_loads_empty() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let store = MemoryStore::new();
        let records = vec![
            TaskRecord::new("a", "Buy milk", Priority::Medium),
            TaskRecord::new("b", "Walk dog", Priority::High).done(),
        ];

        store.save(&records).unwrap();
        assert_eq!(store.load().unwrap(), records);
    }

    #[test]
    fn test_save_replaces_previous_contents() {
        let store = MemoryStore::with_records(vec![TaskRecord::new(
            "a",
            "Buy milk",
            Priority::Low,
        )]);

        store.save(&[]).unwrap();
        assert!(store.load().unwrap().is_empty());
    }
}

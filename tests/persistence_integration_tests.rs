use tempfile::TempDir;
use tasktable::{FileStore, Priority, TaskRecord, TaskStore, TaskTable};

fn sample() -> Vec<TaskRecord> {
    vec![
        TaskRecord::new("a", "Buy milk", Priority::Medium),
        TaskRecord::new("b", "Walk dog", Priority::High),
        TaskRecord::new("c", "Read book", Priority::Medium).done(),
    ]
}

#[test]
fn collection_survives_a_session_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasks.snapshot");

    {
        let store = FileStore::new(&path);
        store.save(&sample()).unwrap();
    }

    let table = TaskTable::open(Box::new(FileStore::new(&path))).unwrap();
    assert_eq!(table.records(), sample());
}

#[test]
fn fresh_store_opens_an_empty_table() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("tasks.snapshot"));

    let table = TaskTable::open(Box::new(store)).unwrap();
    assert!(table.is_empty());
}

#[test]
fn delete_writes_through_to_the_store() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasks.snapshot");
    FileStore::new(&path).save(&sample()).unwrap();

    let mut table = TaskTable::open(Box::new(FileStore::new(&path))).unwrap();
    table.delete("b");

    // The durable collection matches the in-memory one immediately
    let persisted = FileStore::new(&path).load().unwrap();
    assert_eq!(persisted, table.records());
    assert_eq!(persisted.len(), 2);
    assert!(persisted.iter().all(|r| r.id != "b"));
}

#[test]
fn toggle_stays_in_memory_until_flush() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasks.snapshot");
    FileStore::new(&path).save(&sample()).unwrap();

    let mut table = TaskTable::open(Box::new(FileStore::new(&path))).unwrap();
    table.set_done("a", true);

    // Not yet persisted
    let persisted = FileStore::new(&path).load().unwrap();
    assert!(!persisted.iter().find(|r| r.id == "a").unwrap().done);

    // The explicit save point persists it
    table.flush().unwrap();
    let persisted = FileStore::new(&path).load().unwrap();
    assert!(persisted.iter().find(|r| r.id == "a").unwrap().done);
}

#[test]
fn add_task_writes_through_to_the_store() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasks.snapshot");

    let mut table = TaskTable::open(Box::new(FileStore::new(&path))).unwrap();
    let id = table.add_task("Water plants", Priority::Low);

    let persisted = FileStore::new(&path).load().unwrap();
    assert_eq!(persisted.len(), 1);
    assert_eq!(persisted[0].id, id);
    assert_eq!(persisted[0].name, "Water plants");
    assert_eq!(persisted[0].priority, Priority::Low);
    assert!(!persisted[0].done);
}

#[test]
fn snapshot_preserves_every_field_byte_for_byte() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("tasks.snapshot"));

    let records = vec![
        TaskRecord::new("id-1", "Name with spaces and ünïcode", Priority::High).done(),
        TaskRecord::new("id-2", "", Priority::Low),
    ];
    store.save(&records).unwrap();

    assert_eq!(store.load().unwrap(), records);
}

#[test]
fn failed_save_does_not_roll_back_the_in_memory_collection() {
    // A store whose save always fails
    struct BrokenStore;
    impl TaskStore for BrokenStore {
        fn load(&self) -> tasktable::Result<Vec<TaskRecord>> {
            Ok(sample())
        }
        fn save(&self, _records: &[TaskRecord]) -> tasktable::Result<()> {
            Err(tasktable::TableError::IoError("disk full".into()))
        }
    }

    let mut table = TaskTable::open(Box::new(BrokenStore)).unwrap();
    table.delete("a");

    // The deletion applied in memory despite the failed write-through
    assert_eq!(table.len(), 2);
    assert!(table.records().iter().all(|r| r.id != "a"));

    // The explicit save point surfaces the failure without corrupting state
    assert!(table.flush().is_err());
    assert_eq!(table.len(), 2);
}

use crate::core::{Field, Priority, Result, TaskRecord};
use crate::executor::{FieldUpdate, MutationExecutor, PageState, PageWindow, SortExecutor, SortKey};
use crate::storage::{MemoryStore, TaskStore};

/// Everything the rendering collaborator needs for one frame: the full
/// ordered collection, the visible page window, and the states that produced
/// them.
#[derive(Debug, Clone)]
pub struct TableView {
    pub records: Vec<TaskRecord>,
    pub window: PageWindow,
    pub sort: SortKey,
    pub page: PageState,
}

/// The task table session: one owned collection plus its sort and page state,
/// bridged to a durable store.
///
/// All mutation routes through the mutation executor; deletions and
/// insertions write through to the store, while field updates stay in memory
/// until [`flush`](TaskTable::flush). The in-memory collection is the single
/// source of truth for the session - a failed save is logged and never rolls
/// back an applied mutation.
///
/// # Examples
///
/// ```
/// use tasktable::{Field, Priority, TaskTable};
///
/// let mut table = TaskTable::in_memory();
/// table.add_task("Buy milk", Priority::Medium);
/// table.add_task("Walk dog", Priority::High);
///
/// table.sort_by(Field::Priority);
/// table.sort_by(Field::Priority); // re-select: flips to descending
///
/// let view = table.view();
/// assert_eq!(view.window.records[0].name, "Walk dog");
/// assert_eq!(view.window.empty_rows, 3);
/// ```
pub struct TaskTable {
    records: Vec<TaskRecord>,
    sort: SortKey,
    page: PageState,
    store: Box<dyn TaskStore>,
}

impl TaskTable {
    /// Open a session against a store, loading the persisted collection.
    ///
    /// An empty store yields an empty table. The initial view state matches
    /// first render: sorted by priority ascending, first page, smallest page
    /// size.
    pub fn open(store: Box<dyn TaskStore>) -> Result<Self> {
        let records = store.load()?;
        log::debug!("Loaded {} task records", records.len());

        Ok(Self {
            records,
            sort: SortKey::new(Field::Priority),
            page: PageState::new(),
            store,
        })
    }

    /// Ephemeral session backed by an in-memory store
    pub fn in_memory() -> Self {
        Self {
            records: Vec::new(),
            sort: SortKey::new(Field::Priority),
            page: PageState::new(),
            store: Box::new(MemoryStore::new()),
        }
    }

    // ------------------------------------------------------------------
    // View state events
    // ------------------------------------------------------------------

    /// Header click: re-selecting the active field flips its direction, a
    /// new field starts ascending.
    pub fn sort_by(&mut self, field: Field) {
        self.sort = self.sort.select(field);
    }

    /// Jump to a page. An index past the end is not an error; it renders as
    /// an empty window.
    pub fn change_page(&mut self, index: usize) {
        self.page.set_index(index);
    }

    /// Switch page size (one of `PAGE_SIZE_OPTIONS`) and reset to the first
    /// page.
    pub fn change_page_size(&mut self, size: usize) -> Result<()> {
        self.page.set_size(size)
    }

    // ------------------------------------------------------------------
    // Mutation events
    // ------------------------------------------------------------------

    /// Toggle the completion checkbox. In-memory only; persisted at the next
    /// explicit [`flush`](TaskTable::flush) or write-through mutation.
    pub fn set_done(&mut self, id: &str, done: bool) {
        self.apply(id, FieldUpdate::Done(done));
    }

    /// Rename a task. In-memory only, like `set_done`.
    pub fn rename(&mut self, id: &str, name: impl Into<String>) {
        self.apply(id, FieldUpdate::Name(name.into()));
    }

    /// Re-prioritize a task. In-memory only, like `set_done`.
    pub fn set_priority(&mut self, id: &str, priority: Priority) {
        self.apply(id, FieldUpdate::Priority(priority));
    }

    fn apply(&mut self, id: &str, update: FieldUpdate) {
        self.records = MutationExecutor::set_field(&self.records, id, &update);
    }

    /// Delete click: remove the record and write the collection through to
    /// the store. An absent id is a silent no-op (benign double-click race).
    pub fn delete(&mut self, id: &str) {
        self.records = MutationExecutor::remove(&self.records, id);
        self.write_through();
    }

    /// Create a task with a fresh unique id, append it, and write through.
    /// Returns the new id.
    pub fn add_task(&mut self, name: impl Into<String>, priority: Priority) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        let record = TaskRecord::new(id.clone(), name, priority);
        self.records = MutationExecutor::insert(&self.records, record);
        self.write_through();
        id
    }

    /// Explicit save point: persist the current collection, surfacing store
    /// failures to the caller.
    pub fn flush(&self) -> Result<()> {
        self.store.save(&self.records)
    }

    // Fire-and-forget save: the in-memory result stays authoritative even
    // when the store fails.
    fn write_through(&self) {
        if let Err(e) = self.store.save(&self.records) {
            log::warn!("Task store save failed: {}", e);
        }
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    /// Current frame: ordered collection plus the visible page window
    pub fn view(&self) -> TableView {
        let ordered = SortExecutor::stable_sort(&self.records, &self.sort);
        let window = self.page.window(&ordered);

        TableView {
            records: ordered,
            window,
            sort: self.sort,
            page: self.page,
        }
    }

    /// Collection in insertion order, unsorted
    pub fn records(&self) -> &[TaskRecord] {
        &self.records
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn page(&self) -> PageState {
        self.page
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

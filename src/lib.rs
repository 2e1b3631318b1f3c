// ============================================================================
// TaskTable Library
// ============================================================================

pub mod core;
pub mod executor;
pub mod facade;
pub mod storage;

// Re-export main types for convenience
pub use crate::core::{Field, Priority, Result, TableError, TaskRecord};
pub use crate::executor::{
    paginate, FieldUpdate, MutationExecutor, PageState, PageWindow, SortDirection, SortExecutor,
    SortKey, PAGE_SIZE_OPTIONS,
};
pub use crate::facade::{TableView, TaskTable};
pub use crate::storage::{FileStore, MemoryStore, TaskStore};

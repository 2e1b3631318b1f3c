// ============================================================================
// src/executor/page.rs - Pagination Window
// ============================================================================

use crate::core::{Result, TableError, TaskRecord};

/// Page sizes offered by the pagination control
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 15];

// ============================================================================
// PAGE STATE
// ============================================================================

/// Current page index and size.
///
/// `size` is always one of `PAGE_SIZE_OPTIONS`; changing it resets the index
/// to the first page, which keeps `index * size` inside the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    index: usize,
    size: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            index: 0,
            size: PAGE_SIZE_OPTIONS[0],
        }
    }
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    /// Change the page size and reset to the first page
    pub fn set_size(&mut self, size: usize) -> Result<()> {
        if !PAGE_SIZE_OPTIONS.contains(&size) {
            return Err(TableError::InvalidPageSize(size));
        }
        self.size = size;
        self.index = 0;
        Ok(())
    }

    /// Window of the given ordered collection for the current state
    pub fn window(&self, records: &[TaskRecord]) -> PageWindow {
        paginate(records, self.index, self.size)
    }
}

// ============================================================================
// PAGE WINDOW
// ============================================================================

/// A contiguous slice of the ordered collection, sized for display.
///
/// `empty_rows` is the number of trailing rows the presentation layer should
/// reserve to keep the page height fixed; no synthetic records are produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub records: Vec<TaskRecord>,
    pub empty_rows: usize,
}

/// Slice one page out of an ordered collection, clipped to its bounds.
///
/// An index past the end yields an empty window with `empty_rows == size`.
pub fn paginate(records: &[TaskRecord], index: usize, size: usize) -> PageWindow {
    let start = index.saturating_mul(size);
    if start >= records.len() {
        return PageWindow {
            records: Vec::new(),
            empty_rows: size,
        };
    }

    let end = (start + size).min(records.len());
    let window: Vec<TaskRecord> = records[start..end].to_vec();

    PageWindow {
        empty_rows: size - window.len(),
        records: window,
    }
}

// ============================================================================
// TESTS
// ============================================================================

// ============================================================================
// src/executor/sort.rs - Record Ordering
// ============================================================================
//
// Comparator Pattern: one active sort key (field + direction) producing a
// total order over records. Descending is the primary derivation; ascending
// is its exact inverse, so `asc(a, b) == desc(a, b).reverse()` for all pairs.
//
// Stability is guaranteed by decorating records with their original index and
// sorting by (comparator result, original index), independent of the
// underlying sort primitive.
//
// ============================================================================

use crate::core::{Field, TaskRecord};
use std::cmp::Ordering;

// ============================================================================
// SORT DIRECTION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flip(&self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

// ============================================================================
// SORT KEY - the active (field, direction) pair
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: Field,
    pub direction: SortDirection,
}

impl SortKey {
    /// New key for a field, ascending (the default on first selection)
    pub fn new(field: Field) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    /// Next sort state after a header click: re-selecting the active field
    /// flips the direction, selecting another field starts it ascending.
    pub fn select(&self, field: Field) -> Self {
        if self.field == field {
            Self {
                field,
                direction: self.direction.flip(),
            }
        } else {
            Self::new(field)
        }
    }

    /// Compare two records under this key.
    ///
    /// `Less` means `a` precedes `b`.
    pub fn compare(&self, a: &TaskRecord, b: &TaskRecord) -> Ordering {
        let descending = Self::compare_descending(a, b, self.field);
        match self.direction {
            SortDirection::Descending => descending,
            // Exact inverse of the descending result, not a re-derivation
            SortDirection::Ascending => descending.reverse(),
        }
    }

    /// Descending comparison: Less when `b[field] < a[field]`
    fn compare_descending(a: &TaskRecord, b: &TaskRecord, field: Field) -> Ordering {
        match field {
            Field::Name => b.name.cmp(&a.name),
            Field::Priority => b.priority.cmp(&a.priority),
            // bool order: false < true
            Field::Done => b.done.cmp(&a.done),
        }
    }
}

// ============================================================================
// SORT EXECUTOR
// ============================================================================

pub struct SortExecutor;

impl SortExecutor {
    /// Stable sort: equal-key records keep their original relative order.
    ///
    /// Pure - the input is left untouched and a new ordering is returned.
    pub fn stable_sort(records: &[TaskRecord], key: &SortKey) -> Vec<TaskRecord> {
        let mut decorated: Vec<(&TaskRecord, usize)> =
            records.iter().zip(0..records.len()).collect();

        decorated.sort_by(|&(a, i), &(b, j)| match key.compare(a, b) {
            Ordering::Equal => i.cmp(&j),
            ordering => ordering,
        });

        decorated.into_iter().map(|(record, _)| record.clone()).collect()
    }
}

// ============================================================================
// TESTS
// ============================================================================

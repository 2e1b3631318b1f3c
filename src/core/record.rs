use super::{Result, TableError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordinal task priority.
///
/// Persisted and sorted as its numeric rank (`Low = 0`, `Medium = 1`,
/// `High = 2`); displayed via the reverse label lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Priority {
    Low = 0,
    Medium = 1,
    High = 2,
}

impl Priority {
    /// Numeric rank used for storage and comparison
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// Display label for the rank table
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Reverse lookup from a display label
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Low" => Some(Self::Low),
            "Medium" => Some(Self::Medium),
            "High" => Some(Self::High),
            _ => None,
        }
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority.rank()
    }
}

impl TryFrom<u8> for Priority {
    type Error = TableError;

    fn try_from(rank: u8) -> Result<Self> {
        match rank {
            0 => Ok(Self::Low),
            1 => Ok(Self::Medium),
            2 => Ok(Self::High),
            _ => Err(TableError::InvalidPriority(rank)),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Sortable/mutable record fields.
///
/// A closed enum instead of dynamic field names, so the comparator and the
/// mutation service cannot be handed an unknown field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Priority,
    Done,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Priority, Field::Done];

    /// Column header label used by the rendering collaborator
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Task Name",
            Self::Priority => "Priority",
            Self::Done => "Done",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Name => "name",
            Self::Priority => "priority",
            Self::Done => "done",
        };
        write!(f, "{}", name)
    }
}

/// One task entry.
///
/// `id` is the sole identity key for lookups and mutations; it is unique
/// within a collection and immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: String,
    pub name: String,
    pub priority: Priority,
    pub done: bool,
}

impl TaskRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, priority: Priority) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            priority,
            done: false,
        }
    }

    pub fn done(mut self) -> Self {
        self.done = true;
        self
    }
}

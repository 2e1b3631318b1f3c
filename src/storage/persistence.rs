//! Snapshot persistence for the task collection

use super::TaskStore;
use crate::core::{Result, TableError, TaskRecord};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

const SNAPSHOT_VERSION: u32 = 1;

// ============================================================================
// Snapshot Envelope
// ============================================================================

/// Versioned on-disk form of the collection.
///
/// Records inside the envelope are serialized field-for-field; the metadata
/// is informational only and never consulted on load.
#[derive(Debug, Serialize, Deserialize)]
pub struct TaskSnapshot {
    pub version: u32,
    pub records: Vec<TaskRecord>,
    pub metadata: SnapshotMetadata,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SnapshotMetadata {
    pub created_at: u64,
    pub record_count: usize,
}

impl TaskSnapshot {
    pub fn new(records: Vec<TaskRecord>) -> Self {
        let record_count = records.len();
        let created_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);

        Self {
            version: SNAPSHOT_VERSION,
            records,
            metadata: SnapshotMetadata {
                created_at,
                record_count,
            },
        }
    }
}

// ============================================================================
// File Store
// ============================================================================

/// Durable `TaskStore` backed by a single JSON snapshot file.
///
/// Saves are atomic: the snapshot is written to a temp file next to the
/// target, flushed and synced, then renamed over it. A missing file loads as
/// an empty collection; an unreadable one is an error rather than silently
/// discarded data.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TaskStore for FileStore {
    fn load(&self) -> Result<Vec<TaskRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let data = fs::read_to_string(&self.path)
            .map_err(|e| TableError::IoError(format!("Failed to read snapshot: {}", e)))?;
        let snapshot: TaskSnapshot = serde_json::from_str(&data).map_err(|e| {
            TableError::SerializationError(format!("Failed to deserialize snapshot: {}", e))
        })?;

        if snapshot.version > SNAPSHOT_VERSION {
            return Err(TableError::UnsupportedVersion(snapshot.version));
        }

        Ok(snapshot.records)
    }

    fn save(&self, records: &[TaskRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                TableError::IoError(format!("Failed to create snapshot directory: {}", e))
            })?;
        }

        let snapshot = TaskSnapshot::new(records.to_vec());
        let serialized = serde_json::to_vec_pretty(&snapshot).map_err(|e| {
            TableError::SerializationError(format!("Failed to serialize snapshot: {}", e))
        })?;

        let temp_path = self.path.with_extension("tmp");
        let temp_file = File::create(&temp_path)
            .map_err(|e| TableError::IoError(format!("Failed to create temp file: {}", e)))?;
        let mut writer = BufWriter::new(temp_file);
        writer
            .write_all(&serialized)
            .map_err(|e| TableError::IoError(format!("Failed to write snapshot: {}", e)))?;
        writer
            .flush()
            .map_err(|e| TableError::IoError(format!("Failed to flush snapshot: {}", e)))?;
        writer
            .get_mut()
            .sync_all()
            .map_err(|e| TableError::IoError(format!("Failed to sync snapshot: {}", e)))?;
        fs::rename(&temp_path, &self.path)
            .map_err(|e| TableError::IoError(format!("Failed to rename snapshot: {}", e)))?;

        Ok(())
    }
}

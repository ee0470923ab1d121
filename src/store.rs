//! Durable task storage over an embedded key-value database.

use crate::id::{TaskId, decode_id, encode_id};
use eyre::{Context, Result};
use redb::{Database, ReadableTable, TableDefinition, WriteTransaction};
use std::path::Path;

/// Name of the pending-tasks table, also the sequence counter's key.
const TASKS_TABLE: &str = "tasks";

/// Pending tasks: 8-byte big-endian id -> raw description bytes.
const TASKS: TableDefinition<&[u8], &[u8]> = TableDefinition::new(TASKS_TABLE);

/// Per-table id counters, keyed by table name. The counter only ever
/// moves forward, so ids are never reissued after a task is completed.
const SEQUENCES: TableDefinition<&str, u64> = TableDefinition::new("sequences");

/// Errors that can occur during store operations.
#[derive(Debug)]
pub enum StoreError {
    /// No task exists with the given id.
    NotFound(TaskId),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::NotFound(id) => write!(f, "no task with id {}", id),
        }
    }
}

impl std::error::Error for StoreError {}

/// Handle to the on-disk task list. Every operation runs as a single
/// transaction; dropping the handle releases the file.
pub struct TaskStore {
    db: Database,
}

impl TaskStore {
    /// Open (or create) the task database at the given path and make sure
    /// the tables exist, so the operations below never see a missing table.
    pub fn open(path: &Path) -> Result<Self> {
        let db = Database::create(path).context("Failed to open task database")?;

        // Owner-only, the file is private to the user.
        #[cfg(unix)]
        {
            use std::fs;
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o600))
                .context("Failed to restrict database file permissions")?;
        }

        let txn = db.begin_write().context("Failed to begin setup transaction")?;
        {
            txn.open_table(TASKS).context("Failed to create tasks table")?;
            txn.open_table(SEQUENCES).context("Failed to create sequences table")?;
        }
        txn.commit().context("Failed to commit setup transaction")?;

        Ok(Self { db })
    }

    /// Append a task and return its id. The counter advance and the insert
    /// land in one transaction, or not at all.
    ///
    /// An empty description is accepted; the CLI layer is the one that
    /// requires at least one word.
    pub fn add(&self, description: &str) -> Result<TaskId> {
        let txn = self.db.begin_write().context("Failed to begin transaction")?;
        let id = next_sequence(&txn)?;
        {
            let mut table = txn.open_table(TASKS).context("Failed to open tasks table")?;
            let key = encode_id(id);
            table
                .insert(key.as_slice(), description.as_bytes())
                .context("Failed to write task")?;
        }
        txn.commit().context("Failed to add task")?;
        Ok(id)
    }

    /// Remove a task, returning its description. Unknown ids abort the
    /// transaction and report [`StoreError::NotFound`].
    pub fn complete(&self, id: TaskId) -> Result<String> {
        let txn = self.db.begin_write().context("Failed to begin transaction")?;
        let description = {
            let mut table = txn.open_table(TASKS).context("Failed to open tasks table")?;
            let key = encode_id(id);
            match table.remove(key.as_slice()).context("Failed to remove task")? {
                Some(value) => String::from_utf8_lossy(value.value()).into_owned(),
                // Dropping the uncommitted transaction aborts it.
                None => return Err(eyre::eyre!(StoreError::NotFound(id))),
            }
        };
        txn.commit().context("Failed to complete task")?;
        Ok(description)
    }

    /// All pending tasks in ascending id order. An empty store yields an
    /// empty list.
    pub fn list(&self) -> Result<Vec<(TaskId, String)>> {
        let txn = self.db.begin_read().context("Failed to begin read transaction")?;
        let table = txn.open_table(TASKS).context("Failed to open tasks table")?;

        let mut tasks = Vec::new();
        for entry in table.iter().context("Failed to scan tasks")? {
            let (key, value) = entry.context("Failed to read task")?;
            let id = decode_id(key.value())
                .ok_or_else(|| eyre::eyre!("malformed task key ({} bytes)", key.value().len()))?;
            tasks.push((id, String::from_utf8_lossy(value.value()).into_owned()));
        }

        Ok(tasks)
    }
}

/// Mint the next task id inside an already-open write transaction.
/// Counters start at 1 and survive restarts.
fn next_sequence(txn: &WriteTransaction) -> Result<TaskId> {
    let mut table = txn
        .open_table(SEQUENCES)
        .context("Failed to open sequences table")?;
    let next = table
        .get(TASKS_TABLE)
        .context("Failed to read sequence")?
        .map(|v| v.value())
        .unwrap_or(0)
        + 1;
    table
        .insert(TASKS_TABLE, next)
        .context("Failed to advance sequence")?;
    Ok(next)
}

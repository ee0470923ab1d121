//! Shared test infrastructure for taskbook integration tests.
//!
//! Provides TestEnv helper for consistent test setup/teardown.

#![allow(dead_code)]

use std::path::PathBuf;
use taskbook::{TaskId, TaskStore};
use tempfile::TempDir;

/// Test environment with automatic cleanup.
pub struct TestEnv {
    pub temp_dir: TempDir,
    pub store: TaskStore,
}

impl TestEnv {
    /// Create a new test environment with a freshly opened store.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = TaskStore::open(&temp_dir.path().join("tasks.db")).expect("Failed to open store");
        Self { temp_dir, store }
    }

    /// Path of the database file backing this environment.
    pub fn db_path(&self) -> PathBuf {
        self.temp_dir.path().join("tasks.db")
    }

    /// Add a task, panicking on failure.
    pub fn add_task(&self, description: &str) -> TaskId {
        self.store.add(description).expect("Failed to add task")
    }

    /// Complete a task, panicking on failure.
    pub fn complete_task(&self, id: TaskId) -> String {
        self.store.complete(id).expect("Failed to complete task")
    }

    /// List all pending tasks, panicking on failure.
    pub fn list_tasks(&self) -> Vec<(TaskId, String)> {
        self.store.list().expect("Failed to list tasks")
    }
}

//! Taskbook: a tiny TODO list persisted in an embedded key-value store.
//!
//! Tasks are keyed by a store-minted, strictly increasing id and hold only
//! a description. Completing a task deletes it, so whatever is stored is
//! exactly the pending list. Each operation is one transaction against a
//! single database file.
//!
//! # Example
//!
//! ```no_run
//! use taskbook::TaskStore;
//! use std::path::Path;
//!
//! let store = TaskStore::open(Path::new("tasks.db")).unwrap();
//!
//! let id = store.add("buy milk").unwrap();
//!
//! for (id, description) in store.list().unwrap() {
//!     println!("{id}. {description}");
//! }
//!
//! let done = store.complete(id).unwrap();
//! assert_eq!(done, "buy milk");
//! ```

mod id;
mod store;

// Re-export public API
pub use id::TaskId;
pub use store::{StoreError, TaskStore};

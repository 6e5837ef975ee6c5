//! # Storage Layer
//!
//! The two collaborators every command talks to, and the SQLite database
//! that backs both of them.
//!
//! ## Contract
//!
//! | Store | Lookups | Mutations |
//! |-------|---------|-----------|
//! | [`ListStore`] | `get`, `get_all`, `get_by_name` | `add`, `remove`, `restore` |
//! | [`TaskStore`] | `get`, `get_to_do`, `get_done`, `get_deleted` | `add`, `set_done`, `set_star`, `remove`, `restore`, `move_to` |
//!
//! Every method answers with a [`StoreResult`]: an [`Outcome`] on success,
//! or a [`StoreError`]. Lookups produce `SingleRecord`/`RecordSet`,
//! updates produce `AffectedCount` and inserts produce `CreatedId`.
//!
//! Removal is always a soft delete. Nothing in this layer purges rows.
//!
//! ## Key Types
//!
//! - [`Database`] - SQLite implementation of both stores
//! - [`Config`] - User configuration (database path, default list)

mod config;
mod database;

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::{NewTask, Outcome};

pub use config::{Config, ConfigError};
pub use database::Database;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("List {0} does not exist.")]
    ListNotFound(String),

    #[error("List {0} already exists.")]
    DuplicateList(String),

    #[error("Failed to prepare database directory {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result of a single store call
pub type StoreResult = Result<Outcome, StoreError>;

/// Access to lists, addressed by name
pub trait ListStore {
    /// Looks up one list
    fn get(&self, name: &str) -> StoreResult;

    /// All non-deleted lists with their task counts
    fn get_all(&self) -> StoreResult;

    /// Non-deleted tasks belonging to the named list
    fn get_by_name(&self, name: &str) -> StoreResult;

    fn add(&self, name: &str) -> StoreResult;

    fn remove(&self, name: &str) -> StoreResult;

    fn restore(&self, name: &str) -> StoreResult;
}

/// Access to tasks, addressed by id
pub trait TaskStore {
    /// Looks up one task, including removed ones
    fn get(&self, id: i64) -> StoreResult;

    /// Pending tasks, ordered by list so they can be grouped
    fn get_to_do(&self) -> StoreResult;

    /// Done tasks, most recently finished first
    fn get_done(&self, limit: Option<u64>) -> StoreResult;

    /// Removed tasks
    fn get_deleted(&self, limit: Option<u64>) -> StoreResult;

    fn add(&self, task: &NewTask) -> StoreResult;

    /// Sets `done` and stamps or clears the done date with it
    fn set_done(&self, id: i64, done: bool) -> StoreResult;

    fn set_star(&self, id: i64, important: bool) -> StoreResult;

    fn remove(&self, id: i64) -> StoreResult;

    fn restore(&self, id: i64) -> StoreResult;

    /// Moves a task into the named list
    fn move_to(&self, id: i64, list: &str) -> StoreResult;
}

//! SQLite database backing both stores
//!
//! The database lives at `<data_dir>/nodo.db` unless configured otherwise.
//! Schema changes are tracked through `PRAGMA user_version`.

use std::fs;
use std::path::Path;

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};

use super::{ListStore, StoreError, StoreResult, TaskStore};
use crate::domain::{List, NewTask, Outcome, Record, Task};

const TASK_COLUMNS: &str = "t.id, t.list_id, l.name, t.name, t.important, t.notes, \
                            t.date, t.done, t.done_date, t.deleted";

/// SQLite-backed list and task store
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Schema version - bump when schema changes
    const SCHEMA_VERSION: i32 = 1;

    /// Opens or creates the database at `path`, making sure `default_list` exists
    pub fn open(path: &Path, default_list: &str) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;

        Self::init(conn, default_list)
    }

    /// Opens a throwaway in-memory database
    pub fn open_in_memory(default_list: &str) -> Result<Self, StoreError> {
        Self::init(Connection::open_in_memory()?, default_list)
    }

    fn init(conn: Connection, default_list: &str) -> Result<Self, StoreError> {
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;

        let db = Self { conn };
        db.ensure_schema()?;
        db.conn.execute(
            "INSERT OR IGNORE INTO lists (name) VALUES (?1)",
            params![default_list],
        )?;

        Ok(db)
    }

    fn ensure_schema(&self) -> Result<(), StoreError> {
        if self.schema_version()? != Self::SCHEMA_VERSION {
            self.create_schema()?;
        }

        Ok(())
    }

    fn schema_version(&self) -> Result<i32, StoreError> {
        let version: Option<i32> = self
            .conn
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .optional()?;

        Ok(version.unwrap_or(0))
    }

    fn create_schema(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS lists (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE,
                deleted INTEGER NOT NULL DEFAULT 0
            );

            CREATE TABLE IF NOT EXISTS tasks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                list_id INTEGER NOT NULL REFERENCES lists(id),
                name TEXT NOT NULL,
                important INTEGER NOT NULL DEFAULT 0,
                notes TEXT,
                date INTEGER,
                done INTEGER NOT NULL DEFAULT 0,
                done_date INTEGER,
                deleted INTEGER NOT NULL DEFAULT 0
            );

            CREATE INDEX IF NOT EXISTS idx_tasks_list ON tasks(list_id);
            CREATE INDEX IF NOT EXISTS idx_tasks_done ON tasks(done, deleted);
            ",
        )?;

        self.conn.execute_batch(&format!(
            "PRAGMA user_version = {}",
            Self::SCHEMA_VERSION
        ))?;

        Ok(())
    }

    /// Id of a non-deleted list
    fn list_id(&self, name: &str) -> Result<Option<i64>, StoreError> {
        let id = self
            .conn
            .query_row(
                "SELECT id FROM lists WHERE name = ?1 AND deleted = 0",
                params![name],
                |row| row.get(0),
            )
            .optional()?;

        Ok(id)
    }

    fn query_tasks(&self, filter: &str, args: impl rusqlite::Params) -> StoreResult {
        let sql = format!(
            "SELECT {} FROM tasks t JOIN lists l ON l.id = t.list_id {}",
            TASK_COLUMNS, filter
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let records = stmt
            .query_map(args, |row| task_from_row(row).map(Record::Task))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Outcome::RecordSet(records))
    }

    fn update(&self, sql: &str, args: impl rusqlite::Params) -> StoreResult {
        Ok(Outcome::AffectedCount(self.conn.execute(sql, args)?))
    }
}

fn task_from_row(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        list_id: row.get(1)?,
        list_name: row.get(2)?,
        name: row.get(3)?,
        important: row.get(4)?,
        notes: row.get(5)?,
        date: row.get(6)?,
        done: row.get(7)?,
        done_date: row.get(8)?,
        deleted: row.get(9)?,
    })
}

fn list_from_row(row: &Row<'_>) -> rusqlite::Result<List> {
    Ok(List {
        id: row.get(0)?,
        name: row.get(1)?,
        deleted: row.get(2)?,
        total_tasks: u64::try_from(row.get::<_, i64>(3)?).unwrap_or(0),
    })
}

/// SQLite treats a negative LIMIT as "no limit"
fn sql_limit(limit: Option<u64>) -> i64 {
    limit.map_or(-1, |n| i64::try_from(n).unwrap_or(i64::MAX))
}

impl ListStore for Database {
    fn get(&self, name: &str) -> StoreResult {
        let list = self
            .conn
            .query_row(
                "SELECT l.id, l.name, l.deleted,
                        (SELECT COUNT(*) FROM tasks t WHERE t.list_id = l.id AND t.deleted = 0)
                 FROM lists l WHERE l.name = ?1",
                params![name],
                list_from_row,
            )
            .optional()?;

        Ok(Outcome::SingleRecord(list.map(Record::List)))
    }

    fn get_all(&self) -> StoreResult {
        let mut stmt = self.conn.prepare(
            "SELECT l.id, l.name, l.deleted, COUNT(t.id)
             FROM lists l
             LEFT JOIN tasks t ON t.list_id = l.id AND t.deleted = 0
             WHERE l.deleted = 0
             GROUP BY l.id
             ORDER BY l.name",
        )?;
        let records = stmt
            .query_map([], |row| list_from_row(row).map(Record::List))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Outcome::RecordSet(records))
    }

    fn get_by_name(&self, name: &str) -> StoreResult {
        self.query_tasks(
            "WHERE l.name = ?1 AND l.deleted = 0 AND t.deleted = 0 ORDER BY t.id",
            params![name],
        )
    }

    fn add(&self, name: &str) -> StoreResult {
        let exists: Option<i64> = self
            .conn
            .query_row("SELECT id FROM lists WHERE name = ?1", params![name], |row| {
                row.get(0)
            })
            .optional()?;

        if exists.is_some() {
            return Err(StoreError::DuplicateList(name.to_string()));
        }

        self.conn
            .execute("INSERT INTO lists (name) VALUES (?1)", params![name])?;

        Ok(Outcome::CreatedId(self.conn.last_insert_rowid()))
    }

    fn remove(&self, name: &str) -> StoreResult {
        self.update(
            "UPDATE lists SET deleted = 1 WHERE name = ?1 AND deleted = 0",
            params![name],
        )
    }

    fn restore(&self, name: &str) -> StoreResult {
        self.update(
            "UPDATE lists SET deleted = 0 WHERE name = ?1 AND deleted = 1",
            params![name],
        )
    }
}

impl TaskStore for Database {
    fn get(&self, id: i64) -> StoreResult {
        let sql = format!(
            "SELECT {} FROM tasks t JOIN lists l ON l.id = t.list_id WHERE t.id = ?1",
            TASK_COLUMNS
        );
        let task = self
            .conn
            .query_row(&sql, params![id], task_from_row)
            .optional()?;

        Ok(Outcome::SingleRecord(task.map(Record::Task)))
    }

    fn get_to_do(&self) -> StoreResult {
        self.query_tasks(
            "WHERE t.done = 0 AND t.deleted = 0 AND l.deleted = 0 ORDER BY l.name, t.id",
            [],
        )
    }

    fn get_done(&self, limit: Option<u64>) -> StoreResult {
        self.query_tasks(
            "WHERE t.done = 1 AND t.deleted = 0 ORDER BY t.done_date DESC, t.id DESC LIMIT ?1",
            params![sql_limit(limit)],
        )
    }

    fn get_deleted(&self, limit: Option<u64>) -> StoreResult {
        self.query_tasks(
            "WHERE t.deleted = 1 ORDER BY t.id LIMIT ?1",
            params![sql_limit(limit)],
        )
    }

    fn add(&self, task: &NewTask) -> StoreResult {
        let list_id = self
            .list_id(&task.list)?
            .ok_or_else(|| StoreError::ListNotFound(task.list.clone()))?;

        self.conn.execute(
            "INSERT INTO tasks (list_id, name) VALUES (?1, ?2)",
            params![list_id, task.name],
        )?;

        Ok(Outcome::CreatedId(self.conn.last_insert_rowid()))
    }

    fn set_done(&self, id: i64, done: bool) -> StoreResult {
        let done_date = done.then(|| Utc::now().timestamp());

        self.update(
            "UPDATE tasks SET done = ?2, done_date = ?3 WHERE id = ?1",
            params![id, done, done_date],
        )
    }

    fn set_star(&self, id: i64, important: bool) -> StoreResult {
        self.update(
            "UPDATE tasks SET important = ?2 WHERE id = ?1",
            params![id, important],
        )
    }

    fn remove(&self, id: i64) -> StoreResult {
        self.update(
            "UPDATE tasks SET deleted = 1 WHERE id = ?1 AND deleted = 0",
            params![id],
        )
    }

    fn restore(&self, id: i64) -> StoreResult {
        self.update(
            "UPDATE tasks SET deleted = 0 WHERE id = ?1 AND deleted = 1",
            params![id],
        )
    }

    fn move_to(&self, id: i64, list: &str) -> StoreResult {
        let list_id = self
            .list_id(list)?
            .ok_or_else(|| StoreError::ListNotFound(list.to_string()))?;

        self.update(
            "UPDATE tasks SET list_id = ?2 WHERE id = ?1",
            params![id, list_id],
        )
    }
}
